// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use http::Method;
use qcloud_core::utils::Redact;
use qcloud_core::{Context, Error, Result};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Config for QCloud API v2.
///
/// Field names follow the JSON layout `secretId`, `secretKey`,
/// `defaultRegion` and `requestMethod`.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Secret ID
    pub secret_id: Option<String>,
    /// Secret Key
    pub secret_key: Option<String>,
    /// Region used when a request doesn't carry one, defaults to `gz`.
    pub default_region: Option<String>,
    /// `GET` or `POST` in any case, defaults to `GET`.
    pub request_method: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("default_region", &self.default_region)
            .field("request_method", &self.request_method)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            secret_id: ctx
                .env_var(TENCENTCLOUD_SECRET_ID)
                .or_else(|| ctx.env_var(QCLOUD_SECRET_ID)),
            secret_key: ctx
                .env_var(TENCENTCLOUD_SECRET_KEY)
                .or_else(|| ctx.env_var(QCLOUD_SECRET_KEY)),
            default_region: ctx
                .env_var(TENCENTCLOUD_REGION)
                .or_else(|| ctx.env_var(QCLOUD_REGION)),
            request_method: ctx.env_var(QCLOUD_REQUEST_METHOD),
        }
    }

    /// Parse config from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::config_invalid("failed to parse config").with_source(e))
    }

    /// Region to fill in when a request doesn't carry one.
    pub fn region(&self) -> &str {
        match self.default_region.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_REGION,
        }
    }

    /// Request method, normalized to uppercase.
    ///
    /// Returns a config error for anything other than `GET` and `POST`.
    pub fn method(&self) -> Result<Method> {
        let method = match self.request_method.as_deref() {
            Some(v) if !v.is_empty() => v.to_ascii_uppercase(),
            _ => return Ok(Method::GET),
        };

        match method.as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(Error::config_invalid(format!(
                "unsupported request method: {method}"
            ))),
        }
    }
}

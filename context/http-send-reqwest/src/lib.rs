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

//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use bytes::Bytes;
use qcloud_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};
use std::time::Duration;

/// Upper bound for a single API call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
///
/// Every request carries a fixed timeout, [`DEFAULT_TIMEOUT`] unless changed
/// with [`ReqwestHttpSend::with_timeout`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
    timeout: Duration,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let mut req = Request::try_from(req)
            .map_err(|e| Error::transport("failed to build request").with_source(e))?;
        *req.timeout_mut() = Some(self.timeout);

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to send request").with_source(e))?;

        let mut builder = http::Response::builder()
            .status(resp.status())
            .version(resp.version());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(resp.headers().clone());
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::encoding("failed to read response body").with_source(e))?;

        Ok(builder.body(body)?)
    }
}

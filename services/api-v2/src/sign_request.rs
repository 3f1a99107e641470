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

//! QCloud API v2 request signing.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use http::Request;
use log::debug;
use qcloud_core::hash::base64_hmac_sha1;
use qcloud_core::Result;

use crate::constants::DEFAULT_PATH;
use crate::params::{key_list, Params, SignedParams};
use crate::Credential;

/// Build the string to sign: `METHOD + HOST + PATH + "?" + canonical_query`.
pub fn string_to_sign(method: &Method, host: &str, path: &str, canonical_query: &str) -> String {
    let mut s = String::with_capacity(
        method.as_str().len() + host.len() + path.len() + 1 + canonical_query.len(),
    );
    s.push_str(method.as_str());
    s.push_str(host);
    s.push_str(path);
    s.push('?');
    s.push_str(canonical_query);
    s
}

/// Sign `string_to_sign` with `secret_key`: base64 encoded HMAC-SHA1.
pub fn sign(string_to_sign: &str, secret_key: &str) -> String {
    base64_hmac_sha1(secret_key.as_bytes(), string_to_sign.as_bytes())
}

/// RequestSigner signs parameters for one method, host and path, and turns
/// the signed parameters into an HTTP request.
///
/// - [Signature](https://cloud.tencent.com/document/api/213/6984)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    method: Method,
    host: String,
    path: String,
}

impl RequestSigner {
    /// Create a signer for `method` requests sent to `host` on the default path.
    pub fn new(method: Method, host: impl Into<String>) -> Self {
        Self {
            method,
            host: host.into(),
            path: DEFAULT_PATH.to_string(),
        }
    }

    /// Override the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// HTTP method bound to this signer.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Host bound to this signer.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path bound to this signer.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build the string to sign for `params`.
    pub fn string_to_sign(&self, params: &Params) -> String {
        let canonical = params.canonical_query(&self.method);
        debug!("canonical query: {canonical}");

        string_to_sign(&self.method, &self.host, &self.path, &canonical)
    }

    /// Sign `params` and attach the signature.
    pub fn sign(&self, params: Params, cred: &Credential) -> SignedParams {
        let string_to_sign = self.string_to_sign(&params);
        debug!("string to sign: {string_to_sign}");

        let signature = sign(&string_to_sign, &cred.secret_key);
        params.into_signed(signature)
    }

    /// Build the HTTP request carrying `signed`.
    ///
    /// GET puts every parameter in the query string, POST sends them as a
    /// form-urlencoded body.
    pub fn build_request(&self, signed: &SignedParams) -> Result<Request<Bytes>> {
        let wire = signed.to_wire();
        debug!(
            "building {} request to {}{} with params: {}",
            self.method,
            self.host,
            self.path,
            key_list(signed.params())
        );

        let req = if self.method == Method::POST {
            Request::post(format!("https://{}{}", self.host, self.path))
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Bytes::from(wire))?
        } else {
            Request::builder()
                .method(self.method.clone())
                .uri(format!("https://{}{}?{}", self.host, self.path, wire))
                .body(Bytes::new())?
        };

        Ok(req)
    }
}

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

//! QCloud API v2 signer and client.
//!
//! Parameters are canonicalized, signed with HMAC-SHA1 and sent to
//! `https://{module}.api.qcloud.com/v2/index.php`. The response body is
//! returned unparsed.

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::{KnownModules, ResolveEndpoint, StaticEndpoints};

mod params;
pub use params::{normalize_key, ParamValue, Params, SignedParams};

mod sign_request;
pub use sign_request::{sign, string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;

mod client;
pub use client::Client;

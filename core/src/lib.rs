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

//! Core components for signing and sending QCloud API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! qcloud service crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending,
//!   environment access, the clock and the nonce source
//! - **Traits**: Abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and credential validation ([`SigningCredential`])
//! - **Error**: A single [`Error`] type with an [`ErrorKind`] for every failure
//!
//! ## Example
//!
//! ```
//! use qcloud_core::{Context, FixedClock, FixedNonce, StaticEnv};
//!
//! // Build a fully deterministic context, handy for tests.
//! let ctx = Context::new()
//!     .with_env(StaticEnv::default())
//!     .with_clock(FixedClock::from_timestamp(1234567890))
//!     .with_nonce(FixedNonce(100));
//!
//! assert_eq!(ctx.now().timestamp(), 1234567890);
//! assert_eq!(ctx.nonce(), 100);
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Clock`]: For reading the current time
//! - [`GenerateNonce`]: For generating per-request nonces
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: Time related helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::GenerateNonce;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;
pub use context::{FixedNonce, RandomNonce};
pub use context::{NONCE_MAX, NONCE_MIN};

pub use time::{Clock, FixedClock, SystemClock};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};

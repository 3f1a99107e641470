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

use crate::time::{Clock, DateTime, SystemClock};
use crate::{Error, Result};
use bytes::Bytes;
use rand::Rng;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Smallest nonce value a request may carry.
pub const NONCE_MIN: u32 = 1;
/// Largest nonce value a request may carry.
pub const NONCE_MAX: u32 = 65534;

/// Context provides the capabilities used while building and sending a request.
///
/// ## Important
///
/// qcloud provides NO default HTTP client here. Users MAY configure components they need.
/// An unconfigured HTTP client or environment uses a no-op implementation that returns
/// errors or empty values when called. The clock and the nonce source default to the
/// wall clock and a thread-local random generator.
///
/// ## Example
///
/// ```
/// use qcloud_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
    clock: Arc<dyn Clock>,
    nonce: Arc<dyn GenerateNonce>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("env", &self.env)
            .field("clock", &self.clock)
            .field("nonce", &self.nonce)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context.
    ///
    /// HTTP and environment use no-op implementations, use the `with_*`
    /// methods to configure the components you need.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
            clock: Arc::new(SystemClock),
            nonce: Arc::new(RandomNonce),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the nonce generator implementation.
    pub fn with_nonce(mut self, nonce: impl GenerateNonce) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Send http request and return the response as string.
    ///
    /// The body is decoded lossily; the status code is kept untouched.
    pub async fn http_send_as_string(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<String>> {
        let (parts, body) = self.http.http_send(req).await?.into_parts();
        let body = String::from_utf8_lossy(&body).to_string();
        Ok(http::Response::from_parts(parts, body))
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }

    /// Current time according to the configured clock.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    /// Generate a nonce in `[NONCE_MIN, NONCE_MAX]`.
    #[inline]
    pub fn nonce(&self) -> u32 {
        self.nonce.generate_nonce()
    }
}

/// HttpSend is used to send the signed http request.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Env abstracts over environment variable access.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    fn vars(&self) -> HashMap<String, String>;
}

/// GenerateNonce produces the per-request `Nonce` parameter.
///
/// The value only needs to be unique enough to mitigate replays, it is not
/// required to be cryptographically random.
pub trait GenerateNonce: Debug + Send + Sync + 'static {
    /// Generate a nonce in `[NONCE_MIN, NONCE_MAX]`.
    fn generate_nonce(&self) -> u32;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }
}

/// RandomNonce draws nonces from the thread-local random generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl GenerateNonce for RandomNonce {
    fn generate_nonce(&self) -> u32 {
        rand::thread_rng().gen_range(NONCE_MIN..=NONCE_MAX)
    }
}

/// FixedNonce always returns the wrapped value.
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u32);

impl GenerateNonce for FixedNonce {
    fn generate_nonce(&self) -> u32 {
        self.0
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None/empty.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use crate::ErrorKind;

    #[test]
    fn test_random_nonce_in_range() {
        for _ in 0..10_000 {
            let nonce = RandomNonce.generate_nonce();
            assert!((NONCE_MIN..=NONCE_MAX).contains(&nonce), "nonce {nonce}");
        }
    }

    #[test]
    fn test_context_injected_clock_and_nonce() {
        let ctx = Context::new()
            .with_clock(FixedClock::from_timestamp(1234567890))
            .with_nonce(FixedNonce(100));

        assert_eq!(ctx.now().timestamp(), 1234567890);
        assert_eq!(ctx.nonce(), 100);
    }

    #[test]
    fn test_static_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([("QCLOUD_REGION".to_string(), "sh".to_string())]),
        });

        assert_eq!(ctx.env_var("QCLOUD_REGION"), Some("sh".to_string()));
        assert_eq!(ctx.env_var("QCLOUD_SECRET_ID"), None);
        assert_eq!(ctx.env_vars().len(), 1);
    }

    #[tokio::test]
    async fn test_noop_http_send() {
        let ctx = Context::new();
        let req = http::Request::get("https://cvm.api.qcloud.com/v2/index.php")
            .body(Bytes::new())
            .expect("request must be valid");

        let err = ctx.http_send(req).await.expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}

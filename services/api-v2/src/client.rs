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

use std::sync::Arc;

use log::debug;
use qcloud_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::constants::*;
use crate::endpoint::{KnownModules, ResolveEndpoint};
use crate::{Config, Credential, DefaultCredentialProvider, Params, RequestSigner};

/// Client sends signed QCloud API v2 requests.
///
/// The builder methods consume and return the client, so every call works on
/// its own copy. Cloning is cheap: configuration, credential provider and
/// endpoint table are shared read-only.
///
/// ```no_run
/// use qcloud_api_v2::{Client, Config, Params};
/// use qcloud_core::Context;
///
/// # async fn example(ctx: Context) -> qcloud_core::Result<()> {
/// let client = Client::new(ctx, Config::default()).module("cvm");
///
/// let body = client
///     .action("describeInstances")
///     .send(Params::new().with("limit", 10))
///     .await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Arc<Config>,
    credential: Arc<dyn ProvideCredential<Credential = Credential>>,
    endpoints: Arc<dyn ResolveEndpoint>,
    path: String,

    module: Option<String>,
    host: Option<String>,
    action: Option<String>,
}

impl Client {
    /// Create a new client.
    ///
    /// Credentials are loaded with [`DefaultCredentialProvider`] and modules
    /// resolved with [`KnownModules`].
    pub fn new(ctx: Context, config: Config) -> Self {
        let config = Arc::new(config);
        Self {
            ctx,
            credential: Arc::new(DefaultCredentialProvider::new(config.clone())),
            config,
            endpoints: Arc::new(KnownModules),
            path: DEFAULT_PATH.to_string(),
            module: None,
            host: None,
            action: None,
        }
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.credential = Arc::new(provider);
        self
    }

    /// Replace the module to host lookup.
    pub fn with_endpoints(mut self, endpoints: impl ResolveEndpoint) -> Self {
        self.endpoints = Arc::new(endpoints);
        self
    }

    /// Select the module, the host is looked up when sending.
    pub fn module(mut self, name: &str) -> Self {
        self.module = Some(name.to_string());
        self.host = None;
        self
    }

    /// Send to `host` directly, bypassing the module lookup.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Select the action, the first character is upper-cased.
    ///
    /// An empty name leaves the current action untouched.
    pub fn action(mut self, name: &str) -> Self {
        if let Some(action) = capitalize(name) {
            self.action = Some(action);
        }
        self
    }

    /// Config used by this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sign `params` and send them, returning the raw response body.
    ///
    /// `Action`, `SecretId`, `Timestamp`, `Nonce` and `Region` are filled in
    /// unless `params` already carries them. The body is returned as is,
    /// whatever the HTTP status.
    pub async fn send(&self, params: Params) -> Result<String> {
        let action = self
            .action
            .as_deref()
            .ok_or_else(|| Error::request_invalid("empty action"))?;
        let host = self.resolve_host()?;
        let method = self.config.method()?;

        let cred = self
            .credential
            .provide_credential(&self.ctx)
            .await?
            .filter(|cred| cred.is_valid())
            .ok_or_else(|| Error::credential_invalid("no valid credential found"))?;

        let params = params
            .with_default(ACTION, action)
            .with_default(SECRET_ID, cred.secret_id.as_str())
            .with_default(TIMESTAMP, self.ctx.now().timestamp())
            .with_default(NONCE, self.ctx.nonce())
            .with_default(REGION, self.config.region());

        let signer = RequestSigner::new(method, host).with_path(self.path.as_str());
        let signed = signer.sign(params, &cred);
        let req = signer.build_request(&signed)?;

        debug!("sending {action} to {}", signer.host());
        let resp = self.ctx.http_send_as_string(req).await?;
        debug!("{action} responded with status {}", resp.status());

        Ok(resp.into_body())
    }

    fn resolve_host(&self) -> Result<String> {
        if let Some(host) = &self.host {
            return Ok(host.clone());
        }

        let module = self
            .module
            .as_deref()
            .ok_or_else(|| Error::request_invalid("empty module"))?;
        self.endpoints
            .resolve(module)
            .ok_or_else(|| Error::config_invalid(format!("unknown module: {module}")))
    }
}

fn capitalize(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::StaticEndpoints;
    use crate::StaticCredentialProvider;
    use async_trait::async_trait;
    use bytes::Bytes;
    use http::{Method, Request, Response, StatusCode};
    use pretty_assertions::assert_eq;
    use qcloud_core::{ErrorKind, FixedClock, FixedNonce, HttpSend};
    use std::sync::Mutex;

    /// Records every request and answers with a fixed response.
    #[derive(Debug, Clone)]
    struct MockHttpSend {
        requests: Arc<Mutex<Vec<Request<Bytes>>>>,
        status: StatusCode,
        body: &'static str,
    }

    impl MockHttpSend {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                status,
                body,
            }
        }

        fn requests(&self) -> std::sync::MutexGuard<'_, Vec<Request<Bytes>>> {
            self.requests.lock().unwrap()
        }
    }

    #[async_trait]
    impl HttpSend for MockHttpSend {
        async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
            self.requests.lock().unwrap().push(req);
            Ok(Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))?)
        }
    }

    #[derive(Debug)]
    struct FailingHttpSend;

    #[async_trait]
    impl HttpSend for FailingHttpSend {
        async fn http_send(&self, _: Request<Bytes>) -> Result<Response<Bytes>> {
            Err(Error::transport("connection refused"))
        }
    }

    fn config(method: Option<&str>) -> Config {
        Config {
            secret_id: Some("ID1".to_string()),
            secret_key: Some("KEY1".to_string()),
            default_region: None,
            request_method: method.map(|v| v.to_string()),
        }
    }

    fn client(http: MockHttpSend, method: Option<&str>) -> Client {
        let ctx = Context::new()
            .with_http_send(http)
            .with_clock(FixedClock::from_timestamp(1234567890))
            .with_nonce(FixedNonce(100));
        Client::new(ctx, config(method))
    }

    fn query_pairs(query: &str) -> Vec<(String, String)> {
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[tokio::test]
    async fn test_send_get_scenario() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"code":0,"message":""}"#);
        let body = client(http.clone(), None)
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await?;
        assert_eq!(body, r#"{"code":0,"message":""}"#);

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.uri().scheme_str(), Some("https"));
        assert_eq!(req.uri().host(), Some("cvm.api.qcloud.com"));
        assert_eq!(req.uri().path(), "/v2/index.php");
        assert_eq!(
            req.uri().query(),
            Some("Action=DescribeInstances&Nonce=100&Region=gz&SecretId=ID1&Signature=c93Om6AMHD5CDO30jI0j%2B65sXp0%3D&Timestamp=1234567890")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_send_post_scenario() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        client(http.clone(), Some("post"))
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new().with("entityFile", "@/tmp/a.png"))
            .await?;

        let requests = http.requests();
        let req = &requests[0];
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri().query(), None);

        let pairs = query_pairs(std::str::from_utf8(req.body()).unwrap());
        assert!(pairs.contains(&("entityFile".to_string(), "@/tmp/a.png".to_string())));
        // The file marker is excluded from the signature input.
        assert!(pairs.contains(&(
            "Signature".to_string(),
            "+1QGEHnuiGVzo4lmB86TSECYB00=".to_string()
        )));
        Ok(())
    }

    #[tokio::test]
    async fn test_send_without_action_makes_no_call() {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let err = client(http.clone(), None)
            .module("cvm")
            .send(Params::new().with("Action", "DescribeInstances"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert_eq!(err.to_string(), "empty action");
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_empty_action_name_keeps_action_unset() {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let err = client(http.clone(), None)
            .module("cvm")
            .action("")
            .send(Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_without_module_or_host() {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let err = client(http.clone(), None)
            .action("DescribeInstances")
            .send(Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_unknown_module() {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let err = client(http.clone(), None)
            .module("nope")
            .action("DescribeInstances")
            .send(Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.to_string(), "unknown module: nope");
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_unsupported_method() {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let err = client(http.clone(), Some("delete"))
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_without_credential() {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let ctx = Context::new().with_http_send(http.clone());
        let err = Client::new(ctx, Config::default())
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_fills_defaults_only_when_missing() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        client(http.clone(), None)
            .module("cvm")
            .action("describeInstances")
            .send(
                Params::new()
                    .with("Region", "bj")
                    .with("Nonce", 7)
                    .with("Action", "RunInstances"),
            )
            .await?;

        let requests = http.requests();
        let pairs = query_pairs(requests[0].uri().query().unwrap());
        assert!(pairs.contains(&("Region".to_string(), "bj".to_string())));
        assert!(pairs.contains(&("Nonce".to_string(), "7".to_string())));
        assert!(pairs.contains(&("Action".to_string(), "RunInstances".to_string())));
        assert!(pairs.contains(&("Timestamp".to_string(), "1234567890".to_string())));
        assert!(pairs.contains(&("SecretId".to_string(), "ID1".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_send_default_region_in_signature_and_payload() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let ctx = Context::new()
            .with_http_send(http.clone())
            .with_clock(FixedClock::from_timestamp(1234567890))
            .with_nonce(FixedNonce(100));
        let config = Config {
            default_region: Some("sh".to_string()),
            ..config(None)
        };
        Client::new(ctx, config)
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await?;

        let expected = Params::new()
            .with("Action", "DescribeInstances")
            .with("SecretId", "ID1")
            .with("Timestamp", 1234567890)
            .with("Nonce", 100)
            .with("Region", "sh");
        let signer = RequestSigner::new(Method::GET, "cvm.api.qcloud.com");
        assert!(signer.string_to_sign(&expected).contains("&Region=sh&"));
        let signed = signer.sign(expected, &Credential::new("ID1", "KEY1"));

        let requests = http.requests();
        let pairs = query_pairs(requests[0].uri().query().unwrap());
        assert!(pairs.contains(&("Region".to_string(), "sh".to_string())));
        assert!(pairs.contains(&("Signature".to_string(), signed.signature().to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_send_normalizes_keys_on_wire() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        client(http.clone(), None)
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new().with("instanceIds_0", "ins-1"))
            .await?;

        let requests = http.requests();
        let query = requests[0].uri().query().unwrap();
        assert!(query.contains("instanceIds.0=ins-1"));
        assert!(!query.contains("instanceIds_0"));
        Ok(())
    }

    #[tokio::test]
    async fn test_send_returns_body_for_error_status() -> Result<()> {
        let http = MockHttpSend::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"code":4100,"message":"auth failed"}"#,
        );
        let body = client(http, None)
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await?;

        assert_eq!(body, r#"{"code":4100,"message":"auth failed"}"#);
        Ok(())
    }

    #[tokio::test]
    async fn test_send_transport_error() {
        let ctx = Context::new().with_http_send(FailingHttpSend);
        let err = Client::new(ctx, config(None))
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_send_with_host_and_custom_providers() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "ok");
        let base = client(http.clone(), None)
            .with_credential_provider(StaticCredentialProvider::new("ID2", "KEY2"))
            .with_endpoints(StaticEndpoints::new().with("cvm", "cvm.internal.example.com"));

        base.clone()
            .module("cvm")
            .action("DescribeInstances")
            .send(Params::new())
            .await?;
        base.host("127.0.0.1:8080")
            .action("DescribeInstances")
            .send(Params::new())
            .await?;

        let requests = http.requests();
        assert_eq!(requests[0].uri().host(), Some("cvm.internal.example.com"));
        assert_eq!(requests[1].uri().authority().unwrap(), "127.0.0.1:8080");
        let pairs = query_pairs(requests[0].uri().query().unwrap());
        assert!(pairs.contains(&("SecretId".to_string(), "ID2".to_string())));
        Ok(())
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("describeInstances").as_deref(), Some("DescribeInstances"));
        assert_eq!(capitalize("DescribeInstances").as_deref(), Some("DescribeInstances"));
        assert_eq!(capitalize("x").as_deref(), Some("X"));
        assert_eq!(capitalize(""), None);
    }
}

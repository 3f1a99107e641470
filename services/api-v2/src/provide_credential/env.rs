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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use qcloud_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads QCloud credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `TENCENTCLOUD_SECRET_ID` or `QCLOUD_SECRET_ID`: The secret ID
/// - `TENCENTCLOUD_SECRET_KEY` or `QCLOUD_SECRET_KEY`: The secret key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let secret_id = envs
            .get(TENCENTCLOUD_SECRET_ID)
            .or_else(|| envs.get(QCLOUD_SECRET_ID));
        let secret_key = envs
            .get(TENCENTCLOUD_SECRET_KEY)
            .or_else(|| envs.get(QCLOUD_SECRET_KEY));

        match (secret_id, secret_key) {
            (Some(id), Some(key)) => Ok(Some(Credential::new(id, key))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcloud_core::StaticEnv;
    use std::collections::HashMap;

    fn ctx_with(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = ctx_with(&[
            (TENCENTCLOUD_SECRET_ID, "test_secret_id"),
            (TENCENTCLOUD_SECRET_KEY, "test_secret_key"),
        ]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.secret_id, "test_secret_id");
        assert_eq!(cred.secret_key, "test_secret_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_qcloud_names() -> anyhow::Result<()> {
        let ctx = ctx_with(&[
            (QCLOUD_SECRET_ID, "qcloud_id"),
            (QCLOUD_SECRET_KEY, "qcloud_key"),
        ]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.secret_id, "qcloud_id");
        assert_eq!(cred.secret_key, "qcloud_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx_with(&[]))
            .await?;
        assert!(cred.is_none());

        // Only secret ID
        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx_with(&[(TENCENTCLOUD_SECRET_ID, "test_secret_id")]))
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}

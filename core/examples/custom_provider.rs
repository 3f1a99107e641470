use async_trait::async_trait;
use qcloud_core::{
    Context, FixedClock, FixedNonce, ProvideCredential, ProvideCredentialChain, Result,
    SigningCredential, StaticEnv,
};
use std::collections::HashMap;

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Loads credentials from environment variables
#[derive(Debug)]
struct MyEnvProvider;

#[async_trait]
impl ProvideCredential for MyEnvProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) =
            (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET"))
        else {
            return Ok(None);
        };
        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Always returns nothing, so the chain moves on
#[derive(Debug)]
struct EmptyProvider;

#[async_trait]
impl ProvideCredential for EmptyProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(None)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A fully deterministic context: static env, fixed clock and nonce.
    let ctx = Context::new()
        .with_env(StaticEnv {
            envs: HashMap::from([
                ("MY_API_KEY".to_string(), "demo-key".to_string()),
                ("MY_API_SECRET".to_string(), "demo-secret".to_string()),
            ]),
        })
        .with_clock(FixedClock::from_timestamp(1_700_000_000))
        .with_nonce(FixedNonce(42));

    let chain = ProvideCredentialChain::new()
        .push(EmptyProvider)
        .push(MyEnvProvider);

    match chain.provide_credential(&ctx).await? {
        Some(cred) if cred.is_valid() => println!("loaded credential for {}", cred.api_key),
        _ => println!("no credential found"),
    }
    println!("timestamp: {}", ctx.now().timestamp());
    println!("nonce: {}", ctx.nonce());

    Ok(())
}

//! Example demonstrating credential chain logging

use qcloud_api_v2::{ConfigCredentialProvider, EnvCredentialProvider};
use qcloud_core::{Context, OsEnv, ProvideCredential, ProvideCredentialChain};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger with debug level
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new().with_env(OsEnv);

    // An empty config forces the chain to fall through to the environment.
    let config = Arc::new(qcloud_api_v2::Config::default());

    let chain = ProvideCredentialChain::new()
        .push(ConfigCredentialProvider::new(config))
        .push(EnvCredentialProvider::new());

    println!("Attempting to load credentials from chain...\n");
    match chain.provide_credential(&ctx).await? {
        Some(cred) => println!("\nFound credential: {cred:?}"),
        None => println!("\nNo credential found in any provider"),
    }

    Ok(())
}

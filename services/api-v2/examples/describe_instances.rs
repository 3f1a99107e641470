//! Example sending a DescribeInstances call with credentials from the environment.

use qcloud_api_v2::{Client, Config, Params};
use qcloud_core::{Context, OsEnv};
use qcloud_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Debug logs show the canonical query and the string to sign.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::from_env(&ctx);
    println!("Loaded config: {config:?}");

    let client = Client::new(ctx, config).module("cvm");

    let body = client
        .action("describeInstances")
        .send(Params::new().with("offset", 0).with("limit", 10))
        .await?;
    println!("{body}");

    Ok(())
}

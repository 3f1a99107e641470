use anyhow::Result;
use qcloud::api::Params;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Reads TENCENTCLOUD_SECRET_ID / TENCENTCLOUD_SECRET_KEY from the environment.
    let client = qcloud::api::default_client().module("cvm");

    let body = client
        .action("DescribeInstances")
        .send(Params::new().with("limit", 1))
        .await?;
    println!("Response body: {body}");

    Ok(())
}

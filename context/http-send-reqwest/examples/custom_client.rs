use anyhow::Result;
use bytes::Bytes;
use qcloud_core::Context;
use qcloud_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .pool_max_idle_per_host(10)
        .user_agent("qcloud-example/1.0")
        .build()?;

    // The per-request timeout is applied by ReqwestHttpSend itself.
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client).with_timeout(Duration::from_secs(30)));

    let test_url = "https://cvm.api.qcloud.com/v2/index.php";
    println!("Testing HTTP client with GET {test_url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(test_url)
        .body(Bytes::new())?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response body:\n{}", resp.body());
        }
        Err(e) => println!("Request failed: {e}"),
    }

    Ok(())
}

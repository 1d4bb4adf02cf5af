//! Issue one GET through the fetch adapter and print the resulting triple.
//!
//! Usage: safe-await-demo [URL]

use safe_await::{Payload, SafeAwait};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/json".to_string());
    let client = reqwest::Client::new();

    let target = url.clone();
    let (error, data, status) = SafeAwait::from_env()
        .finally(move || info!(url = %target, "request settled"))
        .fetch(client.get(&url).send())
        .await?
        .into_parts();

    println!("status: {}", status);
    match error {
        Some(e) => println!("error:  {}", e),
        None => println!("error:  none"),
    }
    match data {
        Some(Payload::Json(v)) => println!("data:   {}", serde_json::to_string_pretty(&v)?),
        Some(Payload::Text(s)) => println!("data:   {}", s),
        Some(Payload::Blob(b)) => println!("data:   <{} bytes>", b.len()),
        Some(other) => println!("data:   {:?}", other),
        None => println!("data:   none"),
    }
    Ok(())
}

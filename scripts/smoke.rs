use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Instant;

async fn post(client: &Client, base_url: &str, path: &str, body: Value) -> anyhow::Result<()> {
    println!("POST {}", path);
    let start = Instant::now();

    let response = client
        .post(format!("{}{}", base_url, path))
        .json(&body)
        .send()
        .await?;

    let elapsed = start.elapsed().as_millis();
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if status.is_success() {
        println!("  {} in {}ms\n  {}\n", status, elapsed, text);
    } else {
        println!("  FAILED {} in {}ms\n  {}\n", status, elapsed, text);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let base_url =
        env::var("SMOKE_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let client = Client::new();

    let health: Value = client
        .get(format!("{}/health", base_url))
        .send()
        .await?
        .json()
        .await?;
    println!("health: {}\n", health);

    post(
        &client,
        &base_url,
        "/reviews",
        json!({ "reviews": ["Great product!", "Fast shipping"] }),
    )
    .await?;

    post(
        &client,
        &base_url,
        "/generate",
        json!({ "comments": ["rápido", "barato"], "language": "es", "num_reviews": 2 }),
    )
    .await?;

    post(
        &client,
        &base_url,
        "/generate-positive",
        json!({ "product_name": "Phone X", "key_features": ["fast", "light"] }),
    )
    .await?;

    post(
        &client,
        &base_url,
        "/generate-negative",
        json!({ "product_name": "Phone X", "key_features": ["battery drains"], "language": "en" }),
    )
    .await?;

    post(
        &client,
        &base_url,
        "/summarize-and-generate",
        json!({ "reviews": ["Works well", "A bit loud", "Good value"] }),
    )
    .await?;

    Ok(())
}

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::Result;

/// Executes a GET request for `url` and deserializes the body as JSON.
///
/// Non-2xx responses are errors carrying the status and body text.
pub async fn fetch_json<C: HttpClient>(client: &C, url: reqwest::Url) -> Result<serde_json::Value> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow::anyhow!(
            "Request failed with status {}: {}",
            status,
            body
        ));
    }

    Ok(resp.json().await?)
}

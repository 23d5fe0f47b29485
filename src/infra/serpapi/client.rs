use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use trend_scanner::fetch::{BasicClient, auth::UrlParam, fetch_json};
use trend_scanner::parser::{TimelinePoint, parse_timeline};
use trend_scanner::services::trends_api::{TrendsApi, TrendsRequest};

/// SerpApi client for the Google Trends engine.
///
/// The API key travels as the `api_key` query parameter, injected by the
/// [`UrlParam`] wrapper on every request.
pub struct SerpApiClient {
    http: UrlParam<BasicClient>,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: UrlParam {
                inner: BasicClient::new(),
                param_name: "api_key".to_string(),
                key: api_key,
            },
            base_url: "https://serpapi.com".to_string(),
        }
    }
}

#[async_trait]
impl TrendsApi for SerpApiClient {
    async fn fetch_interest(&self, request: &TrendsRequest) -> Result<Vec<TimelinePoint>> {
        let mut url: reqwest::Url = format!("{}/search.json", self.base_url)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid provider URL: {}", e))?;

        url.query_pairs_mut()
            .append_pair("engine", "google_trends")
            .append_pair("q", &request.queries.join(","))
            .append_pair("geo", &request.geo)
            .append_pair("data_type", "TIMESERIES")
            .append_pair("date", &request.timeframe);

        let body: Value = fetch_json(&self.http, url).await?;

        if let Some(message) = body["error"].as_str() {
            return Err(anyhow::anyhow!("Provider reported an error: {}", message));
        }

        Ok(parse_timeline(&body))
    }
}

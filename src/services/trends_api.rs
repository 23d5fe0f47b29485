//! Trait and request types for the external search-trends provider.

use anyhow::Result;

use crate::parser::TimelinePoint;

/// One outbound interest-over-time request: the batch's query terms (anchor
/// last) plus the run-wide geo and timeframe settings.
#[derive(Debug, Clone)]
pub struct TrendsRequest {
    pub queries: Vec<String>,
    pub geo: String,
    pub timeframe: String,
}

/// Abstraction over a search-trends provider (e.g., SerpApi).
#[async_trait::async_trait]
pub trait TrendsApi {
    /// Returns the interest-over-time series for the request's terms.
    ///
    /// An empty list means the provider had no data for this request; an
    /// error covers transport failures and provider-reported errors. Both
    /// are batch-scoped for the caller.
    async fn fetch_interest(&self, request: &TrendsRequest) -> Result<Vec<TimelinePoint>>;
}

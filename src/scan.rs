//! Sequential batch scan over all configured destinations.

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::batch::plan_batches;
use crate::config::AppConfig;
use crate::query::{build_query, clean_query_name};
use crate::records::DestinationRecord;
use crate::services::trends_api::{TrendsApi, TrendsRequest};
use crate::stats::BatchMeans;
use crate::trend::Trend;
use crate::util::round1;

/// Destinations per outbound request, before the anchor term is appended.
/// Five terms total stays within the provider's per-request limit.
pub const BATCH_SIZE: usize = 4;

/// Runs the full scan: one request per batch, strictly sequential.
///
/// Every failure mode is batch-scoped — a fetch error, empty timeline, zero
/// valid points, or zero anchor mean drops that batch's cities from the run
/// with a warning and moves on. Cities absent from `previous` are compared
/// against a baseline index of zero.
pub async fn run_scan<A: TrendsApi>(
    api: &A,
    config: &AppConfig,
    previous: &HashMap<String, f64>,
    today: NaiveDate,
) -> Vec<DestinationRecord> {
    let anchor_query = build_query(&config.settings.anchor_city);
    let cities = config.cities();
    let batches = plan_batches(&cities, BATCH_SIZE, &anchor_query);

    info!(
        destinations = cities.len(),
        batches = batches.len(),
        anchor = %config.settings.anchor_city,
        "Starting scan"
    );

    let mut records = Vec::new();

    for (i, batch) in batches.iter().enumerate() {
        info!(
            batch = i + 1,
            total = batches.len(),
            queries = batch.queries.len(),
            "Processing batch"
        );

        let request = TrendsRequest {
            queries: batch.queries.clone(),
            geo: config.settings.geo.clone(),
            timeframe: config.settings.timeframe.clone(),
        };

        let points = match api.fetch_interest(&request).await {
            Ok(points) => points,
            Err(e) => {
                warn!(batch = i + 1, error = %e, "Trends fetch failed, skipping batch");
                continue;
            }
        };

        if points.is_empty() {
            warn!(batch = i + 1, "No timeline data returned, skipping batch");
            continue;
        }

        let Some(means) = BatchMeans::from_points(&batch.queries, &points) else {
            warn!(batch = i + 1, "No valid time points, skipping batch");
            continue;
        };

        let Some(normalized) = means.normalize(&anchor_query, config.settings.visual_scale) else {
            warn!(batch = i + 1, "Anchor mean is zero, skipping batch");
            continue;
        };

        for (query, score) in normalized {
            let name = clean_query_name(&query);
            let index = round1(score);
            let old_index = previous.get(&name).copied().unwrap_or(0.0);
            let trend_diff = round1(index - old_index);
            let iso = config.iso_for(&name);

            records.push(DestinationRecord {
                country_code: iso.to_string(),
                country_name: config.country_name_for(iso).to_string(),
                name,
                index,
                trend: Trend::classify(trend_diff),
                trend_diff,
                last_updated: today,
            });
        }
    }

    records
}

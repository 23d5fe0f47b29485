//! Response parsing for interest-over-time timeline data.

use serde_json::Value;

/// A single time period from an interest-over-time response.
///
/// `values` holds one extracted integer per query term, aligned by index
/// with the request's query list. A point without a `values` array is
/// invalid and excluded from aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    pub date: Option<String>,
    pub values: Option<Vec<i64>>,
}

/// Extracts timeline points from a raw provider response body.
///
/// Returns an empty list when the body carries no
/// `interest_over_time.timeline_data` key, which callers treat as "no data"
/// for the batch. Missing or non-numeric `extracted_value` fields read as 0.
pub fn parse_timeline(body: &Value) -> Vec<TimelinePoint> {
    let Some(data) = body
        .pointer("/interest_over_time/timeline_data")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    data.iter()
        .map(|point| TimelinePoint {
            date: point["date"].as_str().map(str::to_string),
            values: point["values"].as_array().map(|values| {
                values
                    .iter()
                    .map(|v| v["extracted_value"].as_i64().unwrap_or(0))
                    .collect()
            }),
        })
        .collect()
}

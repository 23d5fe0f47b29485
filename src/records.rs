//! Data types for the persisted destination snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trend::Trend;

/// A single destination entry in the output snapshot, consumed by the map
/// front-end. Built fresh every run; `index` and `trend_diff` carry one
/// decimal place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub name: String,
    pub country_code: String,
    pub country_name: String,
    pub index: f64,
    pub trend: Trend,
    pub trend_diff: f64,
    pub last_updated: NaiveDate,
}

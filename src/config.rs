//! Run configuration loaded from the JSON settings document.
//!
//! The whole document is loaded once at process entry and passed by
//! reference into each component; there is no ambient global state.

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// ISO code substituted for cities missing from the destination list.
pub const DEFAULT_ISO: &str = "UNK";

/// Country display name substituted for unmapped ISO codes.
pub const DEFAULT_COUNTRY_NAME: &str = "Mondo";

/// Provider-facing scan parameters.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub anchor_city: String,
    pub visual_scale: f64,
    pub geo: String,
    pub timeframe: String,
}

/// A destination to scan, static for the run.
#[derive(Debug, Clone, Deserialize)]
pub struct Destination {
    pub city: String,
    pub iso: String,
}

/// The full settings document:
/// ```json
/// {
///   "settings": { "anchor_city": "Roma", "visual_scale": 10, "geo": "IT", "timeframe": "today 3-m" },
///   "country_names": { "GB": "Regno Unito" },
///   "destinations": [ { "city": "Londra", "iso": "GB" } ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub settings: Settings,
    pub country_names: HashMap<String, String>,
    pub destinations: Vec<Destination>,
}

impl AppConfig {
    /// Loads the config from a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the path if the file is missing or is not
    /// valid JSON for the expected shape. Callers treat this as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid JSON in config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// ISO code for a destination city, falling back to [`DEFAULT_ISO`].
    pub fn iso_for(&self, city: &str) -> &str {
        self.destinations
            .iter()
            .find(|d| d.city == city)
            .map(|d| d.iso.as_str())
            .unwrap_or(DEFAULT_ISO)
    }

    /// Display name for an ISO code, falling back to [`DEFAULT_COUNTRY_NAME`].
    pub fn country_name_for(&self, iso: &str) -> &str {
        self.country_names
            .get(iso)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COUNTRY_NAME)
    }

    /// The ordered city list, as batched for outbound requests.
    pub fn cities(&self) -> Vec<&str> {
        self.destinations.iter().map(|d| d.city.as_str()).collect()
    }
}

//! Configuration for the analytics engine.
//!
//! All tunables the pipeline consumes live in one serde structure with
//! documented defaults: the leaderboard bound, the zero-inflation
//! threshold, the trend threshold, and the operator exclusion markers.
//! Hosts may load it from a JSON file (`AnalyticsConfig::read`) or just use
//! `Default`; missing fields fall back to their defaults either way. File
//! handling stays outside the pure pipeline, which only ever receives the
//! config by reference.

use crate::libs::filter::DEFAULT_EXCLUDED_MARKERS;
use crate::libs::ranking::DEFAULT_RANKING_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration file name expected by `read`/`save`.
pub const CONFIG_FILE_NAME: &str = "analytics.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable thresholds and bounds for the aggregation pipeline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Leaderboard truncation bound.
    pub ranking_limit: usize,

    /// Share of exact-zero duration values above which the zero mass is
    /// treated as "not recorded" when averaging wait/IVR time.
    pub zero_inflation_threshold: f64,

    /// Percent delta beyond which a compared metric counts as growth or
    /// decline rather than neutral.
    pub trend_threshold: f64,

    /// Operator-name substrings that mark disengaged operators for the
    /// exclusion filter.
    pub excluded_name_markers: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            ranking_limit: DEFAULT_RANKING_LIMIT,
            zero_inflation_threshold: 0.9,
            trend_threshold: 5.0,
            excluded_name_markers: DEFAULT_EXCLUDED_MARKERS
                .iter()
                .map(|marker| marker.to_string())
                .collect(),
        }
    }
}

impl AnalyticsConfig {
    /// Loads configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

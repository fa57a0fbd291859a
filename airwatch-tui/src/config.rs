//! Configuration loading.
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! TOML file, and `AIRWATCH_*` environment variables. Command-line flags
//! override all of them (handled in main).

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use airwatch_client::DEFAULT_CHART_LIMIT;

use crate::data::Units;

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Node API endpoint.
    pub endpoint: String,
    /// Channel number to watch.
    pub channel: u32,
    /// Maximum records requested per fetch.
    pub limit: u32,
    /// Fetch interval in seconds.
    pub refresh: u64,
    /// Frame count units.
    pub units: Units,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            channel: 1,
            limit: DEFAULT_CHART_LIMIT,
            refresh: 5,
            units: Units::Raw,
        }
    }
}

impl AppConfig {
    /// Load settings from an optional config file plus the environment.
    ///
    /// With no explicit path, an `airwatch.toml` in the working directory
    /// is used when present. Missing keys fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("airwatch").required(false)),
        };

        let config = builder
            .add_source(Environment::with_prefix("AIRWATCH").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.endpoint, "http://localhost:8080");
        assert_eq!(cfg.channel, 1);
        assert_eq!(cfg.limit, 250);
        assert_eq!(cfg.refresh, 5);
        assert_eq!(cfg.units, Units::Raw);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airwatch.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "endpoint = \"http://node.local:9000\"\nchannel = 11\nunits = \"per-second\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.endpoint, "http://node.local:9000");
        assert_eq!(cfg.channel, 11);
        assert_eq!(cfg.units, Units::PerSecond);
        // Unset keys keep their defaults
        assert_eq!(cfg.limit, 250);
        assert_eq!(cfg.refresh, 5);
    }
}

//! Configuration for the switchboard console.
//!
//! Settings live in an optional TOML file, by default
//! `~/.switchboard/config.toml`, overridable through the
//! `SWITCHBOARD_CONFIG` environment variable. A missing file yields the
//! defaults; a malformed file is an error surfaced at startup.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use switchboard_core::DEFAULT_SWITCHES;

/// Console configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Switch prefixes recognized on the command line
    pub switches: Vec<String>,

    /// Tracing filter directive, e.g. "switchboard=debug"
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            switches: DEFAULT_SWITCHES.iter().map(|s| s.to_string()).collect(),
            log_filter: "switchboard=warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load the configuration, falling back to defaults when no file
    /// exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var("SWITCHBOARD_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let home = env::var("HOME")
            .map(PathBuf::from)
            .map_err(|e| anyhow::anyhow!("Failed to get home directory: {}", e))?;

        Ok(home.join(".switchboard").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_switches() {
        let config = CliConfig::default();
        assert_eq!(config.switches, vec!["-", "--", "/"]);
    }

    #[test]
    fn parses_partial_config() {
        let config: CliConfig = toml::from_str("switches = [\"--\"]").unwrap();
        assert_eq!(config.switches, vec!["--"]);
        // Unset fields keep their defaults
        assert_eq!(config.log_filter, "switchboard=warn");
    }

    #[test]
    fn rejects_malformed_config() {
        assert!(toml::from_str::<CliConfig>("switches = 5").is_err());
    }
}

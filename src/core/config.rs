//! Campaign configuration
//!
//! Loaded from TOML. Every key is optional; missing keys fall back to the
//! reference campaign (ten weeks from seed 7).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WarError};

/// Settings for a multi-turn campaign run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Number of turns (weeks) to resolve
    pub turns: u32,

    /// Seed for the campaign's random source
    ///
    /// Also recorded on the world as `rng_seed` when the reference world is built.
    pub seed: u64,

    /// Where the final snapshot is written
    pub snapshot_path: PathBuf,

    /// Print each turn's notes while running
    pub print_notes: bool,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            turns: 10,
            seed: 7,
            snapshot_path: PathBuf::from("example_world.json"),
            print_notes: true,
        }
    }
}

impl CampaignConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WarError::Config(format!("Invalid TOML: {}", e)))
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WarError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(WarError::Config("snapshot_path must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_campaign() {
        let config = CampaignConfig::default();
        assert_eq!(config.turns, 10);
        assert_eq!(config.seed, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CampaignConfig::from_toml_str("turns = 3\n").unwrap();
        assert_eq!(config.turns, 3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.snapshot_path, PathBuf::from("example_world.json"));
        assert!(config.print_notes);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CampaignConfig::from_toml_str("turns = \"many\"").unwrap_err();
        assert!(matches!(err, WarError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.toml");
        fs::write(&path, "turns = 25\nseed = 99\nprint_notes = false\n").unwrap();

        let config = CampaignConfig::load(&path).unwrap();
        assert_eq!(config.turns, 25);
        assert_eq!(config.seed, 99);
        assert!(!config.print_notes);
    }

    #[test]
    fn test_empty_snapshot_path_rejected() {
        let config = CampaignConfig {
            snapshot_path: PathBuf::new(),
            ..CampaignConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

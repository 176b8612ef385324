//! Configuration loading for Rankboard.
//! Reads rankboard.toml from an explicit path, the path in RANKBOARD_CONFIG,
//! or the current directory, in that order.

use std::path::{Path, PathBuf};

use rankboard_common::{Metric, Period, RankboardError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const CONFIG_ENV_VAR: &str = "RANKBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "rankboard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Length of each top / bottom slice
    #[serde(default = "default_take")]
    pub take: usize,
    #[serde(default)]
    pub default_metric: Metric,
    #[serde(default)]
    pub default_period: Period,
}

fn default_take() -> usize { 10 }

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            take: default_take(),
            default_metric: Metric::default(),
            default_period: Period::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Dataset file (.json / .yaml / .yml). Built-in demo data when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String { "text".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: default_format() }
    }
}


impl Config {
    /// Load configuration.
    ///
    /// An explicitly requested file must exist. When falling back to the
    /// env var or the working directory, a missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            warn!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ranking.take == 0 {
            return Err(RankboardError::Config(
                "ranking.take must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! # Engine Configuration
//!
//! Tunables for the aggregate assessments. Every field has a default, so an
//! empty YAML document is a valid configuration.
//!
//! ```yaml
//! recommendation_cap: 6
//! cross_reference_preview_limit: 3
//! constellation_threshold: 10
//! reference_year: 2026          # omit to use the current year
//! redact_requirement_text: true
//! ```

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Launch year of the first artificial satellite. No space law predates it.
const EARLIEST_REFERENCE_YEAR: i32 = 1957;

/// Errors loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid configuration document.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A field is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Engine tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum number of recommendations returned.
    pub recommendation_cap: usize,
    /// Maximum number of EU Space Act articles listed per unit.
    pub cross_reference_preview_limit: usize,
    /// Constellation size from which constellation advice is given.
    pub constellation_threshold: u32,
    /// Year used for regulatory maturity. `None` means the current year.
    pub reference_year: Option<i32>,
    /// Whether request handlers strip full requirement text from results.
    pub redact_requirement_text: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recommendation_cap: 6,
            cross_reference_preview_limit: 3,
            constellation_threshold: 10,
            reference_year: None,
            redact_requirement_text: true,
        }
    }
}

impl EngineConfig {
    /// The year maturity bonuses are computed against.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// Load and validate a YAML configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(year) = self.reference_year {
            if year < EARLIEST_REFERENCE_YEAR {
                return Err(ConfigError::Invalid(format!(
                    "reference_year {year} is before {EARLIEST_REFERENCE_YEAR}"
                )));
            }
        }
        if self.cross_reference_preview_limit == 0 {
            return Err(ConfigError::Invalid(
                "cross_reference_preview_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

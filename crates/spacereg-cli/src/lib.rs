//! # spacereg-cli: Command-Line Interface
//!
//! Provides the `spacereg` binary over the assessment engine.
//!
//! ## Subcommands
//!
//! - `spacereg assess`: jurisdiction assessment from a questionnaire file.
//! - `spacereg guidelines`: guideline scoring and gap analysis for a mission.
//! - `spacereg data validate`: load-time checks on the reference data.
//! - `spacereg data list`: jurisdictions and guidelines in the corpus.
//!
//! ```bash
//! spacereg assess answers.yaml
//! spacereg guidelines mission.yaml --statuses statuses.yaml --json
//! spacereg --data-dir ./corpus data validate
//! ```
//!
//! Input documents are YAML, or JSON when the file ends in `.json`.

pub mod assess;
pub mod data;
pub mod guidelines;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use spacereg_engine::{EngineConfig, Validate};
use spacereg_pack::ReferenceData;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Engine configuration file.
    pub config: Option<PathBuf>,
    /// Directory of replacement reference tables.
    pub data_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// The engine configuration, or the defaults when no file was given.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => EngineConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load engine config {}", path.display())),
            None => Ok(EngineConfig::default()),
        }
    }

    /// The reference data from `--data-dir`, or the bundled corpus. Load
    /// warnings are logged by the loader.
    pub fn reference_data(&self) -> Result<Arc<ReferenceData>> {
        ReferenceData::load(self.data_dir.as_deref()).with_context(|| {
            match &self.data_dir {
                Some(dir) => format!("failed to load reference data from {}", dir.display()),
                None => "failed to load bundled reference data".to_string(),
            }
        })
    }
}

/// Read a YAML or JSON document into `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML {}", path.display()))
    }
}

/// Read an input document and run its range checks.
///
/// `Ok(None)` means the document parsed but a value is out of range. The
/// offending field is reported on stderr.
pub fn read_input<T: DeserializeOwned + Validate>(path: &Path) -> Result<Option<T>> {
    let value: T = read_document(path)?;
    match value.validate() {
        Ok(()) => Ok(Some(value)),
        Err(e) => {
            eprintln!("  FAIL: {e} ({})", path.display());
            Ok(None)
        }
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

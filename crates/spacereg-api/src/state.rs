//! # Application State
//!
//! Read-only handles shared by every request: the reference data and the
//! engine configuration. Each request computes a fresh result from them.

use std::path::Path;
use std::sync::Arc;

use spacereg_engine::EngineConfig;
use spacereg_pack::{PackResult, ReferenceData};

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reference tables, loaded once at startup.
    pub data: Arc<ReferenceData>,
    /// Engine tunables, including requirement-text redaction.
    pub config: Arc<EngineConfig>,
}

impl AppState {
    /// State over the bundled reference data with default configuration.
    pub fn new() -> PackResult<Self> {
        Ok(Self::with_data(ReferenceData::builtin()?, EngineConfig::default()))
    }

    /// State over explicit data and configuration.
    pub fn with_data(data: Arc<ReferenceData>, config: EngineConfig) -> Self {
        Self {
            data,
            config: Arc::new(config),
        }
    }

    /// State over the data in `data_dir`, or the bundled data.
    pub fn load(data_dir: Option<&Path>, config: EngineConfig) -> PackResult<Self> {
        Ok(Self::with_data(ReferenceData::load(data_dir)?, config))
    }
}

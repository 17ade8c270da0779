//! # Reference Data Store
//!
//! [`ReferenceData`] holds the three validated tables, keyed by their
//! stable codes. It is built once and then only read: the bundled corpus
//! is parsed on first use and cached for the life of the process, and a
//! directory of replacement tables can be loaded in its place.
//!
//! ## File layout
//!
//! ```text
//! <dir>/jurisdictions.yaml      jurisdictions: [JurisdictionLaw, ...]
//! <dir>/guidelines.yaml         guidelines: [GuidelineDefinition, ...]
//! <dir>/cross_references.yaml   cross_references: [CrossReferenceRow, ...]
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use spacereg_core::{GuidelineId, JurisdictionCode};

use crate::crossref::CrossReferenceRow;
use crate::error::{PackError, PackResult};
use crate::guideline::GuidelineDefinition;
use crate::law::JurisdictionLaw;
use crate::parser;
use crate::validation::validate_reference_data;

/// File name of the jurisdiction table.
pub const JURISDICTIONS_FILE: &str = "jurisdictions.yaml";
/// File name of the guideline table.
pub const GUIDELINES_FILE: &str = "guidelines.yaml";
/// File name of the cross-reference table.
pub const CROSS_REFERENCES_FILE: &str = "cross_references.yaml";

const BUNDLED_JURISDICTIONS: &str = include_str!("../data/jurisdictions.yaml");
const BUNDLED_GUIDELINES: &str = include_str!("../data/guidelines.yaml");
const BUNDLED_CROSS_REFERENCES: &str = include_str!("../data/cross_references.yaml");

// ---------------------------------------------------------------------------
// File envelopes
// ---------------------------------------------------------------------------

/// `jurisdictions.yaml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JurisdictionTable {
    /// Content version of the table.
    #[serde(default)]
    pub version: Option<String>,
    /// Records.
    pub jurisdictions: Vec<JurisdictionLaw>,
}

/// `guidelines.yaml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuidelineTable {
    /// Content version of the table.
    #[serde(default)]
    pub version: Option<String>,
    /// Records.
    pub guidelines: Vec<GuidelineDefinition>,
}

/// `cross_references.yaml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrossReferenceTable {
    /// Content version of the table.
    #[serde(default)]
    pub version: Option<String>,
    /// Rows.
    pub cross_references: Vec<CrossReferenceRow>,
}

// ---------------------------------------------------------------------------
// ReferenceData
// ---------------------------------------------------------------------------

/// The validated, read-only reference corpus.
#[derive(Debug)]
pub struct ReferenceData {
    jurisdictions: BTreeMap<JurisdictionCode, JurisdictionLaw>,
    guidelines: BTreeMap<GuidelineId, GuidelineDefinition>,
    cross_references: Vec<CrossReferenceRow>,
    warnings: Vec<String>,
}

impl ReferenceData {
    /// Validate and index the three tables.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Validation`] with every problem found.
    pub fn from_tables(
        jurisdictions: Vec<JurisdictionLaw>,
        guidelines: Vec<GuidelineDefinition>,
        cross_references: Vec<CrossReferenceRow>,
    ) -> PackResult<Self> {
        let report = validate_reference_data(&jurisdictions, &guidelines, &cross_references);
        for warning in &report.warnings {
            tracing::warn!(warning = %warning, "reference data anomaly");
        }
        if !report.is_valid() {
            return Err(PackError::Validation {
                problems: report.errors,
            });
        }

        let data = Self {
            jurisdictions: jurisdictions
                .into_iter()
                .map(|law| (law.code.clone(), law))
                .collect(),
            guidelines: guidelines
                .into_iter()
                .map(|g| (g.id.clone(), g))
                .collect(),
            cross_references,
            warnings: report.warnings,
        };
        tracing::info!(
            jurisdictions = data.jurisdictions.len(),
            guidelines = data.guidelines.len(),
            cross_references = data.cross_references.len(),
            "reference data loaded"
        );
        Ok(data)
    }

    /// Parse and validate tables given as YAML text.
    pub fn from_yaml_strs(
        jurisdictions: &str,
        guidelines: &str,
        cross_references: &str,
    ) -> PackResult<Self> {
        let j: JurisdictionTable = parser::parse_yaml_str(jurisdictions)?;
        let g: GuidelineTable = parser::parse_yaml_str(guidelines)?;
        let x: CrossReferenceTable = parser::parse_yaml_str(cross_references)?;
        Self::from_tables(j.jurisdictions, g.guidelines, x.cross_references)
    }

    /// Load the three table files from `dir`.
    ///
    /// # Errors
    ///
    /// [`PackError::FileNotFound`] if a table is missing,
    /// [`PackError::YamlParse`] with the file path if one does not parse,
    /// [`PackError::Validation`] if the tables are inconsistent.
    pub fn load_dir(dir: &Path) -> PackResult<Self> {
        let j: JurisdictionTable = parser::load_yaml_typed(&dir.join(JURISDICTIONS_FILE))?;
        let g: GuidelineTable = parser::load_yaml_typed(&dir.join(GUIDELINES_FILE))?;
        let x: CrossReferenceTable = parser::load_yaml_typed(&dir.join(CROSS_REFERENCES_FILE))?;
        Self::from_tables(j.jurisdictions, g.guidelines, x.cross_references)
    }

    /// The bundled corpus, parsed once and shared.
    pub fn builtin() -> PackResult<Arc<ReferenceData>> {
        static BUILTIN: OnceLock<Arc<ReferenceData>> = OnceLock::new();
        if let Some(data) = BUILTIN.get() {
            return Ok(Arc::clone(data));
        }
        let parsed = Arc::new(Self::from_yaml_strs(
            BUNDLED_JURISDICTIONS,
            BUNDLED_GUIDELINES,
            BUNDLED_CROSS_REFERENCES,
        )?);
        Ok(Arc::clone(BUILTIN.get_or_init(|| parsed)))
    }

    /// Load from `dir` when given, otherwise use the bundled corpus.
    pub fn load(dir: Option<&Path>) -> PackResult<Arc<ReferenceData>> {
        match dir {
            Some(dir) => Ok(Arc::new(Self::load_dir(dir)?)),
            None => Self::builtin(),
        }
    }

    // -- Lookups -------------------------------------------------------------

    /// Look up a jurisdiction by code.
    pub fn jurisdiction(&self, code: &str) -> Option<&JurisdictionLaw> {
        self.jurisdictions.get(code)
    }

    /// Look up a guideline by id.
    pub fn guideline(&self, id: &str) -> Option<&GuidelineDefinition> {
        self.guidelines.get(id)
    }

    /// All jurisdictions, ordered by code.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &JurisdictionLaw> {
        self.jurisdictions.values()
    }

    /// All guidelines, ordered by id.
    pub fn guidelines(&self) -> impl Iterator<Item = &GuidelineDefinition> {
        self.guidelines.values()
    }

    /// The cross-reference table in file order.
    pub fn cross_references(&self) -> &[CrossReferenceRow] {
        &self.cross_references
    }

    /// Non-fatal anomalies found at load time.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_core::LegislationStatus;

    #[test]
    fn test_builtin_corpus_is_valid() {
        let data = ReferenceData::builtin().unwrap();
        assert!(data.jurisdictions().count() >= 10);
        assert!(data.guidelines().count() >= 15);
        assert!(!data.cross_references().is_empty());
    }

    #[test]
    fn test_builtin_is_cached() {
        let a = ReferenceData::builtin().unwrap();
        let b = ReferenceData::builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_has_one_jurisdiction_without_comprehensive_law() {
        let data = ReferenceData::builtin().unwrap();
        let none: Vec<_> = data
            .jurisdictions()
            .filter(|j| j.legislation.status == LegislationStatus::None)
            .collect();
        assert_eq!(none.len(), 1);
        assert_eq!(none[0].code.as_str(), "DE");
        assert!(none[0].narrow_scope_activity.is_some());
    }

    #[test]
    fn test_lookup_by_str() {
        let data = ReferenceData::builtin().unwrap();
        assert_eq!(data.jurisdiction("FR").map(|j| j.name.as_str()), Some("France"));
        assert!(data.jurisdiction("ZZ").is_none());
        assert!(data.guideline("iadc-5.3.2").is_some());
    }

    #[test]
    fn test_load_dir_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(JURISDICTIONS_FILE), BUNDLED_JURISDICTIONS).unwrap();
        std::fs::write(dir.path().join(GUIDELINES_FILE), BUNDLED_GUIDELINES).unwrap();
        std::fs::write(dir.path().join(CROSS_REFERENCES_FILE), BUNDLED_CROSS_REFERENCES).unwrap();

        let data = ReferenceData::load_dir(dir.path()).unwrap();
        let builtin = ReferenceData::builtin().unwrap();
        assert_eq!(data.jurisdictions().count(), builtin.jurisdictions().count());
        assert_eq!(data.guidelines().count(), builtin.guidelines().count());
    }

    #[test]
    fn test_load_dir_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(JURISDICTIONS_FILE), BUNDLED_JURISDICTIONS).unwrap();
        let err = ReferenceData::load_dir(dir.path()).unwrap_err();
        match err {
            PackError::FileNotFound { path } => assert!(path.ends_with(GUIDELINES_FILE)),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_inconsistent_tables_rejected() {
        let xrefs = "cross_references:\n  - {id: r, eu_article: Art. 1, title: t, applicable_countries: [ZZ], relationship: gap, description: d}\n";
        let err = ReferenceData::from_yaml_strs(
            "jurisdictions: []\n",
            "guidelines: []\n",
            xrefs,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::Validation { .. }));
    }
}

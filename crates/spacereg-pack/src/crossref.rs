//! # EU Space Act Cross-Reference Table
//!
//! Each [`CrossReferenceRow`] ties one article of the EU Space Act to the
//! national frameworks and guideline sources it touches, and states how the
//! current rules will relate to it once it applies.

use serde::{Deserialize, Serialize};
use spacereg_core::{CrossReferenceRelationship, JurisdictionCode};

use crate::guideline::GuidelineSource;

/// One row of the cross-reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceRow {
    /// Row identifier.
    pub id: String,
    /// EU Space Act article, e.g. `Art. 6`.
    pub eu_article: String,
    /// Article title.
    pub title: String,
    /// Jurisdictions whose current framework the article affects.
    #[serde(default)]
    pub applicable_countries: Vec<JurisdictionCode>,
    /// Guideline sources the article incorporates or references.
    #[serde(default)]
    pub applicable_sources: Vec<GuidelineSource>,
    /// Relationship kind.
    pub relationship: CrossReferenceRelationship,
    /// What changes.
    pub description: String,
}

impl CrossReferenceRow {
    /// Whether the row lists `code` among its countries.
    pub fn covers_jurisdiction(&self, code: &JurisdictionCode) -> bool {
        self.applicable_countries.contains(code)
    }

    /// Whether the row lists `source` among its guideline sources.
    pub fn covers_source(&self, source: GuidelineSource) -> bool {
        self.applicable_sources.contains(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_scope() {
        let row: CrossReferenceRow = serde_yaml::from_str(
            r#"
id: art-6
eu_article: Art. 6
title: Authorisation
applicable_countries: [FR, be]
applicable_sources: [iadc]
relationship: superseded
description: A single EU authorisation replaces national licences.
"#,
        )
        .unwrap();
        assert!(row.covers_jurisdiction(&JurisdictionCode::new("BE").unwrap()));
        assert!(!row.covers_jurisdiction(&JurisdictionCode::new("GB").unwrap()));
        assert!(row.covers_source(GuidelineSource::Iadc));
        assert!(!row.covers_source(GuidelineSource::Nis2));
    }
}

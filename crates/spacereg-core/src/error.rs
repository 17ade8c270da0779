//! # Error Hierarchy
//!
//! Validation errors for identifier newtypes and closed taxonomies, built
//! with `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the rejected input and the expected shape so that a
//! malformed questionnaire or data file can be diagnosed without guesswork.

use thiserror::Error;

/// Validation errors for domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction code is not a two-letter ISO 3166-1 alpha-2 code.
    #[error("invalid jurisdiction code: \"{0}\" (expected two ASCII letters, e.g. \"FR\")")]
    InvalidJurisdictionCode(String),

    /// Guideline identifier is empty or contains whitespace.
    #[error("invalid guideline ID: \"{0}\" (expected non-empty, no whitespace)")]
    InvalidGuidelineId(String),

    /// A string did not name any variant of a closed taxonomy.
    #[error("unknown {kind} value: \"{value}\"")]
    UnknownVariant {
        /// The enum being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_jurisdiction_code_display() {
        let err = ValidationError::InvalidJurisdictionCode("FRA".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("FRA"));
        assert!(msg.contains("two ASCII letters"));
    }

    #[test]
    fn invalid_guideline_id_display() {
        let err = ValidationError::InvalidGuidelineId("".to_string());
        assert!(format!("{err}").contains("non-empty"));
    }

    #[test]
    fn unknown_variant_display() {
        let err = ValidationError::UnknownVariant {
            kind: "ActivityType",
            value: "asteroid_mining".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("ActivityType"));
        assert!(msg.contains("asteroid_mining"));
    }
}

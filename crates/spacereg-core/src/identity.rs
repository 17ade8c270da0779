//! # Guideline Identifiers
//!
//! Guideline checklist items are keyed by a stable string id such as
//! `iadc-5.3.2` or `nis2-art21-2d`. The id doubles as the sort key for gap
//! reports, so it is validated once and compared as a plain string.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A guideline checklist item identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GuidelineId(String);

impl GuidelineId {
    /// Create a guideline identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidGuidelineId`] if the value is empty
    /// or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidGuidelineId(s));
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for GuidelineId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Borrow<str> for GuidelineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuidelineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guideline_id_valid() {
        let id = GuidelineId::new("iadc-5.3.2").unwrap();
        assert_eq!(id.as_str(), "iadc-5.3.2");
    }

    #[test]
    fn guideline_id_rejects_empty_and_whitespace() {
        assert!(GuidelineId::new("").is_err());
        assert!(GuidelineId::new("iadc 5.3").is_err());
    }

    #[test]
    fn guideline_ids_sort_lexicographically() {
        let mut ids = vec![
            GuidelineId::new("iso-24113-6.2").unwrap(),
            GuidelineId::new("iadc-5.2").unwrap(),
        ];
        ids.sort();
        assert_eq!(ids[0].as_str(), "iadc-5.2");
    }
}

//! # Jurisdiction Codes
//!
//! The [`JurisdictionCode`] newtype is the stable key of every national
//! space-law record. Codes are ISO 3166-1 alpha-2, normalized to upper case
//! at construction ("fr" and " FR " both become `FR`).
//!
//! EU membership is needed by applicability rules that scope obligations to
//! EU or non-EU operators, so the member list lives next to the code type.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// EU member states (ISO 3166-1 alpha-2). Greece uses its ISO code `GR`.
const EU_MEMBERS: [&str; 27] = [
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// A jurisdiction code, e.g. `FR`, `LU`, `GB`.
///
/// # Validation
///
/// Exactly two ASCII letters after trimming. Stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a jurisdiction code, normalizing to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionCode`] unless the trimmed
    /// input is exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidJurisdictionCode(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this jurisdiction is an EU member state.
    pub fn is_eu_member(&self) -> bool {
        EU_MEMBERS.contains(&self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for JurisdictionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Borrow<str> for JurisdictionCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for JurisdictionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_normalized_to_upper_case() {
        let code = JurisdictionCode::new(" fr ").unwrap();
        assert_eq!(code.as_str(), "FR");
    }

    #[test]
    fn code_rejects_wrong_length_and_digits() {
        assert!(JurisdictionCode::new("").is_err());
        assert!(JurisdictionCode::new("FRA").is_err());
        assert!(JurisdictionCode::new("F1").is_err());
    }

    #[test]
    fn eu_membership() {
        assert!(JurisdictionCode::new("LU").unwrap().is_eu_member());
        assert!(JurisdictionCode::new("DE").unwrap().is_eu_member());
        assert!(!JurisdictionCode::new("GB").unwrap().is_eu_member());
        assert!(!JurisdictionCode::new("NO").unwrap().is_eu_member());
    }

    #[test]
    fn deserialization_validates() {
        let ok: JurisdictionCode = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(ok.as_str(), "NL");
        let bad: Result<JurisdictionCode, _> = serde_json::from_str("\"Netherlands\"");
        assert!(bad.is_err());
    }

    proptest::proptest! {
        #[test]
        fn any_two_letter_code_normalizes(a in "[a-zA-Z]", b in "[a-zA-Z]") {
            let raw = format!("{a}{b}");
            let code = JurisdictionCode::new(raw.clone()).unwrap();
            proptest::prop_assert_eq!(code.as_str(), raw.to_ascii_uppercase());
            let again = JurisdictionCode::new(code.as_str()).unwrap();
            proptest::prop_assert_eq!(again, code);
        }
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(JurisdictionCode::new("BE").unwrap(), 1);
        assert_eq!(map.get("BE"), Some(&1));
    }
}

//! # Assessment Inputs
//!
//! The per-request records a caller hands to the engine. Every field is
//! optional: an unanswered question stays `None` and propagates as
//! "unknown" through the resolver. Nothing is defaulted.
//!
//! Values that parse but cannot describe a real mission are caught by
//! [`Validate`] before the engine runs. Every entry point (HTTP or CLI)
//! calls it.

use serde::{Deserialize, Serialize};
use spacereg_core::{
    ActivityType, EntitySize, JurisdictionCode, LicensingStatus, OrbitRegime,
};
use thiserror::Error;

/// Most jurisdictions a single assessment may select.
pub const MAX_SELECTED_JURISDICTIONS: usize = 20;

/// An input value outside the range the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct InputError {
    /// camelCase path of the field, as the caller sent it.
    pub field: String,
    pub message: String,
}

impl InputError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Nest the field path under `parent`.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = format!("{parent}.{}", self.field);
        self
    }
}

/// Range rules checked after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), InputError>;
}

/// Questionnaire answers for a jurisdiction assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnswers {
    /// Jurisdiction codes to assess, in the order the caller chose them.
    /// Codes with no reference record are dropped from the result.
    #[serde(default)]
    pub selected_jurisdictions: Vec<String>,
    /// Declared activity.
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
    /// Country where the operating entity is established.
    #[serde(default)]
    pub entity_nationality: Option<JurisdictionCode>,
    /// Size class of the operating entity.
    #[serde(default)]
    pub entity_size: Option<EntitySize>,
    /// Orbit regime of the mission.
    #[serde(default)]
    pub orbit_regime: Option<OrbitRegime>,
    /// Number of spacecraft in the constellation.
    #[serde(default)]
    pub constellation_size: Option<u32>,
    /// Where the operator stands in the licensing process.
    #[serde(default)]
    pub licensing_status: Option<LicensingStatus>,
}

/// Mission profile for a guideline assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionProfile {
    /// Declared activity.
    #[serde(default)]
    pub activity_type: Option<ActivityType>,
    /// Orbit regime.
    #[serde(default)]
    pub orbit_regime: Option<OrbitRegime>,
    /// Operational altitude in km.
    #[serde(default)]
    pub altitude_km: Option<u32>,
    /// Orbit inclination in degrees.
    #[serde(default)]
    pub inclination_deg: Option<f64>,
    /// Spacecraft wet mass in kg.
    #[serde(default)]
    pub mass_kg: Option<f64>,
    /// Whether the spacecraft can manoeuvre.
    #[serde(default)]
    pub maneuverable: Option<bool>,
    /// Planned mission lifetime in years.
    #[serde(default)]
    pub lifetime_years: Option<f64>,
    /// Whether the spacecraft is part of a constellation.
    #[serde(default)]
    pub constellation: Option<bool>,
    /// Number of spacecraft in the constellation.
    #[serde(default)]
    pub constellation_size: Option<u32>,
}

impl MissionProfile {
    /// Constellation membership, from the explicit flag or, failing that,
    /// from a declared constellation size greater than one.
    pub fn is_constellation(&self) -> Option<bool> {
        self.constellation
            .or_else(|| self.constellation_size.map(|n| n > 1))
    }
}

impl Validate for AssessmentAnswers {
    fn validate(&self) -> Result<(), InputError> {
        let selected = &self.selected_jurisdictions;
        if selected.len() > MAX_SELECTED_JURISDICTIONS {
            return Err(InputError::new(
                "selectedJurisdictions",
                format!(
                    "at most {MAX_SELECTED_JURISDICTIONS} jurisdictions may be selected, got {}",
                    selected.len()
                ),
            ));
        }
        if let Some(i) = selected.iter().position(|c| c.trim().is_empty()) {
            return Err(InputError::new(
                format!("selectedJurisdictions[{i}]"),
                "jurisdiction code must not be empty",
            ));
        }
        Ok(())
    }
}

impl Validate for MissionProfile {
    fn validate(&self) -> Result<(), InputError> {
        if let Some(inc) = self.inclination_deg {
            if !(0.0..=180.0).contains(&inc) {
                return Err(InputError::new(
                    "inclinationDeg",
                    format!("must be within 0-180 degrees, got {inc}"),
                ));
            }
        }
        let magnitudes = [("massKg", self.mass_kg), ("lifetimeYears", self.lifetime_years)];
        for (field, value) in magnitudes {
            if let Some(v) = value.filter(|v| !v.is_finite() || *v < 0.0) {
                return Err(InputError::new(
                    field,
                    format!("must be a non-negative number, got {v}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_use_camel_case() {
        let json = r#"{
            "selectedJurisdictions": ["FR", "DE"],
            "activityType": "spacecraft_operation",
            "entityNationality": "fr",
            "entitySize": "small",
            "constellationSize": 12,
            "licensingStatus": "new_application"
        }"#;
        let answers: AssessmentAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.selected_jurisdictions, vec!["FR", "DE"]);
        assert_eq!(answers.activity_type, Some(ActivityType::SpacecraftOperation));
        assert_eq!(answers.entity_nationality.unwrap().as_str(), "FR");
        assert_eq!(answers.orbit_regime, None);
    }

    #[test]
    fn empty_answers_are_all_unknown() {
        let answers: AssessmentAnswers = serde_json::from_str("{}").unwrap();
        assert_eq!(answers, AssessmentAnswers::default());
    }

    #[test]
    fn explicit_null_is_unknown() {
        let answers: AssessmentAnswers =
            serde_json::from_str(r#"{"activityType": null}"#).unwrap();
        assert!(answers.activity_type.is_none());
    }

    #[test]
    fn constellation_inference() {
        let mut profile = MissionProfile::default();
        assert_eq!(profile.is_constellation(), None);
        profile.constellation_size = Some(1);
        assert_eq!(profile.is_constellation(), Some(false));
        profile.constellation_size = Some(24);
        assert_eq!(profile.is_constellation(), Some(true));
        profile.constellation = Some(false);
        assert_eq!(profile.is_constellation(), Some(false));
    }

    fn answers(codes: &[&str]) -> AssessmentAnswers {
        AssessmentAnswers {
            selected_jurisdictions: codes.iter().map(|c| c.to_string()).collect(),
            ..AssessmentAnswers::default()
        }
    }

    #[test]
    fn selection_limits() {
        assert!(answers(&["FR", "DE"]).validate().is_ok());
        assert!(answers(&[]).validate().is_ok());
        assert_eq!(
            answers(&["FR", " "]).validate().unwrap_err().field,
            "selectedJurisdictions[1]"
        );
        let many: Vec<&str> = std::iter::repeat("FR").take(21).collect();
        assert!(answers(&many).validate().unwrap_err().message.contains("at most 20"));
    }

    #[test]
    fn profile_ranges() {
        let mut profile = MissionProfile::default();
        assert!(profile.validate().is_ok());
        profile.inclination_deg = Some(500.0);
        assert_eq!(profile.validate().unwrap_err().field, "inclinationDeg");
        profile.inclination_deg = Some(f64::NAN);
        assert_eq!(profile.validate().unwrap_err().field, "inclinationDeg");
        profile.inclination_deg = Some(97.6);
        profile.mass_kg = Some(-1.0);
        assert_eq!(profile.validate().unwrap_err().field, "massKg");
        profile.mass_kg = Some(250.0);
        profile.lifetime_years = Some(f64::NAN);
        assert_eq!(profile.validate().unwrap_err().field, "lifetimeYears");
        profile.lifetime_years = Some(f64::INFINITY);
        assert!(profile.validate().is_err());
        profile.lifetime_years = Some(7.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn nested_field_path() {
        let err = InputError::new("massKg", "m").within("profile");
        assert_eq!(err.field, "profile.massKg");
        assert_eq!(err.to_string(), "profile.massKg: m");
    }
}

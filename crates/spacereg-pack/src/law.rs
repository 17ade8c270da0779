//! # National Space-Law Records
//!
//! A [`JurisdictionLaw`] is the machine-readable digest of one country's
//! space legislation: who licenses, what an operator must demonstrate,
//! which rules scope the law in or out, and the insurance, debris,
//! timeline and registration terms the scorer and comparison matrix read.
//!
//! Records are immutable once loaded. Optional sub-fields default to
//! "not stated" so that a sparse record still deserializes; the engine
//! treats every absent field as "skip this bonus" rather than an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use spacereg_core::{
    ActivityType, CrossReferenceRelationship, JurisdictionCode, LegislationStatus,
    LiabilityRegime, NationalityScope, RequirementCategory,
};

// ---------------------------------------------------------------------------
// Jurisdiction record
// ---------------------------------------------------------------------------

/// One national space-law record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionLaw {
    /// ISO 3166-1 alpha-2 code, the record's stable key.
    pub code: JurisdictionCode,
    /// English display name.
    pub name: String,
    /// Name in the official language.
    pub local_name: String,
    /// Governing legislation and its status.
    pub legislation: Legislation,
    /// Licensing authority.
    pub authority: Authority,
    /// Obligations an operator must satisfy.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Rules that scope the law in or out, evaluated in declaration order.
    #[serde(default)]
    pub applicability_rules: Vec<ApplicabilityRule>,
    /// For jurisdictions without a comprehensive law: the one activity
    /// that sector-specific legislation still covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow_scope_activity: Option<ActivityType>,
    /// Insurance and liability terms.
    #[serde(default)]
    pub insurance: InsuranceTerms,
    /// Debris mitigation terms.
    #[serde(default)]
    pub debris: DebrisTerms,
    /// Processing time and fees.
    #[serde(default)]
    pub timeline: Timeline,
    /// Registration duties.
    #[serde(default)]
    pub registration: Registration,
    /// How remote-sensing activities are licensed.
    #[serde(default)]
    pub remote_sensing: RemoteSensingRegime,
    /// Activity-specific statutes that favour a declared activity.
    #[serde(default)]
    pub special_provisions: Vec<SpecialProvision>,
    /// Reduced thresholds offered to small entities.
    #[serde(default)]
    pub small_entity_provisions: Vec<String>,
    /// Relationship of this framework to the EU Space Act.
    pub cross_reference: CrossReference,
}

impl JurisdictionLaw {
    /// Whether any requirement lists `activity` in its scope.
    pub fn addresses_activity(&self, activity: ActivityType) -> bool {
        self.requirements
            .iter()
            .any(|r| r.applicable_to.contains(&activity))
    }

    /// Age of the legislation in whole years relative to `reference_year`.
    /// `None` when no enactment year is recorded.
    pub fn legislation_age(&self, reference_year: i32) -> Option<i32> {
        self.legislation
            .enacted_year
            .map(|year| reference_year.saturating_sub(year))
    }
}

/// Governing legislation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Legislation {
    /// Title of the act.
    pub name: String,
    /// Legislative status.
    pub status: LegislationStatus,
    /// Year of enactment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enacted_year: Option<i32>,
    /// Year of the most recent amendment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amended_year: Option<i32>,
    /// Link to the official text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_url: Option<String>,
}

/// Licensing authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authority {
    /// Full name.
    pub name: String,
    /// Website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Contact address for licensing enquiries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

// ---------------------------------------------------------------------------
// Requirements and applicability rules
// ---------------------------------------------------------------------------

/// A single obligation imposed by a national law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Identifier, unique within the jurisdiction.
    pub id: String,
    /// Regulatory category.
    pub category: RequirementCategory,
    /// Short title.
    pub title: String,
    /// Full requirement text.
    pub description: String,
    /// Whether the obligation is binding.
    pub mandatory: bool,
    /// Activities the obligation applies to.
    #[serde(default)]
    pub applicable_to: BTreeSet<ActivityType>,
    /// Article of the governing act.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

/// A rule that scopes the law in or out for a class of operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicabilityRule {
    /// Identifier, unique within the jurisdiction.
    pub id: String,
    /// Human-readable condition. Used as the reason when the rule rejects.
    pub condition: String,
    /// Whether the law applies when this rule matches.
    pub applies: bool,
    /// Activities the rule is scoped to. Empty means any activity.
    #[serde(default)]
    pub activity_types: Vec<ActivityType>,
    /// Nationality scopes the rule is limited to. Empty means any entity.
    #[serde(default)]
    pub nationality: Vec<NationalityScope>,
    /// Article of the governing act.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

// ---------------------------------------------------------------------------
// Domain-specific terms
// ---------------------------------------------------------------------------

/// Third-party liability insurance and state indemnification terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsuranceTerms {
    /// Whether third-party liability insurance is mandatory.
    #[serde(default)]
    pub mandatory: bool,
    /// Statutory minimum cover in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_coverage_eur: Option<u64>,
    /// Whether the state indemnifies the operator above the insured amount.
    #[serde(default)]
    pub government_indemnification: bool,
    /// Operator liability regime towards the state.
    #[serde(default)]
    pub liability_regime: LiabilityRegime,
    /// Statutory cap on the state's recourse, in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_cap_eur: Option<u64>,
}

/// Debris mitigation terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebrisTerms {
    /// Whether post-mission deorbiting is required.
    #[serde(default)]
    pub deorbit_required: bool,
    /// Maximum years from end of mission to re-entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deorbit_timeline_years: Option<u32>,
    /// Whether passivation of stored energy is required.
    #[serde(default)]
    pub passivation_required: bool,
    /// Whether a debris mitigation plan must be filed.
    #[serde(default)]
    pub mitigation_plan_required: bool,
    /// Technical standards referenced by the law.
    #[serde(default)]
    pub standards: Vec<String>,
}

/// Processing time and fees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Typical processing time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_weeks: Option<WeekRange>,
    /// Application fee in EUR. `Some(0)` means explicitly free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_fee_eur: Option<u64>,
    /// Annual supervision fee in EUR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_fee_eur: Option<u64>,
}

/// An inclusive range of weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    /// Fastest typical processing.
    pub min: u32,
    /// Slowest typical processing.
    pub max: u32,
}

impl WeekRange {
    /// Midpoint of the range.
    pub fn average(self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

/// Registration duties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    /// Whether the state keeps a national registry of space objects.
    #[serde(default)]
    pub national_registry: bool,
    /// Whether objects must be registered with the UN.
    #[serde(default)]
    pub un_registration: bool,
}

/// How a jurisdiction licenses remote sensing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteSensingRegime {
    /// A dedicated data-security or remote-sensing act.
    Dedicated,
    /// Covered by the general space-operations licence.
    GeneralLicence,
    /// Not regulated.
    #[default]
    NotRegulated,
}

/// An activity-specific statute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialProvision {
    /// The activity the statute favours.
    pub activity: ActivityType,
    /// Factor text shown when the provision applies.
    pub label: String,
}

/// Relationship to the EU Space Act, embedded in a reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    /// Relationship kind.
    pub relationship: CrossReferenceRelationship,
    /// What the relationship means for this framework.
    pub description: String,
    /// Practical notes for the transition period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
code: xx
name: Example
local_name: Exemple
legislation:
  name: Example Space Act
  status: enacted
  enacted_year: 2010
authority:
  name: Example Space Agency
requirements:
  - id: xx-auth
    category: technical
    title: Authorization
    description: Obtain an authorization before operating.
    mandatory: true
    applicable_to: [spacecraft_operation, launch_operation]
cross_reference:
  relationship: complementary
  description: Continues alongside the EU Space Act.
"#;

    #[test]
    fn test_minimal_record_defaults() {
        let law: JurisdictionLaw = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(law.code.as_str(), "XX");
        assert!(!law.insurance.mandatory);
        assert_eq!(law.insurance.liability_regime, LiabilityRegime::Unspecified);
        assert_eq!(law.remote_sensing, RemoteSensingRegime::NotRegulated);
        assert!(law.timeline.processing_weeks.is_none());
        assert!(law.applicability_rules.is_empty());
    }

    #[test]
    fn test_addresses_activity() {
        let law: JurisdictionLaw = serde_yaml::from_str(MINIMAL).unwrap();
        assert!(law.addresses_activity(ActivityType::LaunchOperation));
        assert!(!law.addresses_activity(ActivityType::SpaceResources));
    }

    #[test]
    fn test_legislation_age() {
        let law: JurisdictionLaw = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(law.legislation_age(2026), Some(16));
    }

    #[test]
    fn test_week_range_average() {
        assert_eq!(WeekRange { min: 6, max: 10 }.average(), 8.0);
        assert_eq!(WeekRange { min: 12, max: 21 }.average(), 16.5);
    }

    #[test]
    fn test_unknown_activity_is_rejected() {
        let bad = MINIMAL.replace("launch_operation", "asteroid_mining");
        assert!(serde_yaml::from_str::<JurisdictionLaw>(&bad).is_err());
    }
}

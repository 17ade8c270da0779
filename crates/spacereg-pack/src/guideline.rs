//! # International Guideline Checklists
//!
//! A [`GuidelineDefinition`] is one checklist item drawn from an
//! international standard or directive (IADC, ISO 24113, ESA Zero Debris,
//! UN COPUOS LTS, ITU Radio Regulations, NIS2). Items carry a priority tier
//! that sets their scoring weight, a severity used for gap priority, and
//! the mission-profile conditions under which they apply.

use serde::{Deserialize, Serialize};
use spacereg_core::{
    ActivityType, Effort, GuidelineId, OrbitRegime, RequirementCategory, RequirementTier, Severity,
};

use crate::law::CrossReference;

/// Issuing body of a guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineSource {
    /// IADC Space Debris Mitigation Guidelines.
    Iadc,
    /// ISO 24113 Space debris mitigation requirements.
    Iso24113,
    /// ESA Zero Debris Charter and ESA debris policy.
    EsaZeroDebris,
    /// UN COPUOS Guidelines for the Long-term Sustainability of Outer Space Activities.
    UnCopuos,
    /// ITU Radio Regulations.
    Itu,
    /// NIS2 Directive (EU) 2022/2555.
    Nis2,
}

impl GuidelineSource {
    /// Every source, in declaration order.
    pub fn all() -> &'static [GuidelineSource] {
        &[
            Self::Iadc,
            Self::Iso24113,
            Self::EsaZeroDebris,
            Self::UnCopuos,
            Self::Itu,
            Self::Nis2,
        ]
    }

    /// The snake_case wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iadc => "iadc",
            Self::Iso24113 => "iso24113",
            Self::EsaZeroDebris => "esa_zero_debris",
            Self::UnCopuos => "un_copuos",
            Self::Itu => "itu",
            Self::Nis2 => "nis2",
        }
    }

    /// Display label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Iadc => "IADC Space Debris Mitigation Guidelines",
            Self::Iso24113 => "ISO 24113:2023",
            Self::EsaZeroDebris => "ESA Zero Debris",
            Self::UnCopuos => "UN COPUOS LTS Guidelines",
            Self::Itu => "ITU Radio Regulations",
            Self::Nis2 => "NIS2 Directive",
        }
    }
}

impl std::fmt::Display for GuidelineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One checklist item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidelineDefinition {
    /// Stable identifier.
    pub id: GuidelineId,
    /// Issuing body.
    pub source: GuidelineSource,
    /// Regulatory category.
    pub category: RequirementCategory,
    /// Short title.
    pub title: String,
    /// What the item requires.
    pub description: String,
    /// Priority tier, which sets the scoring weight.
    pub tier: RequirementTier,
    /// Severity, which sets gap priority.
    pub severity: Severity,
    /// How to close a gap on this item.
    pub guidance: String,
    /// Mission-profile conditions under which the item applies.
    #[serde(default)]
    pub applies_when: ApplicabilityConditions,
    /// Estimated remediation effort.
    #[serde(default)]
    pub effort: Effort,
    /// Items that must be addressed first.
    #[serde(default)]
    pub depends_on: Vec<GuidelineId>,
    /// Clause reference within the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
    /// Relationship to the EU Space Act.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<CrossReference>,
}

impl GuidelineDefinition {
    /// Whether the item is binding.
    pub fn is_mandatory(&self) -> bool {
        self.tier == RequirementTier::Mandatory
    }
}

/// Conditions over a mission profile. An item applies when every declared
/// condition holds; an empty set of conditions applies to every mission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicabilityConditions {
    /// Orbit regimes the item covers. Empty means any.
    #[serde(default)]
    pub orbit_regimes: Vec<OrbitRegime>,
    /// Lowest altitude covered, in km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_altitude_km: Option<u32>,
    /// Highest altitude covered, in km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_altitude_km: Option<u32>,
    /// Lowest inclination covered, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_inclination_deg: Option<f64>,
    /// Highest inclination covered, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_inclination_deg: Option<f64>,
    /// Smallest spacecraft mass covered, in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_mass_kg: Option<f64>,
    /// Required manoeuvring capability: `true` only for manoeuvrable
    /// spacecraft, `false` only for non-manoeuvrable ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maneuverable: Option<bool>,
    /// Shortest mission lifetime covered, in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lifetime_years: Option<f64>,
    /// Whether the item applies only to constellations.
    #[serde(default)]
    pub constellation_only: bool,
    /// Activities the item covers. Empty means any.
    #[serde(default)]
    pub activity_types: Vec<ActivityType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_wire_names_match_serde() {
        for &source in GuidelineSource::all() {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.as_str()));
        }
    }

    #[test]
    fn test_guideline_parses_with_defaults() {
        let yaml = r#"
id: iadc-5.2.1
source: iadc
category: debris
title: Limit debris released during normal operations
description: Design to release no debris during normal operations.
tier: mandatory
severity: high
guidance: Document retention of covers, lens caps and separation hardware.
"#;
        let g: GuidelineDefinition = serde_yaml::from_str(yaml).unwrap();
        assert!(g.is_mandatory());
        assert_eq!(g.effort, Effort::Medium);
        assert_eq!(g.applies_when, ApplicabilityConditions::default());
        assert!(g.depends_on.is_empty());
    }

    #[test]
    fn test_guideline_rejects_invalid_id() {
        let yaml = r#"
id: "iadc 5.2.1"
source: iadc
category: debris
title: t
description: d
tier: mandatory
severity: high
guidance: g
"#;
        assert!(serde_yaml::from_str::<GuidelineDefinition>(yaml).is_err());
    }
}

//! # Applicability Resolution
//!
//! Decides whether a reference unit binds the described operator, and says
//! why. The reason string is part of the result contract: every verdict is
//! explained.
//!
//! ## Jurisdictions
//!
//! Checked in order, first decisive step wins:
//!
//! 1. **No comprehensive law.** A jurisdiction whose legislation status is
//!    `none` applies only when the declared activity equals its
//!    `narrow_scope_activity`. This step short-circuits both ways.
//! 2. **Activity not addressed.** With a declared activity, a jurisdiction
//!    none of whose requirements list that activity does not apply.
//! 3. **Applicability rules**, in declaration order. A rule outside the
//!    operator's activity or nationality scope is skipped; the first
//!    remaining rule with `applies: false` rejects, and its condition is the
//!    reason.
//! 4. Otherwise the jurisdiction applies.
//!
//! An unknown activity skips step 2 and matches every rule's activity
//! scope. An unknown nationality matches every nationality scope.
//!
//! ## Guidelines
//!
//! Every declared condition must hold. A condition over an unknown profile
//! field holds.

use serde::{Deserialize, Serialize};
use spacereg_core::{ActivityType, JurisdictionCode, LegislationStatus, OrbitRegime};
use spacereg_pack::{ApplicabilityConditions, ApplicabilityRule, GuidelineDefinition, JurisdictionLaw};

use crate::answers::{AssessmentAnswers, MissionProfile};

/// Applicability verdict with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicability {
    /// Whether the unit binds the operator.
    pub is_applicable: bool,
    /// Why.
    pub reason: String,
}

impl Applicability {
    fn applies(reason: impl Into<String>) -> Self {
        Self {
            is_applicable: true,
            reason: reason.into(),
        }
    }

    fn rejects(reason: impl Into<String>) -> Self {
        Self {
            is_applicable: false,
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Jurisdictions
// ---------------------------------------------------------------------------

/// Resolve whether `law` applies to the operator described by `answers`.
pub fn resolve_jurisdiction(law: &JurisdictionLaw, answers: &AssessmentAnswers) -> Applicability {
    let verdict = resolve_inner(law, answers);
    tracing::debug!(
        jurisdiction = %law.code,
        applicable = verdict.is_applicable,
        reason = %verdict.reason,
        "applicability resolved"
    );
    verdict
}

fn resolve_inner(law: &JurisdictionLaw, answers: &AssessmentAnswers) -> Applicability {
    if law.legislation.status == LegislationStatus::None {
        return resolve_without_comprehensive_law(law, answers.activity_type);
    }

    if let Some(activity) = answers.activity_type {
        if !law.addresses_activity(activity) {
            return Applicability::rejects(format!(
                "{} is not specifically addressed by the {}.",
                capitalize(activity.label()),
                law.legislation.name
            ));
        }
    }

    let rejection = law
        .applicability_rules
        .iter()
        .filter(|rule| rule_in_scope(rule, &law.code, answers))
        .find(|rule| !rule.applies);
    if let Some(rule) = rejection {
        return Applicability::rejects(rule.condition.trim());
    }

    Applicability::applies(format!(
        "Subject to the {}, administered by {}.",
        law.legislation.name, law.authority.name
    ))
}

fn resolve_without_comprehensive_law(
    law: &JurisdictionLaw,
    activity: Option<ActivityType>,
) -> Applicability {
    match (law.narrow_scope_activity, activity) {
        (Some(narrow), Some(declared)) if narrow == declared => Applicability::applies(format!(
            "{} has no comprehensive space law, but the {} regulates {} activities.",
            law.name,
            law.legislation.name,
            narrow.label()
        )),
        (Some(narrow), _) => Applicability::rejects(format!(
            "{} has no comprehensive space law; only {} is regulated, under the {}.",
            law.name,
            narrow.label(),
            law.legislation.name
        )),
        (None, _) => Applicability::rejects(format!(
            "{} has no comprehensive space law.",
            law.name
        )),
    }
}

/// Whether `rule` is in scope for the declared activity and nationality.
fn rule_in_scope(
    rule: &ApplicabilityRule,
    jurisdiction: &JurisdictionCode,
    answers: &AssessmentAnswers,
) -> bool {
    let activity_matches = match answers.activity_type {
        Some(activity) => rule.activity_types.is_empty() || rule.activity_types.contains(&activity),
        None => true,
    };
    let nationality_matches = match &answers.entity_nationality {
        Some(nationality) => {
            rule.nationality.is_empty()
                || rule
                    .nationality
                    .iter()
                    .any(|scope| scope.matches(jurisdiction, nationality))
        }
        None => true,
    };
    activity_matches && nationality_matches
}

// ---------------------------------------------------------------------------
// Guidelines
// ---------------------------------------------------------------------------

/// Resolve whether `guideline` applies to the mission described by `profile`.
pub fn resolve_guideline(guideline: &GuidelineDefinition, profile: &MissionProfile) -> Applicability {
    match failed_condition(&guideline.applies_when, profile) {
        Some(reason) => Applicability::rejects(reason),
        None => Applicability::applies("Applies to the declared mission profile."),
    }
}

/// The first declared condition the profile fails, as a reason string.
fn failed_condition(c: &ApplicabilityConditions, p: &MissionProfile) -> Option<String> {
    if let Some(orbit) = p.orbit_regime {
        if !c.orbit_regimes.is_empty() && !c.orbit_regimes.contains(&orbit) {
            return Some(format!(
                "Applies only to {} missions.",
                orbit_list(&c.orbit_regimes)
            ));
        }
    }
    if let (Some(min), Some(alt)) = (c.min_altitude_km, p.altitude_km) {
        if alt < min {
            return Some(format!("Applies only at or above {min} km altitude."));
        }
    }
    if let (Some(max), Some(alt)) = (c.max_altitude_km, p.altitude_km) {
        if alt > max {
            return Some(format!("Applies only at or below {max} km altitude."));
        }
    }
    if let (Some(min), Some(inc)) = (c.min_inclination_deg, p.inclination_deg) {
        if inc < min {
            return Some(format!("Applies only at inclinations of {min} degrees or more."));
        }
    }
    if let (Some(max), Some(inc)) = (c.max_inclination_deg, p.inclination_deg) {
        if inc > max {
            return Some(format!("Applies only at inclinations of {max} degrees or less."));
        }
    }
    if let (Some(min), Some(mass)) = (c.min_mass_kg, p.mass_kg) {
        if mass < min {
            return Some(format!("Applies only to spacecraft of {min} kg or more."));
        }
    }
    if let (Some(required), Some(actual)) = (c.maneuverable, p.maneuverable) {
        if required != actual {
            let kind = if required { "manoeuvrable" } else { "non-manoeuvrable" };
            return Some(format!("Applies only to {kind} spacecraft."));
        }
    }
    if let (Some(min), Some(years)) = (c.min_lifetime_years, p.lifetime_years) {
        if years < min {
            return Some(format!("Applies only to missions lasting {min} years or more."));
        }
    }
    if c.constellation_only && p.is_constellation() == Some(false) {
        return Some("Applies only to constellations.".to_string());
    }
    if let Some(activity) = p.activity_type {
        if !c.activity_types.is_empty() && !c.activity_types.contains(&activity) {
            return Some(format!(
                "Does not cover {} activities.",
                activity.label()
            ));
        }
    }
    None
}

fn orbit_list(orbits: &[OrbitRegime]) -> String {
    orbits
        .iter()
        .map(|o| o.label())
        .collect::<Vec<_>>()
        .join("/")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

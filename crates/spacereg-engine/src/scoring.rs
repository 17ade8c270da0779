//! # Favorability and Compliance Scoring
//!
//! ## Jurisdiction favorability
//!
//! A baseline of 50 adjusted by an ordered list of named rules. Each rule
//! inspects the jurisdiction and the answers and yields zero or more
//! adjustments; the score is a fold of those adjustments over the baseline,
//! clamped to `[0, 100]`, and every adjustment leaves a factor string in
//! application order.
//!
//! | rule              | adjustment                                          |
//! |-------------------|-----------------------------------------------------|
//! | timeline          | avg weeks ≤10 +15, ≤16 +8, otherwise −5             |
//! | indemnification   | +10 when the state indemnifies                      |
//! | liability regime  | capped +8, negotiable +5                            |
//! | maturity          | enacted ≥16 years ago +10, ≥8 years ago +5          |
//! | special provision | +15 per provision matching the declared activity    |
//! | small entity      | +5 per provision, small entities only               |
//! | registry          | +3 for a national registry                          |
//!
//! A jurisdiction whose legislation status is `none` scores a flat 20
//! without running the rules.
//!
//! ## Guideline compliance
//!
//! `round(Σ weight·points / Σ weight·100 · 100)` over the scored items,
//! where weight comes from the item's tier and points from its recorded
//! status. Items recorded `not_applicable` are excluded from both sums.
//! An empty denominator scores 0.

use serde::{Deserialize, Serialize};
use spacereg_core::{
    ActivityType, EntitySize, LegislationStatus, LiabilityRegime, RecordedStatus, RequirementTier,
};
use spacereg_pack::JurisdictionLaw;

use crate::answers::AssessmentAnswers;
use crate::display;

/// Starting score before any rule applies.
pub const BASELINE: i32 = 50;

/// Flat score for a jurisdiction without a comprehensive space law.
pub const NO_COMPREHENSIVE_LAW_SCORE: u32 = 20;

/// Favorability score with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorability {
    /// Score in `[0, 100]`.
    pub score: u32,
    /// One entry per adjustment, in application order.
    pub factors: Vec<String>,
}

/// A single signed change to the running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// Points added (negative for a penalty).
    pub delta: i32,
    /// Explanation, without the signed delta.
    pub label: String,
}

impl Adjustment {
    fn new(delta: i32, label: impl Into<String>) -> Self {
        Self {
            delta,
            label: label.into(),
        }
    }

    /// `label (+15)`.
    pub fn factor(&self) -> String {
        format!("{} ({:+})", self.label, self.delta)
    }
}

/// Inputs every rule can read.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// The jurisdiction being scored.
    pub law: &'a JurisdictionLaw,
    /// Declared activity.
    pub activity: Option<ActivityType>,
    /// Declared entity size.
    pub entity_size: Option<EntitySize>,
    /// Year the maturity rule measures against.
    pub reference_year: i32,
}

/// A named favorability rule.
#[derive(Debug, Clone, Copy)]
pub struct FavorabilityRule {
    /// Stable rule name.
    pub name: &'static str,
    /// Adjustments the rule yields for a context.
    pub apply: fn(&ScoringContext<'_>) -> Vec<Adjustment>,
}

/// The favorability rules in application order.
pub static FAVORABILITY_RULES: &[FavorabilityRule] = &[
    FavorabilityRule {
        name: "timeline",
        apply: timeline_rule,
    },
    FavorabilityRule {
        name: "indemnification",
        apply: indemnification_rule,
    },
    FavorabilityRule {
        name: "liability_regime",
        apply: liability_rule,
    },
    FavorabilityRule {
        name: "regulatory_maturity",
        apply: maturity_rule,
    },
    FavorabilityRule {
        name: "special_provisions",
        apply: special_provision_rule,
    },
    FavorabilityRule {
        name: "small_entity",
        apply: small_entity_rule,
    },
    FavorabilityRule {
        name: "national_registry",
        apply: registry_rule,
    },
];

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn timeline_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    let Some(range) = ctx.law.timeline.processing_weeks else {
        return Vec::new();
    };
    let avg = range.average();
    let weeks = display::weeks(avg);
    let adjustment = if avg <= 10.0 {
        Adjustment::new(15, format!("Fast licensing timeline (~{weeks} weeks)"))
    } else if avg <= 16.0 {
        Adjustment::new(8, format!("Moderate licensing timeline (~{weeks} weeks)"))
    } else {
        Adjustment::new(-5, format!("Lengthy licensing timeline (~{weeks} weeks)"))
    };
    vec![adjustment]
}

fn indemnification_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.law.insurance.government_indemnification {
        vec![Adjustment::new(10, "Government indemnification above the insured amount")]
    } else {
        Vec::new()
    }
}

fn liability_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    match ctx.law.insurance.liability_regime {
        LiabilityRegime::Capped => vec![Adjustment::new(8, "Capped operator liability")],
        LiabilityRegime::Negotiable => vec![Adjustment::new(5, "Negotiable liability cap")],
        LiabilityRegime::Unlimited | LiabilityRegime::Unspecified => Vec::new(),
    }
}

fn maturity_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.law.legislation.status != LegislationStatus::Enacted {
        return Vec::new();
    }
    let (Some(year), Some(age)) = (
        ctx.law.legislation.enacted_year,
        ctx.law.legislation_age(ctx.reference_year),
    ) else {
        return Vec::new();
    };
    if age >= 16 {
        vec![Adjustment::new(10, format!("Mature regulatory framework (since {year})"))]
    } else if age >= 8 {
        vec![Adjustment::new(5, format!("Established regulatory framework (since {year})"))]
    } else {
        Vec::new()
    }
}

fn special_provision_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    let Some(activity) = ctx.activity else {
        return Vec::new();
    };
    ctx.law
        .special_provisions
        .iter()
        .filter(|p| p.activity == activity)
        .map(|p| Adjustment::new(15, p.label.clone()))
        .collect()
}

fn small_entity_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.entity_size != Some(EntitySize::Small) {
        return Vec::new();
    }
    ctx.law
        .small_entity_provisions
        .iter()
        .map(|label| Adjustment::new(5, label.clone()))
        .collect()
}

fn registry_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.law.registration.national_registry {
        vec![Adjustment::new(3, "National registry of space objects")]
    } else {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Favorability of `law` for the operator described by `answers`.
pub fn score_jurisdiction(
    law: &JurisdictionLaw,
    answers: &AssessmentAnswers,
    reference_year: i32,
) -> Favorability {
    if law.legislation.status == LegislationStatus::None {
        return Favorability {
            score: NO_COMPREHENSIVE_LAW_SCORE,
            factors: vec![
                "No comprehensive national space law".to_string(),
                "EU Space Act expected to provide the harmonised framework".to_string(),
            ],
        };
    }

    let ctx = ScoringContext {
        law,
        activity: answers.activity_type,
        entity_size: answers.entity_size,
        reference_year,
    };
    score_with_rules(&ctx, FAVORABILITY_RULES)
}

/// Fold `rules` over the baseline for `ctx`.
pub fn score_with_rules(ctx: &ScoringContext<'_>, rules: &[FavorabilityRule]) -> Favorability {
    let (total, factors) = rules
        .iter()
        .flat_map(|rule| (rule.apply)(ctx))
        .fold((BASELINE, Vec::new()), |(total, mut factors), adj| {
            factors.push(adj.factor());
            (total + adj.delta, factors)
        });
    let score = total.clamp(0, 100) as u32;
    tracing::debug!(jurisdiction = %ctx.law.code, score, "favorability scored");
    Favorability { score, factors }
}

/// Weighted compliance score over `(tier, status)` pairs.
pub fn weighted_compliance_score<I>(items: I) -> u32
where
    I: IntoIterator<Item = (RequirementTier, RecordedStatus)>,
{
    let (earned, possible) = items
        .into_iter()
        .filter_map(|(tier, status)| status.points().map(|p| (tier.weight(), p)))
        .fold((0u64, 0u64), |(earned, possible), (weight, points)| {
            (
                earned + u64::from(weight) * u64::from(points),
                possible + u64::from(weight) * 100,
            )
        });
    if possible == 0 {
        return 0;
    }
    (earned as f64 * 100.0 / possible as f64).round() as u32
}

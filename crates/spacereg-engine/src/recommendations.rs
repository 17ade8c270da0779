//! # Recommendations
//!
//! An ordered list of independent rules. Each rule reads the same results
//! and answers and contributes zero or more sentences; no rule sees another
//! rule's output. The concatenated list is truncated to the configured cap.

use spacereg_core::{LegislationStatus, LicensingStatus};

use crate::answers::AssessmentAnswers;
use crate::assessment::JurisdictionResult;
use crate::config::EngineConfig;

/// Inputs every recommendation rule reads.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    /// Per-jurisdiction results, in selection order.
    pub results: &'a [JurisdictionResult],
    /// The answers the results were computed from.
    pub answers: &'a AssessmentAnswers,
    /// Constellation size from which constellation advice is given.
    pub constellation_threshold: u32,
}

/// A named recommendation rule.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    /// Stable rule name, logged when the rule fires.
    pub name: &'static str,
    /// Sentences the rule contributes; empty when it does not fire.
    pub apply: fn(&RecommendationContext<'_>) -> Vec<String>,
}

/// The rules in output order.
pub static RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        name: "most_favorable",
        apply: most_favorable,
    },
    RecommendationRule {
        name: "fastest_timeline",
        apply: fastest_timeline,
    },
    RecommendationRule {
        name: "mandatory_insurance",
        apply: mandatory_insurance,
    },
    RecommendationRule {
        name: "eu_space_act_transition",
        apply: eu_space_act_transition,
    },
    RecommendationRule {
        name: "new_application",
        apply: new_application,
    },
    RecommendationRule {
        name: "constellation",
        apply: constellation,
    },
    RecommendationRule {
        name: "no_comprehensive_law",
        apply: no_comprehensive_law,
    },
];

/// Recommendations for `results`, at most `config.recommendation_cap`.
pub fn generate_recommendations(
    results: &[JurisdictionResult],
    answers: &AssessmentAnswers,
    config: &EngineConfig,
) -> Vec<String> {
    if results.is_empty() {
        return Vec::new();
    }
    let ctx = RecommendationContext {
        results,
        answers,
        constellation_threshold: config.constellation_threshold,
    };
    RECOMMENDATION_RULES
        .iter()
        .flat_map(|rule| {
            let sentences = (rule.apply)(&ctx);
            if !sentences.is_empty() {
                tracing::debug!(rule = rule.name, count = sentences.len(), "recommendation rule fired");
            }
            sentences
        })
        .take(config.recommendation_cap)
        .collect()
}

fn applicable<'a>(ctx: &RecommendationContext<'a>) -> impl Iterator<Item = &'a JurisdictionResult> {
    ctx.results.iter().filter(|r| r.is_applicable)
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn most_favorable(ctx: &RecommendationContext<'_>) -> Vec<String> {
    // First in selection order wins a tie.
    let best = applicable(ctx).fold(None::<&JurisdictionResult>, |best, r| match best {
        Some(b) if b.favorability_score >= r.favorability_score => Some(b),
        _ => Some(r),
    });
    best.map(|r| {
        format!(
            "{} offers the most favourable regulatory environment for your profile (score {}/100).",
            r.name, r.favorability_score
        )
    })
    .into_iter()
    .collect()
}

fn fastest_timeline(ctx: &RecommendationContext<'_>) -> Vec<String> {
    let fastest = applicable(ctx)
        .filter_map(|r| r.processing_weeks.map(|w| (r, w.average())))
        .fold(None::<(&JurisdictionResult, f64)>, |best, (r, avg)| match best {
            Some((_, b)) if b <= avg => best,
            _ => Some((r, avg)),
        });
    fastest
        .map(|(r, _)| {
            format!(
                "{} has the fastest licensing process (estimated {}).",
                r.name, r.estimated_timeline
            )
        })
        .into_iter()
        .collect()
}

fn mandatory_insurance(ctx: &RecommendationContext<'_>) -> Vec<String> {
    let names: Vec<&str> = ctx
        .results
        .iter()
        .filter(|r| r.insurance.mandatory)
        .map(|r| r.name.as_str())
        .collect();
    if names.is_empty() {
        return Vec::new();
    }
    vec![format!(
        "Third-party liability insurance is mandatory in {}; request quotes early in the licensing process.",
        names.join(", ")
    )]
}

fn eu_space_act_transition(_: &RecommendationContext<'_>) -> Vec<String> {
    vec![
        "Prepare for the EU Space Act: harmonised authorisation, safety and cybersecurity rules will apply after the transition period."
            .to_string(),
    ]
}

fn new_application(ctx: &RecommendationContext<'_>) -> Vec<String> {
    if ctx.answers.licensing_status != Some(LicensingStatus::NewApplication) {
        return Vec::new();
    }
    vec![
        "Request a pre-application meeting with the licensing authority; early engagement shortens the review."
            .to_string(),
    ]
}

fn constellation(ctx: &RecommendationContext<'_>) -> Vec<String> {
    match ctx.answers.constellation_size {
        Some(size) if size >= ctx.constellation_threshold => vec![format!(
            "With {size} spacecraft, start ITU frequency coordination early and plan constellation-level collision avoidance and disposal."
        )],
        _ => Vec::new(),
    }
}

fn no_comprehensive_law(ctx: &RecommendationContext<'_>) -> Vec<String> {
    ctx.results
        .iter()
        .filter(|r| r.legislation.status == LegislationStatus::None)
        .map(|r| {
            format!(
                "{} has no comprehensive space law; expect EU Space Act authorisation to become the licensing route there.",
                r.name
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::assess_jurisdictions;
    use spacereg_pack::ReferenceData;

    fn config() -> EngineConfig {
        EngineConfig {
            reference_year: Some(2026),
            ..EngineConfig::default()
        }
    }

    fn results(answers: &AssessmentAnswers) -> Vec<JurisdictionResult> {
        let data = ReferenceData::builtin().unwrap();
        assess_jurisdictions(&data, answers, &config()).jurisdictions
    }

    fn answers(codes: &[&str]) -> AssessmentAnswers {
        AssessmentAnswers {
            selected_jurisdictions: codes.iter().map(|c| c.to_string()).collect(),
            ..AssessmentAnswers::default()
        }
    }

    fn ctx<'a>(results: &'a [JurisdictionResult], answers: &'a AssessmentAnswers) -> RecommendationContext<'a> {
        RecommendationContext {
            results,
            answers,
            constellation_threshold: 10,
        }
    }

    #[test]
    fn no_results_no_recommendations() {
        assert!(generate_recommendations(&[], &AssessmentAnswers::default(), &config()).is_empty());
    }

    #[test]
    fn most_favorable_picks_top_applicable() {
        let a = answers(&["GB", "FR"]);
        let r = results(&a);
        let out = most_favorable(&ctx(&r, &a));
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("France"));
    }

    #[test]
    fn fastest_timeline_ignores_missing_timelines() {
        let a = answers(&["DE", "GB", "NL"]);
        let r = results(&a);
        let out = fastest_timeline(&ctx(&r, &a));
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("Netherlands"));
        assert!(out[0].contains("8-16 weeks"));
    }

    #[test]
    fn insurance_lists_mandatory_jurisdictions_only() {
        let a = answers(&["FR", "DE"]);
        let r = results(&a);
        let out = mandatory_insurance(&ctx(&r, &a));
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("France"));
        assert!(!out[0].contains("Germany"));
    }

    #[test]
    fn triggered_rules() {
        let mut a = answers(&["FR"]);
        let r = results(&a);
        assert!(new_application(&ctx(&r, &a)).is_empty());
        assert!(constellation(&ctx(&r, &a)).is_empty());

        a.licensing_status = Some(LicensingStatus::NewApplication);
        a.constellation_size = Some(10);
        assert_eq!(new_application(&ctx(&r, &a)).len(), 1);
        assert!(constellation(&ctx(&r, &a))[0].starts_with("With 10 spacecraft"));

        a.constellation_size = Some(9);
        assert!(constellation(&ctx(&r, &a)).is_empty());
    }

    #[test]
    fn no_law_advisory_names_the_jurisdiction() {
        let a = answers(&["FR", "DE"]);
        let r = results(&a);
        let out = no_comprehensive_law(&ctx(&r, &a));
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("Germany"));
    }

    #[test]
    fn output_is_capped() {
        let mut a = answers(&["FR", "DE", "GB"]);
        a.licensing_status = Some(LicensingStatus::NewApplication);
        a.constellation_size = Some(100);
        let r = results(&a);
        for cap in 0..8 {
            let cfg = EngineConfig {
                recommendation_cap: cap,
                ..config()
            };
            assert!(generate_recommendations(&r, &a, &cfg).len() <= cap);
        }
        let full = generate_recommendations(&r, &a, &config());
        assert_eq!(full.len(), 6);
    }
}

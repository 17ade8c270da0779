//! # Aggregate Assessments
//!
//! The two entry points request handlers call:
//!
//! - [`assess_jurisdictions`]: questionnaire answers → per-jurisdiction
//!   results, comparison matrix, EU Space Act preview, recommendations.
//! - [`assess_guidelines`]: mission profile plus a status snapshot →
//!   weighted compliance score, per-source breakdown, gaps.
//!
//! Neither returns an error. A selected code with no reference record is
//! dropped with a warning, and an empty selection yields an empty result.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use spacereg_core::{
    ComplianceClass, GuidelineId, JurisdictionCode, LegislationStatus, LiabilityRegime,
    RecordedStatus, RequirementCategory, RequirementTier,
};
use spacereg_pack::{
    GuidelineDefinition, GuidelineSource, JurisdictionLaw, ReferenceData, Requirement, WeekRange,
};

use crate::answers::{AssessmentAnswers, InputError, MissionProfile, Validate};
use crate::applicability::{resolve_guideline, resolve_jurisdiction};
use crate::config::EngineConfig;
use crate::crossref::{map_cross_references, CrossReferencePreview};
use crate::display;
use crate::gap::{analyze_gaps, GapAnalysisItem};
use crate::matrix::{build_matrix, ComparisonMatrix, CriterionContext};
use crate::recommendations::generate_recommendations;
use crate::requirements::{filter_requirements, mandatory_count};
use crate::scoring::{score_jurisdiction, weighted_compliance_score};

// ---------------------------------------------------------------------------
// Jurisdiction assessment
// ---------------------------------------------------------------------------

/// Legislation summary in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegislationSummary {
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

/// Licensing authority summary in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoritySummary {
    /// Full name of the licensing authority.
    pub name: String,
    /// Website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Where licensing enquiries go.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// A requirement kept by the activity filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSummary {
    /// Identifier, unique within the jurisdiction.
    pub id: String,
    /// Regulatory category.
    pub category: RequirementCategory,
    /// Short title.
    pub title: String,
    /// Full text. Removed by [`AssessmentResult::redacted`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the obligation is binding.
    pub mandatory: bool,
    /// Article of the act that imposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

impl From<&Requirement> for RequirementSummary {
    fn from(r: &Requirement) -> Self {
        Self {
            id: r.id.clone(),
            category: r.category,
            title: r.title.clone(),
            description: Some(r.description.clone()),
            mandatory: r.mandatory,
            article_ref: r.article_ref.clone(),
        }
    }
}

/// Insurance terms in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceSummary {
    /// Whether cover is a licence condition.
    pub mandatory: bool,
    /// Formatted minimum cover, or "Not specified".
    pub minimum_coverage: String,
    /// Whether the state indemnifies above the cap.
    pub government_indemnification: bool,
    /// Recourse regime towards the operator.
    pub liability_regime: LiabilityRegime,
}

/// Debris terms in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebrisSummary {
    /// Whether end-of-life disposal is required.
    pub deorbit_required: bool,
    /// e.g. "25 years", or "Not specified".
    pub deorbit_timeline: String,
    /// Whether stored energy must be removed at end of life.
    pub passivation_required: bool,
    /// Whether a debris mitigation plan must be filed.
    pub mitigation_plan_required: bool,
    /// Technical standards referenced by the law.
    pub standards: Vec<String>,
}

/// Registration duties in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSummary {
    /// Whether the state keeps a national registry of space objects.
    pub national_registry: bool,
    /// Whether objects must also be registered with the UN.
    pub un_registration: bool,
}

/// Result for one selected jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionResult {
    /// ISO 3166-1 alpha-2 code.
    pub code: JurisdictionCode,
    /// English display name.
    pub name: String,
    /// Whether the law binds the described operator.
    pub is_applicable: bool,
    /// Why, in one sentence.
    pub applicability_reason: String,
    /// Governing legislation.
    pub legislation: LegislationSummary,
    /// Licensing authority.
    pub authority: AuthoritySummary,
    /// Requirements left after the activity filter.
    pub total_requirements: usize,
    /// How many of those are binding.
    pub mandatory_requirements: usize,
    /// The filtered requirements themselves.
    pub applicable_requirements: Vec<RequirementSummary>,
    /// e.g. "6-10 weeks", or "Not specified".
    pub estimated_timeline: String,
    /// Raw processing range behind `estimated_timeline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_weeks: Option<WeekRange>,
    /// Application fee, or a pointer to the authority's fee schedule.
    pub estimated_cost: String,
    /// Recurring supervision fee, when the law sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_fee: Option<String>,
    /// Insurance and liability terms.
    pub insurance: InsuranceSummary,
    /// Debris mitigation terms.
    pub debris: DebrisSummary,
    /// Registration duties.
    pub registration: RegistrationSummary,
    /// Favorability, 0-100.
    pub favorability_score: u32,
    /// One line per scoring adjustment, in rule order.
    pub favorability_factors: Vec<String>,
}

/// Full jurisdiction assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// One result per surviving selection, in selection order.
    pub jurisdictions: Vec<JurisdictionResult>,
    /// Criteria across the surviving jurisdictions.
    pub comparison_matrix: ComparisonMatrix,
    /// Absent when no jurisdiction survived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eu_space_act_preview: Option<CrossReferencePreview>,
    /// Capped at [`EngineConfig::recommendation_cap`].
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    /// Strip full requirement text, keeping titles and article references.
    pub fn redacted(mut self) -> Self {
        for result in &mut self.jurisdictions {
            for requirement in &mut result.applicable_requirements {
                requirement.description = None;
            }
        }
        self
    }
}

/// Resolve the selected codes to reference records.
///
/// Keeps selection order and drops duplicates. Codes that are malformed or
/// have no reference record are dropped with a warning.
pub fn resolve_selection<'a>(data: &'a ReferenceData, selected: &[String]) -> Vec<&'a JurisdictionLaw> {
    let mut seen = BTreeSet::new();
    selected
        .iter()
        .filter_map(|raw| {
            let code = match JurisdictionCode::new(raw.as_str()) {
                Ok(code) => code,
                Err(e) => {
                    tracing::warn!(code = %raw, error = %e, "dropping malformed jurisdiction code");
                    return None;
                }
            };
            if !seen.insert(code.clone()) {
                return None;
            }
            let law = data.jurisdiction(code.as_str());
            if law.is_none() {
                tracing::warn!(code = %code, "dropping jurisdiction with no reference data");
            }
            law
        })
        .collect()
}

/// Assess the jurisdictions selected in `answers`.
pub fn assess_jurisdictions(
    data: &ReferenceData,
    answers: &AssessmentAnswers,
    config: &EngineConfig,
) -> AssessmentResult {
    let laws = resolve_selection(data, &answers.selected_jurisdictions);
    if laws.is_empty() {
        tracing::info!(
            selected = answers.selected_jurisdictions.len(),
            "no selected jurisdiction has reference data"
        );
        return AssessmentResult::default();
    }

    let reference_year = config.reference_year();
    let jurisdictions: Vec<JurisdictionResult> = laws
        .iter()
        .map(|law| jurisdiction_result(law, answers, reference_year))
        .collect();

    let comparison_matrix = build_matrix(&laws, &CriterionContext { reference_year });
    let eu_space_act_preview = map_cross_references(
        &laws,
        data.cross_references(),
        config.cross_reference_preview_limit,
    );
    let recommendations = generate_recommendations(&jurisdictions, answers, config);

    tracing::info!(
        jurisdictions = jurisdictions.len(),
        applicable = jurisdictions.iter().filter(|j| j.is_applicable).count(),
        recommendations = recommendations.len(),
        "jurisdiction assessment complete"
    );

    AssessmentResult {
        jurisdictions,
        comparison_matrix,
        eu_space_act_preview,
        recommendations,
    }
}

fn jurisdiction_result(
    law: &JurisdictionLaw,
    answers: &AssessmentAnswers,
    reference_year: i32,
) -> JurisdictionResult {
    let applicability = resolve_jurisdiction(law, answers);
    let requirements = filter_requirements(&law.requirements, answers.activity_type);
    let favorability = score_jurisdiction(law, answers, reference_year);

    JurisdictionResult {
        code: law.code.clone(),
        name: law.name.clone(),
        is_applicable: applicability.is_applicable,
        applicability_reason: applicability.reason,
        legislation: LegislationSummary {
            name: law.legislation.name.clone(),
            status: law.legislation.status,
            enacted_year: law.legislation.enacted_year,
            amended_year: law.legislation.amended_year,
            official_url: law.legislation.official_url.clone(),
        },
        authority: AuthoritySummary {
            name: law.authority.name.clone(),
            website: law.authority.website.clone(),
            contact: law.authority.contact.clone(),
        },
        total_requirements: requirements.len(),
        mandatory_requirements: mandatory_count(&requirements),
        applicable_requirements: requirements.iter().map(|r| RequirementSummary::from(*r)).collect(),
        estimated_timeline: display::timeline(&law.timeline),
        processing_weeks: law.timeline.processing_weeks,
        estimated_cost: display::application_fee(&law.timeline),
        annual_fee: law.timeline.annual_fee_eur.map(display::annual_fee),
        insurance: InsuranceSummary {
            mandatory: law.insurance.mandatory,
            minimum_coverage: law
                .insurance
                .minimum_coverage_eur
                .map(display::eur)
                .unwrap_or_else(|| "Not specified".to_string()),
            government_indemnification: law.insurance.government_indemnification,
            liability_regime: law.insurance.liability_regime,
        },
        debris: DebrisSummary {
            deorbit_required: law.debris.deorbit_required,
            deorbit_timeline: law
                .debris
                .deorbit_timeline_years
                .map(|y| format!("{y} years"))
                .unwrap_or_else(|| "Not specified".to_string()),
            passivation_required: law.debris.passivation_required,
            mitigation_plan_required: law.debris.mitigation_plan_required,
            standards: law.debris.standards.clone(),
        },
        registration: RegistrationSummary {
            national_registry: law.registration.national_registry,
            un_registration: law.registration.un_registration,
        },
        favorability_score: favorability.score,
        favorability_factors: favorability.factors,
    }
}

// ---------------------------------------------------------------------------
// Guideline assessment
// ---------------------------------------------------------------------------

/// Request body for a guideline assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineAssessmentInput {
    /// The mission being assessed.
    #[serde(default)]
    pub profile: MissionProfile,
    /// Recorded statuses keyed by guideline id.
    #[serde(default)]
    pub statuses: BTreeMap<GuidelineId, RecordedStatus>,
}

impl Validate for GuidelineAssessmentInput {
    fn validate(&self) -> Result<(), InputError> {
        self.profile.validate().map_err(|e| e.within("profile"))
    }
}

/// A scored guideline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    /// Guideline scored.
    pub guideline_id: GuidelineId,
    /// Short title.
    pub title: String,
    /// Issuing body.
    pub source: GuidelineSource,
    /// Priority tier.
    pub tier: RequirementTier,
    /// Status as recorded, `not_assessed` when none was given.
    pub status: RecordedStatus,
    /// Checklist class the status maps to.
    pub class: ComplianceClass,
    /// Canonical points for the status, 0-100.
    pub points: u32,
    /// Tier weight: mandatory 3, recommended 2, optional 1.
    pub weight: u32,
}

/// A guideline left out of the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedGuideline {
    /// Guideline left out.
    pub guideline_id: GuidelineId,
    /// Short title.
    pub title: String,
    /// The failed condition, or the recorded `not_applicable` status.
    pub reason: String,
}

/// Weighted score for one guideline source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceScore {
    /// Issuing body.
    pub source: GuidelineSource,
    /// Display name of the issuing body.
    pub label: String,
    /// Weighted score over this source's scored guidelines.
    pub score: u32,
    /// Number of guidelines that contributed.
    pub assessed: usize,
}

/// Count of guidelines per checklist class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// Fully met, or in force.
    pub compliant: usize,
    /// Partly met or in progress.
    pub partial: usize,
    /// Not met.
    pub non_compliant: usize,
    /// No status recorded.
    pub not_assessed: usize,
    /// Ruled out by a recorded status.
    pub not_applicable: usize,
}

impl StatusSummary {
    fn count(&mut self, class: ComplianceClass) {
        match class {
            ComplianceClass::Compliant => self.compliant += 1,
            ComplianceClass::Partial => self.partial += 1,
            ComplianceClass::NonCompliant => self.non_compliant += 1,
            ComplianceClass::NotAssessed => self.not_assessed += 1,
            ComplianceClass::NotApplicable => self.not_applicable += 1,
        }
    }
}

/// Full guideline assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineAssessment {
    /// Tier-weighted score over every scored guideline, 0-100.
    pub overall_score: u32,
    /// One record per scored guideline, ordered by id.
    pub records: Vec<ComplianceRecord>,
    /// Guidelines the profile or a `not_applicable` status ruled out.
    pub excluded: Vec<ExcludedGuideline>,
    /// Scores per issuing body, in source order.
    pub source_scores: Vec<SourceScore>,
    /// Remediation items, highest priority first.
    pub gaps: Vec<GapAnalysisItem>,
    /// Guideline counts per checklist class.
    pub status_summary: StatusSummary,
    /// EU Space Act articles touching the assessed guideline sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eu_space_act_preview: Option<CrossReferencePreview>,
}

/// Assess every guideline in `data` against `profile` and `statuses`.
pub fn assess_guidelines(
    data: &ReferenceData,
    profile: &MissionProfile,
    statuses: &BTreeMap<GuidelineId, RecordedStatus>,
    config: &EngineConfig,
) -> GuidelineAssessment {
    for id in statuses.keys() {
        if data.guideline(id.as_str()).is_none() {
            tracing::warn!(guideline = %id, "ignoring status for unknown guideline");
        }
    }

    let mut scored: Vec<&GuidelineDefinition> = Vec::new();
    let mut records = Vec::new();
    let mut excluded = Vec::new();
    let mut status_summary = StatusSummary::default();

    for guideline in data.guidelines() {
        let verdict = resolve_guideline(guideline, profile);
        if !verdict.is_applicable {
            excluded.push(ExcludedGuideline {
                guideline_id: guideline.id.clone(),
                title: guideline.title.clone(),
                reason: verdict.reason,
            });
            continue;
        }
        let status = statuses.get(&guideline.id).copied().unwrap_or_default();
        status_summary.count(status.class());
        let Some(points) = status.points() else {
            excluded.push(ExcludedGuideline {
                guideline_id: guideline.id.clone(),
                title: guideline.title.clone(),
                reason: "Marked not applicable.".to_string(),
            });
            continue;
        };
        records.push(ComplianceRecord {
            guideline_id: guideline.id.clone(),
            title: guideline.title.clone(),
            source: guideline.source,
            tier: guideline.tier,
            status,
            class: status.class(),
            points,
            weight: guideline.tier.weight(),
        });
        scored.push(guideline);
    }

    let overall_score = weighted_compliance_score(records.iter().map(|r| (r.tier, r.status)));
    let source_scores = GuidelineSource::all()
        .iter()
        .filter_map(|&source| {
            let items: Vec<_> = records
                .iter()
                .filter(|r| r.source == source)
                .map(|r| (r.tier, r.status))
                .collect();
            (!items.is_empty()).then(|| SourceScore {
                source,
                label: source.label().to_string(),
                score: weighted_compliance_score(items.iter().copied()),
                assessed: items.len(),
            })
        })
        .collect();
    let gaps = analyze_gaps(scored.iter().copied(), statuses);
    let eu_space_act_preview = map_cross_references(
        &scored,
        data.cross_references(),
        config.cross_reference_preview_limit,
    );

    tracing::info!(
        scored = records.len(),
        excluded = excluded.len(),
        gaps = gaps.len(),
        overall_score,
        "guideline assessment complete"
    );

    GuidelineAssessment {
        overall_score,
        records,
        excluded,
        source_scores,
        gaps,
        status_summary,
        eu_space_act_preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_core::{ActivityType, EntitySize, OrbitRegime};

    fn data() -> std::sync::Arc<ReferenceData> {
        ReferenceData::builtin().unwrap()
    }

    fn config() -> EngineConfig {
        EngineConfig {
            reference_year: Some(2026),
            ..EngineConfig::default()
        }
    }

    fn select(codes: &[&str]) -> AssessmentAnswers {
        AssessmentAnswers {
            selected_jurisdictions: codes.iter().map(|c| c.to_string()).collect(),
            ..AssessmentAnswers::default()
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn selection_keeps_order_and_drops_unknowns() {
        let data = data();
        let selected = ["fr", "XX", "DE", "FR", "not-a-code"].map(String::from);
        let codes: Vec<_> = resolve_selection(&data, &selected)
            .iter()
            .map(|l| l.code.as_str().to_string())
            .collect();
        assert_eq!(codes, vec!["FR", "DE"]);
    }

    #[test]
    fn empty_selection_is_an_empty_result() {
        let result = assess_jurisdictions(&data(), &select(&["XX", "YY"]), &config());
        assert_eq!(result, AssessmentResult::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jurisdictions": [],
                "comparisonMatrix": {"criteria": []},
                "recommendations": []
            })
        );
    }

    // ── Jurisdiction results ─────────────────────────────────────────

    #[test]
    fn result_carries_authority_contact_and_registration() {
        let result = assess_jurisdictions(&data(), &select(&["FR"]), &config());
        let fr = &result.jurisdictions[0];
        assert_eq!(fr.authority.contact.as_deref(), Some("los@cnes.fr"));
        assert_eq!(fr.legislation.amended_year, Some(2019));
        assert!(fr.registration.un_registration);
        assert_eq!(fr.annual_fee, None);
    }

    #[test]
    fn germany_and_france_scenario() {
        let mut answers = select(&["DE", "FR"]);
        answers.activity_type = Some(ActivityType::SpacecraftOperation);
        answers.entity_size = Some(EntitySize::Medium);
        let result = assess_jurisdictions(&data(), &answers, &config());

        assert_eq!(result.jurisdictions.len(), 2);
        let de = &result.jurisdictions[0];
        assert!(!de.is_applicable);
        assert_eq!(de.favorability_score, 20);
        let fr = &result.jurisdictions[1];
        assert!(fr.is_applicable);
        assert!(fr.favorability_score >= 75);
        assert_eq!(fr.estimated_timeline, "6-10 weeks");
        assert!(!result.comparison_matrix.criteria.is_empty());
        assert!(result.eu_space_act_preview.is_some());
        assert!(!result.recommendations.is_empty());
        assert!(result.recommendations.len() <= config().recommendation_cap);
    }

    #[test]
    fn requirement_counts_follow_activity_filter() {
        let mut answers = select(&["FR"]);
        let all = assess_jurisdictions(&data(), &answers, &config());
        answers.activity_type = Some(ActivityType::LaunchOperation);
        let launch = assess_jurisdictions(&data(), &answers, &config());
        let (all, launch) = (&all.jurisdictions[0], &launch.jurisdictions[0]);
        assert!(launch.total_requirements <= all.total_requirements);
        assert_eq!(all.total_requirements, all.applicable_requirements.len());
        assert!(launch.mandatory_requirements <= launch.total_requirements);
    }

    #[test]
    fn redaction_strips_requirement_text() {
        let result = assess_jurisdictions(&data(), &select(&["FR"]), &config());
        assert!(result.jurisdictions[0]
            .applicable_requirements
            .iter()
            .all(|r| r.description.is_some()));
        let redacted = result.redacted();
        assert!(redacted.jurisdictions[0]
            .applicable_requirements
            .iter()
            .all(|r| r.description.is_none() && !r.title.is_empty()));
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = assess_jurisdictions(&data(), &select(&["GB"]), &config());
        let json = serde_json::to_value(&result).unwrap();
        let gb = &json["jurisdictions"][0];
        assert_eq!(gb["code"], "GB");
        assert!(gb["isApplicable"].is_boolean());
        assert!(gb["favorabilityScore"].is_u64());
        assert_eq!(gb["estimatedCost"], "EUR 7,500 application fee");
        assert!(json["comparisonMatrix"]["criteria"][0]["jurisdictions"]["GB"]["score"].is_u64());
    }

    // ── Guideline assessment ─────────────────────────────────────────

    fn leo_profile() -> MissionProfile {
        MissionProfile {
            activity_type: Some(ActivityType::SpacecraftOperation),
            orbit_regime: Some(OrbitRegime::Leo),
            altitude_km: Some(550),
            mass_kg: Some(250.0),
            maneuverable: Some(true),
            lifetime_years: Some(7.0),
            constellation_size: Some(1),
            ..MissionProfile::default()
        }
    }

    #[test]
    fn nothing_recorded_scores_zero_with_gaps() {
        let data = data();
        let assessment = assess_guidelines(&data, &leo_profile(), &BTreeMap::new(), &config());
        assert_eq!(assessment.overall_score, 0);
        assert!(!assessment.gaps.is_empty());
        assert_eq!(assessment.status_summary.not_assessed, assessment.records.len());
        assert_eq!(
            assessment.records.len() + assessment.excluded.len(),
            data.guidelines().count()
        );
    }

    #[test]
    fn profile_exclusions_carry_reasons() {
        let assessment = assess_guidelines(&data(), &leo_profile(), &BTreeMap::new(), &config());
        let geo = assessment
            .excluded
            .iter()
            .find(|e| e.guideline_id.as_str() == "iadc-5.3.1")
            .unwrap();
        assert!(geo.reason.contains("GEO"));
        let constellation = assessment
            .excluded
            .iter()
            .find(|e| e.guideline_id.as_str() == "itu-rr-22")
            .unwrap();
        assert_eq!(constellation.reason, "Applies only to constellations.");
    }

    #[test]
    fn not_applicable_status_is_excluded_not_zeroed() {
        let data = data();
        let all_compliant: BTreeMap<_, _> = data
            .guidelines()
            .map(|g| (g.id.clone(), RecordedStatus::Compliant))
            .collect();
        let mut statuses = all_compliant.clone();
        statuses.insert(GuidelineId::new("itu-rr-9").unwrap(), RecordedStatus::NotApplicable);

        let assessment = assess_guidelines(&data, &leo_profile(), &statuses, &config());
        assert_eq!(assessment.overall_score, 100);
        assert!(assessment.gaps.is_empty());
        assert_eq!(assessment.status_summary.not_applicable, 1);
        assert!(assessment
            .excluded
            .iter()
            .any(|e| e.guideline_id.as_str() == "itu-rr-9" && e.reason == "Marked not applicable."));
        assert!(assessment.records.iter().all(|r| r.guideline_id.as_str() != "itu-rr-9"));
    }

    #[test]
    fn source_scores_cover_scored_sources() {
        let data = data();
        let statuses = BTreeMap::from([
            (GuidelineId::new("itu-rr-9").unwrap(), RecordedStatus::Compliant),
            (GuidelineId::new("unknown-item").unwrap(), RecordedStatus::Compliant),
        ]);
        let assessment = assess_guidelines(&data, &leo_profile(), &statuses, &config());
        let itu = assessment
            .source_scores
            .iter()
            .find(|s| s.source == GuidelineSource::Itu)
            .unwrap();
        assert_eq!(itu.assessed, 1);
        assert_eq!(itu.score, 100);
        let iadc = assessment
            .source_scores
            .iter()
            .find(|s| s.source == GuidelineSource::Iadc)
            .unwrap();
        assert_eq!(iadc.score, 0);
    }
}

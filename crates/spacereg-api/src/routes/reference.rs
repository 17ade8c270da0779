//! # Reference Data Listings
//!
//! Lets callers discover which jurisdiction codes and guideline ids the
//! loaded corpus carries before building an assessment request, and look
//! up a single record. Jurisdiction requirement text follows the same
//! redaction setting as assessment results.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use spacereg_core::{Effort, GuidelineId, JurisdictionCode, RequirementCategory};
use spacereg_engine::assessment::RequirementSummary;
use spacereg_pack::{GuidelineDefinition, JurisdictionLaw};

use crate::error::AppError;
use crate::state::AppState;

/// A jurisdiction available for assessment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionSummary {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    pub name: String,
    /// Title of the governing act.
    pub legislation: String,
    /// `enacted`, `draft`, `pending` or `none`.
    pub legislation_status: String,
    /// Licensing authority.
    pub authority: String,
}

impl From<&JurisdictionLaw> for JurisdictionSummary {
    fn from(law: &JurisdictionLaw) -> Self {
        Self {
            code: law.code.to_string(),
            name: law.name.clone(),
            legislation: law.legislation.name.clone(),
            legislation_status: law.legislation.status.to_string(),
            authority: law.authority.name.clone(),
        }
    }
}

/// One jurisdiction with its requirements.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionDetail {
    #[serde(flatten)]
    pub summary: JurisdictionSummary,
    /// Name in the official language.
    pub local_name: String,
    /// Every requirement, unfiltered.
    pub requirements: Vec<RequirementSummary>,
}

/// A guideline available for assessment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineSummary {
    pub id: String,
    pub source: String,
    pub title: String,
    /// `mandatory`, `recommended` or `optional`.
    pub tier: String,
    pub severity: String,
}

impl From<&GuidelineDefinition> for GuidelineSummary {
    fn from(g: &GuidelineDefinition) -> Self {
        Self {
            id: g.id.to_string(),
            source: g.source.to_string(),
            title: g.title.clone(),
            tier: g.tier.to_string(),
            severity: g.severity.to_string(),
        }
    }
}

/// One guideline with its guidance and dependencies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineDetail {
    #[serde(flatten)]
    pub summary: GuidelineSummary,
    pub category: RequirementCategory,
    /// What the item requires.
    pub description: String,
    /// How to close a gap on this item.
    pub guidance: String,
    pub estimated_effort: Effort,
    /// Items that must be addressed first.
    pub depends_on: Vec<GuidelineId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

impl From<&GuidelineDefinition> for GuidelineDetail {
    fn from(g: &GuidelineDefinition) -> Self {
        Self {
            summary: GuidelineSummary::from(g),
            category: g.category,
            description: g.description.clone(),
            guidance: g.guidance.clone(),
            estimated_effort: g.effort,
            depends_on: g.depends_on.clone(),
            article_ref: g.article_ref.clone(),
        }
    }
}

/// Build the reference data router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/jurisdictions", get(list_jurisdictions))
        .route("/v1/jurisdictions/{code}", get(get_jurisdiction))
        .route("/v1/guidelines", get(list_guidelines))
        .route("/v1/guidelines/{id}", get(get_guideline))
}

/// GET /v1/jurisdictions: list jurisdictions, ordered by code.
#[utoipa::path(
    get,
    path = "/v1/jurisdictions",
    responses(
        (status = 200, description = "Available jurisdictions", body = Vec<JurisdictionSummary>),
    ),
    tag = "reference"
)]
pub(crate) async fn list_jurisdictions(State(state): State<AppState>) -> Json<Vec<JurisdictionSummary>> {
    Json(state.data.jurisdictions().map(JurisdictionSummary::from).collect())
}

/// GET /v1/jurisdictions/{code}: one jurisdiction and its requirements.
#[utoipa::path(
    get,
    path = "/v1/jurisdictions/{code}",
    params(("code" = String, Path, description = "ISO 3166-1 alpha-2 code, case-insensitive")),
    responses(
        (status = 200, description = "Jurisdiction record", body = serde_json::Value),
        (status = 404, description = "No such jurisdiction", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed code", body = crate::error::ErrorBody),
    ),
    tag = "reference"
)]
pub(crate) async fn get_jurisdiction(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<JurisdictionDetail>, AppError> {
    let code = JurisdictionCode::new(code)?;
    let law = state
        .data
        .jurisdiction(code.as_str())
        .ok_or_else(|| AppError::UnknownJurisdiction(code.to_string()))?;

    let redact = state.config.redact_requirement_text;
    let requirements = law
        .requirements
        .iter()
        .map(|r| RequirementSummary {
            description: if redact { None } else { Some(r.description.clone()) },
            ..RequirementSummary::from(r)
        })
        .collect();

    Ok(Json(JurisdictionDetail {
        summary: JurisdictionSummary::from(law),
        local_name: law.local_name.clone(),
        requirements,
    }))
}

/// GET /v1/guidelines: list guidelines, ordered by id.
#[utoipa::path(
    get,
    path = "/v1/guidelines",
    responses(
        (status = 200, description = "Available guidelines", body = Vec<GuidelineSummary>),
    ),
    tag = "reference"
)]
pub(crate) async fn list_guidelines(State(state): State<AppState>) -> Json<Vec<GuidelineSummary>> {
    Json(state.data.guidelines().map(GuidelineSummary::from).collect())
}

/// GET /v1/guidelines/{id}: one guideline with its guidance.
#[utoipa::path(
    get,
    path = "/v1/guidelines/{id}",
    params(("id" = String, Path, description = "Guideline id, e.g. iadc-5.1")),
    responses(
        (status = 200, description = "Guideline record", body = serde_json::Value),
        (status = 404, description = "No such guideline", body = crate::error::ErrorBody),
    ),
    tag = "reference"
)]
pub(crate) async fn get_guideline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GuidelineDetail>, AppError> {
    let id = GuidelineId::new(id)?;
    state
        .data
        .guideline(id.as_str())
        .map(|g| Json(GuidelineDetail::from(g)))
        .ok_or_else(|| AppError::UnknownGuideline(id.to_string()))
}

//! # Assessment API
//!
//! Parses the caller's answers or mission profile, runs the engine
//! synchronously against the shared reference data, and returns the
//! aggregate result. Jurisdiction results have their requirement text
//! stripped when `redact_requirement_text` is set.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use spacereg_engine::{
    assess_guidelines, assess_jurisdictions, AssessmentAnswers, AssessmentResult,
    GuidelineAssessment, GuidelineAssessmentInput,
};

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the assessment router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/assessments/jurisdictions", post(assess_jurisdictions_handler))
        .route("/v1/assessments/guidelines", post(assess_guidelines_handler))
}

/// POST /v1/assessments/jurisdictions: assess the selected jurisdictions.
#[utoipa::path(
    post,
    path = "/v1/assessments/jurisdictions",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Per-jurisdiction results, comparison matrix, EU Space Act preview and recommendations", body = serde_json::Value),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid selection", body = crate::error::ErrorBody),
    ),
    tag = "assessments"
)]
pub(crate) async fn assess_jurisdictions_handler(
    State(state): State<AppState>,
    body: Result<Json<AssessmentAnswers>, JsonRejection>,
) -> Result<Json<AssessmentResult>, AppError> {
    let answers = extract_validated_json(body)?;
    let result = assess_jurisdictions(&state.data, &answers, &state.config);
    let result = if state.config.redact_requirement_text {
        result.redacted()
    } else {
        result
    };
    Ok(Json(result))
}

/// POST /v1/assessments/guidelines: score a mission against the guidelines.
#[utoipa::path(
    post,
    path = "/v1/assessments/guidelines",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Weighted compliance score, per-source scores and gaps", body = serde_json::Value),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid mission profile", body = crate::error::ErrorBody),
    ),
    tag = "assessments"
)]
pub(crate) async fn assess_guidelines_handler(
    State(state): State<AppState>,
    body: Result<Json<GuidelineAssessmentInput>, JsonRejection>,
) -> Result<Json<GuidelineAssessment>, AppError> {
    let input = extract_validated_json(body)?;
    Ok(Json(assess_guidelines(
        &state.data,
        &input.profile,
        &input.statuses,
        &state.config,
    )))
}

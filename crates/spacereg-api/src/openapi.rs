//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Space Regulatory Compliance API",
        version = "0.1.0",
        description = "Multi-jurisdiction space regulatory assessments: applicability, favorability scores, comparison matrices, guideline gap analysis and EU Space Act cross-references.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::reference::list_jurisdictions,
        crate::routes::reference::get_jurisdiction,
        crate::routes::reference::list_guidelines,
        crate::routes::reference::get_guideline,
        crate::routes::assessments::assess_jurisdictions_handler,
        crate::routes::assessments::assess_guidelines_handler,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::reference::JurisdictionSummary,
        crate::routes::reference::GuidelineSummary,
    )),
    tags(
        (name = "reference", description = "Reference data listings"),
        (name = "assessments", description = "Jurisdiction and guideline assessments"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

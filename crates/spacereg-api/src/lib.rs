//! # spacereg-api: Axum Request Handler
//!
//! Thin HTTP surface over `spacereg-engine`. Answers are parsed and
//! validated at the boundary, the engine runs synchronously against the
//! shared reference data, and the result is returned as JSON.
//!
//! ## API Surface
//!
//! | Route                               | Module                     |
//! |-------------------------------------|----------------------------|
//! | `GET /v1/jurisdictions`             | [`routes::reference`]      |
//! | `GET /v1/jurisdictions/{code}`      | [`routes::reference`]      |
//! | `GET /v1/guidelines`                | [`routes::reference`]      |
//! | `GET /v1/guidelines/{id}`           | [`routes::reference`]      |
//! | `POST /v1/assessments/jurisdictions`| [`routes::assessments`]    |
//! | `POST /v1/assessments/guidelines`   | [`routes::assessments`]    |
//! | `GET /openapi.json`                 | [`openapi`]                |
//!
//! Malformed bodies are rejected with 400, invalid values with 422 and
//! unknown codes or ids with 404.

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::reference::router())
        .merge(routes::assessments::router())
        .merge(openapi::router())
        .layer(middleware::tracing_layer::layer())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness check: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness check. Reference data is loaded before the router exists.
async fn readiness() -> &'static str {
    "ready"
}

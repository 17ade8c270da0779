//! # spacereg-api: Binary Entry Point
//!
//! Loads the reference data and engine configuration, then serves the
//! Axum router.
//!
//! | Variable            | Default  |
//! |---------------------|----------|
//! | `PORT`              | `8080`   |
//! | `SPACEREG_DATA_DIR` | bundled  |
//! | `SPACEREG_CONFIG`   | defaults |
//! | `RUST_LOG`          | `info`   |
//! | `LOG_FORMAT`        | text; `json` for JSON lines |

use std::path::PathBuf;

use spacereg_api::state::AppState;
use spacereg_engine::EngineConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let config = match std::env::var_os("SPACEREG_CONFIG").map(PathBuf::from) {
        Some(path) => EngineConfig::from_yaml_file(&path).map_err(|e| {
            tracing::error!("Engine configuration failed to load: {e}");
            e
        })?,
        None => EngineConfig::default(),
    };

    let data_dir = std::env::var_os("SPACEREG_DATA_DIR").map(PathBuf::from);
    let state = AppState::load(data_dir.as_deref(), config).map_err(|e| {
        tracing::error!("Reference data failed to load: {e}");
        e
    })?;
    tracing::info!(
        jurisdictions = state.data.jurisdictions().count(),
        guidelines = state.data.guidelines().count(),
        source = %data_dir.as_deref().map_or_else(|| "bundled".to_string(), |d| d.display().to_string()),
        "reference data ready"
    );

    let app = spacereg_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("spacereg API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

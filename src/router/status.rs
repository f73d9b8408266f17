//! Public server status.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

/// Structured status.
#[derive(Debug, Serialize)]
pub struct Status {
    version: &'static str,
    name: String,
}

/// Liveness probe carrying instance name and version.
pub async fn status(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        version: env!("CARGO_PKG_VERSION"),
        name: state.config.name.clone(),
    })
}

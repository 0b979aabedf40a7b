use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::state::SharedState;

/// Serve the configured data file as JSON.
pub async fn list(State(state): State<SharedState>) -> Response {
    let path = &state.config.data_file;

    let contents = match tokio::fs::read(path).await {
        Ok(contents) => contents,
        Err(e) => {
            tracing::error!("Failed to read {}: {e}", path.display());
            return something_went_wrong();
        }
    };

    match serde_json::from_slice::<Value>(&contents) {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            tracing::error!("Invalid JSON in {}: {e}", path.display());
            something_went_wrong()
        }
    }
}

fn something_went_wrong() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Something went wrong"})),
    )
        .into_response()
}

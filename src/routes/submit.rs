use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;

    let store = state
        .store
        .as_ref()
        .ok_or_else(|| AppError::NotConfigured("Database is not configured".to_string()))?;

    let submission = store.insert(&payload).await.map_err(AppError::Storage)?;
    tracing::info!("Stored submission {}", submission.id);

    Ok(Json(json!({ "success": true })))
}

/// Check the body has the fields the form always sends.
///
/// Only `name` and `email` are required; every other key is stored untouched.
pub fn parse_payload(body: &[u8]) -> Result<Value, AppError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest("Invalid JSON payload".to_string()))?;

    if is_blank(&payload) {
        return Err(AppError::BadRequest("Empty payload".to_string()));
    }

    let present = |key: &str| payload.get(key).is_some_and(|v| !is_blank(v));
    if !present("name") || !present("email") {
        return Err(AppError::BadRequest("Name and Email required".to_string()));
    }

    Ok(payload)
}

/// Null, false, zero and empty containers all count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

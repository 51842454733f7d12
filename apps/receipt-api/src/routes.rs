//! # HTTP Routes
//!
//! ```text
//! POST /receipts/process       → {"id": "..."}
//! GET  /receipts/{id}/points   → {"points": 28}
//! ```

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use receipt_core::ReceiptId;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config().max_body_bytes;

    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Submit a receipt for scoring.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let input = if is_json_request(&headers) {
        let body = body.map_err(|rejection| ApiError::UnreadableBody {
            status: rejection.status(),
            message: rejection.body_text(),
        })?;
        parse_body(&body)?
    } else {
        Value::Null
    };
    let id = state.process_receipt(&input).await?;
    Ok(Json(ProcessResponse { id }))
}

/// Points for a processed receipt.
async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.points_for(&ReceiptId::from(id)).await?;
    Ok(Json(PointsResponse { points }))
}

/// True when the request declares an `application/json` body.
///
/// Parameters such as `charset` are ignored; the media type is matched
/// case-insensitively.
pub fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Decodes a submit body.
///
/// No content at all becomes `null`, which validation reports as an empty
/// body. Anything else must be a JSON object or array.
pub fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(ApiError::MalformedBody(
            "expected a JSON object".to_string(),
        )),
    }
}

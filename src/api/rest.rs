//! REST routes and handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::error::ApiError;
use crate::api::types::MintResponse;
use crate::domain::{DeviceId, WipeReport};
use crate::infra::PassportDetail;
use crate::server::AppState;

/// API routes, nested under `/api` by the server.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/passports/mint", post(mint_passport))
        .route("/v1/passports/:device_id", get(passport_detail))
        .route("/v1/algorithms", get(list_algorithms))
}

/// POST /api/v1/passports/mint
///
/// Body decoding failures (bad JSON, unknown `wipeStatus` values) surface
/// in the same `{"errors": [...]}` shape as rule violations.
async fn mint_passport(
    State(state): State<AppState>,
    payload: Result<Json<WipeReport>, JsonRejection>,
) -> Result<(StatusCode, Json<MintResponse>), ApiError> {
    let Json(report) = payload.map_err(|rejection| ApiError::Validation {
        errors: vec![rejection.body_text()],
    })?;

    let receipt = state.certification.mint(report).await?;

    Ok((
        StatusCode::CREATED,
        Json(MintResponse {
            message: "Digital passport minted successfully.".to_string(),
            passport_hash: hex::encode(receipt.chain_hash),
            device_id: receipt.device_id,
        }),
    ))
}

/// GET /api/v1/passports/:device_id
async fn passport_detail(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<PassportDetail>, ApiError> {
    let detail = state
        .query
        .passport_detail(&DeviceId::from(device_id))
        .await?;
    Ok(Json(detail))
}

/// GET /api/v1/algorithms
async fn list_algorithms(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "algorithms": &*state.catalog,
        "count": state.catalog.len(),
    }))
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use tracing::{debug, info, warn};
use unique_bid::to_sentinel;

use super::error::ApiError;
use super::models::{transform_snapshot, BidRequest, BidResponse, BidsSnapshotResponse};
use crate::server::AppState;

/// Header carrying the shared secret for internal endpoints (X-INTERNAL-KEY)
pub const INTERNAL_KEY_HEADER: &str = "x-internal-key";

/// POST /api/bids - Places a bid
pub async fn place_bid(
    State(state): State<AppState>,
    payload: Result<Json<BidRequest>, JsonRejection>,
) -> Result<Json<BidResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected bid body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    info!(
        "Received bid from {} for {}",
        request.user_id, request.amount
    );

    let lowest = state
        .service
        .submit_bid(request.user_id, request.amount)
        .map_err(|err| {
            warn!("Invalid bid: {}", err);
            ApiError::from(err)
        })?;

    debug!("Lowest unique bid is now {:?}", lowest);

    Ok(Json(BidResponse::placed()))
}

/// GET /api/internal/lowest-unique-bid - Returns the lowest unique bid, -1 if none
pub async fn get_lowest_unique_bid(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<i64>, ApiError> {
    authorize_internal(&state, &headers)?;

    let lowest = state.service.lowest_unique_bid();
    debug!("Returning lowest unique bid {:?}", lowest);

    Ok(Json(to_sentinel(lowest)))
}

/// GET /api/internal/bids - Returns every recorded bid grouped by amount
pub async fn get_all_bids(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BidsSnapshotResponse>, ApiError> {
    authorize_internal(&state, &headers)?;

    let snapshot = state.service.snapshot();
    let stats = state.service.stats();
    debug!("Returning snapshot of {} amounts", snapshot.amounts.len());

    Ok(Json(transform_snapshot(snapshot, stats)))
}

/// Checks the internal key header against the configured secret.
///
/// An empty configured key locks the internal endpoints entirely.
fn authorize_internal(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let provided = headers
        .get(INTERNAL_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if !state.internal_api_key.is_empty() && key == &*state.internal_api_key => {
            Ok(())
        }
        _ => {
            warn!("Rejected internal API request: missing or invalid key");
            Err(ApiError::Unauthorized)
        }
    }
}

#[cfg(test)]
#[path = "bids_tests.rs"]
mod tests;

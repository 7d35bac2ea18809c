use super::*;
use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use unique_bid::BidService;

const KEY: &str = "secret-key";

fn test_state() -> AppState {
    AppState::new(Arc::new(BidService::new()), KEY)
}

fn internal_headers(key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(INTERNAL_KEY_HEADER, HeaderValue::from_str(key).unwrap());
    headers
}

fn bid(user_id: &str, amount: i64) -> Result<Json<BidRequest>, JsonRejection> {
    Ok(Json(BidRequest {
        user_id: user_id.to_string(),
        amount,
    }))
}

#[tokio::test]
async fn test_place_bid_success() {
    let state = test_state();

    let Json(response) = place_bid(State(state.clone()), bid("john123", 100))
        .await
        .unwrap();

    assert_eq!(response.message, "Bid placed successfully");
    assert_eq!(state.service.lowest_unique_bid(), Some(100));
}

#[tokio::test]
async fn test_place_bid_blank_user() {
    let state = test_state();

    let err = place_bid(State(state.clone()), bid("  ", 100))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::BadRequest(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.service.stats().total_bids, 0);
}

#[tokio::test]
async fn test_place_bid_non_positive_amount() {
    let state = test_state();

    for amount in [0, -100] {
        let err = place_bid(State(state.clone()), bid("john123", amount))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    assert_eq!(state.service.lowest_unique_bid(), None);
}

#[tokio::test]
async fn test_lowest_unique_bid_requires_key() {
    let state = test_state();

    let err = get_lowest_unique_bid(State(state.clone()), HeaderMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    let err = get_lowest_unique_bid(State(state), internal_headers("wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lowest_unique_bid_sentinel() {
    let state = test_state();

    let Json(lowest) = get_lowest_unique_bid(State(state), internal_headers(KEY))
        .await
        .unwrap();

    assert_eq!(lowest, -1);
}

#[tokio::test]
async fn test_lowest_unique_bid_after_bids() {
    let state = test_state();

    for (user, amount) in [("alice", 100), ("bob", 100), ("carol", 50)] {
        place_bid(State(state.clone()), bid(user, amount))
            .await
            .unwrap();
    }

    let Json(lowest) = get_lowest_unique_bid(State(state), internal_headers(KEY))
        .await
        .unwrap();

    assert_eq!(lowest, 50);
}

#[tokio::test]
async fn test_empty_configured_key_locks_internal_endpoints() {
    let state = AppState::new(Arc::new(BidService::new()), "");

    let err = get_lowest_unique_bid(State(state.clone()), internal_headers(""))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    let err = get_all_bids(State(state), internal_headers(""))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_get_all_bids() {
    let state = test_state();

    for (user, amount) in [("a", 10), ("b", 20), ("c", 10)] {
        place_bid(State(state.clone()), bid(user, amount))
            .await
            .unwrap();
    }

    let Json(snapshot) = get_all_bids(State(state), internal_headers(KEY))
        .await
        .unwrap();

    assert_eq!(snapshot.lowest_unique_bid, 20);
    assert_eq!(snapshot.stats.distinct_amounts, 2);
    assert_eq!(snapshot.bids[0].amount, 10);
    assert_eq!(snapshot.bids[0].users, vec!["a".to_string(), "c".to_string()]);
    assert_eq!(snapshot.bids[1].users, vec!["b".to_string()]);
}

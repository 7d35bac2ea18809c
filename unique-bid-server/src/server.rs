use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};
use unique_bid::BidService;

use crate::api::{get_all_bids, get_lowest_unique_bid, place_bid};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BidService>,
    /// Shared secret for `/api/internal/*`
    pub internal_api_key: Arc<str>,
}

impl AppState {
    pub fn new(service: Arc<BidService>, internal_api_key: &str) -> Self {
        Self {
            service,
            internal_api_key: Arc::from(internal_api_key),
        }
    }
}

/// Create the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Public endpoints
        .route("/api/bids", post(place_bid))
        // Internal endpoints, gated by X-INTERNAL-KEY
        .route("/api/internal/lowest-unique-bid", get(get_lowest_unique_bid))
        .route("/api/internal/bids", get(get_all_bids))
        // Health check endpoint
        .route("/health", get(health_check))
        // Add shared state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Run the HTTP server
pub async fn run_server(app: Router, host: String, port: u16) -> Result<(), std::io::Error> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("HTTP server listening on http://{}", addr);
    info!("API endpoints:");
    info!("  POST /api/bids - Place a bid");
    info!("  GET /api/internal/lowest-unique-bid - Lowest unique bid (X-INTERNAL-KEY)");
    info!("  GET /api/internal/bids - All bids by amount (X-INTERNAL-KEY)");
    info!("  GET /health - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(std::io::Error::other)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Received shutdown signal, shutting down gracefully...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        create_app(AppState::new(Arc::new(BidService::new()), "test-key"))
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_internal_endpoint_exists() {
        let app = create_test_app();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/internal/lowest-unique-bid")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        // No key supplied, but the route is there
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bids_route_rejects_get() {
        let app = create_test_app();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/bids")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

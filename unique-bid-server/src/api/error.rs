use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API-specific error types with proper HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request - client error (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or wrong internal API key (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Internal server error - unexpected failure (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<unique_bid::BidError> for ApiError {
    fn from(err: unique_bid::BidError) -> Self {
        use unique_bid::BidError;

        match err {
            // Rejected input is a client error (400)
            BidError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            // Ledger/tracker drift is a bug on our side (500)
            BidError::InvariantViolation(msg) => ApiError::InternalError(msg),
        }
    }
}

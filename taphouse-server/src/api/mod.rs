//! REST API surface.
//!
//! Routes are mounted under `/api/v1` by the server builder.

pub mod beers;
pub mod model;
pub mod orders;

use crate::services::ServiceError;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Build the `/api/v1` router.
pub fn router() -> Router<AppState> {
    Router::new().merge(beers::router()).merge(orders::router())
}

/// API-level error mapped onto an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::OrderNotFound(_) | ServiceError::BeerNotFound(_) => ApiError::NotFound,
            ServiceError::AlreadyPickedUp(_)
            | ServiceError::EmptyOrder
            | ServiceError::InvalidQuantity => ApiError::BadRequest(e.to_string()),
        }
    }
}

// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// Transport-level failures; model failures never end up here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidBody(rejection) => rejection.status(),
        };
        tracing::debug!(%status, error = %self, "rejecting request");
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

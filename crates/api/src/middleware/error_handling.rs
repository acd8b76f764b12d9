//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the rotaplan
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with rotaplan's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rotaplan_core::errors::RotaError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `RotaError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub RotaError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            RotaError::NotFound(_) => StatusCode::NOT_FOUND,
            RotaError::Validation(_) => StatusCode::BAD_REQUEST,
            RotaError::Conflict(_) => StatusCode::CONFLICT,
            RotaError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RotaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from RotaError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, RotaError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<RotaError> for AppError {
    fn from(err: RotaError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a RotaError::Store
/// variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RotaError::Store(err))
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures reported by a `RecordStore`. Never rendered verbatim.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed row: {0}")]
    Decode(String),
}

/// Errors that reach the HTTP boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// A write was rejected by the store; the caller keeps the form.
    #[error("Could not save your changes, please try again")]
    WriteFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::WriteFailed => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, self.to_string()).into_response()
    }
}

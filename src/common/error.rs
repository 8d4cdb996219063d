//! Error types for geoschools

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to clients for any failure they cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub const MISSING_BODY_MESSAGE: &str =
    "Request body is missing. Please provide the required data.";

pub const MALFORMED_BODY_MESSAGE: &str =
    "Request body could not be parsed. Please send valid JSON, URL-encoded or multipart form data.";

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: name, address, latitude, and longitude are all required.";

#[derive(Error, Debug)]
pub enum Error {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Storage Errors ===
    #[error("RocksDB error: {0}")]
    RocksDb(#[from] rocksdb::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Store lock poisoned")]
    LockPoisoned,

    // === Client Errors ===
    #[error("{}", MISSING_BODY_MESSAGE)]
    MissingBody,

    #[error("{}", MALFORMED_BODY_MESSAGE)]
    MalformedBody,

    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    InvalidQuery(String),

    // === Network Errors ===
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Server responded {status}: {message}")]
    Remote { status: u16, message: String },

    // === Config Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Generic ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Was this caused by the caller's input rather than by the service?
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MissingBody
                | Error::MalformedBody
                | Error::MissingFields
                | Error::Validation(_)
                | Error::InvalidQuery(_)
        )
    }

    /// Convert to HTTP status code
    pub fn to_http_status(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.to_http_status();
        let body = match &self {
            Error::Validation(errors) => json!({ "success": false, "errors": errors }),
            e if e.is_client_error() => json!({ "success": false, "message": e.to_string() }),
            e => {
                tracing::error!(error = %e, "request failed");
                json!({ "success": false, "message": INTERNAL_ERROR_MESSAGE })
            }
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::LockPoisoned
    }
}

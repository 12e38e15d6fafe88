/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types for the KIS client
//!
//! Every failure crossing the send/parse boundary is an [`AppError`]. The variants fall
//! into four kinds (see [`ErrorKind`]) which the routing layer can map to its own
//! status codes without looking at broker specific codes.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Marker used as the raw value when a required wire field is absent
pub const MISSING_VALUE: &str = "<missing>";

/// Result alias used across the crate
pub type KisResult<T> = Result<T, AppError>;

/// Broad classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed caller input, detected before any network call
    Validation,
    /// The broker response does not match the expected shape
    Schema,
    /// The broker reported a business failure
    Broker,
    /// Network or HTTP level failure
    Transport,
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// A payload field violated one of its constraints
    #[error("validation failed for {field}: {constraint}")]
    Validation {
        /// Semantic name of the offending field
        field: String,
        /// Human readable description of the violated constraint
        constraint: String,
    },

    /// A broker response field is missing or has the wrong shape
    #[error("schema validation failed at {path}: received {raw}")]
    SchemaValidation {
        /// Path of the field inside the response body
        path: String,
        /// Raw value as received, or `<missing>`
        raw: String,
    },

    /// The broker answered with a non-success return code
    #[error("broker error {return_code} [{message_code}]: {message}")]
    Broker {
        /// Value of `rt_cd`
        return_code: String,
        /// Value of `msg_cd`
        message_code: String,
        /// Value of `msg1`, trimmed
        message: String,
    },

    /// Network failure reported by the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The broker answered with a non-2xx status
    #[error("unexpected http status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: StatusCode,
        /// Response body, as text
        body: String,
    },

    /// A request payload could not be encoded, raised before any network call
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API host and path do not form a valid URL
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Failure building the runtime of the blocking client
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl AppError {
    /// Builds a validation error
    pub fn validation(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Builds a schema validation error
    pub fn schema(path: impl Into<String>, raw: impl Into<String>) -> Self {
        AppError::SchemaValidation {
            path: path.into(),
            raw: raw.into(),
        }
    }

    /// Builds a schema validation error for an absent field
    pub fn missing(path: impl Into<String>) -> Self {
        Self::schema(path, MISSING_VALUE)
    }

    /// Returns the kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } | AppError::Json(_) => ErrorKind::Validation,
            AppError::SchemaValidation { .. } => ErrorKind::Schema,
            AppError::Broker { .. } => ErrorKind::Broker,
            AppError::Network(_)
            | AppError::HttpStatus { .. }
            | AppError::InvalidUrl(_)
            | AppError::Runtime(_) => ErrorKind::Transport,
        }
    }

    /// Checks if this error was raised before any network call
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Checks if this error is a transport failure
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

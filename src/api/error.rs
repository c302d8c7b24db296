//! API client errors

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::TimestampError;

/// API client error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to fetch masses")]
    FetchMasses { status: StatusCode },

    #[error("Failed to create mass")]
    CreateMass { status: StatusCode },

    #[error("Failed to {operation}: server returned {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup refused; carries the server's response text
    #[error("{0}")]
    Signup(String),

    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid import data: {0}")]
    InvalidImport(#[source] serde_json::Error),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

impl ApiError {
    /// HTTP status behind the error, when the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::FetchMasses { status }
            | ApiError::CreateMass { status }
            | ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

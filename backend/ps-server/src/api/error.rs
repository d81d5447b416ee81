//! REST API error types
//!
//! These errors produce consistent JSON bodies with appropriate HTTP
//! status codes.

use ps_auth::AuthError;
use ps_db::DbError;
use ps_gateway::GatewayError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or invalid session (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Workflow or uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Analysis service failure (502)
    #[error("Analysis failed: {message} {location}")]
    UpstreamFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { code, message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field: None,
                },
            ),
            ApiError::UpstreamFailed { message, .. } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "ANALYSIS_FAILED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Credential errors keep their user-facing messages; infrastructure
/// failures collapse into a generic internal error.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidEmail { email, .. } => ApiError::Validation {
                message: format!("Invalid email address: {email}"),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::WeakPassword { min_len, .. } => ApiError::Validation {
                message: format!("Password must be at least {min_len} characters"),
                field: Some("password".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::DuplicateEmail { .. } => ApiError::Conflict {
                code: "DUPLICATE_EMAIL",
                message: "An account with this email already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Invalid email or password".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Hash { .. } | AuthError::Store { .. } => {
                log::error!("Credential store error: {}", e);
                ApiError::Internal {
                    message: "Account operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert database errors to API errors without echoing driver detail
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// All gateway failures surface as 502 with a kind-specific message
impl From<GatewayError> for ApiError {
    #[track_caller]
    fn from(e: GatewayError) -> Self {
        let message = match &e {
            GatewayError::Transport { .. } => "Analysis service unreachable".to_string(),
            GatewayError::Service { status, message, .. } => {
                format!("Analysis service returned {status}: {message}")
            }
            GatewayError::MalformedReport { .. } => {
                "Analysis service returned an unreadable report".to_string()
            }
            GatewayError::MissingOutput { .. } => {
                "Analysis service returned no output".to_string()
            }
        };
        log::error!("Gateway error: {}", e);
        ApiError::UpstreamFailed {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

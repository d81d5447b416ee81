use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from the external document-analysis service
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Analysis service unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Analysis service returned {status}: {message} {location}")]
    Service {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Analysis response is not a valid coverage report: {message} {location}")]
    MalformedReport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Analysis response contained no output text {location}")]
    MissingOutput { location: ErrorLocation },
}

impl GatewayError {
    #[track_caller]
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_report(source: serde_json::Error) -> Self {
        Self::MalformedReport {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn missing_output() -> Self {
        Self::MissingOutput {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email address: {email} {location}")]
    InvalidEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Password must be at least {min_len} characters {location}")]
    WeakPassword {
        min_len: usize,
        location: ErrorLocation,
    },

    #[error("An account with this email already exists {location}")]
    DuplicateEmail { location: ErrorLocation },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Password hashing failed: {source} {location}")]
    Hash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Credential store failure: {source} {location}")]
    Store {
        #[source]
        source: ps_db::DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn weak_password(min_len: usize) -> Self {
        Self::WeakPassword {
            min_len,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_email() -> Self {
        Self::DuplicateEmail {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEmail { .. } => "INVALID_EMAIL",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Hash { .. } => "HASH_FAILED",
            Self::Store { .. } => "STORE_FAILED",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidEmail { .. } => Some("email".to_string()),
            Self::WeakPassword { .. } => Some("password".to_string()),
            Self::DuplicateEmail { .. } => Some("email".to_string()),
            _ => None,
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    #[track_caller]
    fn from(source: bcrypt::BcryptError) -> Self {
        Self::Hash {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ps_db::DbError> for AuthError {
    #[track_caller]
    fn from(source: ps_db::DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

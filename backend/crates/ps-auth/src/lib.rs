pub mod credential_store;
pub mod error;
pub mod password_hasher;
pub mod validation;

pub use credential_store::CredentialStore;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use validation::{MIN_PASSWORD_LEN, validate_email, validate_password};

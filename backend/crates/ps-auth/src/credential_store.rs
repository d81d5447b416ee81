use crate::error::{AuthError, Result};
use crate::password_hasher::PasswordHasher;
use crate::validation::{validate_email, validate_password};

use ps_core::User;
use ps_db::UserRepository;

use sqlx::SqlitePool;

/// Registration and login against the users table.
pub struct CredentialStore {
    users: UserRepository,
    hasher: PasswordHasher,
}

impl CredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_hasher(pool, PasswordHasher::default())
    }

    pub fn with_hasher(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self {
            users: UserRepository::new(pool),
            hasher,
        }
    }

    /// Creates an account after validating email shape and password length.
    ///
    /// The database UNIQUE constraint is the authority on duplicates, so
    /// concurrent registrations of the same email cannot both succeed.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        validate_email(email)?;
        validate_password(password)?;

        let password_hash = self.hasher.hash(password)?;
        let user = User::new(email.to_string(), password_hash);

        match self.users.create(&user).await {
            Ok(()) => Ok(user),
            Err(e) if e.is_unique_violation() => Err(AuthError::duplicate_email()),
            Err(e) => Err(e.into()),
        }
    }

    /// Verifies a login. Unknown email and wrong password return the same
    /// error so the endpoint cannot be used to probe for accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AuthError::invalid_credentials());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::invalid_credentials());
        }

        Ok(user)
    }
}

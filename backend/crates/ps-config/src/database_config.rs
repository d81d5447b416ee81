use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_URL};

use serde::Deserialize;

/// Legacy scheme emitted by older deployment tooling; sqlx only understands
/// the modern `sqlite:` form.
const LEGACY_SCHEME: &str = "sqlite3:";
const MODERN_SCHEME: &str = "sqlite:";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_DATABASE_URL),
        }
    }
}

impl DatabaseConfig {
    /// Connection URL with the legacy scheme prefix rewritten, ready to hand
    /// to the pool.
    pub fn normalized_url(&self) -> String {
        normalize_url(&self.url)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.normalized_url();
        if !url.starts_with(MODERN_SCHEME) {
            return Err(ConfigError::database(format!(
                "database.url must use the {} scheme, got {}",
                MODERN_SCHEME, self.url
            )));
        }

        Ok(())
    }
}

/// Rewrite a legacy `sqlite3:` URL scheme to the `sqlite:` scheme the
/// persistence layer expects. Any other URL passes through unchanged.
pub fn normalize_url(url: &str) -> String {
    match url.strip_prefix(LEGACY_SCHEME) {
        Some(rest) => format!("{}{}", MODERN_SCHEME, rest),
        None => url.to_string(),
    }
}

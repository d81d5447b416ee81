use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ANALYSIS_BASE_URL, DEFAULT_ANALYSIS_MODEL,
    DEFAULT_MAX_UPLOAD_BYTES,
};

use serde::Deserialize;

/// Settings for the external document-analysis service.
///
/// The credential is read from the `OPENAI_API_KEY` environment variable,
/// falling back to the `analysis.api_key` entry in `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Largest policy document accepted for upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_ANALYSIS_BASE_URL),
            model: String::from(DEFAULT_ANALYSIS_MODEL),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::analysis(format!(
                "analysis.base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::analysis("analysis.model must not be empty"));
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::analysis(
                "analysis.max_upload_bytes must be positive",
            ));
        }

        Ok(())
    }

    /// The secret credential, required at the point the gateway is built.
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            ConfigError::analysis(
                "analysis API key not configured (set OPENAI_API_KEY or analysis.api_key)",
            )
        })
    }
}

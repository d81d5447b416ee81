
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point config loading at a fresh temp directory and clear the ambient
/// overrides that would leak host state into a test.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let guards = vec![
        EnvGuard::set(
            "POLISEE_CONFIG_DIR",
            temp.path().to_str().expect("temp path is valid UTF-8"),
        ),
        EnvGuard::remove("DATABASE_URL"),
        EnvGuard::remove("OPENAI_API_KEY"),
        EnvGuard::remove("POLISEE_SERVER_PORT"),
    ];
    (temp, guards)
}

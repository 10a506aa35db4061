//! Groq API credential resolution.
//!
//! The key is looked up in a local `.env` file first (development), then in
//! the process environment (deployments surface their secret store there).
//! Resolution happens once per process; the result is cached.

use crate::error::{GathikaError, Result};
use std::path::Path;
use std::sync::OnceLock;

/// Environment variable carrying the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

static RESOLVED: OnceLock<Credentials> = OnceLock::new();

/// The single secret the remote clients need.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Resolve the credential, caching the first success for the lifetime of
    /// the process. Later calls return the cached value without re-reading
    /// any source.
    ///
    /// The resolved key is also published into the process environment for
    /// libraries that look it up there.
    pub fn resolve(env_file: &Path) -> Result<Credentials> {
        if let Some(cached) = RESOLVED.get() {
            return Ok(cached.clone());
        }

        let credentials = Self::from_sources(env_file)?;
        std::env::set_var(API_KEY_VAR, credentials.api_key());

        Ok(RESOLVED.get_or_init(|| credentials).clone())
    }

    /// Resolve from an explicit `.env` path with an environment fallback,
    /// without touching the process-wide cache.
    pub fn from_sources(env_file: &Path) -> Result<Credentials> {
        if let Some(api_key) = Self::read_env_file(env_file) {
            return Ok(Credentials { api_key });
        }

        match std::env::var(API_KEY_VAR) {
            Ok(api_key) if !api_key.is_empty() => Ok(Credentials { api_key }),
            _ => Err(GathikaError::Config(format!(
                "{} not found in {} or the environment",
                API_KEY_VAR,
                env_file.display()
            ))),
        }
    }

    fn read_env_file(path: &Path) -> Option<String> {
        let entries = dotenvy::from_path_iter(path).ok()?;
        for entry in entries {
            if let Ok((name, value)) = entry {
                if name == API_KEY_VAR && !value.is_empty() {
                    return Some(value);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_key_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GROQ_API_KEY=gsk_test_123").unwrap();

        let credentials = Credentials::from_sources(file.path()).unwrap();
        assert_eq!(credentials.api_key(), "gsk_test_123");
    }

    #[test]
    fn env_file_wins_over_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GROQ_API_KEY=from_file").unwrap();

        // Whatever the ambient environment holds, the file takes precedence.
        let credentials = Credentials::from_sources(file.path()).unwrap();
        assert_eq!(credentials.api_key(), "from_file");
    }

    #[test]
    fn resolution_is_idempotent() {
        // Env mutation and the process-wide cache are both global, so this
        // single test covers the whole resolve() surface.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GROQ_API_KEY=gsk_cached").unwrap();

        let first = Credentials::resolve(file.path()).unwrap();

        // Second call must not re-read: hand it a path that does not exist.
        let second = Credentials::resolve(Path::new("/nonexistent/.env")).unwrap();
        assert_eq!(first.api_key(), second.api_key());

        // The side effect published the key for ambient lookups.
        assert_eq!(std::env::var(API_KEY_VAR).unwrap(), first.api_key());
    }

    #[test]
    fn missing_everywhere_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".env")).unwrap();
        writeln!(file, "OTHER_KEY=value").unwrap();

        // The file exists but lacks the key; fall through to the environment,
        // which may or may not hold it depending on the test host.
        let result = Credentials::from_sources(&dir.path().join(".env"));
        if std::env::var(API_KEY_VAR).is_err() {
            assert!(matches!(result, Err(GathikaError::Config(_))));
        }
    }
}

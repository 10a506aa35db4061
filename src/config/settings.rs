//! Configuration settings for Gathika.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub transcription: TranscriptionSettings,
    pub analysis: AnalysisSettings,
    pub server: ServerSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Path to the key-value file holding the Groq credential.
    pub env_file: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            env_file: ".env".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Transcription service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    /// Acoustic model identifier.
    pub model: String,
    /// ISO language hint sent with every request.
    pub language: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: "whisper-large-v3-turbo".to_string(),
            language: "id".to_string(),
        }
    }
}

/// Analysis model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Generation model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            model: "llama-3.2-1b-preview".to_string(),
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: 1024,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::GathikaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gathika")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded credential file path.
    pub fn env_file_path(&self) -> PathBuf {
        Self::expand_path(&self.general.env_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let settings = Settings::default();
        assert_eq!(settings.transcription.model, "whisper-large-v3-turbo");
        assert_eq!(settings.transcription.language, "id");
        assert_eq!(settings.analysis.model, "llama-3.2-1b-preview");
        assert_eq!(settings.analysis.temperature, 0.7);
        assert_eq!(settings.analysis.top_p, 1.0);
        assert_eq!(settings.analysis.max_tokens, 1024);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml = r#"
            [transcription]
            language = "en"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.transcription.language, "en");
        assert_eq!(settings.transcription.model, "whisper-large-v3-turbo");
        assert_eq!(settings.server.port, 8501);
    }

    #[test]
    fn env_file_path_expands_tilde() {
        let mut settings = Settings::default();
        settings.general.env_file = "~/secrets/.env".to_string();
        let expanded = settings.env_file_path();
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}

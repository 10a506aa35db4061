//! Configuration module for Gathika.
//!
//! Handles loading application settings and resolving the Groq credential.

mod credentials;
mod settings;

pub use credentials::{Credentials, API_KEY_VAR};
pub use settings::{
    AnalysisSettings, GeneralSettings, ServerSettings, Settings, TranscriptionSettings,
};

//! Whisper transcription against Groq's OpenAI-compatible API.

use super::Transcriber;
use crate::config::{Credentials, TranscriptionSettings};
use crate::error::{GathikaError, Result};
use crate::groq::create_client;
use async_openai::types::{AudioResponseFormat, CreateTranscriptionRequestArgs};
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, instrument};

/// Groq-hosted Whisper transcriber.
pub struct WhisperTranscriber {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    language: String,
}

impl WhisperTranscriber {
    /// Create a transcriber from settings.
    pub fn new(credentials: &Credentials, settings: &TranscriptionSettings) -> Self {
        Self {
            client: create_client(credentials),
            model: settings.model.clone(),
            language: settings.language.clone(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    #[instrument(skip(self), fields(audio_path = %audio_path.display()))]
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        debug!("Transcribing audio file");

        let file_bytes = tokio::fs::read(audio_path).await?;

        let filename = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let request = CreateTranscriptionRequestArgs::default()
            .file(async_openai::types::AudioInput::from_vec_u8(
                filename, file_bytes,
            ))
            .model(&self.model)
            .language(&self.language)
            .response_format(AudioResponseFormat::VerboseJson)
            .build()
            .map_err(|e| GathikaError::Transcription(format!("Failed to build request: {}", e)))?;

        // Verbose JSON carries segment-level detail; only the flattened
        // text is used.
        let response = self
            .client
            .audio()
            .transcribe_verbose_json(request)
            .await
            .map_err(|e| GathikaError::Groq(format!("Whisper API error: {}", e)))?;

        let text = response.text.trim().to_string();
        if text.is_empty() {
            return Err(GathikaError::Transcription(
                "Service returned no usable text".to_string(),
            ));
        }

        debug!("Transcribed {} characters", text.len());
        Ok(text)
    }
}

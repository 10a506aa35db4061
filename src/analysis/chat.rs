//! Chat-completion analyzer with streamed output.

use super::{append_fragment, Analyzer};
use crate::config::{AnalysisSettings, Credentials};
use crate::error::{GathikaError, Result};
use crate::groq::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, instrument};

/// System instruction enumerating the required analysis dimensions.
const SYSTEM_PROMPT: &str = "Anda adalah asisten yang ahli dalam menganalisis teks. \
    Berikan analisis yang mencakup: Ringkasan utama, Poin-poin penting, \
    Topik utama yang dibahas, Konteks dan implikasi penting, \
    Rekomendasi atau tindak lanjut (jika relevan)";

/// Analyzer backed by a Groq-hosted generation model.
pub struct ChatAnalyzer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

impl ChatAnalyzer {
    /// Create an analyzer from settings.
    pub fn new(credentials: &Credentials, settings: &AnalysisSettings) -> Self {
        Self {
            client: create_client(credentials),
            model: settings.model.clone(),
            temperature: settings.temperature,
            top_p: settings.top_p,
            max_tokens: settings.max_tokens,
        }
    }
}

#[async_trait]
impl Analyzer for ChatAnalyzer {
    #[instrument(skip(self, transcript), fields(transcript_chars = transcript.len()))]
    async fn analyze(&self, transcript: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()
                .map_err(|e| GathikaError::Analysis(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(format!("Analisis teks berikut ini:\n\n{}", transcript))
                .build()
                .map_err(|e| GathikaError::Analysis(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .top_p(self.top_p)
            .max_completion_tokens(self.max_tokens)
            .stream(true)
            .build()
            .map_err(|e| GathikaError::Analysis(e.to_string()))?;

        // Streamed so a future caller can surface partial output; for now
        // the fragments are buffered into the final string.
        let mut stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| GathikaError::Groq(format!("Chat API error: {}", e)))?;

        let mut analysis = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| GathikaError::Groq(format!("Chat stream error: {}", e)))?;
            if let Some(choice) = chunk.choices.first() {
                append_fragment(&mut analysis, choice.delta.content.as_deref());
            }
        }

        if analysis.is_empty() {
            return Err(GathikaError::Analysis(
                "Empty response from model".to_string(),
            ));
        }

        debug!("Accumulated {} characters of analysis", analysis.len());
        Ok(analysis)
    }
}

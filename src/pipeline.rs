//! Pipeline coordination: validate, materialize, transcribe, analyze.

use crate::analysis::{Analyzer, ChatAnalyzer};
use crate::config::{Credentials, Settings};
use crate::error::Result;
use crate::scratch::ScratchFile;
use crate::transcription::{Transcriber, WhisperTranscriber};
use crate::upload::AudioUpload;
use std::sync::Arc;
use tracing::{info, instrument};

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Plain text returned by the transcription service.
    pub transcript: String,
    /// Accumulated analysis returned by the generation model.
    pub analysis: String,
}

/// Coordinates the upload-to-analysis flow.
///
/// The service clients are injected so the pipeline can run against test
/// doubles.
pub struct Pipeline {
    transcriber: Arc<dyn Transcriber>,
    analyzer: Arc<dyn Analyzer>,
}

impl Pipeline {
    pub fn new(transcriber: Arc<dyn Transcriber>, analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            transcriber,
            analyzer,
        }
    }

    /// Build a pipeline with the real Groq-backed clients.
    pub fn from_settings(credentials: &Credentials, settings: &Settings) -> Self {
        Self::new(
            Arc::new(WhisperTranscriber::new(credentials, &settings.transcription)),
            Arc::new(ChatAnalyzer::new(credentials, &settings.analysis)),
        )
    }

    /// Run the full pipeline for one upload.
    ///
    /// The scratch file exists only for the duration of the transcription
    /// call and is removed on every exit path.
    #[instrument(skip(self, upload), fields(filename = %upload.filename(), size = upload.size()))]
    pub async fn run(&self, upload: &AudioUpload) -> Result<PipelineReport> {
        let extension = upload.validate()?;

        let scratch = ScratchFile::materialize(upload.bytes(), &extension)?;
        let transcript = match self.transcriber.transcribe(scratch.path()).await {
            Ok(text) => {
                scratch.release()?;
                text
            }
            Err(e) => {
                // Drop removes the file before the error propagates.
                drop(scratch);
                return Err(e);
            }
        };

        info!(
            "Transcript ready ({} chars), requesting analysis",
            transcript.len()
        );

        let analysis = self.analyzer.analyze(&transcript).await?;

        Ok(PipelineReport {
            transcript,
            analysis,
        })
    }
}

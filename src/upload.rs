//! Upload boundary: size and format validation.
//!
//! Validation runs before any disk or network work so rejected uploads never
//! touch the temp directory or the remote service.

use crate::error::{GathikaError, Result};
use std::path::Path;

/// Maximum accepted upload size (25 MiB), the remote service's own cap.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// File extensions the transcription endpoint accepts.
pub const ALLOWED_EXTENSIONS: [&str; 9] = [
    "flac", "mp3", "mp4", "mpeg", "mpga", "m4a", "ogg", "wav", "webm",
];

/// An uploaded audio file, held in memory until it is materialized on disk.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    filename: String,
    bytes: Vec<u8>,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercased extension derived from the original filename.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    /// Check size and format, returning the extension on success.
    ///
    /// Uploads without a derivable extension are rejected rather than
    /// guessed at.
    pub fn validate(&self) -> Result<String> {
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(GathikaError::Validation(format!(
                "File too large: {} bytes (maximum is 25 MiB)",
                self.bytes.len()
            )));
        }

        let extension = self.extension().ok_or_else(|| {
            GathikaError::Validation(format!(
                "Cannot determine audio format from filename '{}'",
                self.filename
            ))
        })?;

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(GathikaError::Validation(format!(
                "Unsupported format '{}'. Supported formats: {}",
                extension,
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        Ok(extension)
    }
}

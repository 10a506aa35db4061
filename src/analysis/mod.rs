//! Transcript analysis via a Groq-hosted chat model.

mod chat;

pub use chat::ChatAnalyzer;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for transcript analysis services.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Produce a structured analysis of the transcript text.
    async fn analyze(&self, transcript: &str) -> Result<String>;
}

/// Append one streamed fragment to the accumulator.
///
/// Empty or absent fragments contribute nothing, so the final accumulator is
/// the ordered concatenation of all non-empty fragments.
pub(crate) fn append_fragment(accumulator: &mut String, fragment: Option<&str>) {
    if let Some(text) = fragment {
        if !text.is_empty() {
            accumulator.push_str(text);
        }
    }
}

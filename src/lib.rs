//! Gathika - Audio Transcription and Analysis
//!
//! Gathika takes an uploaded audio file, transcribes it through Groq's
//! hosted Whisper endpoint, and feeds the transcript to a Groq-hosted chat
//! model for a structured analysis. Both results are shown side by side in
//! a single-page web UI, or in the terminal via the `analyze` subcommand.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Settings and Groq credential resolution
//! - `upload` - Upload validation (size cap, format allow-list)
//! - `scratch` - Scoped temporary files for audio handed to the API
//! - `transcription` - Speech-to-text client
//! - `analysis` - Transcript analysis client (streamed chat completion)
//! - `pipeline` - Coordination of the upload-to-analysis flow
//! - `server` - Axum app serving the single-page UI
//! - `cli` - Command-line front end
//!
//! # Example
//!
//! ```rust,no_run
//! use gathika::config::{Credentials, Settings};
//! use gathika::pipeline::Pipeline;
//! use gathika::upload::AudioUpload;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let credentials = Credentials::resolve(&settings.env_file_path())?;
//!     let pipeline = Pipeline::from_settings(&credentials, &settings);
//!
//!     let upload = AudioUpload::new("meeting.wav", std::fs::read("meeting.wav")?);
//!     let report = pipeline.run(&upload).await?;
//!     println!("{}", report.analysis);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod groq;
pub mod pipeline;
pub mod scratch;
pub mod server;
pub mod transcription;
pub mod upload;

pub use error::{GathikaError, Result};

//! Analyze command implementation.

use crate::cli::Output;
use crate::config::{Credentials, Settings};
use crate::pipeline::Pipeline;
use crate::upload::AudioUpload;
use anyhow::Result;
use std::path::Path;

/// Run the pipeline against a local audio file and print both panels.
pub async fn run_analyze(file: &str, settings: Settings) -> Result<()> {
    let credentials = Credentials::resolve(&settings.env_file_path())?;

    let path = Path::new(file);
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let bytes = std::fs::read(path)?;
    let upload = AudioUpload::new(filename, bytes);

    let pipeline = Pipeline::from_settings(&credentials, &settings);

    let spinner = Output::spinner("Processing audio file...");
    let report = pipeline.run(&upload).await;
    spinner.finish_and_clear();

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    Output::header("Analysis");
    println!("{}", report.analysis);

    Output::header("Transcript");
    println!("{}", report.transcript);

    println!();
    Output::success("Done.");

    Ok(())
}

//! Serve command implementation.

use crate::config::{Credentials, Settings};
use crate::pipeline::Pipeline;
use crate::server;
use anyhow::Result;

/// Run the HTTP UI server.
pub async fn run_serve(host: Option<&str>, port: Option<u16>, settings: Settings) -> Result<()> {
    // A missing credential is fatal before the UI becomes reachable.
    let credentials = Credentials::resolve(&settings.env_file_path())?;

    let pipeline = Pipeline::from_settings(&credentials, &settings);

    let host = host.unwrap_or(&settings.server.host).to_string();
    let port = port.unwrap_or(settings.server.port);

    server::serve(&host, port, pipeline).await
}

//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(&settings)?;
            Output::header("Active configuration");
            println!("{}", rendered);
        }

        ConfigAction::Init => {
            let path = Settings::default_config_path();
            if path.exists() {
                Output::warning(&format!(
                    "Configuration already exists at {}",
                    path.display()
                ));
                return Ok(());
            }
            settings.save_to(&path)?;
            Output::success(&format!("Wrote default configuration to {}", path.display()));
        }

        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
    }

    Ok(())
}

use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, error, info};

use casebook_core::{CasebookConfig, init_logging};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<ExitCode> {
    let config = CasebookConfig::load()?;
    let _log_guard = init_logging(&config)?;
    info!("Starting casebook v{VERSION}");
    match &config.source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => debug!("No config file, using defaults"),
    }

    match casebook_app::generate(&config) {
        Ok(outputs) => {
            info!(
                "Generated {}, {} and {}",
                outputs.docx.display(),
                outputs.pptx.display(),
                outputs.pdf.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Generation failed: {e:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}

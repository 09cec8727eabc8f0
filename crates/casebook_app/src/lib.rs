pub mod content;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use casebook_core::CasebookConfig;
use casebook_docs::StyleProfile;

/// Paths of the documents written by [`generate`].
#[derive(Debug, Clone)]
pub struct Outputs {
    pub docx: PathBuf,
    pub pptx: PathBuf,
    pub pdf: PathBuf,
}

/// Build the DOCX, PPTX and PDF case study into the configured directory.
///
/// Documents are written in that order; the first failure aborts the run.
pub fn generate(config: &CasebookConfig) -> Result<Outputs> {
    config.ensure_output_dir()?;

    let docx = config.docx_path();
    let bytes = content::word::build(&StyleProfile::word_report())
        .and_then(|doc| doc.to_bytes())
        .context("Failed to build the Word document")?;
    write_artifact(&docx, &bytes)?;

    let pptx = config.pptx_path();
    let bytes = content::deck::build(&StyleProfile::slide_deck())
        .and_then(|deck| deck.to_bytes())
        .context("Failed to build the presentation")?;
    write_artifact(&pptx, &bytes)?;

    let pdf = config.pdf_path();
    let bytes = content::pdf::build(&StyleProfile::pdf_report())
        .and_then(|flow| flow.to_bytes())
        .context("Failed to build the PDF")?;
    write_artifact(&pdf, &bytes)?;

    Ok(Outputs { docx, pptx, pdf })
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(bytes = bytes.len(), "Saved {}", path.display());
    Ok(())
}

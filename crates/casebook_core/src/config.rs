use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CasebookError;

/// Name of the optional run configuration file in the working directory.
pub const CONFIG_FILE: &str = "casebook.json";

pub const DEFAULT_DOCX_FILE: &str = "True_Fruits_Case_Study.docx";
pub const DEFAULT_PPTX_FILE: &str = "True_Fruits_Presentation.pptx";
pub const DEFAULT_PDF_FILE: &str = "True_Fruits_Case_Study_FINAL.pdf";

// ---------------------------------------------------------------------------
// CasebookConfig
// ---------------------------------------------------------------------------

/// Where the three documents go and how the run logs.
///
/// Only run settings live here; report content is fixed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CasebookConfig {
    /// Output directory. Unset means the directory holding the executable.
    pub output_dir: Option<PathBuf>,
    pub docx_file: String,
    pub pptx_file: String,
    pub pdf_file: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Directory for a daily-rotated log file. Console only when unset.
    pub log_dir: Option<PathBuf>,
    /// File the settings were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for CasebookConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            docx_file: DEFAULT_DOCX_FILE.into(),
            pptx_file: DEFAULT_PPTX_FILE.into(),
            pdf_file: DEFAULT_PDF_FILE.into(),
            log_level: "info".into(),
            log_dir: None,
            source: None,
        }
    }
}

impl CasebookConfig {
    /// Loads `casebook.json` from the working directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    /// Load config from a specific file path.
    ///
    /// A missing file yields the defaults; the file is never created. This
    /// runs before logging is up, so the caller reports [`Self::source`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Reject settings that cannot produce three output files.
    pub fn validate(&self) -> std::result::Result<(), CasebookError> {
        for (kind, name) in [
            ("docx", &self.docx_file),
            ("pptx", &self.pptx_file),
            ("pdf", &self.pdf_file),
        ] {
            if name.trim().is_empty() {
                return Err(CasebookError::EmptyFileName(kind));
            }
        }
        Ok(())
    }

    /// The configured output directory, or the executable's own directory.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => executable_dir(),
        }
    }

    pub fn docx_path(&self) -> PathBuf {
        self.output_dir().join(&self.docx_file)
    }

    pub fn pptx_path(&self) -> PathBuf {
        self.output_dir().join(&self.pptx_file)
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.output_dir().join(&self.pdf_file)
    }

    /// Creates the output directory if needed.
    pub fn ensure_output_dir(&self) -> Result<()> {
        let dir = self.output_dir();
        if dir.exists() {
            if !dir.is_dir() {
                return Err(CasebookError::NotADirectory(dir).into());
            }
            return Ok(());
        }
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        debug!("Created output directory {}", dir.display());
        Ok(())
    }
}

/// Directory containing the running executable, falling back to the working
/// directory when it cannot be determined.
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

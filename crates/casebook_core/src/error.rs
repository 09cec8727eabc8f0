use std::path::PathBuf;

/// Errors raised while preparing a generation run.
#[derive(Debug, thiserror::Error)]
pub enum CasebookError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Output path exists and is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No file name configured for the {0} output")]
    EmptyFileName(&'static str),

    #[error("Logging already initialized")]
    LoggingInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CasebookError::EmptyFileName("pdf");
        assert_eq!(err.to_string(), "No file name configured for the pdf output");

        let err = CasebookError::NotADirectory(PathBuf::from("out.txt"));
        assert!(err.to_string().contains("out.txt"));
    }
}

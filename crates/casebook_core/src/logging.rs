use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::CasebookConfig;
use crate::error::CasebookError;

/// Parse a filter directive such as `info` or `casebook_docs=debug,warn`.
pub fn filter_from_directive(directive: &str) -> std::result::Result<EnvFilter, CasebookError> {
    EnvFilter::try_new(directive).map_err(|e| CasebookError::InvalidLogFilter {
        filter: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber: compact console output, plus a
/// daily-rotated file when `log_dir` is set.
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// flushes the file writer on drop and must outlive the run.
pub fn init_logging(config: &CasebookConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_directive(&config.log_level)?,
    };

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            let layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .with(file_layer)
        .try_init()
        .map_err(|_| CasebookError::LoggingInitialized)?;

    Ok(guard)
}

fn file_writer(
    logs_dir: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(logs_dir)?;
    let file_appender = tracing_appender::rolling::daily(logs_dir, "casebook");
    Ok(tracing_appender::non_blocking(file_appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_directives_parse() {
        for directive in ["info", "debug", "warn", "casebook_docs=debug,warn"] {
            assert!(filter_from_directive(directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn test_invalid_directive_is_reported() {
        let err = filter_from_directive("casebook=loud").unwrap_err();
        match err {
            CasebookError::InvalidLogFilter { filter, .. } => assert_eq!(filter, "casebook=loud"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let logs_dir = tmp.path().join("nested").join("logs");
        assert!(!logs_dir.exists());

        let (_writer, guard) = file_writer(&logs_dir).unwrap();
        assert!(logs_dir.exists());
        drop(guard);
    }

    #[test]
    fn test_init_logging_with_log_dir() {
        let tmp = tempfile::tempdir().expect("Failed to create tempdir");
        let config = CasebookConfig {
            log_dir: Some(tmp.path().join("logs")),
            log_level: "warn".into(),
            ..Default::default()
        };

        // Only one global subscriber per process; a second install reports
        // LoggingInitialized but the directory is still prepared.
        match init_logging(&config) {
            Ok(guard) => assert!(guard.is_some()),
            Err(e) => assert!(matches!(
                e.downcast_ref::<CasebookError>(),
                Some(CasebookError::LoggingInitialized)
            )),
        }
        assert!(tmp.path().join("logs").exists());
    }
}

//! Document generation error types.

use crate::table::TableHandle;

/// Errors raised while building or serializing a report document.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// A table was described without any header cells.
    #[error("Table has no header cells")]
    EmptyHeader,

    /// A data row does not have one cell per header.
    #[error("Row {row} has {found} cells, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Explicit column widths do not match the header count.
    #[error("Got {found} column widths for {expected} columns")]
    ColumnWidthMismatch { expected: usize, found: usize },

    /// The handle does not refer to a table in this document.
    #[error("Unknown table handle {0:?}")]
    UnknownTable(TableHandle),

    /// A cell address lies outside the table grid.
    #[error("Cell ({row}, {col}) is outside the table")]
    CellOutOfBounds { row: usize, col: usize },

    /// Slide content was added before any slide exists.
    #[error("No slide to add content to")]
    NoSlide,

    /// The container format (zip/docx) could not be written.
    #[error("Package error: {0}")]
    Package(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for DocError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Package(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocError>;

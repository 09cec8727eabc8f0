// Report document generation: one table renderer, three output formats.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod pptx;
pub mod table;
pub mod text;

pub use docx::WordDocument;
pub use error::{DocError, Result};
pub use pdf::{Flowable, ParagraphStyle, PdfFlow, SlideFrame};
pub use pptx::{DeckLine, Slide, SlideDeck};
pub use table::{
    CellStyle, GridTable, HorizontalAlign, Padding, Rgb, StyleProfile, TableHandle, TableRenderer,
    TableShape, TableSink, TableSpec, VerticalAlign,
};
pub use text::{Span, Text};

//! Styled tabular report rendering.
//!
//! The layout contract lives here once: a bold, shaded header row followed
//! by one plain row per data row, in input order. Each back end only has to
//! implement [`TableSink`] to receive that grid.

use tracing::debug;

use crate::error::{DocError, Result};

// ---------------------------------------------------------------------------
// Style primitives
// ---------------------------------------------------------------------------

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Rgb = Rgb(0x66, 0x66, 0x66);
    pub const LIGHT_GRAY: Rgb = Rgb(0xCC, 0xCC, 0xCC);
    pub const BLUE: Rgb = Rgb(0x44, 0x72, 0xC4);
    pub const LIGHT_BLUE: Rgb = Rgb(0xD6, 0xE4, 0xF0);

    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Upper-case `RRGGBB`, the form OOXML attributes expect.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Components scaled to `0.0..=1.0` for PDF colour operators.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Cell padding in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// The fixed visual parameters applied to every rendered table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProfile {
    pub font_family: &'static str,
    /// Base font size in points.
    pub font_size: f32,
    pub text_color: Rgb,
    pub header_background: Rgb,
    pub border_color: Rgb,
    /// Border weight in points.
    pub border_width: f32,
    pub padding: Padding,
    pub align: HorizontalAlign,
    pub valign: VerticalAlign,
}

impl StyleProfile {
    /// Tables in the word-processing write-up.
    pub const fn word_report() -> Self {
        Self {
            font_family: "Times New Roman",
            font_size: 10.0,
            text_color: Rgb::BLACK,
            header_background: Rgb::LIGHT_BLUE,
            border_color: Rgb::BLACK,
            border_width: 0.5,
            padding: Padding::new(0.0, 5.4, 0.0, 5.4),
            align: HorizontalAlign::Left,
            valign: VerticalAlign::Top,
        }
    }

    /// Tables on presentation slides.
    pub const fn slide_deck() -> Self {
        Self {
            font_family: "Calibri",
            font_size: 11.0,
            text_color: Rgb::BLACK,
            header_background: Rgb::LIGHT_BLUE,
            border_color: Rgb::LIGHT_GRAY,
            border_width: 0.75,
            padding: Padding::new(3.6, 7.2, 3.6, 7.2),
            align: HorizontalAlign::Left,
            valign: VerticalAlign::Top,
        }
    }

    /// Tables in the PDF report. The family must be a base-14 PDF font.
    pub const fn pdf_report() -> Self {
        Self {
            font_family: "Times-Roman",
            font_size: 9.0,
            text_color: Rgb::BLACK,
            header_background: Rgb::LIGHT_BLUE,
            border_color: Rgb::LIGHT_GRAY,
            border_width: 0.5,
            padding: Padding::new(4.0, 6.0, 4.0, 5.0),
            align: HorizontalAlign::Left,
            valign: VerticalAlign::Top,
        }
    }

    /// A copy of this profile with different cell padding.
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

// ---------------------------------------------------------------------------
// Table description
// ---------------------------------------------------------------------------

/// Header plus rows of display strings describing one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Optional fixed column widths in points.
    pub column_widths: Option<Vec<f32>>,
}

impl TableSpec {
    /// Build a spec, coercing every cell to its display string.
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: ToString,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: ToString,
    {
        Self {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
                .collect(),
            column_widths: None,
        }
    }

    pub fn with_column_widths(mut self, widths: impl Into<Vec<f32>>) -> Self {
        self.column_widths = Some(widths.into());
        self
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check the shape invariants without touching any sink.
    pub fn validate(&self) -> Result<()> {
        let expected = self.headers.len();
        if expected == 0 {
            return Err(DocError::EmptyHeader);
        }
        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(DocError::ShapeMismatch {
                row,
                expected,
                found: cells.len(),
            });
        }
        if let Some(widths) = &self.column_widths {
            if widths.len() != expected {
                return Err(DocError::ColumnWidthMismatch {
                    expected,
                    found: widths.len(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendered grid
// ---------------------------------------------------------------------------

/// Per-cell emphasis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub background: Option<Rgb>,
}

impl CellStyle {
    pub fn header(style: &StyleProfile) -> Self {
        Self {
            bold: true,
            background: Some(style.header_background),
        }
    }

    pub fn body() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

/// Dimensions requested from a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
    pub column_widths: Option<Vec<f32>>,
}

/// A table node as stored inside a document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTable {
    cells: Vec<Vec<Cell>>,
    column_widths: Option<Vec<f32>>,
    style: StyleProfile,
}

impl GridTable {
    pub fn new(shape: TableShape, style: &StyleProfile) -> Self {
        Self {
            cells: vec![vec![Cell::default(); shape.columns]; shape.rows],
            column_widths: shape.column_widths,
            style: *style,
        }
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn column_widths(&self) -> Option<&[f32]> {
        self.column_widths.as_deref()
    }

    pub fn style(&self) -> &StyleProfile {
        &self.style
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        self.cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(DocError::CellOutOfBounds { row, col })
    }
}

/// Opaque reference to a table appended to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableHandle(pub usize);

/// The capability set a back end exposes to receive tables.
pub trait TableSink {
    /// Append an empty table of the given shape and return its handle.
    fn add_table(&mut self, shape: TableShape, style: &StyleProfile) -> Result<TableHandle>;

    fn table(&self, handle: TableHandle) -> Option<&GridTable>;

    fn table_mut(&mut self, handle: TableHandle) -> Option<&mut GridTable>;

    fn set_cell_text(&mut self, handle: TableHandle, row: usize, col: usize, text: &str) -> Result<()> {
        let table = self
            .table_mut(handle)
            .ok_or(DocError::UnknownTable(handle))?;
        table.cell_mut(row, col)?.text = text.to_string();
        Ok(())
    }

    fn set_cell_style(
        &mut self,
        handle: TableHandle,
        row: usize,
        col: usize,
        style: CellStyle,
    ) -> Result<()> {
        let table = self
            .table_mut(handle)
            .ok_or(DocError::UnknownTable(handle))?;
        table.cell_mut(row, col)?.style = style;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders [`TableSpec`]s into any [`TableSink`] with one fixed style.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    style: StyleProfile,
}

impl TableRenderer {
    pub fn new(style: StyleProfile) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleProfile {
        &self.style
    }

    /// Append `spec` to `sink` as a styled grid.
    ///
    /// The spec is validated first, so a malformed spec never reaches the
    /// sink. Rendering the same spec twice appends two tables.
    pub fn render<S>(&self, spec: &TableSpec, sink: &mut S) -> Result<TableHandle>
    where
        S: TableSink + ?Sized,
    {
        spec.validate()?;

        let shape = TableShape {
            rows: spec.rows.len() + 1,
            columns: spec.column_count(),
            column_widths: spec.column_widths.clone(),
        };
        debug!(rows = shape.rows, columns = shape.columns, "rendering table");
        let handle = sink.add_table(shape, &self.style)?;

        let header = CellStyle::header(&self.style);
        for (col, text) in spec.headers.iter().enumerate() {
            sink.set_cell_text(handle, 0, col, text)?;
            sink.set_cell_style(handle, 0, col, header)?;
        }

        let body = CellStyle::body();
        for (row_idx, row) in spec.rows.iter().enumerate() {
            for (col, text) in row.iter().enumerate() {
                sink.set_cell_text(handle, row_idx + 1, col, text)?;
                sink.set_cell_style(handle, row_idx + 1, col, body)?;
            }
        }

        Ok(handle)
    }
}

use docx_rs::*;
use std::io::Cursor;
use tracing::debug;

use crate::error::{DocError, Result};
use crate::table::{GridTable, HorizontalAlign, StyleProfile, TableHandle, TableShape, TableSink, VerticalAlign};
use crate::text::{Span, Text};

const TITLE_SIZE: f32 = 16.0;
const SUBTITLE_COLOR: &str = "646464";
const BULLET_NUMBERING_ID: usize = 1;
/// Usable width of a Letter page with 1in margins, in twips.
const TEXT_WIDTH_TWIPS: usize = 9360;

/// One block-level element of a word-processing document.
#[derive(Debug, Clone, PartialEq)]
pub enum WordBlock {
    Title(String),
    Subtitle(String),
    Heading { text: String, level: u8 },
    Paragraph(Text),
    Bullet(Text),
    Blank,
    Table(GridTable),
}

/// An in-memory word-processing document, packed to DOCX on demand.
#[derive(Debug, Clone)]
pub struct WordDocument {
    blocks: Vec<WordBlock>,
    font: &'static str,
    font_size: f32,
}

impl Default for WordDocument {
    fn default() -> Self {
        Self::new("Times New Roman", 12.0)
    }
}

impl WordDocument {
    /// Create an empty document whose normal style uses `font` at `font_size` points.
    pub fn new(font: &'static str, font_size: f32) -> Self {
        Self {
            blocks: Vec::new(),
            font,
            font_size,
        }
    }

    pub fn blocks(&self) -> &[WordBlock] {
        &self.blocks
    }

    /// Centered bold title line.
    pub fn add_title(&mut self, text: impl Into<String>) {
        self.blocks.push(WordBlock::Title(text.into()));
    }

    /// Centered gray line under the title.
    pub fn add_subtitle(&mut self, text: impl Into<String>) {
        self.blocks.push(WordBlock::Subtitle(text.into()));
    }

    /// Section heading; levels outside `1..=3` are clamped.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        self.blocks.push(WordBlock::Heading {
            text: text.into(),
            level: level.clamp(1, 3),
        });
    }

    pub fn add_paragraph(&mut self, text: impl Into<Text>) {
        self.blocks.push(WordBlock::Paragraph(text.into()));
    }

    pub fn add_bullet(&mut self, text: impl Into<Text>) {
        self.blocks.push(WordBlock::Bullet(text.into()));
    }

    /// Empty paragraph used as vertical space after tables.
    pub fn add_blank(&mut self) {
        self.blocks.push(WordBlock::Blank);
    }

    /// Pack the document into DOCX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        debug!(blocks = self.blocks.len(), "packing docx");
        let mut docx = Docx::new()
            .default_fonts(self.fonts(self.font))
            .default_size(half_points(self.font_size))
            .add_style(heading_style("Heading1", "Heading 1", 14.0))
            .add_style(heading_style("Heading2", "Heading 2", 13.0))
            .add_style(heading_style("Heading3", "Heading 3", 12.0))
            .add_abstract_numbering(
                AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                    Level::new(
                        0,
                        Start::new(1),
                        NumberFormat::new("bullet"),
                        LevelText::new("\u{2022}"),
                        LevelJc::new("left"),
                    )
                    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
                ),
            )
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        for block in &self.blocks {
            docx = match block {
                WordBlock::Title(text) => {
                    let run = self.run(text, TITLE_SIZE).bold();
                    docx.add_paragraph(Paragraph::new().add_run(run).align(AlignmentType::Center))
                }
                WordBlock::Subtitle(text) => {
                    let run = self.run(text, self.font_size).color(SUBTITLE_COLOR);
                    docx.add_paragraph(Paragraph::new().add_run(run).align(AlignmentType::Center))
                }
                WordBlock::Heading { text, level } => {
                    let run = Run::new().add_text(text.as_str()).bold().fonts(self.fonts(self.font));
                    docx.add_paragraph(
                        Paragraph::new()
                            .add_run(run)
                            .style(&format!("Heading{level}")),
                    )
                }
                WordBlock::Paragraph(text) => docx.add_paragraph(self.rich_paragraph(text)),
                WordBlock::Bullet(text) => docx.add_paragraph(
                    self.rich_paragraph(text)
                        .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0)),
                ),
                WordBlock::Blank => docx.add_paragraph(Paragraph::new()),
                WordBlock::Table(table) => docx.add_table(self.docx_table(table)),
            };
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| DocError::Package(format!("Failed to pack DOCX: {e}")))?;

        Ok(buf.into_inner())
    }

    fn fonts(&self, family: &str) -> RunFonts {
        RunFonts::new().ascii(family).hi_ansi(family).cs(family)
    }

    fn run(&self, text: &str, size: f32) -> Run {
        Run::new()
            .add_text(text)
            .size(half_points(size))
            .fonts(self.fonts(self.font))
    }

    fn span_run(&self, span: &Span) -> Run {
        let mut run = Run::new().add_text(span.text.as_str()).fonts(self.fonts(self.font));
        if span.bold {
            run = run.bold();
        }
        run
    }

    fn rich_paragraph(&self, text: &Text) -> Paragraph {
        text.spans()
            .iter()
            .fold(Paragraph::new(), |p, span| p.add_run(self.span_run(span)))
    }

    fn docx_table(&self, grid: &GridTable) -> Table {
        let style = grid.style();
        let align = match style.align {
            HorizontalAlign::Left => AlignmentType::Left,
            HorizontalAlign::Center => AlignmentType::Center,
            HorizontalAlign::Right => AlignmentType::Right,
        };
        let valign = match style.valign {
            VerticalAlign::Top => VAlignType::Top,
            VerticalAlign::Middle => VAlignType::Center,
            VerticalAlign::Bottom => VAlignType::Bottom,
        };

        let rows = grid
            .rows()
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|cell| {
                        let mut run = Run::new()
                            .size(half_points(style.font_size))
                            .fonts(self.fonts(style.font_family));
                        for (i, line) in cell.text.split('\n').enumerate() {
                            if i > 0 {
                                run = run.add_break(BreakType::TextWrapping);
                            }
                            run = run.add_text(line);
                        }
                        if cell.style.bold {
                            run = run.bold();
                        }
                        let mut tc = TableCell::new()
                            .add_paragraph(Paragraph::new().add_run(run).align(align))
                            .vertical_align(valign);
                        if let Some(bg) = cell.style.background {
                            tc = tc.shading(Shading::new().shd_type(ShdType::Clear).fill(bg.to_hex()));
                        }
                        tc
                    })
                    .collect();
                TableRow::new(cells)
            })
            .collect();

        let pad = style.padding;
        Table::new(rows)
            .set_grid(grid_twips(grid))
            .align(TableAlignmentType::Left)
            .set_borders(borders(style))
            .margins(TableCellMargins::new().margin(
                twips(pad.top),
                twips(pad.right),
                twips(pad.bottom),
                twips(pad.left),
            ))
    }
}

impl TableSink for WordDocument {
    fn add_table(&mut self, shape: TableShape, style: &StyleProfile) -> Result<TableHandle> {
        self.blocks.push(WordBlock::Table(GridTable::new(shape, style)));
        Ok(TableHandle(self.blocks.len() - 1))
    }

    fn table(&self, handle: TableHandle) -> Option<&GridTable> {
        match self.blocks.get(handle.0) {
            Some(WordBlock::Table(table)) => Some(table),
            _ => None,
        }
    }

    fn table_mut(&mut self, handle: TableHandle) -> Option<&mut GridTable> {
        match self.blocks.get_mut(handle.0) {
            Some(WordBlock::Table(table)) => Some(table),
            _ => None,
        }
    }
}

fn heading_style(id: &str, name: &str, size: f32) -> Style {
    Style::new(id, StyleType::Paragraph)
        .name(name)
        .size(half_points(size))
        .bold()
}

fn borders(style: &StyleProfile) -> TableBorders {
    // Border size is expressed in eighths of a point.
    let size = (style.border_width * 8.0).round().max(2.0) as usize;
    let color = style.border_color.to_hex();
    [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
        TableBorderPosition::InsideH,
        TableBorderPosition::InsideV,
    ]
    .into_iter()
    .fold(TableBorders::new(), |borders, position| {
        borders.set(
            TableBorder::new(position)
                .border_type(BorderType::Single)
                .size(size)
                .color(color.clone()),
        )
    })
}

fn grid_twips(grid: &GridTable) -> Vec<usize> {
    match grid.column_widths() {
        Some(widths) => widths.iter().map(|w| twips(*w)).collect(),
        None => {
            let cols = grid.column_count().max(1);
            vec![TEXT_WIDTH_TWIPS / cols; cols]
        }
    }
}

fn half_points(points: f32) -> usize {
    (points * 2.0).round() as usize
}

fn twips(points: f32) -> usize {
    (points * 20.0).round() as usize
}

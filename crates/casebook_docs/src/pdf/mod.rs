//! Paginated PDF report built from a flow of paragraphs, tables and boxed
//! slide frames.

mod layout;
pub mod metrics;
pub mod writer;

pub use layout::{FRAME_HEIGHT, FRAME_WIDTH, MARGIN};
pub use metrics::FontFamily;
pub use writer::{Op, PAGE_HEIGHT, PAGE_WIDTH, Page, PdfBuilder};

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::table::{GridTable, HorizontalAlign, Rgb, StyleProfile, TableHandle, TableShape, TableSink};
use crate::text::Text;

/// Typography for one kind of paragraph. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub align: HorizontalAlign,
    pub color: Rgb,
    pub underline: bool,
    pub bold: bool,
    pub italic: bool,
    pub left_indent: f32,
    pub bullet_indent: f32,
}

impl ParagraphStyle {
    /// Plain left-aligned black text with 1.2× leading.
    pub const fn sized(font_size: f32) -> Self {
        Self {
            font_size,
            leading: font_size * 1.2,
            space_before: 0.0,
            space_after: 0.0,
            align: HorizontalAlign::Left,
            color: Rgb::BLACK,
            underline: false,
            bold: false,
            italic: false,
            left_indent: 0.0,
            bullet_indent: 0.0,
        }
    }

    pub const fn title() -> Self {
        let mut s = Self::sized(16.0);
        s.bold = true;
        s.align = HorizontalAlign::Center;
        s.space_after = 4.0;
        s
    }

    pub const fn subtitle() -> Self {
        let mut s = Self::sized(12.0);
        s.align = HorizontalAlign::Center;
        s.color = Rgb::GRAY;
        s.space_after = 20.0;
        s
    }

    /// Section heading, underlined.
    pub const fn h1() -> Self {
        let mut s = Self::sized(13.0);
        s.bold = true;
        s.underline = true;
        s.space_before = 14.0;
        s.space_after = 6.0;
        s
    }

    pub const fn h2() -> Self {
        let mut s = Self::sized(11.0);
        s.bold = true;
        s.space_before = 10.0;
        s.space_after = 4.0;
        s
    }

    pub const fn body() -> Self {
        let mut s = Self::sized(11.0);
        s.leading = 16.0;
        s.space_after = 6.0;
        s
    }

    pub const fn bullet() -> Self {
        let mut s = Self::sized(11.0);
        s.leading = 15.0;
        s.space_after = 4.0;
        s.left_indent = 20.0;
        s.bullet_indent = 8.0;
        s
    }

    pub const fn slide_title() -> Self {
        let mut s = Self::sized(16.0);
        s.bold = true;
        s.color = Rgb::BLUE;
        s.space_after = 8.0;
        s
    }

    pub const fn slide_body() -> Self {
        let mut s = Self::sized(10.0);
        s.leading = 14.0;
        s.space_after = 4.0;
        s
    }

    pub const fn slide_bullet() -> Self {
        let mut s = Self::sized(10.0);
        s.leading = 13.0;
        s.space_after = 3.0;
        s.left_indent = 16.0;
        s.bullet_indent = 6.0;
        s
    }

    pub const fn slide_h2() -> Self {
        let mut s = Self::sized(11.0);
        s.bold = true;
        s.space_before = 6.0;
        s.space_after = 3.0;
        s
    }

    /// Italic gray line under the cover-slide title.
    pub const fn cover_tagline() -> Self {
        let mut s = Self::sized(13.0);
        s.italic = true;
        s.align = HorizontalAlign::Center;
        s.color = Rgb::GRAY;
        s.space_after = 20.0;
        s
    }

    pub const fn cover_note() -> Self {
        let mut s = Self::sized(11.0);
        s.align = HorizontalAlign::Center;
        s.color = Rgb::GRAY;
        s
    }
}

/// One element of the document flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Paragraph {
        text: Text,
        style: ParagraphStyle,
        bullet: bool,
    },
    Spacer(f32),
    Table(TableHandle),
    PageBreak,
    Frame(SlideFrame),
}

/// A fixed-size boxed panel standing in for a presentation slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideFrame {
    pub title: String,
    pub body: Vec<Flowable>,
}

/// A PDF document under construction.
///
/// While a frame is open (inside [`PdfFlow::add_frame`]) every added
/// flowable, tables included, lands inside that frame.
#[derive(Debug, Clone)]
pub struct PdfFlow {
    title: String,
    family: FontFamily,
    flowables: Vec<Flowable>,
    open_frame: Option<SlideFrame>,
    tables: Vec<GridTable>,
}

impl PdfFlow {
    /// A Times-set document with the given info-dictionary title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            family: FontFamily::TIMES,
            flowables: Vec::new(),
            open_frame: None,
            tables: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn flowables(&self) -> &[Flowable] {
        &self.flowables
    }

    fn push(&mut self, flowable: Flowable) {
        match &mut self.open_frame {
            Some(frame) => frame.body.push(flowable),
            None => self.flowables.push(flowable),
        }
    }

    pub fn add_paragraph(&mut self, text: impl Into<Text>, style: &ParagraphStyle) {
        self.push(Flowable::Paragraph {
            text: text.into(),
            style: *style,
            bullet: false,
        });
    }

    pub fn add_bullet(&mut self, text: impl Into<Text>, style: &ParagraphStyle) {
        self.push(Flowable::Paragraph {
            text: text.into(),
            style: *style,
            bullet: true,
        });
    }

    pub fn add_spacer(&mut self, height: f32) {
        self.push(Flowable::Spacer(height));
    }

    /// Start a new page. Ignored inside a frame.
    pub fn add_page_break(&mut self) {
        self.push(Flowable::PageBreak);
    }

    /// Add a slide frame whose body is filled by `build`.
    ///
    /// Frames do not nest: a frame added from inside `build` goes to the
    /// top level ahead of the enclosing one. If `build` fails the partial
    /// frame is discarded.
    pub fn add_frame<F>(&mut self, title: impl Into<String>, build: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let outer = self.open_frame.replace(SlideFrame {
            title: title.into(),
            body: Vec::new(),
        });
        let result = build(self);
        let frame = std::mem::replace(&mut self.open_frame, outer);
        result?;
        if let Some(frame) = frame {
            self.flowables.push(Flowable::Frame(frame));
        }
        Ok(())
    }

    /// Lay the flow out into positioned pages.
    pub fn layout(&self) -> Vec<Page> {
        layout::Layouter::new(self.family, &self.tables).run(&self.flowables)
    }

    /// Serialize the document to PDF bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pages = self.layout();
        debug!(pages = pages.len(), tables = self.tables.len(), "laying out pdf");
        Ok(PdfBuilder::new(&pages, &self.title)
            .created_at(Utc::now())
            .build())
    }
}

impl TableSink for PdfFlow {
    fn add_table(&mut self, shape: TableShape, style: &StyleProfile) -> Result<TableHandle> {
        self.tables.push(GridTable::new(shape, style));
        let handle = TableHandle(self.tables.len() - 1);
        self.push(Flowable::Table(handle));
        Ok(handle)
    }

    fn table(&self, handle: TableHandle) -> Option<&GridTable> {
        self.tables.get(handle.0)
    }

    fn table_mut(&mut self, handle: TableHandle) -> Option<&mut GridTable> {
        self.tables.get_mut(handle.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;
    use crate::table::{TableRenderer, TableSpec};

    fn page_text(page: &Page) -> String {
        page.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_frame_collects_its_body() {
        let mut flow = PdfFlow::new("Deck");
        flow.add_paragraph("before", &ParagraphStyle::body());
        flow.add_frame("Porter's Five Forces", |f| {
            f.add_bullet("Rivalry: High", &ParagraphStyle::slide_bullet());
            TableRenderer::new(StyleProfile::pdf_report())
                .render(&TableSpec::new(["Force", "Level"], [["Rivalry", "High"]]), f)?;
            Ok(())
        })
        .unwrap();
        flow.add_paragraph("after", &ParagraphStyle::body());

        let flowables = flow.flowables();
        assert_eq!(flowables.len(), 3);
        let Flowable::Frame(frame) = &flowables[1] else {
            panic!("expected a frame, got {:?}", flowables[1]);
        };
        assert_eq!(frame.title, "Porter's Five Forces");
        assert_eq!(frame.body.len(), 2);
        assert!(matches!(frame.body[1], Flowable::Table(TableHandle(0))));
    }

    #[test]
    fn test_failed_frame_is_discarded() {
        let mut flow = PdfFlow::new("Deck");
        let err = flow
            .add_frame("Broken", |f| {
                f.add_paragraph("partial", &ParagraphStyle::slide_body());
                Err(DocError::EmptyHeader)
            })
            .unwrap_err();
        assert!(matches!(err, DocError::EmptyHeader));
        assert!(flow.flowables().is_empty());

        flow.add_paragraph("top level", &ParagraphStyle::body());
        assert_eq!(flow.flowables().len(), 1);
    }

    #[test]
    fn test_table_cells_are_drawn_with_header_shading() {
        let mut flow = PdfFlow::new("Report");
        let spec = TableSpec::new(["Mode", "Risk"], [["Exporting", "Low"]])
            .with_column_widths([200.0, 100.0]);
        TableRenderer::new(StyleProfile::pdf_report())
            .render(&spec, &mut flow)
            .unwrap();

        let pages = flow.layout();
        assert_eq!(pages.len(), 1);
        let ops = &pages[0].ops;

        let fills: Vec<Rgb> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, [Rgb::LIGHT_BLUE, Rgb::LIGHT_BLUE]);

        let strokes = ops.iter().filter(|op| matches!(op, Op::Stroke { .. })).count();
        assert_eq!(strokes, 4);

        let header_font = ops.iter().find_map(|op| match op {
            Op::Text { text, font, .. } if text == "Mode" => Some(*font),
            _ => None,
        });
        assert_eq!(header_font, Some("Times-Bold"));
        let body_font = ops.iter().find_map(|op| match op {
            Op::Text { text, font, .. } if text == "Exporting" => Some(*font),
            _ => None,
        });
        assert_eq!(body_font, Some("Times-Roman"));
    }

    #[test]
    fn test_rendered_table_lands_in_flow() {
        let mut flow = PdfFlow::new("Report");
        let renderer = TableRenderer::new(StyleProfile::pdf_report());
        let spec = TableSpec::new(["A", "B"], [["x", "y"], ["1", "2"]]);
        let handle = renderer.render(&spec, &mut flow).unwrap();

        let grid = flow.table(handle).unwrap();
        assert_eq!((grid.row_count(), grid.column_count()), (3, 2));
        assert!(grid.cell(0, 0).unwrap().style.bold);
        assert!(!grid.cell(1, 0).unwrap().style.bold);
        assert_eq!(grid.cell(2, 1).unwrap().text, "2");
        assert_eq!(flow.flowables(), [Flowable::Table(handle)]);
    }

    #[test]
    fn test_shape_mismatch_leaves_flow_untouched() {
        let mut flow = PdfFlow::new("Report");
        let renderer = TableRenderer::new(StyleProfile::pdf_report());
        let spec = TableSpec::new(["A", "B"], [vec!["x"]]);
        let err = renderer.render(&spec, &mut flow).unwrap_err();
        assert!(matches!(err, DocError::ShapeMismatch { row: 0, expected: 2, found: 1 }));
        assert!(flow.flowables().is_empty());
        assert!(flow.table(TableHandle(0)).is_none());
    }

    fn numbered_rows(count: usize) -> TableSpec {
        let rows: Vec<Vec<String>> = (0..count)
            .map(|i| vec![format!("row-{i:02}"), format!("score-{i:02}")])
            .collect();
        TableSpec::new(["Country", "Score"], rows)
    }

    /// The `BT ... ET` text object that shows `text`.
    fn text_object<'a>(content: &'a str, text: &str) -> &'a str {
        let shown = format!("({text}) Tj");
        content
            .split("BT\n")
            .find(|block| block.contains(&shown))
            .unwrap_or_else(|| panic!("{text} not drawn"))
    }

    #[test]
    fn test_written_rows_keep_order_and_only_header_is_bold() {
        let mut flow = PdfFlow::new("Report");
        TableRenderer::new(StyleProfile::pdf_report())
            .render(&numbered_rows(12), &mut flow)
            .unwrap();
        let bytes = flow.to_bytes().unwrap();
        let content = String::from_utf8_lossy(&bytes);

        // Fonts are numbered by first use: the header sets F1 (bold).
        assert!(content.contains("/BaseFont /Times-Bold"));
        assert!(text_object(&content, "Country").contains("/F1 "));
        let mut last = 0;
        for i in 0..12 {
            let cell = format!("row-{i:02}");
            let at = content.find(&format!("({cell}) Tj")).unwrap();
            assert!(at > last, "{cell} out of place");
            last = at;
            assert!(text_object(&content, &cell).contains("/F2 "), "{cell} is bold");
        }
    }

    #[test]
    fn test_rendering_twice_adds_two_identical_tables() {
        let mut flow = PdfFlow::new("Report");
        let renderer = TableRenderer::new(StyleProfile::pdf_report());
        let spec = numbered_rows(2);
        let first = renderer.render(&spec, &mut flow).unwrap();
        let second = renderer.render(&spec, &mut flow).unwrap();

        assert_eq!((first, second), (TableHandle(0), TableHandle(1)));
        assert_eq!(flow.table(first), flow.table(second));
        assert_eq!(flow.flowables(), [Flowable::Table(first), Flowable::Table(second)]);

        let bytes = flow.to_bytes().unwrap();
        let content = String::from_utf8_lossy(&bytes);
        assert_eq!(content.matches("(Country) Tj").count(), 2);
        assert_eq!(content.matches("(row-01) Tj").count(), 2);
    }

    #[test]
    fn test_page_break_starts_new_page() {
        let mut flow = PdfFlow::new("Report");
        flow.add_paragraph("first", &ParagraphStyle::body());
        flow.add_page_break();
        flow.add_paragraph("**Slides**", &ParagraphStyle::title());

        let pages = flow.layout();
        assert_eq!(pages.len(), 2);
        assert_eq!(page_text(&pages[1]), "Slides");
    }

    #[test]
    fn test_leading_page_break_is_ignored() {
        let mut flow = PdfFlow::new("Report");
        flow.add_page_break();
        flow.add_paragraph("only", &ParagraphStyle::body());
        assert_eq!(flow.layout().len(), 1);
    }

    #[test]
    fn test_centered_title_and_underlined_heading() {
        let mut flow = PdfFlow::new("Report");
        flow.add_paragraph("True Fruits", &ParagraphStyle::title());
        flow.add_paragraph("Question 1", &ParagraphStyle::h1());

        let pages = flow.layout();
        let ops = &pages[0].ops;
        let title_x = ops.iter().find_map(|op| match op {
            Op::Text { text, x, .. } if text == "True Fruits" => Some(*x),
            _ => None,
        });
        let title_x = title_x.unwrap();
        let width = metrics::text_width("Times-Bold", 16.0, "True Fruits");
        let expected = MARGIN + (PAGE_WIDTH - 2.0 * MARGIN - width) / 2.0;
        assert!((title_x - expected).abs() < 0.01);

        assert_eq!(ops.iter().filter(|op| matches!(op, Op::Line { .. })).count(), 1);
    }

    #[test]
    fn test_bullet_glyph_precedes_text() {
        let mut flow = PdfFlow::new("Report");
        flow.add_bullet("Market fit", &ParagraphStyle::bullet());
        let pages = flow.layout();
        match &pages[0].ops[0] {
            Op::Text { text, x, .. } => {
                assert_eq!(text, "\u{2022}");
                assert!((x - (MARGIN + 8.0)).abs() < 0.01);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn test_to_bytes_is_pdf() {
        let mut flow = PdfFlow::new("True Fruits");
        flow.add_paragraph("caf\u{e9} \u{2022} (draft)", &ParagraphStyle::body());
        let bytes = flow.to_bytes().unwrap();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.starts_with("%PDF-1.4"));
        assert!(content.contains("/Title (True Fruits)"));
        assert!(content.contains("\\(draft\\)"));
    }
}

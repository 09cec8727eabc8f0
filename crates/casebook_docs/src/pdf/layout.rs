//! Flow layout: turns flowables into positioned page operations.
//!
//! Content runs top to bottom inside the page margins. Paragraphs break
//! between lines, tables between rows, and slide frames move to the next
//! page whole. Nothing is split inside a frame.

use super::metrics::{FontFamily, text_width};
use super::writer::{Op, PAGE_HEIGHT, PAGE_WIDTH, Page};
use super::{Flowable, ParagraphStyle, SlideFrame};
use crate::table::{GridTable, HorizontalAlign, Rgb, VerticalAlign};
use crate::text::Text;

pub const MARGIN: f32 = 72.0;
pub const FRAME_WIDTH: f32 = 6.3 * 72.0;
pub const FRAME_HEIGHT: f32 = 3.5 * 72.0;
const FRAME_PADDING: (f32, f32, f32) = (14.0, 14.0, 10.0); // sides, top, bottom
const BULLET: &str = "\u{2022}";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fragment {
    pub font: &'static str,
    pub text: String,
    pub width: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Line {
    pub fragments: Vec<Fragment>,
    pub width: f32,
}

impl Line {
    fn push(&mut self, font: &'static str, text: &str, width: f32) {
        match self.fragments.last_mut() {
            Some(last) if last.font == font => {
                last.text.push_str(text);
                last.width += width;
            }
            _ => self.fragments.push(Fragment {
                font,
                text: text.to_string(),
                width,
            }),
        }
        self.width += width;
    }
}

/// Greedy word wrap. Always yields at least one line; `\n` forces a break
/// and words wider than `max_width` overflow on a line of their own.
pub(crate) fn wrap(
    text: &Text,
    family: FontFamily,
    force_bold: bool,
    force_italic: bool,
    size: f32,
    max_width: f32,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();
    let mut pending_space: Option<&'static str> = None;

    for span in text.spans() {
        let font = family.face(span.bold || force_bold, force_italic);
        for (segment_idx, segment) in span.text.split('\n').enumerate() {
            if segment_idx > 0 {
                lines.push(std::mem::take(&mut line));
                pending_space = None;
            }
            for (word_idx, word) in segment.split(' ').enumerate() {
                if word_idx > 0 {
                    pending_space = Some(font);
                }
                if word.is_empty() {
                    continue;
                }
                let word_width = text_width(font, size, word);
                let space_width = pending_space.map_or(0.0, |f| text_width(f, size, " "));
                if !line.fragments.is_empty() && line.width + space_width + word_width > max_width {
                    lines.push(std::mem::take(&mut line));
                } else if let Some(space_font) = pending_space {
                    if !line.fragments.is_empty() {
                        line.push(space_font, " ", space_width);
                    }
                }
                pending_space = None;
                line.push(font, word, word_width);
            }
        }
    }
    lines.push(line);
    lines
}

pub(crate) struct Layouter<'a> {
    family: FontFamily,
    tables: &'a [GridTable],
    pages: Vec<Page>,
    x0: f32,
    width: f32,
    y: f32,
    /// True until something is placed on the current page or frame.
    fresh: bool,
    paginate: bool,
}

impl<'a> Layouter<'a> {
    pub fn new(family: FontFamily, tables: &'a [GridTable]) -> Self {
        Self {
            family,
            tables,
            pages: vec![Page::default()],
            x0: MARGIN,
            width: PAGE_WIDTH - 2.0 * MARGIN,
            y: PAGE_HEIGHT - MARGIN,
            fresh: true,
            paginate: true,
        }
    }

    pub fn run(mut self, flowables: &[Flowable]) -> Vec<Page> {
        for flowable in flowables {
            self.flowable(flowable);
        }
        self.pages
    }

    fn emit(&mut self, op: Op) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
        self.fresh = false;
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = PAGE_HEIGHT - MARGIN;
        self.fresh = true;
    }

    /// Break the page if `height` does not fit below the cursor.
    fn ensure(&mut self, height: f32) {
        if self.paginate && !self.fresh && self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn flowable(&mut self, flowable: &Flowable) {
        match flowable {
            Flowable::Paragraph {
                text,
                style,
                bullet,
            } => self.paragraph(text, style, *bullet),
            Flowable::Spacer(height) => self.y -= height,
            Flowable::Table(handle) => {
                let tables = self.tables;
                if let Some(grid) = tables.get(handle.0) {
                    self.table(grid);
                }
            }
            Flowable::PageBreak => {
                if self.paginate && !self.fresh {
                    self.new_page();
                }
            }
            Flowable::Frame(frame) => self.frame(frame),
        }
    }

    fn paragraph(&mut self, text: &Text, style: &ParagraphStyle, bullet: bool) {
        if !self.fresh {
            self.y -= style.space_before;
        }
        let x = self.x0 + style.left_indent;
        let width = self.width - style.left_indent;
        let lines = wrap(text, self.family, style.bold, style.italic, style.font_size, width);

        for (i, line) in lines.iter().enumerate() {
            self.ensure(style.leading);
            let baseline = self.y - style.font_size;
            if bullet && i == 0 {
                self.emit(Op::Text {
                    x: self.x0 + style.bullet_indent,
                    y: baseline,
                    font: self.family.regular,
                    size: style.font_size,
                    color: style.color,
                    text: BULLET.to_string(),
                });
            }
            let line_x = self.emit_line(line, x, width, baseline, style.align, style.font_size, style.color);
            if style.underline && line.width > 0.0 {
                self.emit(Op::Line {
                    from: (line_x, baseline - 1.5),
                    to: (line_x + line.width, baseline - 1.5),
                    width: 0.5,
                    color: style.color,
                });
            }
            self.y -= style.leading;
        }
        self.y -= style.space_after;
    }

    /// Place one wrapped line and return its starting x.
    #[allow(clippy::too_many_arguments)]
    fn emit_line(
        &mut self,
        line: &Line,
        x: f32,
        width: f32,
        baseline: f32,
        align: HorizontalAlign,
        size: f32,
        color: Rgb,
    ) -> f32 {
        let start = match align {
            HorizontalAlign::Left => x,
            HorizontalAlign::Center => x + (width - line.width) / 2.0,
            HorizontalAlign::Right => x + width - line.width,
        };
        let mut cursor = start;
        for fragment in &line.fragments {
            self.emit(Op::Text {
                x: cursor,
                y: baseline,
                font: fragment.font,
                size,
                color,
                text: fragment.text.clone(),
            });
            cursor += fragment.width;
        }
        self.fresh = false;
        start
    }

    fn table(&mut self, grid: &GridTable) {
        let columns = grid.column_count();
        if columns == 0 {
            return;
        }
        let style = *grid.style();
        let family = FontFamily::by_name(style.font_family).unwrap_or(self.family);
        let widths: Vec<f32> = match grid.column_widths() {
            Some(widths) => widths.to_vec(),
            None => vec![self.width / columns as f32; columns],
        };
        let pad = style.padding;
        let leading = style.font_size * 1.2;

        for row in grid.rows() {
            let wrapped: Vec<Vec<Line>> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    wrap(
                        &Text::plain(cell.text.as_str()),
                        family,
                        cell.style.bold,
                        false,
                        style.font_size,
                        width - pad.left - pad.right,
                    )
                })
                .collect();
            let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1);
            let height = line_count as f32 * leading + pad.top + pad.bottom;

            self.ensure(height);
            let top = self.y;
            let bottom = top - height;

            let mut x = self.x0;
            for (cell, width) in row.iter().zip(&widths) {
                if let Some(bg) = cell.style.background {
                    self.emit(Op::Fill {
                        x,
                        y: bottom,
                        w: *width,
                        h: height,
                        color: bg,
                    });
                }
                x += width;
            }

            let mut x = self.x0;
            for (lines, width) in wrapped.iter().zip(&widths) {
                let inner = height - pad.top - pad.bottom;
                let content = lines.len() as f32 * leading;
                let offset = match style.valign {
                    VerticalAlign::Top => 0.0,
                    VerticalAlign::Middle => (inner - content) / 2.0,
                    VerticalAlign::Bottom => inner - content,
                };
                let mut baseline = top - pad.top - offset - style.font_size;
                for line in lines {
                    self.emit_line(
                        line,
                        x + pad.left,
                        width - pad.left - pad.right,
                        baseline,
                        style.align,
                        style.font_size,
                        style.text_color,
                    );
                    baseline -= leading;
                }
                x += width;
            }

            let mut x = self.x0;
            for width in &widths {
                self.emit(Op::Stroke {
                    x,
                    y: bottom,
                    w: *width,
                    h: height,
                    width: style.border_width,
                    color: style.border_color,
                });
                x += width;
            }

            self.y = bottom;
        }
    }

    fn frame(&mut self, frame: &SlideFrame) {
        self.ensure(FRAME_HEIGHT);
        let (side, top_pad, _bottom_pad) = FRAME_PADDING;
        let x = self.x0 + ((self.width - FRAME_WIDTH) / 2.0).max(0.0);
        let top = self.y;

        self.emit(Op::Fill {
            x,
            y: top - FRAME_HEIGHT,
            w: FRAME_WIDTH,
            h: FRAME_HEIGHT,
            color: Rgb::WHITE,
        });
        self.emit(Op::Stroke {
            x,
            y: top - FRAME_HEIGHT,
            w: FRAME_WIDTH,
            h: FRAME_HEIGHT,
            width: 1.0,
            color: Rgb::LIGHT_GRAY,
        });

        let saved = (self.x0, self.width, self.paginate);
        self.x0 = x + side;
        self.width = FRAME_WIDTH - 2.0 * side;
        self.y = top - top_pad;
        self.paginate = false;
        self.fresh = true;

        self.paragraph(&Text::plain(frame.title.as_str()), &ParagraphStyle::slide_title(), false);
        self.y -= 4.0;
        for flowable in &frame.body {
            self.flowable(flowable);
        }

        (self.x0, self.width, self.paginate) = saved;
        self.y = top - FRAME_HEIGHT;
        self.fresh = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &Line) -> String {
        line.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = wrap(&Text::plain("Good for now"), FontFamily::TIMES, false, false, 10.0, 500.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(words(&lines[0]), "Good for now");
    }

    #[test]
    fn test_wrap_breaks_at_width() {
        let text = Text::plain("aaaa bbbb cccc dddd");
        let one_word = text_width("Times-Roman", 10.0, "aaaa bbbb");
        let lines = wrap(&text, FontFamily::TIMES, false, false, 10.0, one_word + 1.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(words(&lines[0]), "aaaa bbbb");
        assert_eq!(words(&lines[1]), "cccc dddd");
        assert!(lines.iter().all(|l| l.width <= one_word + 1.0));
    }

    #[test]
    fn test_wrap_hard_breaks_and_empty() {
        let lines = wrap(&Text::plain("- one\n- two"), FontFamily::TIMES, false, false, 9.0, 400.0);
        assert_eq!(lines.len(), 2);
        let empty = wrap(&Text::plain(""), FontFamily::TIMES, false, false, 9.0, 400.0);
        assert_eq!(empty.len(), 1);
        assert!(empty[0].fragments.is_empty());
    }

    #[test]
    fn test_wrap_keeps_bold_lead_in_separate() {
        let text = Text::markup("**Rivalry (High):** Innocent has Coca-Cola");
        let lines = wrap(&text, FontFamily::TIMES, false, false, 11.0, 500.0);
        assert_eq!(lines.len(), 1);
        let fonts: Vec<&str> = lines[0].fragments.iter().map(|f| f.font).collect();
        assert_eq!(fonts, ["Times-Bold", "Times-Roman"]);
        assert_eq!(words(&lines[0]), "Rivalry (High): Innocent has Coca-Cola");
    }

    #[test]
    fn test_long_paragraphs_paginate() {
        let flowables: Vec<Flowable> = (0..120)
            .map(|i| Flowable::Paragraph {
                text: Text::plain(format!("Paragraph {i}")),
                style: ParagraphStyle::body(),
                bullet: false,
            })
            .collect();
        let pages = Layouter::new(FontFamily::TIMES, &[]).run(&flowables);
        assert!(pages.len() > 1);
        for page in &pages {
            for op in &page.ops {
                if let Op::Text { y, .. } = op {
                    assert!(*y >= MARGIN - 12.0);
                }
            }
        }
    }

    #[test]
    fn test_frames_do_not_split() {
        let frame = || {
            Flowable::Frame(SlideFrame {
                title: "Slide".into(),
                body: vec![Flowable::Spacer(10.0)],
            })
        };
        let flowables = vec![frame(), frame(), frame()];
        let pages = Layouter::new(FontFamily::TIMES, &[]).run(&flowables);
        // Two 252pt frames fit in 648pt of usable height, the third does not.
        assert_eq!(pages.len(), 2);
    }
}

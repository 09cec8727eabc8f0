//! Raw PDF 1.4 serialization of laid-out pages.

use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::table::Rgb;

/// US Letter in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

/// A positioned drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        x: f32,
        y: f32,
        font: &'static str,
        size: f32,
        color: Rgb,
        text: String,
    },
    Fill {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    Stroke {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        width: f32,
        color: Rgb,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

/// Escape a string for a PDF literal, mapping to WinAnsiEncoding.
///
/// Characters outside the encoding become `?`.
pub fn pdf_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(ch),
            _ => match win_ansi(ch) {
                Some(byte) => {
                    let _ = write!(out, "\\{byte:03o}");
                }
                None => out.push('?'),
            },
        }
    }
    out
}

fn win_ansi(ch: char) -> Option<u8> {
    let byte = match ch {
        '\u{20AC}' => 0x80,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{00A0}'..='\u{00FF}' => ch as u32 as u8,
        _ => return None,
    };
    Some(byte)
}

fn color_op(color: Rgb, op: &str) -> String {
    let (r, g, b) = color.to_unit();
    format!("{r:.3} {g:.3} {b:.3} {op}\n")
}

/// Assembles pages into a PDF file.
pub struct PdfBuilder<'a> {
    pages: &'a [Page],
    title: &'a str,
    created: Option<DateTime<Utc>>,
}

impl<'a> PdfBuilder<'a> {
    pub fn new(pages: &'a [Page], title: &'a str) -> Self {
        Self {
            pages,
            title,
            created: None,
        }
    }

    /// Stamp the info dictionary with a creation date.
    pub fn created_at(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Fonts in order of first use.
    fn fonts(&self) -> Vec<&'static str> {
        let mut fonts: Vec<&'static str> = Vec::new();
        for op in self.pages.iter().flat_map(|p| &p.ops) {
            if let Op::Text { font, .. } = op {
                if !fonts.contains(font) {
                    fonts.push(*font);
                }
            }
        }
        fonts
    }

    fn content_stream(page: &Page, font_ids: &HashMap<&'static str, usize>) -> String {
        let mut content = String::new();
        for op in &page.ops {
            match op {
                Op::Text {
                    x,
                    y,
                    font,
                    size,
                    color,
                    text,
                } => {
                    let id = font_ids.get(font).copied().unwrap_or(1);
                    content.push_str("BT\n");
                    let _ = writeln!(content, "/F{id} {size:.1} Tf");
                    content.push_str(&color_op(*color, "rg"));
                    let _ = writeln!(content, "{x:.2} {y:.2} Td");
                    let _ = writeln!(content, "({}) Tj", pdf_escape(text));
                    content.push_str("ET\n");
                }
                Op::Fill { x, y, w, h, color } => {
                    content.push_str(&color_op(*color, "rg"));
                    let _ = writeln!(content, "{x:.2} {y:.2} {w:.2} {h:.2} re f");
                }
                Op::Stroke {
                    x,
                    y,
                    w,
                    h,
                    width,
                    color,
                } => {
                    content.push_str(&color_op(*color, "RG"));
                    let _ = writeln!(content, "{width:.2} w");
                    let _ = writeln!(content, "{x:.2} {y:.2} {w:.2} {h:.2} re S");
                }
                Op::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    content.push_str(&color_op(*color, "RG"));
                    let _ = writeln!(content, "{width:.2} w");
                    let _ = writeln!(
                        content,
                        "{:.2} {:.2} m {:.2} {:.2} l S",
                        from.0, from.1, to.0, to.1
                    );
                }
            }
        }
        content
    }

    /// Build the complete PDF file as bytes.
    pub fn build(&self) -> Vec<u8> {
        let fonts = self.fonts();
        let font_ids: HashMap<&'static str, usize> =
            fonts.iter().enumerate().map(|(i, f)| (*f, i + 1)).collect();

        // 1 = catalog, 2 = page tree, then fonts, then a page/content pair
        // per page, then the info dictionary.
        let first_font = 3;
        let first_page = first_font + fonts.len();
        let info_id = first_page + 2 * self.pages.len();

        let mut pdf = String::new();
        let mut offsets: Vec<usize> = Vec::new();

        pdf.push_str("%PDF-1.4\n");

        offsets.push(pdf.len());
        pdf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        let kids: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", first_page + 2 * i))
            .collect();
        offsets.push(pdf.len());
        let _ = write!(
            pdf,
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            self.pages.len()
        );

        for (i, font) in fonts.iter().enumerate() {
            offsets.push(pdf.len());
            let _ = write!(
                pdf,
                "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{font} /Encoding /WinAnsiEncoding >>\nendobj\n",
                first_font + i
            );
        }

        let font_resources: String = fonts
            .iter()
            .enumerate()
            .map(|(i, _)| format!("/F{} {} 0 R ", i + 1, first_font + i))
            .collect();

        for (i, page) in self.pages.iter().enumerate() {
            let page_id = first_page + 2 * i;
            let content_id = page_id + 1;

            offsets.push(pdf.len());
            let _ = write!(
                pdf,
                "{page_id} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] /Contents {content_id} 0 R /Resources << /Font << {font_resources}>> >> >>\nendobj\n"
            );

            let stream = Self::content_stream(page, &font_ids);
            offsets.push(pdf.len());
            let _ = write!(
                pdf,
                "{content_id} 0 obj\n<< /Length {} >>\nstream\n{stream}\nendstream\nendobj\n",
                stream.len()
            );
        }

        let created = self
            .created
            .map(|at| format!(" /CreationDate (D:{}Z)", at.format("%Y%m%d%H%M%S")))
            .unwrap_or_default();
        offsets.push(pdf.len());
        let _ = write!(
            pdf,
            "{info_id} 0 obj\n<< /Title ({}) /Producer (casebook){created} >>\nendobj\n",
            pdf_escape(self.title)
        );

        let xref_offset = pdf.len();
        let num_objects = offsets.len() + 1; // +1 for the free entry
        let _ = write!(pdf, "xref\n0 {num_objects}\n");
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            let _ = writeln!(pdf, "{offset:010} 00000 n ");
        }

        let _ = write!(
            pdf,
            "trailer\n<< /Size {num_objects} /Root 1 0 R /Info {info_id} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        );

        pdf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_op(font: &'static str, text: &str) -> Op {
        Op::Text {
            x: 72.0,
            y: 700.0,
            font,
            size: 11.0,
            color: Rgb::BLACK,
            text: text.into(),
        }
    }

    #[test]
    fn test_pdf_escape() {
        assert_eq!(pdf_escape("hello"), "hello");
        assert_eq!(pdf_escape("(test)"), "\\(test\\)");
        assert_eq!(pdf_escape("a\\b"), "a\\\\b");
        assert_eq!(pdf_escape("\u{2022} item"), "\\225 item");
        assert_eq!(pdf_escape("caf\u{e9}"), "caf\\351");
        assert_eq!(pdf_escape("\u{4e2d}"), "?");
    }

    #[test]
    fn test_build_multi_page() {
        let pages = vec![
            Page {
                ops: vec![text_op("Times-Roman", "one"), text_op("Times-Bold", "two")],
            },
            Page {
                ops: vec![text_op("Times-Roman", "three")],
            },
        ];
        let bytes = PdfBuilder::new(&pages, "Report").build();
        let content = String::from_utf8_lossy(&bytes);

        assert!(content.starts_with("%PDF-1.4"));
        assert!(content.ends_with("%%EOF\n"));
        assert!(content.contains("/Count 2"));
        assert!(content.contains("/BaseFont /Times-Roman"));
        assert!(content.contains("/BaseFont /Times-Bold"));
        assert!(content.contains("/F2 11.0 Tf"));
        assert!(content.contains("(three) Tj"));
        assert!(content.contains("/Title (Report)"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pages = vec![Page {
            ops: vec![text_op("Times-Roman", "x")],
        }];
        let bytes = PdfBuilder::new(&pages, "T").build();
        let content = String::from_utf8_lossy(&bytes).to_string();

        let xref_at = content.find("xref\n").unwrap();
        let entries: Vec<usize> = content[xref_at..]
            .lines()
            .skip(3)
            .take_while(|l| l.ends_with(" n "))
            .map(|l| l[..10].parse().unwrap())
            .collect();
        assert!(!entries.is_empty());
        for (i, offset) in entries.iter().enumerate() {
            assert!(content[*offset..].starts_with(&format!("{} 0 obj", i + 1)));
        }
    }

    #[test]
    fn test_creation_date_in_info() {
        use chrono::TimeZone;

        let pages = vec![Page::default()];
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let bytes = PdfBuilder::new(&pages, "T").created_at(at).build();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("/CreationDate (D:20240305143000Z)"));
    }

    #[test]
    fn test_shapes_emit_operators() {
        let pages = vec![Page {
            ops: vec![
                Op::Fill {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                    color: Rgb::LIGHT_BLUE,
                },
                Op::Stroke {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                    width: 0.5,
                    color: Rgb::LIGHT_GRAY,
                },
                Op::Line {
                    from: (0.0, 0.0),
                    to: (5.0, 0.0),
                    width: 1.0,
                    color: Rgb::BLACK,
                },
            ],
        }];
        let content = String::from_utf8_lossy(&PdfBuilder::new(&pages, "T").build()).to_string();
        assert!(content.contains("re f"));
        assert!(content.contains("re S"));
        assert!(content.contains(" m "));
        assert!(content.contains("0.50 w"));
    }
}

//! Glyph advance widths for the Times faces the PDF back end uses.
//!
//! Widths are in 1/1000 em for the printable ASCII range `0x20..=0x7E`.
//! Italic faces reuse the upright table; the difference is below a point at
//! report sizes.

/// A base-14 family and its four faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamily {
    pub regular: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
    pub bold_italic: &'static str,
}

impl FontFamily {
    pub const TIMES: FontFamily = FontFamily {
        regular: "Times-Roman",
        bold: "Times-Bold",
        italic: "Times-Italic",
        bold_italic: "Times-BoldItalic",
    };

    /// Look up a family by the name of any of its faces.
    pub fn by_name(name: &str) -> Option<FontFamily> {
        let f = Self::TIMES;
        [f.regular, f.bold, f.italic, f.bold_italic]
            .contains(&name)
            .then_some(f)
    }

    pub fn face(&self, bold: bool, italic: bool) -> &'static str {
        match (bold, italic) {
            (false, false) => self.regular,
            (true, false) => self.bold,
            (false, true) => self.italic,
            (true, true) => self.bold_italic,
        }
    }
}

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

fn table_for(font: &str) -> Option<&'static [u16; 95]> {
    if font.starts_with("Times-Bold") {
        Some(&TIMES_BOLD)
    } else if font.starts_with("Times") {
        Some(&TIMES_ROMAN)
    } else {
        None
    }
}

/// Advance width of one character in 1/1000 em.
pub fn char_width(font: &str, ch: char) -> u16 {
    let Some(table) = table_for(font) else {
        return 500;
    };
    match ch as u32 {
        code @ 0x20..=0x7E => table[(code - 0x20) as usize],
        0x2022 => 350,
        0x2013 => 500,
        0x2014 => 1000,
        _ => 500,
    }
}

/// Width of `text` set in `font` at `size` points.
pub fn text_width(font: &str, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_lookup() {
        assert_eq!(FontFamily::by_name("Times-Bold"), Some(FontFamily::TIMES));
        assert_eq!(FontFamily::by_name("Times-Roman"), Some(FontFamily::TIMES));
        assert_eq!(FontFamily::by_name("Comic Sans"), None);
        assert_eq!(FontFamily::TIMES.face(true, false), "Times-Bold");
        assert_eq!(FontFamily::TIMES.face(false, true), "Times-Italic");
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width("Times-Roman", ' '), 250);
        assert_eq!(char_width("Times-Roman", 'W'), 944);
        assert_eq!(char_width("Times-Bold", 'W'), 1000);
        assert_eq!(char_width("Times-Roman", '\u{2022}'), 350);
        assert_eq!(char_width("Calibri", 'i'), 500);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let narrow = text_width("Times-Roman", 10.0, "Score");
        let wide = text_width("Times-Roman", 20.0, "Score");
        assert!((wide - 2.0 * narrow).abs() < 0.001);
        assert!(text_width("Times-Bold", 10.0, "Score") > narrow);
    }
}

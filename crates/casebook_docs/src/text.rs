//! Inline rich text shared by every back end.
//!
//! A [`Text`] is an ordered run of [`Span`]s, each carrying its own weight.
//! Report content is authored with a tiny markup where `**`
//! toggles bold, so `"**Rivalry (High):** Innocent has Coca-Cola"` yields a
//! bold lead-in followed by plain text.

/// A run of characters sharing one set of font attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Inline text made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    spans: Vec<Span>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().push(Span::new(text))
    }

    /// A single bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new().push(Span::new(text).bold())
    }

    /// Parse `**` bold toggles. An unterminated marker leaves the rest bold.
    pub fn markup(source: &str) -> Self {
        let mut text = Self::new();
        let mut bold = false;
        for (i, piece) in source.split("**").enumerate() {
            if i > 0 {
                bold = !bold;
            }
            if piece.is_empty() {
                continue;
            }
            let mut span = Span::new(piece);
            span.bold = bold;
            text = text.push(span);
        }
        text
    }

    /// Append a span, merging it into the previous one when styles match.
    pub fn push(mut self, span: Span) -> Self {
        match self.spans.last_mut() {
            Some(last) if last.bold == span.bold => {
                last.text.push_str(&span.text);
            }
            _ => self.spans.push(span),
        }
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Concatenated text with styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::markup(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::markup(&value)
    }
}

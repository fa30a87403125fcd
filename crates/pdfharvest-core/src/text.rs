//! Joining per-page text into one extracted-text string.

/// Separator appended after each page that produced text.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Accumulates page text in page order.
///
/// Each page with non-empty text is appended followed by a blank line.
/// Pages with no text are skipped entirely.
#[derive(Debug, Default, Clone)]
pub struct TextCollector {
    text: String,
    pages_with_text: usize,
}

impl TextCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's text. `None` and `""` are skipped.
    pub fn push_page(&mut self, text: Option<&str>) {
        match text {
            Some(t) if !t.is_empty() => {
                self.text.push_str(t);
                self.text.push_str(PAGE_SEPARATOR);
                self.pages_with_text += 1;
            }
            _ => {}
        }
    }

    /// Number of pages that contributed text.
    pub fn pages_with_text(&self) -> usize {
        self.pages_with_text
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Whether extracted text has anything worth displaying.
pub fn has_visible_text(text: &str) -> bool {
    !text.trim().is_empty()
}

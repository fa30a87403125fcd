//! The result of one extraction pass.

use crate::table::Table;
use crate::text::has_visible_text;

/// Text and tables pulled from the selected pages of one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extraction {
    /// Total pages in the document.
    pub page_count: usize,
    /// 0-based indices of the pages that were processed, in order.
    pub pages: Vec<usize>,
    /// Concatenated page text, each contributing page followed by a blank line.
    pub text: String,
    /// Normalized tables in discovery order.
    pub tables: Vec<Table>,
}

impl Extraction {
    /// Whether the text has any non-whitespace content.
    pub fn has_text(&self) -> bool {
        has_visible_text(&self.text)
    }

    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }
}

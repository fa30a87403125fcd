//! Page selection: which pages of a document an extraction pass visits.

/// Which pages to process.
///
/// Page numbers supplied by the user are 1-based; the indices produced by
/// [`PageSelection::resolve`] are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", content = "page", rename_all = "snake_case"))]
pub enum PageSelection {
    /// Every page, in document order.
    #[default]
    All,
    /// A single 1-based page number. `None` means nothing has been entered yet.
    Specific(Option<i64>),
}

impl PageSelection {
    /// Select one 1-based page.
    pub fn page(number: i64) -> Self {
        PageSelection::Specific(Some(number))
    }

    /// Resolve the selection into 0-based page indices for a document with
    /// `page_count` pages.
    ///
    /// A specific page that is missing, non-positive, or past the end of the
    /// document resolves to an empty list. It never falls back to the whole
    /// document.
    pub fn resolve(&self, page_count: usize) -> Vec<usize> {
        match *self {
            PageSelection::All => (0..page_count).collect(),
            PageSelection::Specific(Some(n)) if n >= 1 => match usize::try_from(n) {
                Ok(n) if n <= page_count => vec![n - 1],
                _ => Vec::new(),
            },
            PageSelection::Specific(_) => Vec::new(),
        }
    }

    /// Returns the 1-based page number for a specific selection, if one was entered.
    pub fn page_number(&self) -> Option<i64> {
        match *self {
            PageSelection::All => None,
            PageSelection::Specific(n) => n,
        }
    }

    /// Whether this selection targets a single page.
    pub fn is_specific(&self) -> bool {
        matches!(self, PageSelection::Specific(_))
    }
}

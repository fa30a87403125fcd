//! Error type for extraction.
//!
//! Uses [`thiserror`]. Empty results are not errors; only conditions that
//! stop a pass from producing any output are represented here.

use thiserror::Error;

/// Fatal error for one extraction pass.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes do not start with a PDF header.
    #[error("not a PDF: file does not start with %PDF-")]
    NotPdf,

    /// The input exceeds the configured `max_input_bytes`.
    #[error("input is {actual} bytes, limit is {limit}")]
    TooLarge { limit: usize, actual: usize },

    /// The engine could not parse the document.
    #[error("failed to open PDF: {0}")]
    Open(String),

    /// A selected page could not be loaded (page is 1-based).
    #[error("failed to read page {page}: {message}")]
    Page { page: usize, message: String },

    /// Reading the input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

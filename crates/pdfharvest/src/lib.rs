//! pdfharvest: extract text and tables from selected PDF pages.
//!
//! This is the public API facade. It re-exports the backend-independent types
//! from `pdfharvest-core` and runs extraction passes on the `pdfplumber`
//! engine.
//!
//! # Example
//!
//! ```ignore
//! use pdfharvest::{ExtractOptions, PageSelection, extract, load_document};
//!
//! let document = load_document("report.pdf")?;
//! let extraction = extract(&document, PageSelection::page(2), &ExtractOptions::default())?;
//! println!("{}", extraction.text);
//! for table in &extraction.tables {
//!     println!("{}", pdfharvest::table_to_markdown(table));
//! }
//! ```

#[cfg(feature = "clap")]
mod args;
pub mod backend;
mod error;
mod extract;
mod options;

pub use pdfharvest_core;
pub use pdfharvest_core::report;
pub use pdfharvest_core::{
    DOWNLOAD_FILENAME, DOWNLOAD_MIME, Extraction, PageContent, PageSelection, PageView,
    RawTable, Table, UploadedDocument, download_data_uri, hard_line_breaks, markdown_to_html,
    normalize_table, pdf_data_uri, render_page, table_to_markdown,
};

#[cfg(feature = "clap")]
pub use args::EngineArgs;
pub use backend::{PdfBackend, PlumberBackend};
pub use error::ExtractError;
pub use extract::{extract, extract_with, load_document};
pub use options::{ExtractOptions, TableOptions, TableStrategy};

//! pdfharvest-core: backend-independent types and algorithms.
//!
//! Page selection, table normalization, text joining, markdown serialization
//! and HTML report rendering. Nothing here touches a PDF parser; the
//! `pdfharvest` crate feeds engine output through these pieces.

pub mod document;
pub mod extraction;
pub mod markdown;
pub mod report;
pub mod selection;
pub mod table;
pub mod text;
pub mod viewer;

pub use document::{PDF_MAGIC, UploadedDocument};
pub use extraction::Extraction;
pub use markdown::{hard_line_breaks, markdown_to_html, table_to_markdown};
pub use report::{PageContent, PageView, render_page};
pub use selection::PageSelection;
pub use table::{RawTable, Table, normalize_table, normalize_tables};
pub use text::{PAGE_SEPARATOR, TextCollector, has_visible_text};
pub use viewer::{DOWNLOAD_FILENAME, DOWNLOAD_MIME, download_data_uri, pdf_data_uri};

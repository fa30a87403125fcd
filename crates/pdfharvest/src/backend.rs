//! PDF engine backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the engine an extraction
//! pass runs on: open the bytes, count pages, load a page handle, and pull
//! that page's text and raw tables. [`PlumberBackend`] implements it on top of
//! the `pdfplumber` crate.

use pdfharvest_core::RawTable;
use pdfplumber::{Page, Pdf, PdfError, Strategy, TableSettings, TextOptions};

use crate::options::{ExtractOptions, TableOptions, TableStrategy};

/// Trait abstracting the PDF engine.
///
/// # Associated Types
///
/// - `Document`: The parsed PDF document representation.
/// - `Page`: A handle to a single page within a document.
/// - `Error`: Backend-specific error type.
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// let page = MyBackend::get_page(&doc, 0)?;
/// let text = MyBackend::page_text(&page, &options);
/// let tables = MyBackend::page_tables(&page, &options);
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// A handle to a single page within a document.
    type Page;

    /// Backend-specific error type.
    type Error: std::error::Error;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a valid PDF document.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Load a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be loaded.
    fn get_page(doc: &Self::Document, index: usize) -> Result<Self::Page, Self::Error>;

    /// Plain-text rendering of the page, or `None` if it has no text.
    fn page_text(page: &Self::Page, options: &ExtractOptions) -> Option<String>;

    /// Raw tables detected on the page, in detection order.
    fn page_tables(page: &Self::Page, options: &ExtractOptions) -> Vec<RawTable>;
}

/// Backend built on the `pdfplumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlumberBackend;

impl PdfBackend for PlumberBackend {
    type Document = Pdf;
    type Page = Page;
    type Error = PdfError;

    fn open(bytes: &[u8]) -> Result<Pdf, PdfError> {
        Pdf::open(bytes, None)
    }

    fn page_count(doc: &Pdf) -> usize {
        doc.page_count()
    }

    fn get_page(doc: &Pdf, index: usize) -> Result<Page, PdfError> {
        doc.page(index)
    }

    fn page_text(page: &Page, options: &ExtractOptions) -> Option<String> {
        let text_options = TextOptions {
            layout: options.layout,
            ..TextOptions::default()
        };
        let text = page.extract_text(&text_options);
        (!text.is_empty()).then_some(text)
    }

    fn page_tables(page: &Page, options: &ExtractOptions) -> Vec<RawTable> {
        page.extract_tables(&table_settings(&options.tables))
    }
}

/// Map table options onto the engine's settings.
pub fn table_settings(options: &TableOptions) -> TableSettings {
    let strategy = match options.strategy {
        TableStrategy::Lattice => Strategy::Lattice,
        TableStrategy::Stream => Strategy::Stream,
    };

    TableSettings {
        strategy,
        snap_tolerance: options.snap_tolerance,
        snap_x_tolerance: options.snap_tolerance,
        snap_y_tolerance: options.snap_tolerance,
        join_tolerance: options.join_tolerance,
        join_x_tolerance: options.join_tolerance,
        join_y_tolerance: options.join_tolerance,
        text_tolerance: options.text_tolerance,
        text_x_tolerance: options.text_tolerance,
        text_y_tolerance: options.text_tolerance,
        ..TableSettings::default()
    }
}

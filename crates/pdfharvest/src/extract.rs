//! The extraction pass: (document, page selection) → (text, tables).

use std::path::Path;

use pdfharvest_core::{
    Extraction, PageSelection, TextCollector, UploadedDocument, normalize_tables,
};
use tracing::{debug, info};

use crate::backend::{PdfBackend, PlumberBackend};
use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// Extract text and tables from the selected pages using the `pdfplumber` engine.
///
/// The pass is pure: the same document, selection and options always produce
/// the same [`Extraction`]. A selection that matches no page yields empty text
/// and no tables rather than an error.
///
/// # Errors
///
/// Returns [`ExtractError`] if the input is rejected or the engine fails to
/// open the document or one of the selected pages.
pub fn extract(
    document: &UploadedDocument,
    selection: PageSelection,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    extract_with::<PlumberBackend>(document, selection, options)
}

/// Run an extraction pass on an arbitrary backend.
pub fn extract_with<B: PdfBackend>(
    document: &UploadedDocument,
    selection: PageSelection,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    check_input(document, options)?;

    let doc = B::open(document.bytes()).map_err(|e| ExtractError::Open(e.to_string()))?;
    let page_count = B::page_count(&doc);
    let pages = selection.resolve(page_count);
    debug!(
        filename = document.filename(),
        page_count,
        selected = pages.len(),
        "opened document"
    );

    let mut text = TextCollector::new();
    let mut tables = Vec::new();

    for &index in &pages {
        let page = B::get_page(&doc, index).map_err(|e| ExtractError::Page {
            page: index + 1,
            message: e.to_string(),
        })?;

        let page_text = B::page_text(&page, options);
        text.push_page(page_text.as_deref());

        let raw = B::page_tables(&page, options);
        let before = tables.len();
        tables.extend(normalize_tables(raw));
        debug!(
            page = index + 1,
            chars = page_text.as_deref().map_or(0, str::len),
            tables = tables.len() - before,
            "processed page"
        );
    }

    info!(
        filename = document.filename(),
        pages = pages.len(),
        pages_with_text = text.pages_with_text(),
        tables = tables.len(),
        "extraction finished"
    );

    Ok(Extraction {
        page_count,
        pages,
        text: text.finish(),
        tables,
    })
}

/// Read a file from disk into an [`UploadedDocument`] named after its file name.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the file cannot be read.
pub fn load_document(path: impl AsRef<Path>) -> Result<UploadedDocument, ExtractError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadedDocument::new(filename, bytes))
}

fn check_input(document: &UploadedDocument, options: &ExtractOptions) -> Result<(), ExtractError> {
    if let Some(limit) = options.max_input_bytes {
        if document.len() > limit {
            return Err(ExtractError::TooLarge {
                limit,
                actual: document.len(),
            });
        }
    }
    if !document.looks_like_pdf() {
        return Err(ExtractError::NotPdf);
    }
    Ok(())
}

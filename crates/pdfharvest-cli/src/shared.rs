use std::path::Path;

use pdfharvest::{
    ExtractOptions, Extraction, PageSelection, UploadedDocument, extract, load_document,
};

/// Read a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be read.
pub fn open_document(file: &Path) -> Result<UploadedDocument, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    load_document(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Run one extraction pass, reporting failure on stderr.
pub fn run_extract(
    document: &UploadedDocument,
    selection: PageSelection,
    options: &ExtractOptions,
) -> Result<Extraction, i32> {
    extract(document, selection, options).map_err(|e| {
        eprintln!("Error: failed to process PDF: {e}");
        1
    })
}

/// Open and extract in one step.
pub fn open_and_extract(
    file: &Path,
    selection: PageSelection,
    options: &ExtractOptions,
) -> Result<Extraction, i32> {
    let document = open_document(file)?;
    run_extract(&document, selection, options)
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

//! Data URIs for the inline PDF viewer and the text download.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// MIME type of the embedded document.
pub const PDF_MIME: &str = "application/pdf";

/// File name offered for the extracted-text download.
pub const DOWNLOAD_FILENAME: &str = "extracted_text.md";

/// MIME type of the extracted-text download.
pub const DOWNLOAD_MIME: &str = "text/markdown";

/// Fixed height of the embedded viewer, in CSS pixels.
pub const VIEWER_HEIGHT_PX: u32 = 600;

/// Encode `bytes` as a base64 data URI with the given MIME type.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Data URI the browser's PDF viewer can display.
pub fn pdf_data_uri(bytes: &[u8]) -> String {
    data_uri(PDF_MIME, bytes)
}

/// Data URI carrying the extracted text verbatim as a markdown file.
pub fn download_data_uri(text: &str) -> String {
    data_uri(&format!("{DOWNLOAD_MIME};charset=utf-8"), text.as_bytes())
}

//! The uploaded document: an immutable in-memory byte buffer.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Magic bytes every PDF file starts with.
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// A user-supplied PDF held fully in memory.
///
/// The bytes are loaded once and never mutated. The viewer and the parser each
/// read through [`bytes`](UploadedDocument::bytes); cloning shares the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    filename: String,
    bytes: Arc<[u8]>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Original filename as supplied by the user.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// A read view of the raw document bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the bytes carry the PDF header.
    pub fn looks_like_pdf(&self) -> bool {
        self.bytes.starts_with(PDF_MAGIC)
    }

    /// The bytes as standard base64, for carrying the document through a form.
    pub fn encoded(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Rebuild a document from [`encoded`](UploadedDocument::encoded) bytes.
    ///
    /// # Errors
    ///
    /// Returns the decoder error if `encoded` is not valid base64.
    pub fn from_encoded(
        filename: impl Into<String>,
        encoded: &str,
    ) -> Result<Self, base64::DecodeError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Ok(Self::new(filename, bytes))
    }
}

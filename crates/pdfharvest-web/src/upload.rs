use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use pdfharvest::report::{CARRIED_DOCUMENT_FIELD, CARRIED_FILENAME_FIELD};
use pdfharvest::{PageSelection, UploadedDocument};

/// Parsed form fields from the multipart upload.
#[derive(Debug, Default)]
pub struct UploadForm {
    /// `None` when the form was submitted without a file and without a
    /// document carried over from the previous result page.
    pub document: Option<UploadedDocument>,
    pub selection: PageSelection,
}

/// Why a multipart upload could not be read.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The request body went over the router's body limit.
    #[error("upload exceeds the request body limit")]
    TooLarge,
    #[error("Failed to read {field}: {message}")]
    Malformed { field: &'static str, message: String },
    #[error("The previously uploaded document could not be restored: {0}")]
    Carried(#[from] base64::DecodeError),
}

impl UploadError {
    fn from_multipart(field: &'static str, err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge
        } else {
            UploadError::Malformed {
                field,
                message: err.body_text(),
            }
        }
    }
}

/// Parse a multipart form upload into the document and page selection.
///
/// A freshly chosen file wins. Otherwise the document carried in the hidden
/// `doc`/`filename` fields of the previous result page is reused.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadForm, UploadError> {
    let mut document = None;
    let mut carried_document = None;
    let mut carried_filename = None;
    let mut mode = String::from("all");
    let mut page = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::from_multipart("form field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "pdf" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::from_multipart("file data", e))?;

                // Browsers send an empty, unnamed part when no file was chosen.
                if !(filename.is_empty() && data.is_empty()) {
                    let filename = if filename.is_empty() {
                        "upload.pdf".to_string()
                    } else {
                        filename
                    };
                    document = Some(UploadedDocument::new(filename, data.to_vec()));
                }
            }
            "mode" => {
                mode = field
                    .text()
                    .await
                    .map_err(|e| UploadError::from_multipart("mode", e))?;
            }
            "page" => {
                page = field
                    .text()
                    .await
                    .map_err(|e| UploadError::from_multipart("page", e))?;
            }
            CARRIED_DOCUMENT_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| UploadError::from_multipart("document", e))?;
                if !text.is_empty() {
                    carried_document = Some(text);
                }
            }
            CARRIED_FILENAME_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| UploadError::from_multipart("filename", e))?;
                if !text.is_empty() {
                    carried_filename = Some(text);
                }
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    let document = match (document, carried_document) {
        (Some(document), _) => Some(document),
        (None, Some(encoded)) => {
            let filename = carried_filename.unwrap_or_else(|| "upload.pdf".to_string());
            Some(UploadedDocument::from_encoded(filename, &encoded)?)
        }
        (None, None) => None,
    };

    Ok(UploadForm {
        document,
        selection: selection_from_form(&mode, &page),
    })
}

/// Map the `mode`/`page` form values onto a selection. An unparsable page in
/// specific mode selects nothing.
pub fn selection_from_form(mode: &str, page: &str) -> PageSelection {
    match mode.trim() {
        "specific" => PageSelection::Specific(page.trim().parse::<i64>().ok()),
        _ => PageSelection::All,
    }
}

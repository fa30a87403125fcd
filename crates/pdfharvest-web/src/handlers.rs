use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use pdfharvest::{ExtractError, PageContent, PageSelection, PageView, extract, render_page};

use crate::upload::{UploadError, UploadForm, parse_multipart};
use crate::{AppState, upload_limit_message};

const EXTRACT_ACTION: &str = "/extract";

pub async fn index() -> Html<String> {
    page(PageSelection::All, PageContent::Prompt)
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn extract_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let UploadForm {
        document,
        selection,
    } = match parse_multipart(multipart).await {
        Ok(form) => form,
        Err(UploadError::TooLarge) => {
            tracing::warn!("rejected upload over the body limit");
            return too_large(&state, PageSelection::All);
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected upload");
            let message = e.to_string();
            return (
                StatusCode::BAD_REQUEST,
                page(PageSelection::All, PageContent::Rejected(&message)),
            );
        }
    };

    let Some(document) = document else {
        return (StatusCode::OK, page(selection, PageContent::Prompt));
    };

    if !document.looks_like_pdf() {
        tracing::warn!(filename = document.filename(), "upload is not a PDF");
        let message = format!("{} does not look like a PDF file.", document.filename());
        return (
            StatusCode::BAD_REQUEST,
            page(selection, PageContent::Rejected(&message)),
        );
    }

    let options = state.options.clone();
    let job_document = document.clone();
    let outcome =
        tokio::task::spawn_blocking(move || extract(&job_document, selection, &options)).await;

    match outcome {
        Ok(Ok(extraction)) => (
            StatusCode::OK,
            page(
                selection,
                PageContent::Extracted {
                    document: &document,
                    extraction: &extraction,
                },
            ),
        ),
        Ok(Err(ExtractError::TooLarge { limit, actual })) => {
            tracing::warn!(filename = document.filename(), limit, actual, "upload too large");
            too_large(&state, selection)
        }
        Ok(Err(e)) => {
            tracing::warn!(filename = document.filename(), error = %e, "extraction failed");
            let message = e.to_string();
            (
                StatusCode::OK,
                page(
                    selection,
                    PageContent::Failed {
                        document: &document,
                        message: &message,
                    },
                ),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "extraction task did not complete");
            let message = e.to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                page(
                    selection,
                    PageContent::Failed {
                        document: &document,
                        message: &message,
                    },
                ),
            )
        }
    }
}

fn too_large(state: &AppState, selection: PageSelection) -> (StatusCode, Html<String>) {
    let message = upload_limit_message(state.max_upload_bytes());
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        page(selection, PageContent::Rejected(&message)),
    )
}

fn page(selection: PageSelection, content: PageContent<'_>) -> Html<String> {
    Html(render_page(&PageView {
        action: Some(EXTRACT_ACTION),
        selection,
        content,
    }))
}

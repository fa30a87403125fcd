//! Web front end for pdfharvest.
//!
//! Serves a single page: an upload form in the sidebar and, after a
//! submission, the inline PDF viewer, the extracted text with a markdown
//! download and one grid per detected table.

mod handlers;
pub mod upload;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use pdfharvest::ExtractOptions;
use tower_http::trace::TraceLayer;

/// Server state shared across handlers. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub options: Arc<ExtractOptions>,
}

impl AppState {
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// Largest accepted document, in bytes. `usize::MAX` when unlimited.
    pub fn max_upload_bytes(&self) -> usize {
        self.options.max_input_bytes.unwrap_or(usize::MAX)
    }
}

/// Room for multipart framing and the form's small text fields.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Request body limit for documents of up to `max_upload_bytes`.
///
/// A document carried forward from a result page travels as base64, which
/// grows it by a third. Documents over the limit that still fit the body are
/// rejected by the extraction pass itself.
pub fn body_limit(max_upload_bytes: usize) -> usize {
    (max_upload_bytes / 3)
        .saturating_mul(4)
        .saturating_add(4)
        .saturating_add(FORM_OVERHEAD_BYTES)
}

/// User-facing message for an upload over the size limit.
pub fn upload_limit_message(max_upload_bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    let size = if max_upload_bytes >= MIB && max_upload_bytes % MIB == 0 {
        format!("{} MB", max_upload_bytes / MIB)
    } else {
        format!("{max_upload_bytes} bytes")
    };
    format!("Uploads are limited to {size}.")
}

/// Build the router with all endpoints.
///
/// Documents larger than `max_upload_bytes` are rejected with 413. The
/// extraction input limit follows `max_upload_bytes` when the options leave it
/// unset.
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    let state = if state.options.max_input_bytes.is_none() {
        AppState::new(ExtractOptions {
            max_input_bytes: Some(max_upload_bytes),
            ..(*state.options).clone()
        })
    } else {
        state
    };
    let body_limit = body_limit(state.max_upload_bytes());

    Router::new()
        .route("/", get(handlers::index))
        .route("/extract", get(handlers::index).post(handlers::extract_upload))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn start_server(addr: &str, router: Router) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

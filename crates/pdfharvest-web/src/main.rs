use clap::Parser;
use pdfharvest::EngineArgs;
use pdfharvest_web::{AppState, build_router, start_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Serve the PDF text and table extractor over HTTP.
#[derive(Debug, Parser)]
#[command(name = "pdfharvest-web", about, version)]
struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8501")]
    bind: String,

    /// Largest accepted upload in megabytes
    #[arg(long, value_name = "MB", default_value_t = 50)]
    max_upload_mb: usize,

    #[command(flatten)]
    engine: EngineArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdfharvest=info,pdfharvest_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ServerArgs::parse();
    let max_upload_bytes = args.max_upload_mb.saturating_mul(1024 * 1024);
    let router = build_router(AppState::new(args.engine.options()), max_upload_bytes);

    start_server(&args.bind, router).await?;
    Ok(())
}

mod cli;
mod extract_cmd;
mod report_cmd;
mod shared;
mod tables_cmd;
mod text_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Text {
            ref file,
            ref extract,
            format,
        } => text_cmd::run(file, extract, format),
        cli::Commands::Tables {
            ref file,
            ref extract,
            format,
        } => tables_cmd::run(file, extract, format),
        cli::Commands::Extract {
            ref file,
            ref extract,
            ref output_dir,
        } => extract_cmd::run(file, extract, output_dir),
        cli::Commands::Report {
            ref file,
            ref extract,
            ref output,
        } => report_cmd::run(file, extract, output),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

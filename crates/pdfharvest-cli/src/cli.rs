use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pdfharvest::{EngineArgs, ExtractOptions, PageSelection};

/// Extract text and tables from PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdfharvest", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract text from the selected pages
    Text {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Detect and extract tables from the selected pages
    Tables {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = TableFormat::Markdown)]
        format: TableFormat,
    },

    /// Print text and tables as markdown and save the text as extracted_text.md
    Extract {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,

        /// Directory to write extracted_text.md into
        #[arg(long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
    },

    /// Write a self-contained HTML page with viewer, text and tables
    Report {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,

        /// Output HTML file
        #[arg(long, short, value_name = "PATH", default_value = "report.html")]
        output: PathBuf,
    },
}

/// Page selection and extraction settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Process only this 1-based page. Default: all pages
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

impl ExtractArgs {
    pub fn selection(&self) -> PageSelection {
        match self.page {
            Some(n) => PageSelection::page(n),
            None => PageSelection::All,
        }
    }

    pub fn options(&self) -> ExtractOptions {
        self.engine.options()
    }
}

/// Output format for the `text` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextFormat {
    /// Plain text, pages separated by a blank line
    Text,
    /// JSON object with page count, processed pages and text
    Json,
}

/// Output format for the `tables` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// GFM pipe tables
    Markdown,
    /// JSON array of tables
    Json,
    /// CSV, header row first, tables separated by a blank line
    Csv,
}

//! Command-line flags for extraction settings, shared by the binaries.

use clap::Args;

use crate::options::{ExtractOptions, TableOptions, TableStrategy};

/// Text layout and table detection flags. Flatten into a parser with
/// `#[command(flatten)]`.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct EngineArgs {
    /// Use layout-aware text extraction
    #[arg(long)]
    pub layout: bool,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    pub strategy: TableStrategy,

    /// Snap tolerance for aligning nearby edges
    #[arg(long, default_value_t = 3.0)]
    pub snap_tolerance: f64,

    /// Join tolerance for merging collinear edges
    #[arg(long, default_value_t = 3.0)]
    pub join_tolerance: f64,

    /// Text tolerance for assigning text to cells
    #[arg(long, default_value_t = 3.0)]
    pub text_tolerance: f64,
}

impl EngineArgs {
    /// Options for an extraction pass. No input size limit.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            layout: self.layout,
            tables: TableOptions {
                strategy: self.strategy,
                snap_tolerance: self.snap_tolerance,
                join_tolerance: self.join_tolerance,
                text_tolerance: self.text_tolerance,
            },
            ..ExtractOptions::default()
        }
    }
}

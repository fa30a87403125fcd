//! Extraction options.

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TableStrategy {
    /// Cells bounded by ruling lines and rectangle edges.
    #[default]
    Lattice,
    /// Cells inferred from text alignment, for tables drawn without lines.
    Stream,
}

/// Parameters passed through to table detection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableOptions {
    pub strategy: TableStrategy,
    /// Distance within which parallel edges are snapped together (default: 3.0).
    pub snap_tolerance: f64,
    /// Distance within which collinear edges are joined (default: 3.0).
    pub join_tolerance: f64,
    /// Distance within which characters are assigned to a cell (default: 3.0).
    pub text_tolerance: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            strategy: TableStrategy::Lattice,
            snap_tolerance: 3.0,
            join_tolerance: 3.0,
            text_tolerance: 3.0,
        }
    }
}

/// Options for one extraction pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtractOptions {
    /// Reject inputs larger than this many bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// Use layout-aware text extraction (default: false).
    pub layout: bool,
    pub tables: TableOptions,
}

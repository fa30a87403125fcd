//! Table normalization.
//!
//! The PDF engine hands back each detected table as a raw grid of optional
//! strings. [`normalize_table`] turns that grid into a [`Table`]: a grid with
//! more than one row gets its first row promoted to column headers, a single
//! row becomes a positional record, and an empty grid is dropped.

/// A raw table as returned by table detection: rows of optional cell text.
pub type RawTable = Vec<Vec<Option<String>>>;

/// A normalized table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Table {
    /// First row promoted to headers; one record per remaining row.
    ///
    /// Header labels are kept verbatim, duplicates and empty labels included.
    /// Every row has exactly `headers.len()` cells.
    Labeled {
        headers: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    },
    /// A single-row table with no content-derived labels.
    Positional { values: Vec<Option<String>> },
}

impl Table {
    /// Column labels. Positional tables are labeled `0, 1, 2, …`.
    pub fn column_labels(&self) -> Vec<String> {
        match self {
            Table::Labeled { headers, .. } => headers.clone(),
            Table::Positional { values } => (0..values.len()).map(|i| i.to_string()).collect(),
        }
    }

    /// Number of records (data rows, excluding the header row).
    pub fn record_count(&self) -> usize {
        match self {
            Table::Labeled { rows, .. } => rows.len(),
            Table::Positional { .. } => 1,
        }
    }

    /// Cell values of each record, in row order.
    pub fn value_rows(&self) -> Vec<&[Option<String>]> {
        match self {
            Table::Labeled { rows, .. } => rows.iter().map(Vec::as_slice).collect(),
            Table::Positional { values } => vec![values.as_slice()],
        }
    }

    /// Records as label/value pairs, in column order.
    ///
    /// Positional tables yield a single record whose labels are the column
    /// indices. Duplicate labels appear once per column.
    pub fn records(&self) -> Vec<Vec<(String, Option<&str>)>> {
        let labels = self.column_labels();
        self.value_rows()
            .into_iter()
            .map(|row| {
                labels
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|v| v.as_deref()))
                    .collect()
            })
            .collect()
    }

    /// Look up a labeled record's value by header label.
    ///
    /// With duplicate labels the first matching column wins. Returns `None`
    /// when the record index or label does not exist, or the cell is absent.
    pub fn get(&self, record: usize, label: &str) -> Option<&str> {
        match self {
            Table::Labeled { headers, rows } => {
                let col = headers.iter().position(|h| h == label)?;
                rows.get(record)?.get(col)?.as_deref()
            }
            Table::Positional { values } => {
                if record != 0 {
                    return None;
                }
                let col: usize = label.parse().ok()?;
                values.get(col)?.as_deref()
            }
        }
    }
}

/// Normalize one raw table.
///
/// Returns `None` for a grid with no rows. Ragged grids are squared off to the
/// widest row: short rows are padded with absent cells and missing header
/// labels become empty strings.
pub fn normalize_table(raw: RawTable) -> Option<Table> {
    let width = raw.iter().map(Vec::len).max()?;
    if raw.iter().any(|row| row.len() != width) {
        tracing::warn!(width, rows = raw.len(), "ragged table grid, padding short rows");
    }

    let mut rows = raw.into_iter().map(|mut row| {
        row.resize(width, None);
        row
    });

    let first = rows.next()?;
    let rest: Vec<_> = rows.collect();

    if rest.is_empty() {
        return Some(Table::Positional { values: first });
    }

    let headers = first.into_iter().map(Option::unwrap_or_default).collect();
    Some(Table::Labeled { headers, rows: rest })
}

/// Normalize every raw table, dropping empty grids and keeping order.
pub fn normalize_tables(raw: impl IntoIterator<Item = RawTable>) -> Vec<Table> {
    raw.into_iter().filter_map(normalize_table).collect()
}

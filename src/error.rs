//! Errors raised while building tables and series

use thiserror::Error;

/// Malformed input detected while constructing a [`Table`](crate::model::Table)
/// or [`Series`](crate::model::Series).
///
/// Comparators never return this: a shape disagreement between two
/// well-formed datasets is a mismatch, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("row {row} has {found} cells but the table has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{labels} row labels given for {rows} rows")]
    IndexLength { labels: usize, rows: usize },

    #[error("column '{column}' has {found} values but the index has {expected} labels")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("series has {labels} labels but {values} values")]
    SeriesLength { labels: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;

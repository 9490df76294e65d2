//! Table, Row, and Cell data structures

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::{CellType, Column};
use crate::error::{ModelError, Result};

/// A cell value with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Date(a), CellValue::Date(b)) => a == b,
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a == b,
            // Cross-type numeric comparison
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64) == *b,
            (CellValue::Float(a), CellValue::Int(b)) => *a == (*b as f64),
            _ => false,
        }
    }
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Null or NaN: the values a sentinel stands in for
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Runtime kind of this value
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Null => CellType::Null,
            CellValue::Bool(_) => CellType::Bool,
            CellValue::Int(_) => CellType::Int,
            CellValue::Float(_) => CellType::Float,
            CellValue::String(_) => CellType::String,
            CellValue::Date(_) => CellType::Date,
            CellValue::DateTime(_) => CellType::DateTime,
        }
    }

    /// Numeric view used by tolerance checks
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The value itself, or `sentinel` when missing
    pub fn or_sentinel(&self, sentinel: &CellValue) -> CellValue {
        if self.is_missing() {
            sentinel.clone()
        } else {
            self.clone()
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed("NULL"),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            // Keep a trailing ".0" so floats never read like ints in diagnostics
            CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                Cow::Owned(format!("{:.1}", f))
            }
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_ref()),
            CellValue::Date(d) => Cow::Owned(d.to_string()),
            CellValue::DateTime(dt) => Cow::Owned(dt.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// A labeled row of a table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row label
    pub label: CellValue,
    /// Cell values in column order
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(label: impl Into<CellValue>, cells: Vec<CellValue>) -> Self {
        Self {
            label: label.into(),
            cells,
        }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// Two-dimensional labeled data: ordered columns, ordered labeled rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from row labels, column names and row-major values.
    ///
    /// Column kinds are inferred from the values.
    pub fn from_rows<L, C>(
        index: impl IntoIterator<Item = L>,
        columns: impl IntoIterator<Item = C>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self>
    where
        L: Into<CellValue>,
        C: Into<String>,
    {
        let labels: Vec<CellValue> = index.into_iter().map(Into::into).collect();
        if labels.len() != rows.len() {
            return Err(ModelError::IndexLength {
                labels: labels.len(),
                rows: rows.len(),
            });
        }

        let mut table = Table::new(columns.into_iter().map(Column::new).collect());
        for (label, cells) in labels.into_iter().zip(rows) {
            table.add_row(label, cells)?;
        }
        table.infer_column_kinds();
        Ok(table)
    }

    /// Build a table column by column, in the map's insertion order
    pub fn from_columns<L>(
        index: impl IntoIterator<Item = L>,
        columns: IndexMap<String, Vec<CellValue>>,
    ) -> Result<Self>
    where
        L: Into<CellValue>,
    {
        let labels: Vec<CellValue> = index.into_iter().map(Into::into).collect();
        for (name, values) in &columns {
            if values.len() != labels.len() {
                return Err(ModelError::ColumnLength {
                    column: name.clone(),
                    expected: labels.len(),
                    found: values.len(),
                });
            }
        }

        let rows = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let cells = columns.values().map(|values| values[i].clone()).collect();
                Row::new(label, cells)
            })
            .collect();

        let mut table = Table {
            columns: columns.keys().map(Column::new).collect(),
            rows,
        };
        table.infer_column_kinds();
        Ok(table)
    }

    /// Add a row to the table
    pub fn add_row(&mut self, label: impl Into<CellValue>, cells: Vec<CellValue>) -> Result<()> {
        if cells.len() != self.column_count() {
            return Err(ModelError::RaggedRow {
                row: self.rows.len(),
                expected: self.column_count(),
                found: cells.len(),
            });
        }
        self.rows.push(Row::new(label, cells));
        Ok(())
    }

    /// Fill in the kind of every column that has not been declared
    pub fn infer_column_kinds(&mut self) {
        for col_idx in 0..self.column_count() {
            if self.columns[col_idx].kind != CellType::Null {
                continue;
            }
            let inferred = CellType::infer(self.rows.iter().filter_map(|r| r.get(col_idx)));
            self.columns[col_idx].kind = inferred;
        }
    }

    /// Copy of this table with every missing cell replaced by `sentinel`.
    ///
    /// Declared column kinds are kept as they were.
    pub fn fill_missing(&self, sentinel: &CellValue) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| Row {
                    label: row.label.clone(),
                    cells: row.cells.iter().map(|c| c.or_sentinel(sentinel)).collect(),
                })
                .collect(),
        }
    }

    /// Row labels in order
    pub fn row_labels(&self) -> Vec<CellValue> {
        self.rows.iter().map(|r| r.label.clone()).collect()
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Row-major values without labels
    pub fn values(&self) -> Vec<Vec<CellValue>> {
        self.rows.iter().map(|r| r.cells.clone()).collect()
    }

    /// Cell at a row and column position
    pub fn get(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }
}

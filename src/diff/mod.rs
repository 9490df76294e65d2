//! Comparators and their typed results

pub mod cell_diff;
mod labels;
mod rows;
mod sequence;
mod series;
mod table;

use serde::Serialize;

use crate::model::{CellType, CellValue};

pub use cell_diff::CellComparator;
pub use labels::{compare_index, compare_table_labels};
pub use rows::{compare_rows_unordered, compare_table_rows_unordered};
pub use sequence::{compare_nested_sequence, compare_sequence, compare_string_sequence};
pub use series::{compare_series_exact, compare_series_numeric};
pub use table::{compare_table_exact, compare_table_numeric};

/// Which comparison policy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    TableNumeric,
    TableExact,
    RowsUnordered,
    SeriesNumeric,
    SeriesExact,
    Sequence,
    StringSequence,
    NestedSequence,
}

impl Check {
    /// Noun used in diagnostic banners
    pub fn subject(self) -> &'static str {
        match self {
            Check::TableNumeric | Check::TableExact | Check::RowsUnordered => "DataFrame",
            Check::SeriesNumeric | Check::SeriesExact => "Series",
            Check::Sequence | Check::StringSequence => "List",
            Check::NestedSequence => "Nested list",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Check::TableNumeric => "table_numeric",
            Check::TableExact => "table_exact",
            Check::RowsUnordered => "rows_unordered",
            Check::SeriesNumeric => "series_numeric",
            Check::SeriesExact => "series_exact",
            Check::Sequence => "sequence",
            Check::StringSequence => "string_sequence",
            Check::NestedSequence => "nested_sequence",
        };
        write!(f, "{}", name)
    }
}

/// Label axis of a table or series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Index,
    Columns,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Index => write!(f, "indices"),
            Axis::Columns => write!(f, "columns"),
        }
    }
}

/// What a length mismatch counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthScope {
    /// Number of rows of two row collections
    Rows,
    /// Width of the first row of two row collections
    Columns,
    /// Number of inner sequences of two nested sequences
    Outer,
    /// Length of one inner sequence
    Inner { row: usize },
    /// Length of two flat sequences, reported after the shared prefix matched
    Sequence,
    /// Character count of the strings at one list position
    StringAt { index: usize },
    /// Cell count of one table row, measured against the column count
    RowCells { row: usize, columns: usize },
}

/// Where a value-level mismatch was found
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "at", rename_all = "snake_case")]
pub enum Location {
    /// Table cell, by position and by label
    Cell {
        row: usize,
        column: usize,
        row_label: CellValue,
        column_label: String,
    },
    /// Series entry, by position and by label
    Entry { position: usize, label: CellValue },
    /// Flat sequence position
    Position { index: usize },
    /// Nested sequence position
    Nested { row: usize, column: usize },
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Cell {
                row_label,
                column_label,
                ..
            } => write!(f, "labels: {} {}", row_label, column_label),
            Location::Entry { label, .. } => write!(f, "index: {}", label),
            Location::Position { index } => write!(f, "index: {}", index),
            Location::Nested { row, column } => write!(f, "indices: {}, {}", row, column),
        }
    }
}

/// One side of a label mismatch: every label it has, plus its shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSet {
    /// Row labels of a table, or the index of a series
    pub index: Vec<CellValue>,
    /// Column labels; `None` for a series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<CellValue>>,
    pub shape: Vec<usize>,
}

impl LabelSet {
    /// Labels along one axis; a series has no column labels
    pub fn along(&self, axis: Axis) -> &[CellValue] {
        match axis {
            Axis::Index => &self.index,
            Axis::Columns => self.columns.as_deref().unwrap_or(&[]),
        }
    }
}

/// Full strings shown next to a string mismatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringContext {
    pub left: Option<String>,
    pub right: Option<String>,
}

/// The first discrepancy found between two datasets
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// Row or column labels differ in content, order or count; `axis` is
    /// the first one that disagrees
    Labels {
        axis: Axis,
        left: LabelSet,
        right: LabelSet,
    },
    /// Series names differ
    Name {
        left: Option<String>,
        right: Option<String>,
    },
    /// Declared kinds of two series differ
    SeriesKind { left: CellType, right: CellType },
    /// Declared kinds of a column differ
    ColumnKind {
        column: String,
        left: CellType,
        right: CellType,
    },
    /// Two values are not equal under the active policy
    Value {
        location: Location,
        left: CellValue,
        right: CellValue,
    },
    /// Two values have different runtime kinds
    ElementType {
        location: Location,
        left: CellType,
        right: CellType,
    },
    /// Two counts differ
    Length {
        scope: LengthScope,
        left: usize,
        right: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<StringContext>,
    },
    /// Two strings differ at a character
    Character {
        index: usize,
        position: usize,
        left: Option<char>,
        right: Option<char>,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<StringContext>,
    },
    /// A row of the first collection has no partner in the second
    UnmatchedRow { row: usize, values: Vec<CellValue> },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::Labels { axis, left, right } => write!(
                f,
                "{} differ: {} vs {}",
                axis,
                join(left.along(*axis)),
                join(right.along(*axis))
            ),
            Mismatch::Name { left, right } => write!(
                f,
                "names differ: {} vs {}",
                left.as_deref().unwrap_or("None"),
                right.as_deref().unwrap_or("None")
            ),
            Mismatch::SeriesKind { left, right } => {
                write!(f, "datatypes differ: {} vs {}", left, right)
            }
            Mismatch::ColumnKind {
                column,
                left,
                right,
            } => write!(f, "column {} dtypes differ: {} vs {}", column, left, right),
            Mismatch::Value {
                location,
                left,
                right,
            } => write!(f, "contents differ at {}: {} != {}", location, left, right),
            Mismatch::ElementType {
                location,
                left,
                right,
            } => write!(f, "types differ at {}: {} != {}", location, left, right),
            Mismatch::Length {
                scope, left, right, ..
            } => match scope {
                LengthScope::Rows => write!(f, "number of rows differ: {} vs {}", left, right),
                LengthScope::Columns => {
                    write!(f, "number of columns differ: {} vs {}", left, right)
                }
                LengthScope::Outer => write!(f, "outer lengths differ: {} vs {}", left, right),
                LengthScope::Inner { row } => {
                    write!(f, "inner lengths differ for row {}: {} vs {}", row, left, right)
                }
                LengthScope::Sequence => write!(
                    f,
                    "all corresponding elements equal but lengths differ: {} vs {}",
                    left, right
                ),
                LengthScope::StringAt { index } => write!(
                    f,
                    "strings at index {} have different lengths: {} vs {}",
                    index, left, right
                ),
                LengthScope::RowCells { row, columns } => write!(
                    f,
                    "row {} cell counts do not fit {} columns: {} vs {}",
                    row, columns, left, right
                ),
            },
            Mismatch::Character {
                index,
                position,
                left,
                right,
                ..
            } => write!(
                f,
                "strings at index {} differ at character {}: {} != {}",
                index,
                position,
                char_or_end(*left),
                char_or_end(*right)
            ),
            Mismatch::UnmatchedRow { row, values } => {
                write!(f, "row {} has no match: [{}]", row, join(values))
            }
        }
    }
}

/// Outcome of one comparator call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Policy that ran
    pub check: Check,
    /// First discrepancy, if any
    pub mismatch: Option<Mismatch>,
}

impl Comparison {
    /// Record an outcome
    pub fn new(check: Check, mismatch: Option<Mismatch>) -> Self {
        match &mismatch {
            None => tracing::debug!(%check, "datasets equal"),
            Some(m) => tracing::debug!(%check, mismatch = %m, "datasets differ"),
        }
        Self { check, mismatch }
    }

    pub fn equal(check: Check) -> Self {
        Self::new(check, None)
    }

    pub fn different(check: Check, mismatch: Mismatch) -> Self {
        Self::new(check, Some(mismatch))
    }

    /// True when no discrepancy was found
    pub fn is_equal(&self) -> bool {
        self.mismatch.is_none()
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        self.mismatch.as_ref()
    }
}

impl From<Comparison> for bool {
    fn from(comparison: Comparison) -> bool {
        comparison.is_equal()
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.mismatch {
            None => write!(f, "{} equal", self.check.subject()),
            Some(m) => write!(f, "{} {}", self.check.subject(), m),
        }
    }
}

pub(crate) fn join(values: &[CellValue]) -> String {
    values
        .iter()
        .map(|v| v.display().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn char_or_end(c: Option<char>) -> String {
    c.map(|c| c.to_string())
        .unwrap_or_else(|| "<end of string>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_into_bool() {
        assert!(bool::from(Comparison::equal(Check::Sequence)));
        let different = Comparison::different(
            Check::Sequence,
            Mismatch::Length {
                scope: LengthScope::Sequence,
                left: 3,
                right: 4,
                context: None,
            },
        );
        assert!(!different.is_equal());
        assert!(!bool::from(different));
    }

    #[test]
    fn test_mismatch_display() {
        let m = Mismatch::Value {
            location: Location::Cell {
                row: 1,
                column: 1,
                row_label: CellValue::Int(1),
                column_label: "b".to_string(),
            },
            left: CellValue::Float(4.0),
            right: CellValue::Float(4.005),
        };
        assert_eq!(m.to_string(), "contents differ at labels: 1 b: 4.0 != 4.005");
    }

    #[test]
    fn test_label_mismatch_display_uses_axis() {
        let side = |column: &str| LabelSet {
            index: vec![CellValue::Int(0)],
            columns: Some(vec![CellValue::from(column)]),
            shape: vec![1, 1],
        };
        let m = Mismatch::Labels {
            axis: Axis::Columns,
            left: side("a"),
            right: side("b"),
        };
        assert_eq!(m.to_string(), "columns differ: a vs b");
    }

    #[test]
    fn test_mismatch_serializes_with_kind_tag() {
        let m = Mismatch::Length {
            scope: LengthScope::Inner { row: 2 },
            left: 3,
            right: 1,
            context: None,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["kind"], "length");
        assert_eq!(json["scope"]["inner"]["row"], 2);
        assert!(json.get("context").is_none());
    }
}

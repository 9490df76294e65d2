//! Order-insensitive row matching

use crate::model::{CellValue, Table};

use super::{CellComparator, Check, Comparison, LengthScope, Mismatch};

/// Compare two row collections as unordered multisets.
///
/// Row counts must agree, then the widths of row 0. Every row of `rows1`
/// must then find some row of `rows2` equal element-wise within
/// `tolerance`. Matching is greedy and a row of `rows2` may partner
/// several rows of `rows1`, so with duplicate rows the outcome can depend
/// on argument order: `[[1], [1]]` against `[[1], [2]]` is equal, the
/// reverse is not.
pub fn compare_rows_unordered(
    rows1: &[Vec<CellValue>],
    rows2: &[Vec<CellValue>],
    tolerance: f64,
) -> Comparison {
    let check = Check::RowsUnordered;

    if rows1.len() != rows2.len() {
        return Comparison::different(check, length(LengthScope::Rows, rows1.len(), rows2.len()));
    }

    if let (Some(first1), Some(first2)) = (rows1.first(), rows2.first()) {
        if first1.len() != first2.len() {
            return Comparison::different(
                check,
                length(LengthScope::Columns, first1.len(), first2.len()),
            );
        }
    }

    let comparator = CellComparator::Tolerance(tolerance);
    for (i, row) in rows1.iter().enumerate() {
        match rows2.iter().position(|candidate| rows_match(&comparator, row, candidate)) {
            Some(partner) => tracing::trace!(row = i, partner, "row matched"),
            None => {
                return Comparison::different(
                    check,
                    Mismatch::UnmatchedRow {
                        row: i,
                        values: row.clone(),
                    },
                )
            }
        }
    }

    Comparison::equal(check)
}

/// Row matcher over the values of two tables; labels are ignored
pub fn compare_table_rows_unordered(table1: &Table, table2: &Table, tolerance: f64) -> Comparison {
    compare_rows_unordered(&table1.values(), &table2.values(), tolerance)
}

fn rows_match(comparator: &CellComparator, a: &[CellValue], b: &[CellValue]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| comparator.equal(x, y))
}

fn length(scope: LengthScope, left: usize, right: usize) -> Mismatch {
    Mismatch::Length {
        scope,
        left,
        right,
        context: None,
    }
}

//! Table comparators

use crate::model::{CellValue, Table};

use super::labels::compare_table_labels;
use super::{CellComparator, Check, Comparison, LengthScope, Location, Mismatch};

/// Compare two tables of numbers within `tolerance`.
///
/// Labels must agree first, and every row must have one cell per column.
/// With `check_types`, every column pair must also share its declared
/// kind. Missing cells on both sides are replaced
/// by `sentinel` before the values are compared, and the first cell in
/// row-major order whose difference is not strictly below `tolerance` is
/// reported.
pub fn compare_table_numeric(
    table1: &Table,
    table2: &Table,
    tolerance: f64,
    sentinel: &CellValue,
    check_types: bool,
) -> Comparison {
    let check = Check::TableNumeric;

    if let Some(mismatch) =
        compare_table_labels(table1, table2).or_else(|| ragged_row(table1, table2))
    {
        return Comparison::different(check, mismatch);
    }

    if check_types {
        for (left, right) in table1.columns.iter().zip(&table2.columns) {
            if left.kind != right.kind {
                return Comparison::different(
                    check,
                    Mismatch::ColumnKind {
                        column: left.name.clone(),
                        left: left.kind,
                        right: right.kind,
                    },
                );
            }
        }
    }

    let left = table1.fill_missing(sentinel);
    let right = table2.fill_missing(sentinel);
    let comparator = CellComparator::Tolerance(tolerance);

    let first = left
        .rows
        .iter()
        .zip(&right.rows)
        .flat_map(|(a, b)| a.cells.iter().zip(&b.cells))
        .position(|(a, b)| !comparator.equal(a, b));

    match first {
        None => Comparison::equal(check),
        Some(flat) => {
            let width = left.column_count();
            let (row, column) = (flat / width, flat % width);
            Comparison::different(check, value_mismatch(&left, &right, row, column))
        }
    }
}

/// Compare two tables cell by cell with plain equality.
///
/// Suited to strings or any other values compared with `==`. With
/// `check_types`, a second pass runs once all values agree and requires
/// every pair of cells to share its runtime kind, so `1` and `1.0` pass
/// the value pass but fail the type pass.
pub fn compare_table_exact(
    table1: &Table,
    table2: &Table,
    sentinel: &CellValue,
    check_types: bool,
) -> Comparison {
    let check = Check::TableExact;

    if let Some(mismatch) =
        compare_table_labels(table1, table2).or_else(|| ragged_row(table1, table2))
    {
        return Comparison::different(check, mismatch);
    }

    let left = table1.fill_missing(sentinel);
    let right = table2.fill_missing(sentinel);

    if let Some((row, column)) = first_cell(&left, &right, |a, b| a != b) {
        return Comparison::different(check, value_mismatch(&left, &right, row, column));
    }

    if check_types {
        if let Some((row, column)) = first_cell(&left, &right, |a, b| a.cell_type() != b.cell_type()) {
            let (a, b) = (&left.rows[row].cells[column], &right.rows[row].cells[column]);
            return Comparison::different(
                check,
                Mismatch::ElementType {
                    location: cell_location(&left, row, column),
                    left: a.cell_type(),
                    right: b.cell_type(),
                },
            );
        }
    }

    Comparison::equal(check)
}

/// First row, on either side, whose cell count is not the column count.
///
/// Only tables assembled by hand through the public `rows` field can be
/// ragged; the constructors reject them.
fn ragged_row(left: &Table, right: &Table) -> Option<Mismatch> {
    let columns = left.column_count();
    left.rows
        .iter()
        .zip(&right.rows)
        .enumerate()
        .find(|(_, (a, b))| a.cells.len() != columns || b.cells.len() != columns)
        .map(|(row, (a, b))| Mismatch::Length {
            scope: LengthScope::RowCells { row, columns },
            left: a.cells.len(),
            right: b.cells.len(),
            context: None,
        })
}

/// First `(row, column)` in row-major order where `differs` holds
fn first_cell<F>(left: &Table, right: &Table, differs: F) -> Option<(usize, usize)>
where
    F: Fn(&CellValue, &CellValue) -> bool,
{
    for (i, (a, b)) in left.rows.iter().zip(&right.rows).enumerate() {
        for (j, (x, y)) in a.cells.iter().zip(&b.cells).enumerate() {
            if differs(x, y) {
                return Some((i, j));
            }
        }
    }
    None
}

fn cell_location(table: &Table, row: usize, column: usize) -> Location {
    Location::Cell {
        row,
        column,
        row_label: table.rows[row].label.clone(),
        column_label: table.columns[column].name.clone(),
    }
}

fn value_mismatch(left: &Table, right: &Table, row: usize, column: usize) -> Mismatch {
    Mismatch::Value {
        location: cell_location(left, row, column),
        left: left.rows[row].cells[column].clone(),
        right: right.rows[row].cells[column].clone(),
    }
}

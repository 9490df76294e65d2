//! Label and shape pre-checks shared by the table and series comparators

use crate::model::{CellValue, Series, Table};

use super::{Axis, LabelSet, Mismatch};

/// Row labels, then column labels, must agree element-wise and in order.
///
/// Returns the first axis that disagrees, with both label lists and the
/// shape of each table.
pub fn compare_table_labels(left: &Table, right: &Table) -> Option<Mismatch> {
    let (left_labels, right_labels) = (table_labels(left), table_labels(right));

    let axis = if left_labels.index != right_labels.index {
        Axis::Index
    } else if left_labels.columns != right_labels.columns {
        Axis::Columns
    } else {
        return None;
    };

    Some(Mismatch::Labels {
        axis,
        left: left_labels,
        right: right_labels,
    })
}

/// Series labels must agree element-wise and in order
pub fn compare_index(left: &Series, right: &Series) -> Option<Mismatch> {
    if left.index == right.index {
        return None;
    }
    let labels = |s: &Series| LabelSet {
        index: s.index.clone(),
        columns: None,
        shape: vec![s.len()],
    };
    Some(Mismatch::Labels {
        axis: Axis::Index,
        left: labels(left),
        right: labels(right),
    })
}

fn table_labels(table: &Table) -> LabelSet {
    let (rows, columns) = table.shape();
    LabelSet {
        index: table.row_labels(),
        columns: Some(
            table
                .columns
                .iter()
                .map(|c| CellValue::from(c.name.as_str()))
                .collect(),
        ),
        shape: vec![rows, columns],
    }
}

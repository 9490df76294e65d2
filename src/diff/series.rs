//! Series comparators

use crate::model::{CellValue, Series};

use super::labels::compare_index;
use super::{CellComparator, Check, Comparison, Location, Mismatch};

/// Compare two series of numbers within `tolerance`
pub fn compare_series_numeric(
    series1: &Series,
    series2: &Series,
    tolerance: f64,
    sentinel: &CellValue,
    check_types: bool,
    check_name: bool,
) -> Comparison {
    compare_series(
        Check::SeriesNumeric,
        series1,
        series2,
        CellComparator::Tolerance(tolerance),
        sentinel,
        check_types,
        check_name,
    )
}

/// Compare two series with plain equality
pub fn compare_series_exact(
    series1: &Series,
    series2: &Series,
    sentinel: &CellValue,
    check_types: bool,
    check_name: bool,
) -> Comparison {
    compare_series(
        Check::SeriesExact,
        series1,
        series2,
        CellComparator::Exact,
        sentinel,
        check_types,
        check_name,
    )
}

// Name, then declared kind, then labels, then values.
fn compare_series(
    check: Check,
    series1: &Series,
    series2: &Series,
    comparator: CellComparator,
    sentinel: &CellValue,
    check_types: bool,
    check_name: bool,
) -> Comparison {
    if check_name && series1.name != series2.name {
        return Comparison::different(
            check,
            Mismatch::Name {
                left: series1.name.clone(),
                right: series2.name.clone(),
            },
        );
    }

    if check_types && series1.kind != series2.kind {
        return Comparison::different(
            check,
            Mismatch::SeriesKind {
                left: series1.kind,
                right: series2.kind,
            },
        );
    }

    if let Some(mismatch) = compare_index(series1, series2) {
        return Comparison::different(check, mismatch);
    }

    let left = series1.fill_missing(sentinel);
    let right = series2.fill_missing(sentinel);

    let first = left
        .values
        .iter()
        .zip(&right.values)
        .position(|(a, b)| !comparator.equal(a, b));

    match first {
        None => Comparison::equal(check),
        Some(position) => Comparison::different(
            check,
            Mismatch::Value {
                location: Location::Entry {
                    position,
                    label: left.index[position].clone(),
                },
                left: left.values[position].clone(),
                right: right.values[position].clone(),
            },
        ),
    }
}

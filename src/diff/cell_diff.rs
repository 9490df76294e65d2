//! Cell-level comparison logic

use crate::model::CellValue;

/// Equality policy applied to a single pair of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellComparator {
    /// Numbers are equal when their absolute difference is strictly below
    /// the tolerance; anything else falls back to exact equality
    Tolerance(f64),
    /// Plain value equality
    Exact,
}

impl CellComparator {
    /// Compare two cell values for equality
    pub fn equal(&self, a: &CellValue, b: &CellValue) -> bool {
        match self {
            CellComparator::Tolerance(tolerance) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => within_tolerance(x, y, *tolerance),
                _ => a == b,
            },
            CellComparator::Exact => a == b,
        }
    }
}

/// `|a - b| < tolerance`, except that identical values always pass:
/// two NaNs, or the same infinity on both sides. NaN against a number
/// never passes.
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan()) || (a - b).abs() < tolerance
}

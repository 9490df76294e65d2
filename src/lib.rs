//! framecheck - Diagnostic equality checks for tabular data
//!
//! Compares labeled tables, labeled series, flat sequences, sequences of
//! strings and nested sequences, and explains the first discrepancy found.
//! Every comparator in [`diff`] is a pure function returning a
//! [`Comparison`]; [`Checker`] wraps them for interactive use by printing
//! the diagnostic and answering with a `bool`.
//!
//! ```
//! use framecheck::diff::compare_sequence;
//! use framecheck::model::CellValue;
//!
//! let a: Vec<CellValue> = vec![1.into(), 2.into(), 3.into()];
//! let b: Vec<CellValue> = vec![1.into(), 2.into(), 3.into(), 4.into()];
//! let result = compare_sequence(&a, &b, 0.001);
//! assert!(!result.is_equal());
//! ```

pub mod checker;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;

pub use checker::Checker;
pub use config::Config;
pub use diff::{Comparison, Mismatch};
pub use error::ModelError;
pub use model::{CellValue, Series, Table};

//! One-dimensional labeled data

use super::schema::CellType;
use super::table::CellValue;
use crate::error::{ModelError, Result};

/// A named, labeled run of values with a declared kind
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Optional series name
    pub name: Option<String>,
    /// Entry labels, one per value
    pub index: Vec<CellValue>,
    /// Values in label order
    pub values: Vec<CellValue>,
    /// Declared kind of the values
    pub kind: CellType,
}

impl Series {
    /// Build a series, inferring its kind from the values
    pub fn new<L>(
        name: Option<&str>,
        index: impl IntoIterator<Item = L>,
        values: Vec<CellValue>,
    ) -> Result<Self>
    where
        L: Into<CellValue>,
    {
        let index: Vec<CellValue> = index.into_iter().map(Into::into).collect();
        if index.len() != values.len() {
            return Err(ModelError::SeriesLength {
                labels: index.len(),
                values: values.len(),
            });
        }

        let kind = CellType::infer(&values);
        Ok(Self {
            name: name.map(str::to_string),
            index,
            values,
            kind,
        })
    }

    /// Series labeled `0..n`
    pub fn from_values(name: Option<&str>, values: Vec<CellValue>) -> Self {
        let kind = CellType::infer(&values);
        Self {
            name: name.map(str::to_string),
            index: (0..values.len() as i64).map(CellValue::Int).collect(),
            values,
            kind,
        }
    }

    /// Override the declared kind
    pub fn with_kind(mut self, kind: CellType) -> Self {
        self.kind = kind;
        self
    }

    /// Copy with every missing value replaced by `sentinel`
    pub fn fill_missing(&self, sentinel: &CellValue) -> Series {
        Series {
            name: self.name.clone(),
            index: self.index.clone(),
            values: self.values.iter().map(|v| v.or_sentinel(sentinel)).collect(),
            kind: self.kind,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

//! Column metadata and value kinds

use serde::{Deserialize, Serialize};

/// Kind of a value, or the declared kind of a whole column or series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Null,
    Bool,
    Int,
    Float,
    String,
    Date,
    DateTime,
    Mixed,
}

impl CellType {
    /// Widen the type to accommodate another type
    pub fn widen(self, other: CellType) -> CellType {
        if self == other {
            return self;
        }

        match (self, other) {
            (CellType::Null, t) | (t, CellType::Null) => t,
            (CellType::Int, CellType::Float) | (CellType::Float, CellType::Int) => CellType::Float,
            (CellType::Date, CellType::DateTime) | (CellType::DateTime, CellType::Date) => {
                CellType::DateTime
            }
            _ => CellType::Mixed,
        }
    }

    /// Infer the declared kind of a run of values.
    ///
    /// Missing values do not contribute, so a float column with holes is
    /// still `Float`.
    pub fn infer<'a, I>(values: I) -> CellType
    where
        I: IntoIterator<Item = &'a super::CellValue>,
    {
        values
            .into_iter()
            .filter(|v| !v.is_missing())
            .fold(CellType::Null, |acc, v| acc.widen(v.cell_type()))
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Null => write!(f, "null"),
            CellType::Bool => write!(f, "bool"),
            CellType::Int => write!(f, "int"),
            CellType::Float => write!(f, "float"),
            CellType::String => write!(f, "string"),
            CellType::Date => write!(f, "date"),
            CellType::DateTime => write!(f, "datetime"),
            CellType::Mixed => write!(f, "mixed"),
        }
    }
}

/// Column label and declared kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column label
    pub name: String,
    /// Declared kind, inferred from the data unless set explicitly
    pub kind: CellType,
}

impl Column {
    /// Create a column whose kind will be inferred from its values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CellType::Null,
        }
    }

    /// Create a column with a declared kind
    pub fn with_kind(name: impl Into<String>, kind: CellType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

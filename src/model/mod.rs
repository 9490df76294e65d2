//! Data model for labeled tables and series

mod schema;
mod series;
mod table;

pub use schema::{CellType, Column};
pub use series::Series;
pub use table::{CellValue, Row, Table};

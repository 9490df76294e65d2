//! Configuration handling for framecheck

use termcolor::ColorChoice;

use crate::model::CellValue;

/// Tolerance used by the table, series and unordered-row checks when none is set
pub const DEFAULT_TABLE_TOLERANCE: f64 = 0.011;

/// Tolerance used by the flat and nested sequence checks when none is set
pub const DEFAULT_SEQUENCE_TOLERANCE: f64 = 0.001;

/// Stand-in for missing numbers when no sentinel is set
pub const DEFAULT_NUMERIC_SENTINEL: i64 = -999;

/// Stand-in for missing values in exact checks when no sentinel is set
pub const DEFAULT_TEXT_SENTINEL: &str = "";

/// Output format for mismatch diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    /// Pretty-printed JSON document
    Json,
    /// Single-line JSON document
    JsonCompact,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "json-compact" | "compact" => Ok(OutputFormat::JsonCompact),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for checks run through a [`Checker`](crate::Checker)
#[derive(Debug, Clone)]
pub struct Config {
    /// Tolerance for numeric comparisons; `None` picks the per-check default
    pub tolerance: Option<f64>,
    /// Stand-in for missing values; `None` picks the per-check default
    pub sentinel: Option<CellValue>,
    /// Also require matching declared or runtime value kinds
    pub check_types: bool,
    /// Also require matching series names
    pub check_name: bool,
    /// Print both full strings next to a string mismatch
    pub show_context: bool,
    /// Go straight to the character scan for strings of different lengths
    pub skip_length_check: bool,
    /// Output format
    pub output_format: OutputFormat,
    /// Colour handling for terminal output
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: None,
            sentinel: None,
            check_types: false,
            check_name: false,
            show_context: true,
            skip_length_check: false,
            output_format: OutputFormat::default(),
            color: ColorChoice::Auto,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set numeric tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the missing-value sentinel
    pub fn with_sentinel(mut self, sentinel: impl Into<CellValue>) -> Self {
        self.sentinel = Some(sentinel.into());
        self
    }

    /// Enable value kind checks
    pub fn with_check_types(mut self, check: bool) -> Self {
        self.check_types = check;
        self
    }

    /// Enable series name checks
    pub fn with_check_name(mut self, check: bool) -> Self {
        self.check_name = check;
        self
    }

    /// Show full strings next to string mismatches
    pub fn with_show_context(mut self, show: bool) -> Self {
        self.show_context = show;
        self
    }

    /// Skip the string length check
    pub fn with_skip_length_check(mut self, skip: bool) -> Self {
        self.skip_length_check = skip;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set colour handling
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Tolerance for table, series and unordered-row checks
    pub fn table_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(DEFAULT_TABLE_TOLERANCE)
    }

    /// Tolerance for flat and nested sequence checks
    pub fn sequence_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(DEFAULT_SEQUENCE_TOLERANCE)
    }

    /// Sentinel for numeric checks
    pub fn numeric_sentinel(&self) -> CellValue {
        self.sentinel
            .clone()
            .unwrap_or(CellValue::Int(DEFAULT_NUMERIC_SENTINEL))
    }

    /// Sentinel for exact checks
    pub fn text_sentinel(&self) -> CellValue {
        self.sentinel
            .clone()
            .unwrap_or_else(|| CellValue::from(DEFAULT_TEXT_SENTINEL))
    }
}

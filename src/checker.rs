//! Print-and-return-bool front end for interactive grading

use termcolor::WriteColor;

use crate::config::Config;
use crate::diff::{self, Comparison};
use crate::model::{CellValue, Series, Table};
use crate::output::{render_to_stdout, OutputFactory};

/// Runs comparators with a [`Config`], prints the diagnostic of every
/// failed check and answers with a plain `bool`.
///
/// Callers that need the structured result should call the functions in
/// [`diff`](crate::diff) directly.
pub struct Checker {
    config: Config,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Checker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Numeric table check
    pub fn tables(&self, table1: &Table, table2: &Table) -> bool {
        self.report(self.table_comparison(table1, table2))
    }

    /// Exact table check
    pub fn tables_exact(&self, table1: &Table, table2: &Table) -> bool {
        self.report(self.table_exact_comparison(table1, table2))
    }

    /// Order-insensitive row check
    pub fn rows_unordered(&self, rows1: &[Vec<CellValue>], rows2: &[Vec<CellValue>]) -> bool {
        self.report(diff::compare_rows_unordered(
            rows1,
            rows2,
            self.config.table_tolerance(),
        ))
    }

    /// Numeric series check
    pub fn series(&self, series1: &Series, series2: &Series) -> bool {
        self.report(diff::compare_series_numeric(
            series1,
            series2,
            self.config.table_tolerance(),
            &self.config.numeric_sentinel(),
            self.config.check_types,
            self.config.check_name,
        ))
    }

    /// Exact series check
    pub fn series_exact(&self, series1: &Series, series2: &Series) -> bool {
        self.report(diff::compare_series_exact(
            series1,
            series2,
            &self.config.text_sentinel(),
            self.config.check_types,
            self.config.check_name,
        ))
    }

    /// Flat sequence check
    pub fn sequence(&self, seq1: &[CellValue], seq2: &[CellValue]) -> bool {
        self.report(diff::compare_sequence(
            seq1,
            seq2,
            self.config.sequence_tolerance(),
        ))
    }

    /// String sequence check
    pub fn strings<S: AsRef<str>>(&self, seq1: &[S], seq2: &[S]) -> bool {
        self.report(diff::compare_string_sequence(
            seq1,
            seq2,
            self.config.sequence_tolerance(),
            self.config.show_context,
            self.config.skip_length_check,
        ))
    }

    /// Nested sequence check
    pub fn nested(&self, seq1: &[Vec<CellValue>], seq2: &[Vec<CellValue>]) -> bool {
        self.report(diff::compare_nested_sequence(
            seq1,
            seq2,
            self.config.sequence_tolerance(),
        ))
    }

    /// Numeric table check rendered to `writer` instead of stdout
    pub fn tables_to(&self, table1: &Table, table2: &Table, writer: &mut dyn WriteColor) -> bool {
        self.report_to(self.table_comparison(table1, table2), writer)
    }

    /// Exact table check rendered to `writer` instead of stdout
    pub fn tables_exact_to(
        &self,
        table1: &Table,
        table2: &Table,
        writer: &mut dyn WriteColor,
    ) -> bool {
        self.report_to(self.table_exact_comparison(table1, table2), writer)
    }

    /// Render any comparison to `writer` and return its outcome
    pub fn report_to(&self, comparison: Comparison, writer: &mut dyn WriteColor) -> bool {
        let formatter = OutputFactory::create(self.config.output_format);
        if let Err(e) = formatter.render(&comparison, writer) {
            tracing::warn!(check = %comparison.check, "failed to render diagnostic: {:#}", e);
        }
        comparison.is_equal()
    }

    fn report(&self, comparison: Comparison) -> bool {
        if let Err(e) = render_to_stdout(&comparison, self.config.output_format, self.config.color) {
            tracing::warn!(check = %comparison.check, "failed to render diagnostic: {:#}", e);
        }
        comparison.is_equal()
    }

    fn table_comparison(&self, table1: &Table, table2: &Table) -> Comparison {
        diff::compare_table_numeric(
            table1,
            table2,
            self.config.table_tolerance(),
            &self.config.numeric_sentinel(),
            self.config.check_types,
        )
    }

    fn table_exact_comparison(&self, table1: &Table, table2: &Table) -> Comparison {
        diff::compare_table_exact(
            table1,
            table2,
            &self.config.text_sentinel(),
            self.config.check_types,
        )
    }
}

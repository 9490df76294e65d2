//! JSON output format

use std::io::Write;

use anyhow::Result;
use termcolor::WriteColor;

use crate::diff::Comparison;

use super::OutputFormatter;

/// JSON output formatter: one document per comparison
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, comparison)?;
        } else {
            serde_json::to_writer(&mut *writer, comparison)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

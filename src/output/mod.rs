//! Output formatting for comparison results

mod json;
mod terminal;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::OutputFormat;
use crate::diff::Comparison;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a comparison result to a writer
    fn render(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::JsonCompact => Box::new(JsonOutput::compact()),
        }
    }
}

/// Render a comparison result to stdout
pub fn render_to_stdout(
    comparison: &Comparison,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = StandardStream::stdout(color);
    formatter.render(comparison, &mut stdout)
}

/// Render a comparison result to a string without colour
pub fn render_to_string(comparison: &Comparison, format: OutputFormat) -> Result<String> {
    let formatter = OutputFactory::create(format);
    let mut buffer = termcolor::NoColor::new(Vec::new());
    formatter.render(comparison, &mut buffer)?;
    Ok(String::from_utf8(buffer.into_inner())?)
}

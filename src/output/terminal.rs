//! Banner-style terminal diagnostics

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::{
    char_or_end, join, Axis, Check, Comparison, LengthScope, Mismatch, StringContext,
};

use super::OutputFormatter;

/// One rendered line
enum Line {
    /// `*****` framed heading for content mismatches
    Banner(String),
    /// `-----` framed heading for label, name and count mismatches
    Rule(String),
    Text(String),
}

/// Terminal output; headings are coloured when the writer supports it
pub struct TerminalOutput {
    heading: ColorSpec,
}

impl TerminalOutput {
    pub fn new() -> Self {
        let mut heading = ColorSpec::new();
        heading.set_fg(Some(Color::Red)).set_bold(true);
        Self { heading }
    }

    fn write_line(&self, line: &Line, writer: &mut dyn WriteColor) -> Result<()> {
        match line {
            Line::Banner(text) | Line::Rule(text) => {
                writer.set_color(&self.heading)?;
                write!(writer, "{}", text)?;
                writer.reset()?;
                writeln!(writer)?;
            }
            Line::Text(text) => writeln!(writer, "{}", text)?,
        }
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()> {
        let Some(mismatch) = &comparison.mismatch else {
            return Ok(());
        };

        for line in describe(comparison.check, mismatch) {
            self.write_line(&line, writer)?;
        }
        Ok(())
    }
}

/// Names used for the two operands of a check
fn operands(check: Check) -> (&'static str, &'static str) {
    match check {
        Check::TableNumeric | Check::TableExact | Check::RowsUnordered => ("df1", "df2"),
        Check::SeriesNumeric | Check::SeriesExact => ("s1", "s2"),
        Check::Sequence | Check::StringSequence | Check::NestedSequence => ("list 1", "list 2"),
    }
}

fn banner(text: impl std::fmt::Display) -> Line {
    Line::Banner(format!("********* {} *********", text))
}

fn rule(text: impl std::fmt::Display) -> Line {
    Line::Rule(format!("------{}--------", text))
}

fn shape(dims: &[usize]) -> String {
    match dims {
        [n] => format!("({},)", n),
        _ => format!(
            "({})",
            dims.iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn context_lines(context: &Option<StringContext>, lines: &mut Vec<Line>) {
    if let Some(context) = context {
        for (n, s) in [(1, &context.left), (2, &context.right)] {
            lines.push(Line::Text(format!("--------- String {}: ---------", n)));
            lines.push(Line::Text(
                s.clone().unwrap_or_else(|| "<no element>".to_string()),
            ));
        }
    }
}

/// Lay out a mismatch in the style of the classic grading helpers
fn describe(check: Check, mismatch: &Mismatch) -> Vec<Line> {
    let subject = check.subject();
    let (one, two) = operands(check);
    let mut lines = Vec::new();

    let closing = match mismatch {
        Mismatch::Labels { left, right, .. } => {
            let mut axes = vec![Axis::Index];
            if left.columns.is_some() || right.columns.is_some() {
                axes.push(Axis::Columns);
            }
            for axis in axes {
                lines.push(rule(format_args!("{} {}", subject, axis)));
                lines.push(Line::Text(format!("  {}: [{}]", one, join(left.along(axis)))));
                lines.push(Line::Text(format!("  {}: [{}]", two, join(right.along(axis)))));
            }
            lines.push(rule(format_args!("{} shape", subject)));
            lines.push(Line::Text(format!("  {}: {}", one, shape(&left.shape))));
            lines.push(Line::Text(format!("  {}: {}", two, shape(&right.shape))));
            Line::Rule("-".repeat(31))
        }
        Mismatch::Name { left, right } => {
            lines.push(rule(format_args!("{} names", subject)));
            lines.push(Line::Text(format!("  {}: {}", one, left.as_deref().unwrap_or("None"))));
            lines.push(Line::Text(format!("  {}: {}", two, right.as_deref().unwrap_or("None"))));
            Line::Rule("-".repeat(31))
        }
        Mismatch::SeriesKind { left, right } => {
            lines.push(rule(format_args!("{} datatypes", subject)));
            lines.push(Line::Text(format!("  {}: {}", one, left)));
            lines.push(Line::Text(format!("  {}: {}", two, right)));
            Line::Rule("-".repeat(31))
        }
        Mismatch::ColumnKind {
            column,
            left,
            right,
        } => {
            lines.push(rule(format_args!("{} column dtypes differ", subject)));
            lines.push(Line::Text(format!("  col: {}", column)));
            lines.push(Line::Text(format!("  {}: {}", one, left)));
            lines.push(Line::Text(format!("  {}: {}", two, right)));
            Line::Rule("-".repeat(47))
        }
        Mismatch::Value {
            location,
            left,
            right,
        } => {
            lines.push(banner(format_args!("{} contents differ", subject)));
            lines.push(Line::Text(format!("    Problem at {}", location)));
            lines.push(Line::Text(format!("    {} != {}", left, right)));
            Line::Banner("*".repeat(45))
        }
        Mismatch::ElementType {
            location,
            left,
            right,
        } => {
            lines.push(banner(format_args!("{} types differ", subject)));
            lines.push(Line::Text(format!("    Problem at {}", location)));
            lines.push(Line::Text(format!("    {} != {}", left, right)));
            Line::Banner("*".repeat(42))
        }
        Mismatch::Length {
            scope,
            left,
            right,
            context,
        } => {
            let (heading, label) = match scope {
                LengthScope::Rows => (rule("Number of rows differ "), "Number of rows"),
                LengthScope::Columns => (rule("Number of columns differ "), "Number of columns"),
                LengthScope::Outer => (
                    banner("The nested lists have different lengths (numbers of inner lists):"),
                    "Length list",
                ),
                LengthScope::Inner { row } => (
                    banner(format_args!("Inner list lengths differ for row {}:", row)),
                    "Length inner list",
                ),
                LengthScope::Sequence => (
                    banner("All corresponding elements equal but list lengths differ:"),
                    "Length list",
                ),
                LengthScope::StringAt { index } => {
                    lines.push(banner(format_args!("Strings differ at list index: {}", index)));
                    (banner("Strings have different lengths:"), "Length string")
                }
                LengthScope::RowCells { row, columns } => (
                    rule(format_args!("Row {} cells do not fit {} columns ", row, columns)),
                    "Number of cells",
                ),
            };
            lines.push(heading);
            lines.push(Line::Text(format!("  {} 1: {}", label, left)));
            lines.push(Line::Text(format!("  {} 2: {}", label, right)));
            context_lines(context, &mut lines);
            Line::Banner("*".repeat(43))
        }
        Mismatch::Character {
            index,
            position,
            left,
            right,
            context,
        } => {
            lines.push(banner(format_args!("Strings differ at list index: {}", index)));
            lines.push(banner(format_args!("Strings differ at character: {}", position)));
            lines.push(Line::Text(format!(
                "    {} != {}",
                char_or_end(*left),
                char_or_end(*right)
            )));
            context_lines(context, &mut lines);
            Line::Banner("*".repeat(43))
        }
        Mismatch::UnmatchedRow { row, values } => {
            lines.push(banner(format_args!("{} rows differ", subject)));
            lines.push(Line::Text(format!("    Row {} of {} has no match in {}", row, one, two)));
            lines.push(Line::Text(format!("    [{}]", join(values))));
            Line::Banner("*".repeat(41))
        }
    };

    lines.push(closing);
    lines
}

//! Report renderers.

use super::{Cell, Row, COLUMNS};
use crate::{Error, Result};
use avls_common::OutputMode;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array (machine mode).
    Json,
    /// Whitespace-aligned columns under a header row.
    #[default]
    Plain,
    /// Like `plain`, with the header underlined by dashes.
    Simple,
    /// Box drawn with `+`, `-`, `=` and `|`.
    Grid,
    /// Markdown pipe table.
    Pipe,
    /// Tab-separated values.
    Tsv,
}

impl OutputFormat {
    /// Every accepted format name.
    pub const NAMES: &'static [&'static str] = &["json", "plain", "simple", "grid", "pipe", "tsv"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Plain => "plain",
            Self::Simple => "simple",
            Self::Grid => "grid",
            Self::Pipe => "pipe",
            Self::Tsv => "tsv",
        }
    }

    /// JSON is the only machine-readable format.
    pub fn mode(self) -> OutputMode {
        match self {
            Self::Json => OutputMode::Machine,
            _ => OutputMode::Human,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "plain" => Ok(Self::Plain),
            "simple" => Ok(Self::Simple),
            "grid" => Ok(Self::Grid),
            "pipe" => Ok(Self::Pipe),
            "tsv" => Ok(Self::Tsv),
            _ => Err(Error::UnsupportedOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `rows` to `out` in the given format.
///
/// An empty row list renders as `[]` in JSON and as nothing in the table
/// formats.
pub fn render<W: Write>(rows: &[Row], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(rows, out),
        _ if rows.is_empty() => Ok(()),
        OutputFormat::Tsv => render_tsv(rows, out),
        table => render_table(rows, table, out),
    }
}

fn render_json<W: Write>(rows: &[Row], out: &mut W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
    rows.serialize(&mut serializer)?;
    writeln!(out)?;
    Ok(())
}

fn render_tsv<W: Write>(rows: &[Row], out: &mut W) -> Result<()> {
    writeln!(out, "{}", COLUMNS.join("\t"))?;
    for row in rows {
        let line: Vec<String> = row.cells().into_iter().map(|c| c.text).collect();
        writeln!(out, "{}", line.join("\t"))?;
    }
    Ok(())
}

fn render_table<W: Write>(rows: &[Row], format: OutputFormat, out: &mut W) -> Result<()> {
    let body: Vec<Vec<Cell>> = rows.iter().map(Row::cells).collect();

    // A column is right-aligned when every non-empty cell in it is numeric.
    let numeric: Vec<bool> = (0..COLUMNS.len())
        .map(|col| {
            body.iter()
                .map(|cells| &cells[col])
                .filter(|cell| !cell.text.is_empty())
                .all(|cell| cell.numeric)
        })
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|cells| cells[col].text.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let pad = |text: &str, col: usize| -> String {
        if numeric[col] {
            format!("{text:>width$}", width = widths[col])
        } else {
            format!("{text:<width$}", width = widths[col])
        }
    };
    let line = |cells: Vec<String>| -> String {
        match format {
            OutputFormat::Grid | OutputFormat::Pipe => format!("| {} |", cells.join(" | ")),
            _ => cells.join("  "),
        }
    };
    let rule = |fill: char| -> String {
        let segments: Vec<String> = widths.iter().map(|w| fill.to_string().repeat(w + 2)).collect();
        format!("+{}+", segments.join("+"))
    };

    let header = line(COLUMNS.iter().enumerate().map(|(col, h)| pad(h, col)).collect());

    match format {
        OutputFormat::Grid => {
            writeln!(out, "{}", rule('-'))?;
            writeln!(out, "{header}")?;
            writeln!(out, "{}", rule('='))?;
        }
        OutputFormat::Pipe => {
            let aligns: Vec<String> = widths
                .iter()
                .zip(&numeric)
                .map(|(w, right)| {
                    let dashes = "-".repeat((*w).max(1).saturating_sub(1));
                    if *right {
                        format!("{dashes}:")
                    } else {
                        format!(":{dashes}")
                    }
                })
                .collect();
            writeln!(out, "{header}")?;
            writeln!(out, "|{}|", aligns.iter().map(|a| format!(" {a} ")).collect::<Vec<_>>().join("|"))?;
        }
        OutputFormat::Simple => {
            writeln!(out, "{header}")?;
            writeln!(out, "{}", line(widths.iter().map(|w| "-".repeat(*w)).collect()))?;
        }
        _ => writeln!(out, "{header}")?,
    }

    for cells in &body {
        let text: Vec<String> = cells.iter().enumerate().map(|(col, c)| pad(&c.text, col)).collect();
        writeln!(out, "{}", line(text))?;
        if format == OutputFormat::Grid {
            writeln!(out, "{}", rule('-'))?;
        }
    }

    Ok(())
}

//! Output formatting for suffix listings and query results
//!
//! Everything here writes to a [`WriteColor`] sink so the same code drives
//! colored terminal output and plain buffers in tests.

use crate::highlight::{Highlight, HighlightConfig, highlight_with};
use crate::index::{SuffixArray, SuffixArrayReader};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// When to emit color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn color_choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Outcome of one query, ready for printing or serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub query: String,
    /// Offset returned by the binary search, if any suffix matched
    pub position: Option<usize>,
    /// Every occurrence, ascending (only when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<usize>>,
    /// Context around `position`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

impl QueryReport {
    /// Run one query against `reader`, optionally collecting all occurrences
    pub fn new(
        reader: &SuffixArrayReader<'_>,
        config: &HighlightConfig,
        query: &str,
        all: bool,
    ) -> Self {
        let position = reader.search(query);
        Self::from_position(reader, config, query, position, all)
    }

    /// Build a report for a query whose search result is already known
    pub fn from_position(
        reader: &SuffixArrayReader<'_>,
        config: &HighlightConfig,
        query: &str,
        position: Option<usize>,
        all: bool,
    ) -> Self {
        let highlight =
            position.and_then(|pos| highlight_with(config, reader.array(), pos, query.len()).ok());
        let occurrences = all.then(|| reader.find_all(query));

        Self {
            query: query.to_string(),
            position,
            occurrences,
            highlight,
        }
    }
}

/// Print the indexed string and its length
pub fn write_summary(out: &mut impl WriteColor, array: &SuffixArray) -> io::Result<()> {
    write_label(out, "String")?;
    writeln!(out, "{}", array.as_str())?;
    write_label(out, "String length")?;
    writeln!(out, "{}", array.len())?;
    Ok(())
}

/// Print every suffix as `rank offset suffix`, in text or sorted order
pub fn write_suffixes(
    out: &mut impl WriteColor,
    array: &SuffixArray,
    sorted: bool,
) -> io::Result<()> {
    let width = array.len().saturating_sub(1).to_string().len();

    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{}", if sorted { "Sorted suffixes:" } else { "Unsorted suffixes:" })?;
    out.reset()?;

    let rows: Box<dyn Iterator<Item = (usize, &str)> + '_> = if sorted {
        Box::new(array.sorted_suffixes())
    } else {
        Box::new(array.unsorted_suffixes())
    };

    for (rank, (offset, suffix)) in rows.enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>width$}", rank)?;
        out.reset()?;
        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{:>width$}", offset)?;
        out.reset()?;
        writeln!(out, " {}", suffix)?;
    }

    Ok(())
}

/// Print a query's result followed by its highlight block
pub fn write_query_result(out: &mut impl WriteColor, report: &QueryReport) -> io::Result<()> {
    write!(out, "Query ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "\"{}\"", report.query)?;
    out.reset()?;

    let Some(position) = report.position else {
        write!(out, ": ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "not found")?;
        out.reset()?;
        return Ok(());
    };

    writeln!(out, ": found at offset {}", position)?;

    if let Some(occurrences) = &report.occurrences {
        let listed: Vec<String> = occurrences.iter().map(|o| o.to_string()).collect();
        writeln!(out, "Occurrences ({}): {}", occurrences.len(), listed.join(" "))?;
    }

    if let Some(highlight) = &report.highlight {
        write_highlight(out, highlight)?;
    }

    Ok(())
}

/// Print a highlight block with the match itself colored
pub fn write_highlight(out: &mut impl WriteColor, highlight: &Highlight) -> io::Result<()> {
    let matched = ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true).clone();

    write!(out, "{}", highlight.before())?;
    out.set_color(&matched)?;
    write!(out, "{}", highlight.matched())?;
    out.reset()?;
    writeln!(out, "{}", highlight.after())?;

    out.set_color(&matched)?;
    write!(out, "{}", highlight.underline())?;
    out.reset()?;
    writeln!(out)?;

    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_label(out: &mut impl WriteColor, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}:", label)?;
    out.reset()?;
    write!(out, " ")
}

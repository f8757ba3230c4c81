//! Match highlighting
//!
//! Renders a found match inside a bounded window of surrounding text, with
//! ellipsis markers where the window was clipped and a caret line under the
//! matched span:
//!
//! ```text
//! ...cdefghijklmnopqrstuvwx...
//!              ^^
//! ```

use crate::error::{Error, Result};
use crate::index::SuffixArray;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters of context shown on each side of a match
pub const DEFAULT_PADDING: usize = 10;

/// Marker shown where context was cut off
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Character drawn under each matched character
pub const DEFAULT_MARKER: char = '^';

/// How a highlight window is laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    pub padding: usize,
    pub ellipsis: String,
    pub marker: char,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            marker: DEFAULT_MARKER,
        }
    }
}

/// A rendered match: the context line and the marker line beneath it
///
/// Only [`highlight_with`] builds one, so `match_column` and `length` always
/// fall on character boundaries inside `line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Context window, with ellipsis markers where clipped
    line: String,
    /// Spaces up to the match, then one marker per matched character
    underline: String,
    /// Byte column in `line` where the match begins
    match_column: usize,
    length: usize,
    truncated_left: bool,
    truncated_right: bool,
}

impl Highlight {
    /// Context window, with ellipsis markers where clipped
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Marker line to print under [`line`](Self::line)
    pub fn underline(&self) -> &str {
        &self.underline
    }

    /// Byte column in the line where the match begins
    pub fn match_column(&self) -> usize {
        self.match_column
    }

    /// Length of the match
    pub fn match_len(&self) -> usize {
        self.length
    }

    /// Context before the match was cut short
    pub fn truncated_left(&self) -> bool {
        self.truncated_left
    }

    /// Context after the match was cut short
    pub fn truncated_right(&self) -> bool {
        self.truncated_right
    }

    /// The part of the line before the match
    pub fn before(&self) -> &str {
        &self.line[..self.match_column]
    }

    /// The matched text
    pub fn matched(&self) -> &str {
        &self.line[self.match_column..self.match_column + self.length]
    }

    /// The part of the line after the match
    pub fn after(&self) -> &str {
        &self.line[self.match_column + self.length..]
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.line, self.underline)
    }
}

/// Highlight `length` characters at `start` with the default layout
pub fn highlight(array: &SuffixArray, start: usize, length: usize) -> Result<Highlight> {
    highlight_with(&HighlightConfig::default(), array, start, length)
}

/// Highlight `length` characters at `start`
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] unless `start < len` and
/// `1 <= length <= len - start`.
pub fn highlight_with(
    config: &HighlightConfig,
    array: &SuffixArray,
    start: usize,
    length: usize,
) -> Result<Highlight> {
    let text = array.as_str();
    let text_len = text.len();

    if start >= text_len || length == 0 || length > text_len - start {
        return Err(Error::InvalidRange {
            start,
            length,
            text_len,
        });
    }

    let end = start + length;
    let window_start = start.saturating_sub(config.padding);
    let window_end = end.saturating_add(config.padding).min(text_len);

    let truncated_left = window_start > 0;
    let truncated_right = window_end < text_len;

    let mut line = String::with_capacity(window_end - window_start + 2 * config.ellipsis.len());
    if truncated_left {
        line.push_str(&config.ellipsis);
    }
    let match_column = line.len() + (start - window_start);
    line.push_str(&text[window_start..window_end]);
    if truncated_right {
        line.push_str(&config.ellipsis);
    }

    // Column counts are in characters; the ellipsis may be multi-byte
    let lead = line[..match_column].chars().count();
    let mut underline = " ".repeat(lead);
    underline.extend(std::iter::repeat_n(config.marker, length));

    Ok(Highlight {
        line,
        underline,
        match_column,
        length,
        truncated_left,
        truncated_right,
    })
}

//! Input loading for the command line front end
//!
//! Only fetches bytes. Validation belongs to the suffix array builder, which
//! checks the alphabet no matter where the input came from.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the text to index from an argument or a file (`-` for stdin)
///
/// Trailing line terminators are stripped from file and stdin input.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    match (text, file) {
        (Some(_), Some(_)) => bail!("Pass either TEXT or --file, not both"),
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(path)) if path == Path::new("-") => {
            let mut data = Vec::new();
            std::io::stdin()
                .read_to_end(&mut data)
                .context("Failed to read stdin")?;
            Ok(strip_line_terminators(data))
        }
        (None, Some(path)) => {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(strip_line_terminators(data))
        }
        (None, None) => bail!("No input: pass TEXT or --file"),
    }
}

fn strip_line_terminators(mut data: Vec<u8>) -> Vec<u8> {
    while matches!(data.last(), Some(b'\n' | b'\r')) {
        data.pop();
    }
    data
}

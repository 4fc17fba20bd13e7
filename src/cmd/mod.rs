pub mod accuracy;
pub mod file;
pub mod name;

use namedivider::error::{NameDividerError, NdResult};
use std::fs;
use std::path::Path;

/// Reads a one-name-per-line text file, skipping blank lines.
pub fn read_lines(path: &Path, encoding: &str) -> NdResult<Vec<String>> {
    if !matches!(encoding.to_ascii_lowercase().as_str(), "utf-8" | "utf8") {
        return Err(NameDividerError::Config(format!(
            "Unsupported encoding '{}'; only utf-8 is supported",
            encoding
        )));
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

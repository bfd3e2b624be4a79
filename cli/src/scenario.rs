//! Plain-text scenario files
//!
//! One directive per line. Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use crate::error::CliError;

/// A directive line and its 1-based line number in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioLine {
    pub number: usize,
    pub text: String,
}

/// Directive lines of `content`, in order
pub fn parse(content: &str) -> Vec<ScenarioLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let text = line.trim();
            (!text.is_empty() && !text.starts_with('#')).then(|| ScenarioLine {
                number: i + 1,
                text: text.to_owned(),
            })
        })
        .collect()
}

/// Read and parse a scenario file
pub fn load(path: &Path) -> Result<Vec<ScenarioLine>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Io(path.into(), e))?;
    Ok(parse(&content))
}

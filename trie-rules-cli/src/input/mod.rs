//! Input handling
//!
//! Inputs are file paths or glob patterns; `-` reads standard input.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

use crate::error::CliError;

/// A single text to transform
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Read the whole input as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read standard input")?;
                Ok(content)
            }
            InputSource::File(path) => read_file(path),
        }
    }

    /// Name used in progress messages and JSON output
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read a file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Resolve input arguments to concrete sources
///
/// Plain paths must exist; patterns must match at least one file overall.
/// Results are sorted and deduplicated.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }

        if !is_glob(pattern) {
            let path = PathBuf::from(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path);
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for entry in paths {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    log::debug!("Resolved {} input(s)", sources.len());
    Ok(sources)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

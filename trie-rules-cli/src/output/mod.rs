//! Output formatting module

use anyhow::Result;
use serde::Serialize;

/// One accepted match, as reported by the search log hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Char index of the first matched char
    pub start: usize,
    /// Char index one past the match
    pub end: usize,
    pub matched: String,
    pub target: String,
}

/// A transformed input
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Input name (`<stdin>` or a path)
    pub source: String,
    /// Transformed text
    pub text: String,
    /// Accepted matches in scan order
    pub matches: Vec<MatchRecord>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Write one transformed document
    fn write_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

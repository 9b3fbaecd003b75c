//! trie-rules CLI library
//!
//! This library provides the command-line interface for applying
//! transliteration rule files to text.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod rules_source;

pub use error::{CliError, CliResult};

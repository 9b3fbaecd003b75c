//! Replacement composition
//!
//! Turns an accepted match into the text to emit. Steps run in a fixed
//! order: prefix check, clip-start, target casing, clip-end. Clip-start
//! edits output that was already emitted, so it is returned as a trim
//! request for the caller's buffer rather than applied here.

use crate::case::adjust_casing;
use crate::trie::Terminal;

/// Result of composing one accepted match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Text to append to the output
    pub text: String,
    /// Char index at which scanning resumes
    pub resume_at: usize,
    /// Number of chars to drop from the end of the output before appending
    pub trim: usize,
}

/// True if `prefix` occupies `text[start - len(prefix)..start]`
fn prefix_precedes(text: &[char], start: usize, prefix: &str) -> bool {
    let len = prefix.chars().count();
    start >= len && text[start - len..start].iter().copied().eq(prefix.chars())
}

/// Compose the replacement for the match `text[start..end]`
///
/// `emitted` is the output produced so far; only its last char is read.
pub fn compose(
    terminal: &Terminal,
    text: &[char],
    start: usize,
    end: usize,
    emitted: &str,
) -> Replacement {
    let options = &terminal.options;
    let mut replacement = String::with_capacity(terminal.target.len());

    if let Some(prefix) = options.prefix.as_deref() {
        if !prefix.is_empty() && !prefix_precedes(text, start, prefix) {
            replacement.push_str(prefix);
        }
    }

    let trim = match &options.clip_start_pattern {
        Some(pattern) if emitted.chars().next_back().is_some_and(|c| pattern.matches(c)) => 1,
        _ => 0,
    };

    if options.is_case_insensitive() {
        replacement.push_str(&adjust_casing(&text[start..end], &terminal.target));
    } else {
        replacement.push_str(&terminal.target);
    }

    let resume_at = match &options.clip_end_pattern {
        Some(pattern) if text.get(end).is_some_and(|&c| pattern.matches(c)) => end + 1,
        _ => end,
    };

    Replacement {
        text: replacement,
        resume_at,
        trim,
    }
}

//! Word-character classification
//!
//! Decides whether the character at a position is part of a word. Letters
//! always are. Apostrophe-like marks count only when they sit between two
//! letters and are not the start of a possessive `'s`.

use std::sync::OnceLock;

use regex::Regex;

use crate::character_window::CharacterWindow;

/// Apostrophe-like marks treated as one class
pub const APOSTROPHE_LIKE: [char; 6] = ['\'', '`', 'ʾ', 'ʿ', '‘', '’'];

/// The canonical apostrophe used by the apostrophe preformatter
pub const CANONICAL_APOSTROPHE: char = '\'';

static LETTER: OnceLock<Regex> = OnceLock::new();

fn letter_regex() -> &'static Regex {
    // \p{L} is a literal, always-valid class
    LETTER.get_or_init(|| Regex::new(r"^\p{L}$").expect("letter class compiles"))
}

/// True if `ch` belongs to the Unicode Letter category
#[inline]
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    let mut buf = [0u8; 4];
    letter_regex().is_match(ch.encode_utf8(&mut buf))
}

/// True for apostrophe-like marks
#[inline]
pub fn is_apostrophe_like(ch: char) -> bool {
    APOSTROPHE_LIKE.contains(&ch)
}

/// A letter that carries case information
///
/// `ʾ` and `ʿ` are modifier letters but behave as apostrophes here.
#[inline]
pub fn is_alphabetic_letter(ch: char) -> bool {
    is_letter(ch) && !is_apostrophe_like(ch)
}

/// Whether the character at `index` is part of a word
///
/// Out-of-range indices are never word characters.
pub fn is_word_char_at(text: &[char], index: usize) -> bool {
    let window = CharacterWindow::at(text, index);

    let Some(ch) = window.current_char() else {
        return false;
    };

    if is_letter(ch) {
        return true;
    }

    if !is_apostrophe_like(ch) {
        return false;
    }

    let prev_is_letter = window.prev_char().is_some_and(is_letter);
    let next = window.next_char();
    if !prev_is_letter || !next.is_some_and(is_letter) {
        return false;
    }

    // Possessive: 's followed by a non-letter or the end of text
    let next_is_s = matches!(next, Some('s') | Some('S'));
    if next_is_s && !window.next_next_char().is_some_and(is_letter) {
        return false;
    }

    true
}

//! Whole-text normalisation passes run before scanning

use std::borrow::Cow;

use crate::boundary::CANONICAL_APOSTROPHE;
use crate::rule::TriePattern;

/// Apply each preformatter to the whole text, once, in order
///
/// Returns the input unchanged (borrowed) when no pass alters it.
pub fn preformat<'a>(text: &'a str, preformatters: &[TriePattern]) -> Cow<'a, str> {
    let mut result = Cow::Borrowed(text);

    for pattern in preformatters {
        match pattern {
            TriePattern::Apostrophes => {
                if result.chars().any(|c| is_foreign_apostrophe(c, pattern)) {
                    let flattened = result
                        .chars()
                        .map(|c| {
                            if pattern.matches(c) {
                                CANONICAL_APOSTROPHE
                            } else {
                                c
                            }
                        })
                        .collect();
                    result = Cow::Owned(flattened);
                }
            }
        }
    }

    result
}

#[inline]
fn is_foreign_apostrophe(ch: char, pattern: &TriePattern) -> bool {
    ch != CANONICAL_APOSTROPHE && pattern.matches(ch)
}

//! Case handling
//!
//! Two jobs: expanding a source into the variants needed for
//! case-insensitive lookup, and mirroring the casing of matched text onto a
//! replacement target.

use smallvec::{smallvec, SmallVec};

use crate::boundary::is_alphabetic_letter;

/// At most two variants are ever produced
pub type CaseVariants = SmallVec<[String; 2]>;

/// Expand `source` into the forms needed for case-insensitive matching
///
/// Only the first alphabetic letter is toggled, so a source yields either
/// itself alone or an upper/lower pair. Letters without a case distinction
/// leave the source unchanged.
pub fn case_variants(source: &str) -> CaseVariants {
    let Some((index, ch)) = source
        .char_indices()
        .find(|&(_, ch)| is_alphabetic_letter(ch))
    else {
        return smallvec![source.to_string()];
    };

    let upper: String = ch.to_uppercase().collect();
    let lower: String = ch.to_lowercase().collect();
    if upper == lower {
        return smallvec![source.to_string()];
    }

    let head = &source[..index];
    let tail = &source[index + ch.len_utf8()..];

    smallvec![
        format!("{head}{upper}{tail}"),
        format!("{head}{lower}{tail}"),
    ]
}

/// Uppercase letter with a distinct lowercase form
#[inline]
pub fn is_upper_case(ch: char) -> bool {
    ch.is_uppercase() && ch.to_lowercase().ne(std::iter::once(ch))
}

/// Lowercase letter with a distinct uppercase form
#[inline]
pub fn is_lower_case(ch: char) -> bool {
    ch.is_lowercase() && ch.to_uppercase().ne(std::iter::once(ch))
}

/// Copy `target`, giving each alphabetic letter the case of the next
/// alphabetic letter in `matched`
///
/// Non-alphabetic target characters pass through untouched. Once `matched`
/// runs out of letters the rest of the target keeps its own casing.
pub fn adjust_casing(matched: &[char], target: &str) -> String {
    let mut result = String::with_capacity(target.len());
    let mut letters = matched.iter().copied().filter(|&c| is_alphabetic_letter(c));

    for ch in target.chars() {
        if !is_alphabetic_letter(ch) {
            result.push(ch);
            continue;
        }

        match letters.next() {
            Some(m) if is_upper_case(m) => result.extend(ch.to_uppercase()),
            Some(m) if is_lower_case(m) => result.extend(ch.to_lowercase()),
            _ => result.push(ch),
        }
    }

    result
}

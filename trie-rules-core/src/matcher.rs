//! Match acceptance
//!
//! A candidate span `[start, end)` over the char slice is accepted when its
//! rule's boundary policy holds and, for rules that ask for it, the external
//! confirmation callback agrees.

use crate::boundary::is_word_char_at;
use crate::rule::{ConfirmOptions, MatchType, RuleOptions};

/// Check the boundary policy of `options` for the span `[start, end)`
///
/// `alone` requires real whitespace on both sides; the start and end of the
/// text do not count as whitespace.
pub fn is_valid_match(text: &[char], start: usize, end: usize, options: &RuleOptions) -> bool {
    match options.match_type {
        Some(MatchType::Whole) => {
            let prev_is_word = start
                .checked_sub(1)
                .is_some_and(|i| is_word_char_at(text, i));
            !prev_is_word && !is_word_char_at(text, end)
        }
        Some(MatchType::Alone) => {
            let prev = start.checked_sub(1).and_then(|i| text.get(i));
            let next = text.get(end);
            prev.is_some_and(|c| c.is_whitespace()) && next.is_some_and(|c| c.is_whitespace())
        }
        Some(MatchType::Any) | None => true,
    }
}

/// Ask the confirmation callback about a rule, if both exist
///
/// Rules without a `confirm` payload, or searches without a callback, are
/// always considered. Callback errors are returned unchanged.
pub fn is_considered<F, E>(options: &RuleOptions, confirm: &mut Option<F>) -> Result<bool, E>
where
    F: FnMut(&ConfirmOptions) -> Result<bool, E>,
{
    match (&options.confirm, confirm.as_mut()) {
        (Some(payload), Some(callback)) => callback(payload),
        _ => Ok(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    const TEXT: &str = "Hello world! It's a beautiful day.";

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn whole() -> RuleOptions {
        RuleOptions::new().with_match(MatchType::Whole)
    }

    fn alone() -> RuleOptions {
        RuleOptions::new().with_match(MatchType::Alone)
    }

    #[test]
    fn test_whole_word() {
        let text = chars(TEXT);
        assert!(is_valid_match(&text, 6, 11, &whole()));
        assert!(!is_valid_match(&text, 6, 10, &whole()));
        assert!(!is_valid_match(&text, 7, 11, &whole()));
    }

    #[test]
    fn test_whole_word_at_text_edges() {
        let text = chars("Asr");
        assert!(is_valid_match(&text, 0, 3, &whole()));
    }

    #[test]
    fn test_whole_word_before_possessive() {
        let text = chars("Nas's book");
        assert!(is_valid_match(&text, 0, 3, &whole()));
    }

    #[test]
    fn test_whole_word_before_contraction() {
        // "I" followed by "'m" is part of a word
        let text = chars("I'm ready");
        assert!(!is_valid_match(&text, 0, 1, &whole()));
    }

    #[test]
    fn test_alone_interior() {
        let text = chars(TEXT);
        assert!(is_valid_match(&text, 20, 29, &alone()));
        assert!(is_valid_match(&text, 13, 17, &alone()));
        // "world" is followed by '!'
        assert!(!is_valid_match(&text, 6, 11, &alone()));
    }

    #[test]
    fn test_alone_at_text_edges() {
        let text = chars("ala");
        assert!(!is_valid_match(&text, 0, 3, &alone()));

        let text = chars(" ala");
        assert!(!is_valid_match(&text, 1, 4, &alone()));

        let text = chars(" ala ");
        assert!(is_valid_match(&text, 1, 4, &alone()));
    }

    #[test]
    fn test_alone_rejects_punctuation() {
        let text = chars("went ala, then");
        assert!(!is_valid_match(&text, 5, 8, &alone()));
    }

    #[test]
    fn test_no_match_type() {
        let text = chars(TEXT);
        assert!(is_valid_match(&text, 0, 5, &RuleOptions::default()));
        assert!(is_valid_match(&text, 7, 10, &RuleOptions::default()));
        assert!(is_valid_match(
            &text,
            7,
            10,
            &RuleOptions::new().with_match(MatchType::Any)
        ));
    }

    #[test]
    fn test_prefix_does_not_gate_validity() {
        let text = chars("al-Bukhari");
        let options = RuleOptions::new().with_prefix("al-");
        assert!(is_valid_match(&text, 3, 10, &options));
    }

    #[test]
    fn test_considered_without_confirm() {
        let mut callback = Some(|_: &ConfirmOptions| Ok::<_, Infallible>(false));
        assert_eq!(is_considered(&RuleOptions::default(), &mut callback), Ok(true));
    }

    #[test]
    fn test_considered_without_callback() {
        let options = RuleOptions::new().with_confirm(ConfirmOptions::any_of(["test"]));
        let mut none: Option<fn(&ConfirmOptions) -> Result<bool, Infallible>> = None;
        assert_eq!(is_considered(&options, &mut none), Ok(true));
    }

    #[test]
    fn test_considered_delegates_to_callback() {
        let mut callback =
            Some(|c: &ConfirmOptions| Ok::<_, Infallible>(c.any_of.iter().any(|s| s == "test")));

        let yes = RuleOptions::new().with_confirm(ConfirmOptions::any_of(["test"]));
        let no = RuleOptions::new().with_confirm(ConfirmOptions::any_of(["not-test"]));
        assert_eq!(is_considered(&yes, &mut callback), Ok(true));
        assert_eq!(is_considered(&no, &mut callback), Ok(false));
    }

    #[test]
    fn test_considered_propagates_error() {
        let options = RuleOptions::new().with_confirm(ConfirmOptions::any_of(["x"]));
        let mut failing = Some(|_: &ConfirmOptions| Err::<bool, _>("lookup failed"));
        assert_eq!(is_considered(&options, &mut failing), Err("lookup failed"));
    }
}

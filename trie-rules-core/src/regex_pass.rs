//! Sequential regex substitution passes
//!
//! Cleanups that are easier to state as regular expressions than as trie
//! rules (smart quotes, spacing before punctuation, page references). Each
//! pass runs over the output of the previous one.
//!
//! Rule files use the JavaScript conventions for flags and replacement
//! templates (`$1`, `$&`, `$<name>`); they are translated at compile time.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A regex pass as written in a rule file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexRule {
    pub pattern: String,
    pub replacement: String,
    /// Any of `g`, `i`, `m`, `s`, `u`
    #[serde(default)]
    pub flags: String,
}

impl RegexRule {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        flags: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            flags: flags.into(),
        }
    }
}

/// A compiled regex pass
#[derive(Debug, Clone)]
pub struct CompiledRegexRule {
    regex: Regex,
    replacement: String,
    global: bool,
}

impl CompiledRegexRule {
    /// Compile one rule
    pub fn compile(rule: &RegexRule) -> Result<Self> {
        let mut builder = RegexBuilder::new(&rule.pattern);
        let mut global = false;

        for flag in rule.flags.chars() {
            match flag {
                'g' => global = true,
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                // Unicode is always on
                'u' => {}
                other => {
                    return Err(Error::UnsupportedRegexFlag {
                        flag: other,
                        pattern: rule.pattern.clone(),
                    })
                }
            }
        }

        let regex = builder
            .build()
            .map_err(|e| Error::invalid_pattern(&rule.pattern, e))?;

        Ok(Self {
            regex,
            replacement: translate_replacement(&rule.replacement),
            global,
        })
    }

    /// Apply this pass to `text`
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.global {
            self.regex.replace_all(text, self.replacement.as_str())
        } else {
            self.regex.replace(text, self.replacement.as_str())
        }
    }
}

/// Compile rule-file regex passes
pub fn compile_regex_patterns(rules: &[RegexRule]) -> Result<Vec<CompiledRegexRule>> {
    rules.iter().map(CompiledRegexRule::compile).collect()
}

/// Run every pass in order
pub fn apply_regex_replacements(rules: &[CompiledRegexRule], text: &str) -> String {
    rules
        .iter()
        .fold(Cow::Borrowed(text), |current, rule| {
            let changed = match rule.apply(&current) {
                Cow::Owned(changed) => Some(changed),
                Cow::Borrowed(_) => None,
            };
            changed.map_or(current, Cow::Owned)
        })
        .into_owned()
}

/// Rewrite a JavaScript replacement template into `regex` syntax
fn translate_replacement(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                out.push_str("$$");
            }
            Some('&') => {
                chars.next();
                out.push_str("${0}");
            }
            Some(d) if d.is_ascii_digit() => {
                let mut group = String::new();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    group.push(d);
                    chars.next();
                }
                out.push_str(&format!("${{{group}}}"));
            }
            Some('<') => {
                let rest: String = chars.clone().skip(1).take_while(|&c| c != '>').collect();
                let closed = chars.clone().skip(1).nth(rest.chars().count()) == Some('>');
                if closed && !rest.is_empty() {
                    // '<', name, '>'
                    for _ in 0..rest.chars().count() + 2 {
                        chars.next();
                    }
                    out.push_str(&format!("${{{rest}}}"));
                } else {
                    out.push_str("$$");
                }
            }
            // A lone '$' is literal
            _ => out.push_str("$$"),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(rules: &[(&str, &str, &str)]) -> Vec<CompiledRegexRule> {
        let rules: Vec<RegexRule> = rules
            .iter()
            .map(|&(pattern, replacement, flags)| RegexRule::new(pattern, replacement, flags))
            .collect();
        compile_regex_patterns(&rules).unwrap()
    }

    #[test]
    fn test_translate_replacement() {
        assert_eq!(translate_replacement("$1al-"), "${1}al-");
        assert_eq!(translate_replacement("$1/$2"), "${1}/${2}");
        assert_eq!(translate_replacement("[$&]"), "[${0}]");
        assert_eq!(translate_replacement("$<word>!"), "${word}!");
        assert_eq!(translate_replacement("cost: $$5"), "cost: $$5");
        assert_eq!(translate_replacement("5$"), "5$$");
        assert_eq!(translate_replacement("$<open"), "$$<open");
    }

    #[test]
    fn test_smart_quotes() {
        let rules = compile(&[("\"([^\"]*)\"", "“$1”", "g"), ("^”", "“", "g")]);

        assert_eq!(
            apply_regex_replacements(&rules, "The \"quick brown\" fox jumped \"right\" over the lazy dog."),
            "The “quick brown” fox jumped “right” over the lazy dog."
        );
        assert_eq!(apply_regex_replacements(&rules, "this is"), "this is");
    }

    #[test]
    fn test_al_replacements() {
        let rules = compile(&[(r"(\b|\W)(Al-|Ar-|As-|Adh-|adh-|as-|ar-)", "$1al-", "g")]);

        assert_eq!(
            apply_regex_replacements(
                &rules,
                "Al-Rahman bar-Rahman becomes al-Rahman, and ar-Rahman becomes al-Rahman, and As-Sukkari and as-Sukkari both become al-Sukkari"
            ),
            "al-Rahman bar-Rahman becomes al-Rahman, and al-Rahman becomes al-Rahman, and al-Sukkari and al-Sukkari both become al-Sukkari"
        );
    }

    #[test]
    fn test_reduce_spaces_before_punctuation() {
        let rules = compile(&[(r"\s+([.؟!,،؛:?])", "$1", "g")]);

        assert_eq!(
            apply_regex_replacements(&rules, "This sentence has some space , before period  . Hello"),
            "This sentence has some space, before period. Hello"
        );
        assert_eq!(
            apply_regex_replacements(&rules, "الإسلام أم الكفر ؟"),
            "الإسلام أم الكفر؟"
        );
        assert_eq!(
            apply_regex_replacements(&rules, "ومن قال: (لا أعمل بحديث إلا إن أخذ به إمامي) ؛"),
            "ومن قال: (لا أعمل بحديث إلا إن أخذ به إمامي)؛"
        );
    }

    #[test]
    fn test_page_references() {
        let rules = compile(&[(r"(\d+)\s?/\s?(\d+)", "$1/$2", "g")]);

        assert_eq!(
            apply_regex_replacements(&rules, "this is 127 / 11 with 127 /2 and 122 /3 and 22/1"),
            "this is 127/11 with 127/2 and 122/3 and 22/1"
        );
    }

    #[test]
    fn test_multiline_flag() {
        let rules = compile(&[("^ +| +$", "", "gm")]);
        assert_eq!(
            apply_regex_replacements(&rules, "  first  \n second \nthird"),
            "first\nsecond\nthird"
        );
    }

    #[test]
    fn test_non_global_replaces_first_only() {
        let rules = compile(&[("a", "b", "")]);
        assert_eq!(apply_regex_replacements(&rules, "aaa"), "baa");
    }

    #[test]
    fn test_case_insensitive_flag() {
        let rules = compile(&[("pbuh", "ﷺ", "gi")]);
        assert_eq!(apply_regex_replacements(&rules, "PBUH and pbuh"), "ﷺ and ﷺ");
    }

    #[test]
    fn test_passes_run_in_order() {
        let rules = compile(&[("  +", " ", "g"), (" ,", ",", "g")]);
        assert_eq!(apply_regex_replacements(&rules, "a    , b"), "a, b");
    }

    #[test]
    fn test_unsupported_flag() {
        let result = compile_regex_patterns(&[RegexRule::new("a", "b", "gy")]);
        assert!(matches!(
            result,
            Err(Error::UnsupportedRegexFlag { flag: 'y', .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = compile_regex_patterns(&[RegexRule::new("(unclosed", "", "g")]);
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }
}

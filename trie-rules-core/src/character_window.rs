//! Character window for O(1) neighbour access
//!
//! Boundary classification only ever needs a fixed amount of context around
//! a position. The window captures that context once so classifiers never
//! rescan the text.

/// Four-character view around a position in a char slice
///
/// Layout: `[prev, current, next, next_next]`. Positions outside the slice
/// are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterWindow {
    chars: [Option<char>; 4],
}

impl CharacterWindow {
    /// Capture the window centred on `index`
    pub fn at(text: &[char], index: usize) -> Self {
        let get = |i: Option<usize>| i.and_then(|i| text.get(i).copied());

        Self {
            chars: [
                get(index.checked_sub(1)),
                get(Some(index)),
                get(index.checked_add(1)),
                get(index.checked_add(2)),
            ],
        }
    }

    /// Character before the current position
    #[inline]
    pub fn prev_char(&self) -> Option<char> {
        self.chars[0]
    }

    /// Character at the current position
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.chars[1]
    }

    /// Character after the current position
    #[inline]
    pub fn next_char(&self) -> Option<char> {
        self.chars[2]
    }

    /// Second character after the current position
    #[inline]
    pub fn next_next_char(&self) -> Option<char> {
        self.chars[3]
    }

    /// Tuple of (prev, current, next) for pattern matching
    pub fn context_triple(&self) -> (Option<char>, Option<char>, Option<char>) {
        (self.prev_char(), self.current_char(), self.next_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_window_interior() {
        let text = chars("abcde");
        let window = CharacterWindow::at(&text, 1);

        assert_eq!(window.prev_char(), Some('a'));
        assert_eq!(window.current_char(), Some('b'));
        assert_eq!(window.next_char(), Some('c'));
        assert_eq!(window.next_next_char(), Some('d'));
    }

    #[test]
    fn test_window_at_start() {
        let text = chars("ab");
        let window = CharacterWindow::at(&text, 0);

        assert_eq!(window.context_triple(), (None, Some('a'), Some('b')));
        assert_eq!(window.next_next_char(), None);
    }

    #[test]
    fn test_window_out_of_range() {
        let text = chars("ab");
        let window = CharacterWindow::at(&text, 5);

        assert_eq!(window.current_char(), None);
        assert_eq!(window.prev_char(), None);
    }

    #[test]
    fn test_window_multibyte() {
        let text = chars("ʿAṣr");
        let window = CharacterWindow::at(&text, 2);

        assert_eq!(window.context_triple(), (Some('A'), Some('ṣ'), Some('r')));
    }
}

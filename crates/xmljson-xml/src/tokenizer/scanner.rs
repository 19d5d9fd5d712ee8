use crate::error::XmlError;

/// Character cursor over a document with one character of pushback.
///
/// A tokenizer lives for a single document scan. The scanning entry points
/// (`next_token`, `next_content`, `next_meta`, `next_cdata`) are implemented in
/// the `modes` module on top of the primitives here.
#[derive(Debug, Clone)]
pub struct XmlTokenizer<'a> {
    input: &'a str,
    /// Byte offset just past the last character read from `input`.
    pos: usize,
    /// The most recently returned character, kept so `back` can push it.
    last: Option<char>,
    /// One-slot pushback buffer, drained before `input` by `next`.
    pushback: Option<char>,
}

impl<'a> XmlTokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
            pushback: None,
        }
    }

    /// Returns true while unconsumed input remains.
    #[must_use]
    pub const fn more(&self) -> bool {
        self.pushback.is_some() || self.pos < self.input.len()
    }

    /// Consume and return the next character, or `None` at end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let c = match self.pushback.take() {
            Some(c) => Some(c),
            None => {
                let c = self.input[self.pos..].chars().next();
                if let Some(c) = c {
                    self.pos += c.len_utf8();
                }
                c
            }
        };
        self.last = c;
        c
    }

    /// Push the last character returned by [`next`](Self::next) back so the
    /// following call returns it again.
    ///
    /// Only one character can be pushed back; calling `back` twice in a row,
    /// or after `next` returned `None`, does nothing.
    pub fn back(&mut self) {
        if self.pushback.is_none() {
            self.pushback = self.last.take();
        }
    }

    /// Advance past the first occurrence of `literal`, discarding everything
    /// before it.
    ///
    /// Returns false, with all input consumed, if `literal` never occurs.
    pub fn skip_past(&mut self, literal: &str) -> bool {
        let rest = self.rest();
        if let Some(index) = rest.find(literal) {
            self.pos += index + literal.len();
            self.last = literal.chars().next_back();
            true
        } else {
            self.pos = self.input.len();
            self.last = None;
            false
        }
    }

    /// Consume everything up to `terminator` and return it, consuming the
    /// terminator too. Returns `None`, consuming nothing, if the terminator
    /// never occurs.
    pub(super) fn take_until(&mut self, terminator: &str) -> Option<&'a str> {
        let rest = self.rest();
        let index = rest.find(terminator)?;
        self.pos += index + terminator.len();
        self.last = terminator.chars().next_back();
        Some(&rest[..index])
    }

    /// Consume whitespace and return the first character after it.
    pub(super) fn skip_whitespace(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some(c) if c.is_whitespace() => {}
                other => return other,
            }
        }
    }

    /// Byte offset of the next character `next` would return.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos - self.pushback.map_or(0, char::len_utf8)
    }

    /// Build a syntax error at the current position.
    ///
    /// Line and column are 1-based and point at the next unread character.
    /// They are computed here rather than tracked per character, since
    /// errors end the scan.
    pub fn syntax_error(&self, message: impl Into<String>) -> XmlError {
        let offset = self.offset();
        let consumed = &self.input[..offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;

        XmlError::Syntax {
            message: message.into(),
            offset,
            line,
            column,
        }
    }

    /// The unread input, with any pushed back character folded back into it.
    fn rest(&mut self) -> &'a str {
        if let Some(c) = self.pushback.take() {
            self.pos -= c.len_utf8();
        }
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_more() {
        let mut t = XmlTokenizer::new("ab");
        assert!(t.more());
        assert_eq!(t.next(), Some('a'));
        assert_eq!(t.next(), Some('b'));
        assert!(!t.more());
        assert_eq!(t.next(), None);
    }

    #[test]
    fn test_back_replays_one_character() {
        let mut t = XmlTokenizer::new("xyz");
        assert_eq!(t.next(), Some('x'));
        assert_eq!(t.next(), Some('y'));
        t.back();
        t.back();
        assert_eq!(t.next(), Some('y'));
        assert_eq!(t.next(), Some('z'));
    }

    #[test]
    fn test_back_after_end_is_noop() {
        let mut t = XmlTokenizer::new("a");
        assert_eq!(t.next(), Some('a'));
        assert_eq!(t.next(), None);
        t.back();
        assert!(!t.more());
    }

    #[test]
    fn test_back_keeps_input_pending() {
        let mut t = XmlTokenizer::new("a");
        assert_eq!(t.next(), Some('a'));
        assert!(!t.more());
        t.back();
        assert!(t.more());
        assert_eq!(t.offset(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut t = XmlTokenizer::new("é<");
        assert_eq!(t.next(), Some('é'));
        assert_eq!(t.offset(), 2);
        t.back();
        assert_eq!(t.offset(), 0);
        assert!(t.skip_past("<"));
        assert!(!t.more());
    }

    #[test]
    fn test_skip_past_sees_pushed_back_character() {
        let mut t = XmlTokenizer::new("-->rest");
        assert_eq!(t.next(), Some('-'));
        t.back();
        assert!(t.skip_past("-->"));
        assert_eq!(t.next(), Some('r'));
    }

    #[test]
    fn test_skip_past_missing_literal_consumes_everything() {
        let mut t = XmlTokenizer::new("no terminator");
        assert!(!t.skip_past("?>"));
        assert!(!t.more());
    }

    #[test]
    fn test_syntax_error_position() {
        let mut t = XmlTokenizer::new("ab\ncd");
        for _ in 0..4 {
            let _ = t.next();
        }
        match t.syntax_error("boom") {
            XmlError::Syntax {
                message,
                offset,
                line,
                column,
            } => {
                assert_eq!(message, "boom");
                assert_eq!(offset, 4);
                assert_eq!(line, 2);
                assert_eq!(column, 2);
            }
            other => panic!("Expected syntax error, got {other:?}"),
        }
    }
}

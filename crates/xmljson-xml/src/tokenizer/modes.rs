//! Scanning modes.
//!
//! Each method scans one kind of region and leaves the cursor positioned for
//! whichever mode the parser needs next.

use super::entities;
use super::scanner::XmlTokenizer;
use super::token::{Marker, Token};
use crate::error::XmlError;

impl XmlTokenizer<'_> {
    /// Scan the next token inside a tag.
    ///
    /// Whitespace is skipped. Returns a marker for `>`, `/`, `=`, `!` and `?`,
    /// the unquoted contents of a `"` or `'` quoted string (with entities
    /// expanded), or a bare name running up to whitespace or one of
    /// `> / = ! ? [ ]`. Returns [`Token::EndOfInput`] when no token starts
    /// before the input runs out.
    ///
    /// # Errors
    ///
    /// Fails on a `<` where a token should start, an unterminated quoted
    /// string, a `<` or quote inside a bare name, or a malformed entity.
    pub fn next_token(&mut self) -> Result<Token, XmlError> {
        let Some(c) = self.skip_whitespace() else {
            return Ok(Token::EndOfInput);
        };

        match c {
            '<' => Err(self.syntax_error("Misplaced '<'")),
            '"' | '\'' => self.quoted_string(c).map(Token::Text),
            _ => match Marker::from_char(c) {
                Some(marker) => Ok(Token::Marker(marker)),
                None => self.bare_name(c).map(Token::Text),
            },
        }
    }

    /// Scan the next token inside a `<!...>` declaration.
    ///
    /// Markers are returned so the caller can track `<`/`>` nesting. Quoted
    /// strings and bare runs come back as text. Returns `None` at end of
    /// input, including inside an unterminated quote.
    pub fn next_meta(&mut self) -> Option<Token> {
        let c = self.skip_whitespace()?;

        if c == '"' || c == '\'' {
            let mut text = String::new();
            loop {
                match self.next()? {
                    q if q == c => return Some(Token::Text(text)),
                    other => text.push(other),
                }
            }
        }

        if let Some(marker) = Marker::from_char(c) {
            return Some(Token::Marker(marker));
        }

        let mut text = String::from(c);
        loop {
            match self.next() {
                None => return Some(Token::Text(text)),
                Some(c) if c.is_whitespace() => return Some(Token::Text(text)),
                Some(c) if c == '"' || c == '\'' || Marker::from_char(c).is_some() => {
                    self.back();
                    return Some(Token::Text(text));
                }
                Some(c) => text.push(c),
            }
        }
    }

    /// Scan element content.
    ///
    /// Leading whitespace is skipped. Returns the [`Marker::Lt`] marker when
    /// positioned on `<`, otherwise the text up to the next `<` (or end of
    /// input) with entities expanded and surrounding whitespace trimmed.
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Fails on a malformed entity reference.
    pub fn next_content(&mut self) -> Result<Option<Token>, XmlError> {
        let Some(first) = self.skip_whitespace() else {
            return Ok(None);
        };
        if first == '<' {
            return Ok(Some(Token::Marker(Marker::Lt)));
        }

        let mut text = String::new();
        let mut current = Some(first);
        while let Some(c) = current {
            match c {
                '<' => {
                    self.back();
                    break;
                }
                '&' => text.push_str(&self.next_entity()?),
                _ => text.push(c),
            }
            current = self.next();
        }

        Ok(Some(Token::Text(text.trim().to_owned())))
    }

    /// Capture the raw body of a CDATA section, positioned just after
    /// `<![CDATA[`. The terminating `]]>` is consumed but not returned.
    ///
    /// # Errors
    ///
    /// Fails if `]]>` never occurs.
    pub fn next_cdata(&mut self) -> Result<String, XmlError> {
        match self.take_until("]]>") {
            Some(data) => Ok(data.to_owned()),
            None => Err(self.syntax_error("Unclosed CDATA")),
        }
    }

    /// Read an entity reference, positioned just after the `&`, and return
    /// its replacement text. Unknown entities are returned as written.
    ///
    /// # Errors
    ///
    /// Fails if a character other than a letter, digit or `#` appears before
    /// the closing `;`.
    pub fn next_entity(&mut self) -> Result<String, XmlError> {
        let mut name = String::new();
        loop {
            match self.next() {
                Some(';') => return Ok(entities::expand(&name)),
                Some(c) if entities::is_entity_char(c) => name.push(c),
                _ => {
                    return Err(
                        self.syntax_error(format!("Missing ';' in XML entity: &{name}"))
                    );
                }
            }
        }
    }

    fn quoted_string(&mut self, quote: char) -> Result<String, XmlError> {
        let mut text = String::new();
        loop {
            match self.next() {
                None => return Err(self.syntax_error("Unterminated string")),
                Some(c) if c == quote => return Ok(text),
                Some('&') => text.push_str(&self.next_entity()?),
                Some(c) => text.push(c),
            }
        }
    }

    fn bare_name(&mut self, first: char) -> Result<String, XmlError> {
        let mut name = String::from(first);
        loop {
            match self.next() {
                None => return Ok(name),
                Some(c) if c.is_whitespace() => return Ok(name),
                Some('>' | '/' | '=' | '!' | '?' | '[' | ']') => {
                    self.back();
                    return Ok(name);
                }
                Some('<' | '"' | '\'') => {
                    return Err(self.syntax_error("Bad character in a name"));
                }
                Some(c) => name.push(c),
            }
        }
    }
}

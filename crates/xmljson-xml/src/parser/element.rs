use serde_json::{Map, Value};
use xmljson_common::warning::warn_once;
use xmljson_common::{CONTENT_KEY, Container, string_to_value};

use crate::error::XmlError;
use crate::options::ParseOptions;
use crate::tokenizer::{Marker, Token, XmlTokenizer};

/// Recursive-descent parser that folds markup into JSON values.
///
/// Each element becomes an entry in its parent's map, keyed by tag name:
///
/// - no attributes and no content: `""`
/// - only text content: the (coerced) text itself
/// - otherwise: a map of attributes and children, with text under
///   `"content"`
///
/// Repeated names at one level are collected into an array in document
/// order.
pub struct XmlParser<'a> {
    tokenizer: XmlTokenizer<'a>,
    options: ParseOptions,
}

impl<'a> XmlParser<'a> {
    /// Create a parser over `input`.
    #[must_use]
    pub const fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            tokenizer: XmlTokenizer::new(input),
            options,
        }
    }

    /// Parse the whole document.
    ///
    /// Text outside of any element is ignored. All top-level elements are
    /// merged into one map.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partial result is produced.
    pub fn run(mut self) -> Result<Map<String, Value>, XmlError> {
        let mut document = Container::new();
        while self.tokenizer.more() && self.tokenizer.skip_past("<") {
            let _ = self.parse_element(&mut document, None, 0)?;
        }
        Ok(document.into_map())
    }

    /// Parse whatever follows a `<`, appending the result to `context`.
    ///
    /// `name` is the innermost open element, or `None` at the document root.
    /// `depth` is the number of elements currently open.
    ///
    /// Returns true exactly when the markup was the close tag for `name`.
    fn parse_element(
        &mut self,
        context: &mut Container,
        name: Option<&str>,
        depth: usize,
    ) -> Result<bool, XmlError> {
        match self.tokenizer.next_token()? {
            // <!-- comment -->, <![CDATA[...]]>, <!DECLARATION ...>
            Token::Marker(Marker::Bang) => {
                self.parse_bang(context)?;
                Ok(false)
            }
            // <?target ...?>
            Token::Marker(Marker::Quest) => {
                if !self.tokenizer.skip_past("?>") {
                    return Err(self.tokenizer.syntax_error("Unclosed processing instruction"));
                }
                Ok(false)
            }
            // </name>
            Token::Marker(Marker::Slash) => {
                self.parse_close_tag(name)?;
                Ok(true)
            }
            // <name ...
            Token::Text(tag_name) => {
                self.parse_open_tag(context, &tag_name, depth)?;
                Ok(false)
            }
            Token::Marker(Marker::Lt | Marker::Gt | Marker::Eq) => {
                Err(self.tokenizer.syntax_error("Misshaped tag"))
            }
            Token::EndOfInput => Err(self.tokenizer.syntax_error("Misshaped element")),
        }
    }

    /// Handle the markup after `<!`.
    fn parse_bang(&mut self, context: &mut Container) -> Result<(), XmlError> {
        match self.tokenizer.next() {
            Some('-') => {
                if self.tokenizer.next() == Some('-') {
                    if !self.tokenizer.skip_past("-->") {
                        return Err(self.tokenizer.syntax_error("Unclosed comment"));
                    }
                    return Ok(());
                }
                // `<!-x`: not a comment, skip it like any other declaration.
                self.tokenizer.back();
            }
            Some('[') => {
                let is_cdata = self.tokenizer.next_token()?.as_text() == Some("CDATA")
                    && self.tokenizer.next() == Some('[');
                if !is_cdata {
                    return Err(self.tokenizer.syntax_error("Expected 'CDATA['"));
                }
                let data = self.tokenizer.next_cdata()?;
                if !data.is_empty() {
                    context.append(CONTENT_KEY, self.scalar(&data));
                }
                return Ok(());
            }
            Some(_) => self.tokenizer.back(),
            None => {}
        }

        self.skip_declaration()
    }

    /// Skip a `<!...>` declaration body, balancing nested `<` and `>`.
    fn skip_declaration(&mut self) -> Result<(), XmlError> {
        let mut keyword: Option<String> = None;
        let mut open = 1usize;
        while open > 0 {
            match self.tokenizer.next_meta() {
                None => return Err(self.tokenizer.syntax_error("Missing '>' after '<!'.")),
                Some(Token::Marker(Marker::Lt)) => open += 1,
                Some(Token::Marker(Marker::Gt)) => open -= 1,
                Some(Token::Text(text)) => {
                    if keyword.is_none() {
                        keyword = Some(text);
                    }
                }
                Some(Token::Marker(_) | Token::EndOfInput) => {}
            }
        }

        let keyword = keyword.unwrap_or_default();
        let _ = warn_once("XML", &format!("dropping <!{keyword}> declaration"));
        Ok(())
    }

    /// Match a close tag against the innermost open element.
    fn parse_close_tag(&mut self, name: Option<&str>) -> Result<(), XmlError> {
        let token = self.tokenizer.next_token()?;
        let Some(open) = name else {
            return Err(self
                .tokenizer
                .syntax_error(format!("Mismatched close tag {token}")));
        };
        if token.as_text() != Some(open) {
            return Err(self
                .tokenizer
                .syntax_error(format!("Mismatched {open} and {token}")));
        }
        if !self.tokenizer.next_token()?.is_marker(Marker::Gt) {
            return Err(self.tokenizer.syntax_error("Misshaped close tag"));
        }
        Ok(())
    }

    /// Parse attributes and content of `tag_name`, then append the folded
    /// element to `context`.
    fn parse_open_tag(
        &mut self,
        context: &mut Container,
        tag_name: &str,
        depth: usize,
    ) -> Result<(), XmlError> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return Err(XmlError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        let mut element = Container::new();
        let mut lookahead: Option<Token> = None;
        loop {
            let token = match lookahead.take() {
                Some(token) => token,
                None => self.tokenizer.next_token()?,
            };

            match token {
                // attribute or attribute = value
                Token::Text(attribute) => match self.tokenizer.next_token()? {
                    Token::Marker(Marker::Eq) => {
                        let Token::Text(value) = self.tokenizer.next_token()? else {
                            return Err(self.tokenizer.syntax_error("Missing value"));
                        };
                        element.append(&attribute, self.scalar(&value));
                    }
                    other => {
                        element.append(&attribute, Value::String(String::new()));
                        lookahead = Some(other);
                    }
                },
                // <name ... />
                Token::Marker(Marker::Slash) => {
                    if !self.tokenizer.next_token()?.is_marker(Marker::Gt) {
                        return Err(self.tokenizer.syntax_error("Misshaped tag"));
                    }
                    let value = if element.is_empty() {
                        Value::String(String::new())
                    } else {
                        Value::from(element)
                    };
                    context.append(tag_name, value);
                    return Ok(());
                }
                // <name ...> content </name>
                Token::Marker(Marker::Gt) => {
                    return self.parse_content(context, tag_name, element, depth);
                }
                Token::EndOfInput => {
                    return Err(self
                        .tokenizer
                        .syntax_error(format!("Unclosed tag {tag_name}")));
                }
                Token::Marker(_) => return Err(self.tokenizer.syntax_error("Misshaped tag")),
            }
        }
    }

    /// Parse the content of `tag_name` up to and including its close tag.
    fn parse_content(
        &mut self,
        context: &mut Container,
        tag_name: &str,
        mut element: Container,
        depth: usize,
    ) -> Result<(), XmlError> {
        loop {
            match self.tokenizer.next_content()? {
                None => {
                    return Err(self
                        .tokenizer
                        .syntax_error(format!("Unclosed tag {tag_name}")));
                }
                Some(Token::Text(text)) => {
                    if !text.is_empty() {
                        element.append(CONTENT_KEY, self.scalar(&text));
                    }
                }
                Some(Token::Marker(Marker::Lt)) => {
                    if self.parse_element(&mut element, Some(tag_name), depth)? {
                        context.append(tag_name, fold(element));
                        return Ok(());
                    }
                }
                Some(Token::Marker(_) | Token::EndOfInput) => {
                    return Err(self.tokenizer.syntax_error("Misshaped tag"));
                }
            }
        }
    }

    fn scalar(&self, raw: &str) -> Value {
        if self.options.keep_strings {
            Value::String(raw.to_owned())
        } else {
            string_to_value(raw)
        }
    }
}

/// Collapse a closed element into the value stored at its parent.
///
/// A map holding nothing but `"content"` is unwrapped to that value. This
/// also unwraps an element whose single child happened to be named
/// `content`; the two are indistinguishable after conversion.
fn fold(element: Container) -> Value {
    let mut map = element.into_map();
    if map.is_empty() {
        return Value::String(String::new());
    }
    if map.len() == 1
        && let Some(content) = map.remove(CONTENT_KEY)
    {
        return content;
    }
    Value::Object(map)
}

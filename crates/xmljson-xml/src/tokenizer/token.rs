use std::fmt;

use strum_macros::{Display, EnumIter};

/// A single-character structural marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Marker {
    /// `<`
    #[strum(serialize = "<")]
    Lt,
    /// `>`
    #[strum(serialize = ">")]
    Gt,
    /// `/`
    #[strum(serialize = "/")]
    Slash,
    /// `=`
    #[strum(serialize = "=")]
    Eq,
    /// `!`
    #[strum(serialize = "!")]
    Bang,
    /// `?`
    #[strum(serialize = "?")]
    Quest,
}

impl Marker {
    /// The marker spelled by `c`, if any.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Lt),
            '>' => Some(Self::Gt),
            '/' => Some(Self::Slash),
            '=' => Some(Self::Eq),
            '!' => Some(Self::Bang),
            '?' => Some(Self::Quest),
            _ => None,
        }
    }

    /// The character this marker stands for.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Lt => '<',
            Self::Gt => '>',
            Self::Slash => '/',
            Self::Eq => '=',
            Self::Bang => '!',
            Self::Quest => '?',
        }
    }
}

/// A lexical token.
///
/// Tokens carry no position; the tokenizer reports positions itself when it
/// builds an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One of the structural markers.
    Marker(Marker),
    /// A bare name, a quoted string with its quotes removed, or a run of
    /// element text.
    Text(String),
    /// Input ran out before a token started.
    EndOfInput,
}

impl Token {
    /// Returns true if this token is the given marker.
    #[must_use]
    pub fn is_marker(&self, marker: Marker) -> bool {
        matches!(self, Self::Marker(m) if *m == marker)
    }

    /// The text of a [`Token::Text`], or `None` for other tokens.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(marker) => write!(f, "{marker}"),
            Self::Text(text) => f.write_str(text),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

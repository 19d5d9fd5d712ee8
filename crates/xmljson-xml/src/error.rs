use thiserror::Error;

/// A failure to convert a document.
///
/// There is no recovery: any error aborts the whole conversion and no
/// partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The input is not well-shaped markup.
    ///
    /// Displayed as `{message} at {offset} [character {column} line {line}]`.
    #[error("{message} at {offset} [character {column} line {line}]")]
    Syntax {
        /// Human readable description, e.g. `Unclosed tag a`.
        message: String,
        /// Byte offset of the next unread character.
        offset: usize,
        /// 1-based line of the next unread character.
        line: usize,
        /// 1-based column (in characters) of the next unread character.
        column: usize,
    },

    /// Elements are nested deeper than [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
    #[error("Maximum nesting depth of {limit} exceeded")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl XmlError {
    /// The diagnostic text without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Syntax { message, .. } => message.clone(),
            Self::DepthLimitExceeded { .. } => self.to_string(),
        }
    }

    /// Returns true if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

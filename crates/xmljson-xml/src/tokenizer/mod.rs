//! XML tokenizer module.
//!
//! The tokenizer has no mode flag. Each scanning mode is a separate entry
//! point, and the parser picks the one that fits where it is in the markup:
//!
//! | Method | Used for |
//! |---|---|
//! | [`XmlTokenizer::next_token`] | tag names, attributes and markers inside `<...>` |
//! | [`XmlTokenizer::next_content`] | text between tags |
//! | [`XmlTokenizer::next_meta`] | the body of `<!...>` declarations |
//! | [`XmlTokenizer::next_cdata`] | raw `<![CDATA[...]]>` sections |

/// Predefined and numeric entity resolution.
pub mod entities;
/// Scanning entry points for each tokenizer mode.
pub mod modes;
/// Character cursor with one character of pushback.
pub mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use scanner::XmlTokenizer;
pub use token::{Marker, Token};

//! XML tokenizer and parser for the xmljson converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **XML Tokenizer** ([`XmlTokenizer`])
//!   - Structural, content, declaration and CDATA scanning modes
//!   - One character of pushback
//!   - Predefined and numeric entity expansion
//!
//! - **XML Parser** ([`XmlParser`])
//!   - Recursive descent over elements, attributes and text
//!   - Folding of text-only elements into scalars
//!   - Repeated sibling names coalesced into arrays
//!   - Configurable nesting depth guard
//!
//! - **XML Writer** ([`to_xml`]), a lossy inverse of the parser
//!
//! # Information loss
//!
//! JSON cannot tell attributes from child elements, so `<a x="1"/>` and
//! `<a><x>1</x></a>` convert to the same value. Comments, processing
//! instructions and declarations are dropped.
//!
//! # Example
//! ```
//! use serde_json::json;
//!
//! let value = xmljson_xml::xml_to_json("<a>5</a><a>6</a>").unwrap();
//! assert_eq!(value, json!({"a": [5, 6]}));
//! ```

/// Error type shared by the tokenizer and parser.
pub mod error;
/// Parse configuration.
pub mod options;
/// Recursive parser folding markup into JSON values.
pub mod parser;
/// Tokenizer converting raw text into markup tokens.
pub mod tokenizer;
/// Lossy conversion from JSON values back to XML text.
pub mod writer;

pub use error::XmlError;
pub use options::ParseOptions;
pub use parser::{XmlParser, parse_document, xml_to_json};
pub use tokenizer::{Marker, Token, XmlTokenizer};
pub use writer::to_xml;

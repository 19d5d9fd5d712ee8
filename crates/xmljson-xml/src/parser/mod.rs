//! XML parser module.
//!
//! Folds markup into a `serde_json::Map` in a single recursive pass over the
//! tokenizer. See [`XmlParser`] for the folding rules.

/// Recursive element parser.
pub mod element;

pub use element::XmlParser;

use serde_json::{Map, Value};

use crate::error::XmlError;
use crate::options::ParseOptions;

/// Convert a document into a JSON object.
///
/// Every top-level element is merged into the returned map; repeated
/// top-level names become arrays just as repeated children do.
///
/// # Errors
///
/// Returns [`XmlError::Syntax`] for malformed markup and
/// [`XmlError::DepthLimitExceeded`] when elements nest deeper than
/// `options.max_depth`.
pub fn parse_document(xml: &str, options: &ParseOptions) -> Result<Map<String, Value>, XmlError> {
    XmlParser::new(xml, *options).run()
}

/// Convert a document into a JSON value with default options.
///
/// # Errors
///
/// See [`parse_document`].
pub fn xml_to_json(xml: &str) -> Result<Value, XmlError> {
    parse_document(xml, &ParseOptions::default()).map(Value::Object)
}

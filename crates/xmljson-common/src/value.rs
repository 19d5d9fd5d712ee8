//! Scalar coercion over `serde_json` values.

use serde_json::{Number, Value};

/// Key under which element text and CDATA content is stored.
pub const CONTENT_KEY: &str = "content";

/// Convert a raw string into the most specific scalar it spells.
///
/// - `""` stays an empty string
/// - `true` / `false` (any case) become booleans
/// - `null` (any case) becomes JSON `null`
/// - text starting with a digit or `-` becomes a number when it parses:
///   a float if it contains `.`, `e` or `E`, otherwise an integer whose
///   canonical rendering matches the input exactly
/// - everything else is returned unchanged as a string
///
/// Never fails: anything that is not recognised falls back to a string.
///
/// # Example
/// ```
/// use serde_json::json;
/// use xmljson_common::string_to_value;
///
/// assert_eq!(string_to_value("42"), json!(42));
/// assert_eq!(string_to_value("TRUE"), json!(true));
/// assert_eq!(string_to_value("007"), json!("007"));
/// ```
#[must_use]
pub fn string_to_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if raw.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    parse_number(raw).unwrap_or_else(|| Value::String(raw.to_owned()))
}

fn parse_number(raw: &str) -> Option<Value> {
    let first = raw.chars().next()?;
    if !first.is_ascii_digit() && first != '-' {
        return None;
    }

    if raw.contains(['.', 'e', 'E']) {
        // Number::from_f64 rejects NaN and infinities.
        let float: f64 = raw.parse().ok()?;
        return Number::from_f64(float).map(Value::Number);
    }

    // Leading zeros, "+" signs and "-0" don't survive a round trip and stay strings.
    let integer: i64 = raw.parse().ok()?;
    (integer.to_string() == raw).then(|| Value::from(integer))
}

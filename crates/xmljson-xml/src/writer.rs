use serde_json::Value;
use xmljson_common::CONTENT_KEY;

/// Tag used for array items that have no name of their own.
const ARRAY_TAG: &str = "array";

/// Render a JSON value as XML.
///
/// This is the lossy inverse of [`parse_document`](crate::parse_document):
///
/// - each object key becomes an element, except `"content"`, which becomes
///   text (array items joined by newlines)
/// - an array under a key repeats the element once per item
/// - `""` becomes a self-closing element
/// - scalars become escaped text
///
/// When `tag_name` is given the whole value is wrapped in it. Attributes are
/// never produced, since JSON does not record which keys were attributes.
///
/// # Example
/// ```
/// use serde_json::json;
/// use xmljson_xml::to_xml;
///
/// let xml = to_xml(&json!({"a": [1, 2], "b": ""}), None);
/// assert_eq!(xml, "<a>1</a><a>2</a><b/>");
/// ```
#[must_use]
pub fn to_xml(value: &Value, tag_name: Option<&str>) -> String {
    let mut out = String::new();
    write_value(&mut out, value, tag_name);
    out
}

fn write_value(out: &mut String, value: &Value, tag_name: Option<&str>) {
    match value {
        Value::Object(map) => {
            if let Some(tag) = tag_name {
                open_tag(out, tag);
            }
            for (key, child) in map {
                write_entry(out, key, child);
            }
            if let Some(tag) = tag_name {
                close_tag(out, tag);
            }
        }
        Value::Array(items) => {
            let tag = tag_name.unwrap_or(ARRAY_TAG);
            for item in items {
                write_value(out, item, Some(tag));
            }
        }
        scalar => {
            let text = escape(&scalar_text(scalar));
            match tag_name {
                None => out.push_str(&text),
                Some(tag) if text.is_empty() => empty_tag(out, tag),
                Some(tag) => {
                    open_tag(out, tag);
                    out.push_str(&text);
                    close_tag(out, tag);
                }
            }
        }
    }
}

fn write_entry(out: &mut String, key: &str, value: &Value) {
    match value {
        Value::Array(items) if key == CONTENT_KEY => {
            let lines: Vec<String> = items.iter().map(|item| escape(&scalar_text(item))).collect();
            out.push_str(&lines.join("\n"));
        }
        _ if key == CONTENT_KEY => out.push_str(&escape(&scalar_text(value))),
        Value::Array(items) => {
            for item in items {
                if item.is_array() {
                    open_tag(out, key);
                    write_value(out, item, None);
                    close_tag(out, key);
                } else {
                    write_value(out, item, Some(key));
                }
            }
        }
        Value::String(s) if s.is_empty() => empty_tag(out, key),
        _ => write_value(out, value, Some(key)),
    }
}

/// Text for a value written as element content. Strings are written without
/// JSON quoting; everything else uses its JSON rendering.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn open_tag(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn empty_tag(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str("/>");
}

/// Replace the five XML special characters with predefined entities.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("\"q\" 'a'"), "&quot;q&quot; &apos;a&apos;");
        assert_eq!(escape("plain"), "plain");
    }
}

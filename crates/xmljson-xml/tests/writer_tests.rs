//! Integration tests for the JSON-to-XML writer.

use serde_json::json;
use xmljson_xml::{to_xml, xml_to_json};

#[test]
fn test_objects_and_scalars() {
    assert_eq!(
        to_xml(&json!({"a": 1, "b": "x", "flag": true, "none": null}), None),
        "<a>1</a><b>x</b><flag>true</flag><none>null</none>"
    );
}

#[test]
fn test_empty_string_is_self_closing() {
    assert_eq!(to_xml(&json!({"a": ""}), None), "<a/>");
}

#[test]
fn test_arrays_repeat_the_element() {
    assert_eq!(
        to_xml(&json!({"a": [1, 2, 3]}), None),
        "<a>1</a><a>2</a><a>3</a>"
    );
    assert_eq!(
        to_xml(&json!({"a": [[1, 2]]}), None),
        "<a><array>1</array><array>2</array></a>"
    );
}

#[test]
fn test_top_level_array_and_root_tag() {
    assert_eq!(to_xml(&json!([1, 2]), None), "<array>1</array><array>2</array>");
    assert_eq!(to_xml(&json!([1, 2]), Some("n")), "<n>1</n><n>2</n>");
    assert_eq!(
        to_xml(&json!({"a": 1}), Some("root")),
        "<root><a>1</a></root>"
    );
}

#[test]
fn test_content_key_becomes_text() {
    assert_eq!(
        to_xml(&json!({"a": {"id": 1, "content": "text"}}), None),
        "<a><id>1</id>text</a>"
    );
    assert_eq!(
        to_xml(&json!({"a": {"content": ["x", "y"]}}), None),
        "<a>x\ny</a>"
    );
}

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        to_xml(&json!({"a": "x < y & \"z\""}), None),
        "<a>x &lt; y &amp; &quot;z&quot;</a>"
    );
    assert_eq!(to_xml(&json!("a&b"), None), "a&amp;b");
}

#[test]
fn test_reconverting_written_xml() {
    let xml = "<root><a>1</a><a>2</a><b/><c>x &lt; y</c></root>";
    let value = xml_to_json(xml).unwrap();
    assert_eq!(
        value,
        json!({"root": {"a": [1, 2], "b": "", "c": "x < y"}})
    );

    let written = to_xml(&value, None);
    assert_eq!(written, xml);
    assert_eq!(xml_to_json(&written).unwrap(), value);
}

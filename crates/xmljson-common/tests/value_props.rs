//! Property tests for scalar coercion and repeated-key appending.

use quickcheck_macros::quickcheck;
use serde_json::Value;
use xmljson_common::{Container, string_to_value};

#[quickcheck]
fn coercion_is_total_and_strings_round_trip(raw: String) -> bool {
    match string_to_value(&raw) {
        Value::String(s) => s == raw,
        Value::Bool(b) => raw.eq_ignore_ascii_case(if b { "true" } else { "false" }),
        Value::Null => raw.eq_ignore_ascii_case("null"),
        Value::Number(_) => raw.starts_with(|c: char| c.is_ascii_digit() || c == '-'),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[quickcheck]
fn integers_coerce_to_themselves(n: i64) -> bool {
    string_to_value(&n.to_string()) == Value::from(n)
}

#[quickcheck]
fn appending_never_loses_values(keys: Vec<u8>) -> bool {
    // Squash keys into a small alphabet so repeats are common.
    let keys: Vec<String> = keys.iter().map(|k| format!("k{}", k % 4)).collect();

    let mut container = Container::new();
    for (i, key) in keys.iter().enumerate() {
        container.append(key, Value::from(i));
    }

    let stored: usize = container
        .into_map()
        .values()
        .map(|v| match v {
            Value::Array(items) => items.len(),
            _ => 1,
        })
        .sum();
    stored == keys.len()
}

#[quickcheck]
fn repeated_key_keeps_insertion_order(count: u8) -> bool {
    let count = usize::from(count % 16) + 2;
    let mut container = Container::new();
    for i in 0..count {
        container.append("item", Value::from(i));
    }

    let expected: Vec<Value> = (0..count).map(Value::from).collect();
    container.get("item") == Some(&Value::Array(expected))
}

#[quickcheck]
fn array_values_stay_single_items(first: Vec<u8>, second: Vec<u8>) -> bool {
    let first = Value::from(first);
    let second = Value::from(second);
    let mut container = Container::new();
    container.append("a", first.clone());
    container.append("a", second.clone());
    container.get("a") == Some(&Value::Array(vec![first, second]))
}

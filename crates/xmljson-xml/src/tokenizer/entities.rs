//! Entity references.
//!
//! Only the five predefined XML entities and numeric character references are
//! expanded. Anything else is left in the text as written, since resolving it
//! would require processing the DTD.

/// Resolve the name between `&` and `;`.
///
/// Returns `None` for unknown names and for numeric references that do not
/// name a valid `char`.
#[must_use]
pub fn resolve(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Expand `&name;` to its replacement text, or return it unchanged.
#[must_use]
pub fn expand(name: &str) -> String {
    resolve(name).map_or_else(|| format!("&{name};"), String::from)
}

/// Characters allowed between `&` and `;`.
#[must_use]
pub fn is_entity_char(c: char) -> bool {
    c.is_alphanumeric() || c == '#'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_entities() {
        assert_eq!(resolve("amp"), Some('&'));
        assert_eq!(resolve("lt"), Some('<'));
        assert_eq!(resolve("gt"), Some('>'));
        assert_eq!(resolve("quot"), Some('"'));
        assert_eq!(resolve("apos"), Some('\''));
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(resolve("#65"), Some('A'));
        assert_eq!(resolve("#x41"), Some('A'));
        assert_eq!(resolve("#X263A"), Some('☺'));
    }

    #[test]
    fn test_invalid_references() {
        assert_eq!(resolve("nbsp"), None);
        assert_eq!(resolve("#"), None);
        assert_eq!(resolve("#xZZ"), None);
        // Surrogate code point
        assert_eq!(resolve("#xD800"), None);
    }

    #[test]
    fn test_expand_keeps_unknown_names() {
        assert_eq!(expand("amp"), "&");
        assert_eq!(expand("copy"), "&copy;");
        assert_eq!(expand("café"), "&café;");
    }

    #[test]
    fn test_entity_chars_include_non_ascii_letters() {
        assert!(is_entity_char('é'));
        assert!(is_entity_char('7'));
        assert!(is_entity_char('#'));
        assert!(!is_entity_char(' '));
        assert!(!is_entity_char('<'));
    }
}

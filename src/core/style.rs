//! Node style lists
//!
//! A node declaration carries a bracketed list such as
//! `[style=h gate, fill=white]`. Extraction happens in two phases:
//! [`parse_style_list`] builds the full key/value mapping, then
//! [`take_primary_style`] requires and removes the `style` entry.

use indexmap::IndexMap;
use thiserror::Error;

/// Key whose value names the node's drawing primitive
pub const STYLE_KEY: &str = "style";

/// Style identifiers that collide with Typst keywords
const RESERVED_STYLES: &[&str] = &["none"];

/// Auxiliary style attributes, in declaration order
pub type StyleMap = IndexMap<String, String>;

/// Error of the style extraction step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The list has no `style=` entry, or its value is empty
    #[error("missing required `style` key")]
    MissingStyleKey,
    /// An entry that is not exactly one `key=value` pair
    #[error("malformed style entry `{0}`")]
    MalformedEntry(String),
}

/// Parse the inside of a bracketed style list into a key/value mapping.
///
/// Entries are separated by `", "`. A repeated key keeps its first
/// position but takes the later value.
pub fn parse_style_list(raw: &str) -> Result<StyleMap, StyleError> {
    let mut styles = StyleMap::new();
    for entry in raw.split(", ") {
        let mut parts = entry.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                styles.insert(key.to_string(), value.to_string());
            }
            _ => return Err(StyleError::MalformedEntry(entry.to_string())),
        }
    }
    Ok(styles)
}

/// Remove the `style` entry and normalize it into a style identifier.
///
/// Spaces become underscores (`h gate` → `h_gate`) and reserved words get
/// a trailing underscore (`none` → `none_`). An empty `style=` counts as
/// missing.
pub fn take_primary_style(styles: &mut StyleMap) -> Result<String, StyleError> {
    let value = styles
        .shift_remove(STYLE_KEY)
        .filter(|value| !value.trim().is_empty())
        .ok_or(StyleError::MissingStyleKey)?;
    Ok(normalize_style_name(&value))
}

/// Turn a raw style value into a CeTZ-safe identifier
pub fn normalize_style_name(value: &str) -> String {
    let name = value.replace(' ', "_");
    if RESERVED_STYLES.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_list() {
        let styles = parse_style_list("style=h gate, fill=white").unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(styles["style"], "h gate");
        assert_eq!(styles["fill"], "white");
    }

    #[test]
    fn test_parse_style_list_keeps_order() {
        let styles = parse_style_list("b=1, a=2, c=3").unwrap();
        let keys: Vec<&str> = styles.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_key_later_wins() {
        let styles = parse_style_list("style=a, style=b").unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles["style"], "b");
    }

    #[test]
    fn test_entry_without_equals() {
        let err = parse_style_list("style=dot, thick").unwrap_err();
        assert_eq!(err, StyleError::MalformedEntry("thick".to_string()));
    }

    #[test]
    fn test_entry_with_two_equals() {
        let err = parse_style_list("style=a=b").unwrap_err();
        assert_eq!(err, StyleError::MalformedEntry("style=a=b".to_string()));
    }

    #[test]
    fn test_take_primary_style() {
        let mut styles = parse_style_list("fill=red, style=target gate").unwrap();
        let style = take_primary_style(&mut styles).unwrap();
        assert_eq!(style, "target_gate");
        assert!(!styles.contains_key("style"));
        assert_eq!(styles["fill"], "red");
    }

    #[test]
    fn test_take_primary_style_missing() {
        let mut styles = parse_style_list("fill=red").unwrap();
        assert_eq!(
            take_primary_style(&mut styles),
            Err(StyleError::MissingStyleKey)
        );
    }

    #[test]
    fn test_take_primary_style_empty_value() {
        let mut styles = parse_style_list("style=, fill=red").unwrap();
        assert_eq!(
            take_primary_style(&mut styles),
            Err(StyleError::MissingStyleKey)
        );
        assert!(!styles.contains_key("style"));
    }

    #[test]
    fn test_none_is_escaped() {
        assert_eq!(normalize_style_name("none"), "none_");
        assert_eq!(normalize_style_name("none gate"), "none_gate");
        assert_eq!(normalize_style_name("X Y"), "X_Y");
        assert_eq!(normalize_style_name("dot"), "dot");
    }
}

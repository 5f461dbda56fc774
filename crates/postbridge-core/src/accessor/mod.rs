//! Path-addressed access into untyped JSON documents
//!
//! The export format is defined by another tool and changes independently of
//! this crate, so nothing here assumes a schema. Lookups go through dotted
//! [`Path`] expressions and report absence as `None`. The typed wrappers
//! [`resolve_as_text`] and [`resolve_as_sequence`] never fail: on absence or a
//! type mismatch they log a warning naming the path and substitute an empty
//! value, so one malformed entity cannot abort a whole batch.
//!
//! Copyright (c) 2025 Postbridge Team
//! Licensed under the Apache-2.0 license

mod path;

pub use path::{Path, Segment};

use serde_json::Value;
use tracing::warn;

/// Resolve `path` against `root`.
///
/// Each segment is first tried as a key when the current value is an object,
/// then as a position when the current value is an array. The first segment
/// that fails ends resolution with `None`; later segments are not consulted.
/// A present JSON `null` is returned as `Some(&Value::Null)`.
pub fn resolve<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| step(current, segment))
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment.key()),
        Value::Array(items) => segment.index().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Parse `expression` and resolve it against `root`
pub fn get<'a>(root: &'a Value, expression: &str) -> Option<&'a Value> {
    resolve(root, &Path::parse(expression))
}

/// Resolve `expression` and return it as text, or `""` with a warning
pub fn resolve_as_text<'a>(root: &'a Value, expression: &str) -> &'a str {
    match get(root, expression) {
        Some(Value::String(text)) => text,
        other => {
            warn!(
                path = expression,
                value = %describe(other),
                "expected a string, substituting empty text"
            );
            ""
        }
    }
}

/// Resolve `expression` and return it as a sequence, or `[]` with a warning
pub fn resolve_as_sequence<'a>(root: &'a Value, expression: &str) -> &'a [Value] {
    match get(root, expression) {
        Some(Value::Array(items)) => items,
        other => {
            warn!(
                path = expression,
                value = %describe(other),
                "expected an array, substituting an empty sequence"
            );
            &[]
        }
    }
}

/// Render a lookup result for diagnostics
pub(crate) fn describe(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "<absent>".to_string(),
    }
}

/// Method-call form of the accessor functions
pub trait ValueExt {
    fn at(&self, expression: &str) -> Option<&Value>;
    fn text_at(&self, expression: &str) -> &str;
    fn sequence_at(&self, expression: &str) -> &[Value];
}

impl ValueExt for Value {
    fn at(&self, expression: &str) -> Option<&Value> {
        get(self, expression)
    }

    fn text_at(&self, expression: &str) -> &str {
        resolve_as_text(self, expression)
    }

    fn sequence_at(&self, expression: &str) -> &[Value] {
        resolve_as_sequence(self, expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    fn sample() -> Value {
        json!({
            "string": "stringValue1",
            "number": 1,
            "null": null,
            "boolean": true,
            "stringArray": ["stringValue2", "stringValue3"],
            "object": {"string": "stringValue4", "number": 4},
            "objectArray": [
                {"string": "stringValue5", "number": 5},
                {"string": "stringValue6", "number": 6}
            ]
        })
    }

    #[test]
    fn test_resolve_scalars() {
        let doc = sample();
        assert_eq!(get(&doc, "string"), Some(&json!("stringValue1")));
        assert_eq!(get(&doc, "number"), Some(&json!(1)));
        assert_eq!(get(&doc, "boolean"), Some(&json!(true)));
        assert_eq!(get(&doc, "object.number"), Some(&json!(4)));
        assert_eq!(get(&doc, "objectArray.1.string"), Some(&json!("stringValue6")));
    }

    #[test]
    fn test_present_null_is_not_absent() {
        let doc = sample();
        assert_eq!(get(&doc, "null"), Some(&Value::Null));
        assert_eq!(get(&doc, "missing"), None);
    }

    #[test]
    fn test_resolve_nested_maps() {
        let doc = json!({"a": {"b": 5}});
        assert_eq!(get(&doc, "a.b"), Some(&json!(5)));
        assert_eq!(get(&doc, "a.c"), None);
    }

    #[test]
    fn test_resolve_sequence_indices() {
        let doc = json!({"arr": [10, 20]});
        assert_eq!(get(&doc, "arr.0"), Some(&json!(10)));
        assert_eq!(get(&doc, "arr.1"), Some(&json!(20)));
        assert_eq!(get(&doc, "arr.5"), None);
        assert_eq!(get(&doc, "arr.first"), None);
    }

    #[test]
    fn test_empty_path_returns_root() {
        let doc = sample();
        assert_eq!(get(&doc, ""), Some(&doc));
        assert_eq!(resolve(&doc, &Path::default()), Some(&doc));
    }

    #[test]
    fn test_numeric_keys_on_maps_use_key_lookup() {
        let doc = json!({"codes": {"0": "zero", "200": "ok"}});
        assert_eq!(get(&doc, "codes.200"), Some(&json!("ok")));
        assert_eq!(get(&doc, "codes.0"), Some(&json!("zero")));
        assert_eq!(get(&doc, "codes.1"), None);
    }

    #[test]
    fn test_failure_is_final() {
        // "arr.5" fails, so "0" must not be tried against the array again.
        let doc = json!({"arr": [[1], [2]]});
        assert_eq!(get(&doc, "arr.5.0"), None);
        assert_eq!(get(&doc, "arr.1.0"), Some(&json!(2)));
    }

    #[test]
    fn test_descending_into_scalars_fails() {
        let doc = sample();
        assert_eq!(get(&doc, "string.length"), None);
        assert_eq!(get(&doc, "null.anything"), None);
        assert_eq!(get(&doc, "number.0"), None);
    }

    #[test]
    fn test_resolve_as_text() {
        let doc = sample();
        assert_eq!(resolve_as_text(&doc, "object.string"), "stringValue4");
        assert_eq!(resolve_as_text(&json!({"n": 5}), "n"), "");
        assert_eq!(resolve_as_text(&doc, "null"), "");
        assert_eq!(resolve_as_text(&doc, "missing.path"), "");
    }

    #[test]
    fn test_resolve_as_sequence() {
        let doc = sample();
        assert_eq!(
            resolve_as_sequence(&doc, "stringArray"),
            &[json!("stringValue2"), json!("stringValue3")]
        );
        assert!(resolve_as_sequence(&doc, "object").is_empty());
        assert!(resolve_as_sequence(&doc, "missing").is_empty());
        assert!(resolve_as_sequence(&json!({"empty": []}), "empty").is_empty());
    }

    #[traced_test]
    #[test]
    fn test_text_mismatch_is_logged() {
        let doc = json!({"entity": {"name": 31337}});
        assert_eq!(resolve_as_text(&doc, "entity.name"), "");
        assert!(logs_contain("expected a string"));
        assert!(logs_contain("entity.name"));
        assert!(logs_contain("31337"));
    }

    #[traced_test]
    #[test]
    fn test_absent_sequence_is_logged() {
        let doc = json!({"entity": {}});
        assert!(resolve_as_sequence(&doc, "entity.headers").is_empty());
        assert!(logs_contain("expected an array"));
        assert!(logs_contain("entity.headers"));
        assert!(logs_contain("<absent>"));
    }

    #[traced_test]
    #[test]
    fn test_successful_lookups_are_silent() {
        let doc = sample();
        assert_eq!(resolve_as_text(&doc, "string"), "stringValue1");
        assert_eq!(resolve_as_sequence(&doc, "stringArray").len(), 2);
        assert!(!logs_contain("substituting"));
    }

    #[test]
    fn test_value_ext() {
        let doc = sample();
        assert_eq!(doc.text_at("objectArray.0.string"), "stringValue5");
        assert_eq!(doc.sequence_at("objectArray").len(), 2);
        assert!(doc.at("objectArray.2").is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "<absent>");
        assert_eq!(describe(Some(&json!(5))), "5");
        assert_eq!(describe(Some(&json!({"a": [1]}))), r#"{"a":[1]}"#);
    }
}

//! Dotted paths into nested JSON mappings.
//!
//! "contact.address.city"  =>  DottedPath(vec!["contact", "address", "city"])
//!
//! A path stops at its first empty segment, so "" and ".a" both address the
//! value itself and "a." is the same as "a".

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DottedPath(Vec<String>);

impl DottedPath {
    /// The empty path: no traversal, no wrapping.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split('.')
                .take_while(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl<'de> Deserialize<'de> for DottedPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `sourcePath: ~` is treated like an absent key.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Read the value at `path` inside `value`.
///
/// Traversal only descends through mappings; a non-mapping is returned as-is
/// whatever path remains. A missing key yields `Value::Null`. When a key holds
/// an array of mappings, the rest of the path is applied to every element and
/// the non-null results are collected, so "items.name" projects `name` out of
/// each item.
pub fn extract<'a>(value: &'a Value, path: &DottedPath) -> Cow<'a, Value> {
    extract_segments(value, path.segments())
}

fn extract_segments<'a>(value: &'a Value, segments: &[String]) -> Cow<'a, Value> {
    let Value::Object(map) = value else {
        return Cow::Borrowed(value);
    };
    let Some((head, rest)) = segments.split_first() else {
        return Cow::Borrowed(value);
    };
    let Some(entry) = map.get(head) else {
        return Cow::Owned(Value::Null);
    };

    match entry {
        Value::Object(_) => extract_segments(entry, rest),
        Value::Array(items) if !rest.is_empty() && items.iter().all(Value::is_object) => {
            let projected = items
                .iter()
                .map(|item| extract_segments(item, rest))
                .filter(|found| !found.is_null())
                .map(Cow::into_owned)
                .collect();
            Cow::Owned(Value::Array(projected))
        }
        _ => Cow::Borrowed(entry),
    }
}

/// Wrap `value` in one single-key mapping per path segment, outermost first.
///
/// Null stays null whatever the path, and the root path returns `value` as-is.
pub fn store_at(value: Value, path: &DottedPath) -> Value {
    if value.is_null() {
        return Value::Null;
    }

    path.segments().iter().rev().fold(value, |inner, segment| {
        let mut wrapped = Map::with_capacity(1);
        wrapped.insert(segment.clone(), inner);
        Value::Object(wrapped)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn get(value: &Value, path: &str) -> Value {
        extract(value, &DottedPath::parse(path)).into_owned()
    }

    #[test]
    fn parse_stops_at_first_empty_segment() {
        assert!(DottedPath::parse("").is_root());
        assert!(DottedPath::parse(".a").is_root());
        assert_eq!(DottedPath::parse("a."), DottedPath::parse("a"));
        assert_eq!(
            DottedPath::parse("a.b.c").segments(),
            &["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(DottedPath::parse("a.b").to_string(), "a.b");
    }

    #[test]
    fn deserializes_from_string_or_null() {
        let path: DottedPath = serde_yaml::from_str("contact.email").unwrap();
        assert_eq!(path, DottedPath::parse("contact.email"));

        let path: DottedPath = serde_yaml::from_str("~").unwrap();
        assert!(path.is_root());
    }

    #[test]
    fn extract_basic_value() {
        assert_eq!(get(&json!({"basic": "value"}), "basic"), json!("value"));
    }

    #[test]
    fn extract_nested_value_and_object() {
        let source = json!({"nested_source": {"key": "value"}});
        assert_eq!(get(&source, "nested_source.key"), json!("value"));
        assert_eq!(get(&source, "nested_source"), json!({"key": "value"}));
    }

    #[test]
    fn extract_array_is_returned_whole() {
        let source = json!({"nested_source": [{"key": "value"}]});
        assert_eq!(get(&source, "nested_source"), json!([{"key": "value"}]));
    }

    #[test]
    fn extract_empty_path_returns_input() {
        let source = json!({"nested_source": [{"key": "value"}]});
        assert_eq!(get(&source, ""), source);
    }

    #[test]
    fn extract_missing_key_is_null() {
        assert_eq!(get(&json!({"a": 1}), "b"), Value::Null);
        assert_eq!(get(&json!({"a": {"b": 1}}), "a.c"), Value::Null);
    }

    #[test]
    fn extract_does_not_descend_into_scalars() {
        assert_eq!(get(&json!("plain"), "a.b"), json!("plain"));
        assert_eq!(get(&json!({"a": "x"}), "a.b"), json!("x"));
        assert_eq!(get(&json!({"a": [1, 2]}), "a.b"), json!([1, 2]));
    }

    #[test]
    fn extract_projects_through_array_of_mappings() {
        let source = json!({
            "addresses": [
                {"city": "New York"},
                {"line1": "no city here"},
                {"city": "London"}
            ]
        });
        assert_eq!(get(&source, "addresses.city"), json!(["New York", "London"]));
    }

    #[test]
    fn extract_keeps_number_subtypes() {
        let source = json!({"i": 10, "f": 10.5});
        assert!(get(&source, "i").is_i64());
        assert!(get(&source, "f").is_f64());
    }

    #[test]
    fn store_at_wraps_outermost_first() {
        let data = json!({"some": "data"});
        assert_eq!(
            store_at(data.clone(), &DottedPath::parse("nested")),
            json!({"nested": {"some": "data"}})
        );
        assert_eq!(
            store_at(data, &DottedPath::parse("deeply.nested")),
            json!({"deeply": {"nested": {"some": "data"}}})
        );
    }

    #[test]
    fn store_at_root_is_identity() {
        assert_eq!(store_at(json!("x"), &DottedPath::root()), json!("x"));
    }

    #[test]
    fn store_at_null_is_null() {
        for path in ["", "a", "a.b.c"] {
            assert_eq!(store_at(Value::Null, &DottedPath::parse(path)), Value::Null);
        }
    }

    #[test]
    fn store_then_extract_round_trips() {
        let data = json!({"k": [1, 2, 3]});
        let path = DottedPath::parse("x.y.z");
        let stored = store_at(data.clone(), &path);
        assert_eq!(extract(&stored, &path).into_owned(), data);
    }
}

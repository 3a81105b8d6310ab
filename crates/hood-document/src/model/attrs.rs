use serde_json::{Map, Value};

/// Leniently typed view over a node or mark `attrs` object.
///
/// Editors are inconsistent about attribute types, so numbers and numeric
/// strings are accepted interchangeably.
#[derive(Debug, Default, Clone)]
pub(crate) struct Attrs(Map<String, Value>);

impl Attrs {
    /// Wraps an `attrs` value; anything but an object reads as no attributes.
    pub fn new(attrs: Option<Value>) -> Self {
        match attrs {
            Some(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    /// Returns the attribute as a string, if it is a string or a number.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }

    /// Returns the attribute as an integer, if it is a number or a numeric string.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(value) => value
                .as_i64()
                .or_else(|| value.as_f64().map(|f| f.trunc() as i64)),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn attrs(value: Value) -> Attrs {
        Attrs::new(Some(value))
    }

    #[test]
    fn integer_accepts_numbers_and_numeric_strings() {
        let attrs = attrs(json!({ "a": 3, "b": "4", "c": 2.9, "d": "x", "e": null }));
        assert_eq!(attrs.integer("a"), Some(3));
        assert_eq!(attrs.integer("b"), Some(4));
        assert_eq!(attrs.integer("c"), Some(2));
        assert_eq!(attrs.integer("d"), None);
        assert_eq!(attrs.integer("e"), None);
        assert_eq!(attrs.integer("missing"), None);
    }

    #[test]
    fn string_accepts_strings_and_numbers() {
        let attrs = attrs(json!({ "src": "/a.png", "alt": 12, "title": null }));
        assert_eq!(attrs.string("src").as_deref(), Some("/a.png"));
        assert_eq!(attrs.string("alt").as_deref(), Some("12"));
        assert_eq!(attrs.string("title"), None);
    }

    #[test]
    fn non_object_attrs_are_empty() {
        assert_eq!(attrs(json!("user-1")).string("id"), None);
        assert_eq!(attrs(json!([1, 2])).integer("level"), None);
        assert_eq!(Attrs::new(None).string("src"), None);
    }
}

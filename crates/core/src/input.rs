//! Boundary input shapes.
//!
//! Clients send `responsible` and `subgroup` either as a single string or as
//! a list of names. [`StringOrList`] absorbs that at the edge so the canonical
//! [`Demand`](crate::demand::Demand) only ever holds plain strings.

use serde::{Deserialize, Serialize};

/// Separator used when flattening a list of names into one string.
pub const LIST_SEPARATOR: &str = ", ";

/// A field that may arrive as one string or as an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    Single(String),
    List(Vec<String>),
}

impl StringOrList {
    /// Collapse into the stored form. Lists are joined with `", "`,
    /// single strings are returned untouched.
    pub fn into_canonical(self) -> String {
        match self {
            StringOrList::Single(value) => value,
            StringOrList::List(items) => items.join(LIST_SEPARATOR),
        }
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::Single(value.to_string())
    }
}

impl From<String> for StringOrList {
    fn from(value: String) -> Self {
        StringOrList::Single(value)
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(items: Vec<String>) -> Self {
        StringOrList::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_is_joined_with_comma_space() {
        let value = StringOrList::from(vec!["Ana".to_string(), "Bob".to_string()]);
        assert_eq!(value.into_canonical(), "Ana, Bob");
    }

    #[test]
    fn single_string_is_untouched() {
        let value = StringOrList::from("Ana,Bob");
        assert_eq!(value.into_canonical(), "Ana,Bob");
    }

    #[test]
    fn one_element_list_has_no_separator() {
        let value: StringOrList = serde_json::from_value(json!(["Help Desk"])).unwrap();
        assert_eq!(value.into_canonical(), "Help Desk");
    }

    #[test]
    fn deserializes_both_shapes() {
        let single: StringOrList = serde_json::from_value(json!("Ana")).unwrap();
        let list: StringOrList = serde_json::from_value(json!(["Ana", "Bob"])).unwrap();
        assert_eq!(single, StringOrList::Single("Ana".into()));
        assert_eq!(
            list,
            StringOrList::List(vec!["Ana".into(), "Bob".into()])
        );
    }

    #[test]
    fn rejects_non_string_shapes() {
        assert!(serde_json::from_value::<StringOrList>(json!(42)).is_err());
        assert!(serde_json::from_value::<StringOrList>(json!([1, 2])).is_err());
    }

    #[test]
    fn empty_list_collapses_to_empty_string() {
        let value: StringOrList = serde_json::from_value(json!([])).unwrap();
        assert_eq!(value.into_canonical(), "");
    }
}

//! The record abstraction stored in collections.
//!
//! A record is an open-ended mapping from field name to value. Field access
//! is fail-soft: an absent field is `None`, never an error. The provided
//! implementations cover plain JSON objects; embedders with richer item types
//! implement [`Record`] themselves.

use serde_json::{Map, Value};

/// Clone strategy used when handing isolated copies to iteration callbacks.
///
/// The default structural clone is fully independent for plain field-mappings.
/// Types with interior sharing can override it with a deeper copy.
pub trait DeepClone: Clone {
    /// Produce a copy that shares no mutable state with the original.
    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

impl DeepClone for Value {}
impl DeepClone for Map<String, Value> {}

/// A loosely-typed bag of fields.
pub trait Record: DeepClone + PartialEq {
    /// Look up a field by name. Absent fields yield `None`.
    fn field(&self, name: &str) -> Option<Value>;

    /// Build a record from a list of named fields.
    fn from_fields(fields: Vec<(String, Value)>) -> Self;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|fields| fields.get(name)).cloned()
    }

    fn from_fields(fields: Vec<(String, Value)>) -> Self {
        Value::Object(fields.into_iter().collect())
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn from_fields(fields: Vec<(String, Value)>) -> Self {
        fields.into_iter().collect()
    }
}

/// Conversion to a plain JSON value, flattening nested collections.
///
/// Items that are themselves collections serialize as arrays of their items
/// instead of their full structure.
pub trait ToArray {
    /// The flattened value of this item.
    fn to_array(&self) -> Value;
}

impl ToArray for Value {
    fn to_array(&self) -> Value {
        self.clone()
    }
}

impl ToArray for Map<String, Value> {
    fn to_array(&self) -> Value {
        Value::Object(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_lookup_on_object() {
        let record = json!({"id": 1, "name": "Alice"});
        assert_eq!(record.field("id"), Some(json!(1)));
        assert_eq!(record.field("name"), Some(json!("Alice")));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn field_lookup_on_non_object() {
        assert_eq!(json!(42).field("id"), None);
        assert_eq!(json!([1, 2, 3]).field("id"), None);
        assert_eq!(Value::Null.field("id"), None);
    }

    #[test]
    fn from_fields_builds_object() {
        let record = Value::from_fields(vec![
            ("id".to_string(), json!(1)),
            ("name".to_string(), json!("one")),
        ]);
        assert_eq!(record, json!({"id": 1, "name": "one"}));
    }

    #[test]
    fn from_fields_empty() {
        let record = Value::from_fields(Vec::new());
        assert_eq!(record, json!({}));
    }

    #[test]
    fn map_record_field_lookup() {
        let record: Map<String, Value> = Map::from_fields(vec![("id".to_string(), json!(7))]);
        assert_eq!(record.field("id"), Some(json!(7)));
        assert_eq!(record.field("name"), None);
    }

    #[test]
    fn deep_clone_is_independent() {
        let record = json!({"id": 1, "tags": ["a", "b"]});
        let mut copy = record.deep_clone();
        copy["id"] = json!(99);
        copy["tags"][0] = json!("z");

        assert_eq!(record, json!({"id": 1, "tags": ["a", "b"]}));
    }

    #[test]
    fn to_array_on_plain_value() {
        let record = json!({"id": 1});
        assert_eq!(record.to_array(), json!({"id": 1}));
    }
}

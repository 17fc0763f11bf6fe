//! TreeRecord trait for records that can be displayed in a TreeGrid.

use serde_json::Value;

/// Trait for input records that form a hierarchical dataset.
///
/// A record optionally carries an ordered sequence of child records; a
/// record with an empty child sequence is a leaf. Named fields back the
/// default cell renderer.
///
/// # Example
///
/// ```
/// use treegrid::TreeRecord;
///
/// #[derive(Clone)]
/// struct Entry {
///     name: String,
///     children: Vec<Entry>,
/// }
///
/// impl TreeRecord for Entry {
///     fn children(&self) -> &[Self] {
///         &self.children
///     }
///
///     fn field(&self, name: &str) -> Option<String> {
///         match name {
///             "name" => Some(self.name.clone()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TreeRecord: Clone {
    /// Ordered child records. Empty for leaves.
    fn children(&self) -> &[Self];

    /// Textual value of a named field, if the record carries one.
    fn field(&self, name: &str) -> Option<String>;
}

/// JSON objects are records: a `children` array holds the child records,
/// any other scalar member is a field. A missing or non-array `children`
/// member makes the value a leaf.
impl TreeRecord for Value {
    fn children(&self) -> &[Self] {
        self.get("children")
            .and_then(|children| children.as_array())
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_children() {
        let record = json!({"name": "root", "children": [{"name": "a"}, {"name": "b"}]});
        assert_eq!(record.children().len(), 2);
        assert_eq!(record.children()[0].field("name").as_deref(), Some("a"));
    }

    #[test]
    fn test_json_missing_children_is_leaf() {
        let record = json!({"name": "leaf"});
        assert!(record.children().is_empty());
    }

    #[test]
    fn test_json_malformed_children_is_leaf() {
        let record = json!({"name": "odd", "children": "not-an-array"});
        assert!(record.children().is_empty());
    }

    #[test]
    fn test_json_fields() {
        let record = json!({"name": "n", "count": 3, "flag": true, "nested": {}});
        assert_eq!(record.field("name").as_deref(), Some("n"));
        assert_eq!(record.field("count").as_deref(), Some("3"));
        assert_eq!(record.field("flag").as_deref(), Some("true"));
        assert_eq!(record.field("nested"), None);
        assert_eq!(record.field("missing"), None);
    }
}

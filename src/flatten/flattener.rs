use crate::flatten::types::{FlattenConfig, FlattenedRecord};
use serde_json::{Map, Value};

/// Turns nested JSON values into path-keyed leaf maps
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Self {
        Flattener { config }
    }

    /// Flatten a top-level record, seeding paths with the root marker
    pub fn flatten(&self, value: &Value) -> FlattenedRecord {
        self.flatten_with_prefix(value, &self.config.root_marker)
    }

    /// Flatten a value under an explicit prefix.
    ///
    /// Empty objects and arrays contribute no entries. A scalar under an
    /// empty prefix is keyed by the root marker.
    pub fn flatten_with_prefix(&self, value: &Value, prefix: &str) -> FlattenedRecord {
        let mut record = FlattenedRecord::new();
        self.walk(value, prefix, &mut record);
        record
    }

    fn walk(&self, value: &Value, prefix: &str, record: &mut FlattenedRecord) {
        match value {
            Value::Object(obj) => self.walk_object(obj, prefix, record),
            Value::Array(arr) => self.walk_array(arr, prefix, record),
            _ => {
                let path = if prefix.is_empty() {
                    self.config.root_marker.clone()
                } else {
                    prefix.to_string()
                };
                Self::insert_leaf(record, path, value.clone());
            }
        }
    }

    fn walk_object(&self, obj: &Map<String, Value>, prefix: &str, record: &mut FlattenedRecord) {
        for (key, child) in obj.iter() {
            let child_prefix = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}{}{}", prefix, self.config.separator, key)
            };
            self.walk(child, &child_prefix, record);
        }
    }

    fn walk_array(&self, arr: &[Value], prefix: &str, record: &mut FlattenedRecord) {
        for (idx, item) in arr.iter().enumerate() {
            let child_prefix = format!("{}[{}]", prefix, idx);
            self.walk(item, &child_prefix, record);
        }
    }

    // Sibling keys such as "a.b" and {"a": {"b": ..}} map to one path; the
    // later leaf wins.
    fn insert_leaf(record: &mut FlattenedRecord, path: String, value: Value) {
        if record.contains_path(&path) {
            log::warn!("path collision while flattening: {} overwritten", path);
        }
        record.insert(path, value);
    }
}

/// Flatten `value` under `prefix` with the default configuration
pub fn flatten(value: &Value, prefix: &str) -> FlattenedRecord {
    Flattener::default().flatten_with_prefix(value, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf_count(value: &Value) -> usize {
        match value {
            Value::Object(obj) => obj.values().map(leaf_count).sum(),
            Value::Array(arr) => arr.iter().map(leaf_count).sum(),
            _ => 1,
        }
    }

    #[test]
    fn test_object_with_array() {
        let flattener = Flattener::new(FlattenConfig::default().with_root_marker("R"));
        let record = flattener.flatten(&json!({"a": 1, "b": [10, 20]}));

        let paths: Vec<&String> = record.paths().collect();
        assert_eq!(paths, vec!["R.a", "R.b[0]", "R.b[1]"]);
        assert_eq!(record.get("R.a").unwrap(), 1);
        assert_eq!(record.get("R.b[0]").unwrap(), 10);
        assert_eq!(record.get("R.b[1]").unwrap(), 20);
    }

    #[test]
    fn test_default_root_marker() {
        let record = Flattener::default().flatten(&json!({"name": "Alice"}));
        assert_eq!(record.get("SA.name").unwrap(), "Alice");
    }

    #[test]
    fn test_top_level_scalar() {
        let record = Flattener::default().flatten(&json!(42));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("SA").unwrap(), 42);
    }

    #[test]
    fn test_top_level_array() {
        let record = Flattener::default().flatten(&json!(["x", {"y": null}]));
        assert_eq!(record.get("SA[0]").unwrap(), "x");
        assert_eq!(record.get("SA[1].y").unwrap(), &Value::Null);
    }

    #[test]
    fn test_empty_prefix() {
        let record = flatten(&json!({"a": {"b": true}, "c": [1]}), "");
        let paths: Vec<&String> = record.paths().collect();
        assert_eq!(paths, vec!["a.b", "c[0]"]);

        let scalar = flatten(&json!("bare"), "");
        assert_eq!(scalar.get("SA").unwrap(), "bare");
    }

    #[test]
    fn test_empty_containers_contribute_nothing() {
        let record = Flattener::default().flatten(&json!({"a": {}, "b": [], "c": [[], {}]}));
        assert!(record.is_empty());
        assert!(Flattener::default().flatten(&json!({})).is_empty());
    }

    #[test]
    fn test_null_is_a_leaf() {
        let record = Flattener::default().flatten(&json!({"gone": null}));
        assert_eq!(record.len(), 1);
        assert!(record.get("SA.gone").unwrap().is_null());
    }

    #[test]
    fn test_leaf_count_and_unique_paths() {
        let input = json!({
            "id": 7,
            "user": {"name": "Bob", "tags": ["a", "b", {"deep": [1, 2, 3]}]},
            "matrix": [[1, 2], [3, 4]],
            "empty": {},
            "flag": false
        });

        let record = Flattener::default().flatten(&input);
        assert_eq!(record.len(), leaf_count(&input));
        assert!(record.iter().all(|(_, v)| !v.is_object() && !v.is_array()));
        assert_eq!(record.get("SA.matrix[1][0]").unwrap(), 3);
        assert_eq!(record.get("SA.user.tags[2].deep[2]").unwrap(), 3);
    }

    #[test]
    fn test_deterministic() {
        let input = json!({"z": 1, "a": [{"k": "v"}], "m": null});
        let first = Flattener::default().flatten(&input);
        let second = Flattener::default().flatten(&input.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_order_follows_object() {
        let record = Flattener::default().flatten(&json!({"z": 1, "a": 2, "m": 3}));
        let paths: Vec<&String> = record.paths().collect();
        assert_eq!(paths, vec!["SA.z", "SA.a", "SA.m"]);
    }

    #[test]
    fn test_key_collision_overwrites() {
        let input = json!({"a": {"b": 1}, "a.b": 2});
        let record = Flattener::default().flatten(&input);

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("SA.a.b").unwrap(), 2);
    }

    #[test]
    fn test_custom_separator() {
        let config = FlattenConfig {
            root_marker: "row".to_string(),
            separator: "/".to_string(),
        };
        let record = Flattener::new(config).flatten(&json!({"a": {"b": [5]}}));
        assert_eq!(record.get("row/a/b[0]").unwrap(), 5);
    }
}

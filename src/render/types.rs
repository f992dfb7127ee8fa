use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use thiserror::Error;

/// A named sequence of records to be rendered as one HTML table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Shown as the table's heading
    pub name: String,

    /// One row per record; records may be objects, arrays or bare scalars
    pub data: Vec<Value>,
}

impl Table {
    pub fn new(name: impl Into<String>, data: Vec<Value>) -> Self {
        Table {
            name: name.into(),
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The request payload: `{"tables": [{"name": ..., "data": [...]}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TablesRequest {
    pub tables: Vec<Table>,
}

/// Failure to turn raw input into a [`TablesRequest`]
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl TablesRequest {
    pub fn new(tables: Vec<Table>) -> Self {
        TablesRequest { tables }
    }

    pub fn from_json_str(input: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_slice(input: &[u8]) -> Result<Self, RequestError> {
        Ok(serde_json::from_slice(input)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, RequestError> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Self::from_slice(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request() {
        let input = r#"{"tables": [
            {"name": "users", "data": [{"id": 1}, {"id": 2, "tags": ["a"]}]},
            {"name": "empty", "data": []}
        ]}"#;

        let request = TablesRequest::from_json_str(input).unwrap();
        assert_eq!(request.tables.len(), 2);
        assert_eq!(request.tables[0].name, "users");
        assert_eq!(request.tables[0].data[1], json!({"id": 2, "tags": ["a"]}));
        assert!(request.tables[1].is_empty());
    }

    #[test]
    fn test_parse_from_reader() {
        let input = br#"{"tables": [{"name": "t", "data": [1, "two", null]}]}"#;
        let request = TablesRequest::from_reader(&input[..]).unwrap();
        assert_eq!(request.tables[0].data, vec![json!(1), json!("two"), Value::Null]);
    }

    #[test]
    fn test_malformed_payload() {
        let missing_tables = TablesRequest::from_json_str(r#"{"rows": []}"#);
        assert!(matches!(missing_tables, Err(RequestError::Payload(_))));

        let bad_name = TablesRequest::from_json_str(r#"{"tables": [{"name": 5, "data": []}]}"#);
        assert!(matches!(bad_name, Err(RequestError::Payload(_))));

        let not_json = TablesRequest::from_json_str("<tables/>");
        assert!(not_json.is_err());
    }
}

//! # Tabulate - nested JSON to HTML tables
//!
//! Flattens arbitrarily nested JSON records into path-keyed leaves and
//! renders each named table as an HTML `<table>` whose columns are the
//! union of paths found across its records.
//!
//! ## Modules
//!
//! - **flatten**: Convert one nested value into `path -> scalar` entries
//! - **render**: Build column sets per table and emit HTML fragments
//!
//! ## Quick Start
//!
//! ```rust
//! use tabulate::{render_tables, Table};
//! use serde_json::json;
//!
//! let tables = vec![Table::new(
//!     "users",
//!     vec![
//!         json!({"name": "Alice", "langs": ["rust", "go"]}),
//!         json!({"name": "Bob"}),
//!     ],
//! )];
//!
//! let html = render_tables(&tables);
//! assert!(html.contains("<th>SA.langs[1]</th>"));
//! // Bob has no languages, so his row is padded with empty cells
//! assert!(html.contains("<td>Bob</td><td></td><td></td>"));
//! ```
//!
//! Paths join object keys with `.` and append `[i]` for array elements,
//! starting from the root marker `SA`:
//!
//! ```rust
//! use tabulate::Flattener;
//! use serde_json::json;
//!
//! let record = Flattener::default().flatten(&json!({"a": 1, "b": [10, 20]}));
//! let paths: Vec<&String> = record.paths().collect();
//! assert_eq!(paths, vec!["SA.a", "SA.b[0]", "SA.b[1]"]);
//! ```

use anyhow::{Context, Result};
use std::io::Read;

pub mod flatten;
pub mod render;

// Re-export commonly used types for convenience
pub use flatten::{flatten, FlattenConfig, FlattenedRecord, Flattener};
pub use render::{
    convert_to_html, render_tables, wrap_document, ColumnSet, RenderConfig, RequestError, Table,
    TableRenderer, TablesRequest, TabularData,
};

/// Main entry point: read a `{"tables": [...]}` payload and render it as a
/// complete HTML page
pub fn render_json<R: Read>(reader: R, config: RenderConfig) -> Result<String> {
    let request = TablesRequest::from_reader(reader)
        .context("Failed to parse tables request")?;

    Ok(convert_to_html(&request, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        let input = r#"{"tables": [
            {"name": "users", "data": [
                {"id": 1, "name": "Alice", "posts": [{"title": "Post 1"}]},
                {"id": 2, "name": "Bob"}
            ]}
        ]}"#;

        let page = render_json(input.as_bytes(), RenderConfig::default()).unwrap();

        assert!(page.contains("<th>SA.id</th><th>SA.name</th><th>SA.posts[0].title</th>"));
        assert!(page.contains("<tr><td>2</td><td>Bob</td><td></td></tr>"));
    }

    #[test]
    fn test_rejects_malformed_payload() {
        let err = render_json("[1, 2]".as_bytes(), RenderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse tables request"));
    }
}

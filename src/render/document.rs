//! Standalone page shell around rendered table fragments

use crate::render::html::{RenderConfig, TableRenderer};
use crate::render::types::TablesRequest;

const STYLESHEET: &str = r#"
      body {
        font-family: Arial, sans-serif;
        margin: 0;
        padding: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        height: 100vh;
        background-color: #f4f4f9;
      }
      h2 {
        color: #333;
        font-size: 1.8em;
        margin-top: 40px;
        margin-bottom: 10px;
      }
      table {
        width: 80%;
        margin-bottom: 30px;
        border-collapse: collapse;
        background-color: #fff;
        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
      }
      th, td {
        padding: 10px 15px;
        text-align: left;
        border: 1px solid #ddd;
      }
      th {
        background-color: #007bff;
        color: white;
      }
      tr:nth-child(even) {
        background-color: #f2f2f2;
      }
      tr:hover {
        background-color: #ddd;
      }
      td {
        color: #333;
      }
"#;

/// Wrap fragments in an `<html>` document with the default stylesheet
pub fn wrap_document(fragments: &str) -> String {
    let mut html = String::with_capacity(fragments.len() + STYLESHEET.len() + 96);
    html.push_str("<html>\n  <head>\n    <style>");
    html.push_str(STYLESHEET);
    html.push_str("    </style>\n  </head>\n  <body>\n");
    html.push_str(fragments);
    html.push_str("\n  </body>\n</html>\n");
    html
}

/// Render a whole request into a complete page
pub fn convert_to_html(request: &TablesRequest, config: RenderConfig) -> String {
    let renderer = TableRenderer::new(config);
    wrap_document(&renderer.render_tables(&request.tables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::Table;
    use serde_json::json;

    #[test]
    fn test_wrap_document() {
        let page = wrap_document("<h2>t</h2>");

        assert!(page.starts_with("<html>"));
        assert!(page.contains("<style>"));
        assert!(page.contains("background-color: #007bff;"));
        assert!(page.contains("<body>\n<h2>t</h2>\n  </body>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_convert_request() {
        let request = TablesRequest::new(vec![
            Table::new("users", vec![json!({"name": "Alice"})]),
            Table::new("orders", vec![]),
        ]);
        let page = convert_to_html(&request, RenderConfig::default());

        assert!(page.contains("<h2>users</h2><table>"));
        assert!(page.contains("<td>Alice</td>"));
        assert!(page.contains("<h2>orders</h2><p>No data provided for this table.</p>"));
        assert_eq!(page.matches("<table>").count(), 1);
    }
}

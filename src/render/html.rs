use crate::flatten::{FlattenConfig, Flattener};
use crate::render::columns::TabularData;
use crate::render::types::Table;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Write;

static MARKUP_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[&<>"']"#).unwrap());

/// Notice emitted in place of a `<table>` for a table without records
pub const DEFAULT_EMPTY_NOTICE: &str = "No data provided for this table.";

/// Configuration for HTML table rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Escape markup-significant characters in names, headers and cells.
    /// Disabling this interpolates text verbatim and allows injection.
    pub escape_html: bool,

    /// Text shown for tables with no records
    pub empty_notice: String,

    /// Path naming for flattened records
    pub flatten: FlattenConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            escape_html: true,
            empty_notice: String::from(DEFAULT_EMPTY_NOTICE),
            flatten: FlattenConfig::default(),
        }
    }
}

/// Renders named tables of nested records as HTML fragments
pub struct TableRenderer {
    config: RenderConfig,
    flattener: Flattener,
}

impl TableRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let flattener = Flattener::new(config.flatten.clone());
        TableRenderer { config, flattener }
    }

    /// Render every table in input order: a heading, then either the
    /// empty notice or a full `<table>`
    pub fn render_tables(&self, tables: &[Table]) -> String {
        let mut html = String::new();
        for table in tables {
            self.render_table_into(table, &mut html);
        }
        html
    }

    pub fn render_table(&self, table: &Table) -> String {
        let mut html = String::new();
        self.render_table_into(table, &mut html);
        html
    }

    /// Flatten a table without rendering it
    pub fn tabulate(&self, table: &Table) -> TabularData {
        TabularData::from_records(&table.data, &self.flattener)
    }

    fn render_table_into(&self, table: &Table, html: &mut String) {
        // Writing to a String cannot fail
        let _ = write!(html, "<h2>{}</h2>", self.text(&table.name));

        if table.is_empty() {
            log::debug!("table {:?} has no records", table.name);
            let _ = write!(html, "<p>{}</p>", self.text(&self.config.empty_notice));
            return;
        }

        let data = self.tabulate(table);
        log::debug!(
            "table {:?}: {} rows, {} columns",
            table.name,
            data.rows.len(),
            data.columns.len()
        );

        html.push_str("<table>");
        html.push_str("<thead><tr>");
        for path in data.columns.iter() {
            let _ = write!(html, "<th>{}</th>", self.text(path));
        }
        html.push_str("</tr></thead>");

        html.push_str("<tbody>");
        for row in &data.rows {
            html.push_str("<tr>");
            for cell in data.row_cells(row) {
                match cell {
                    Some(value) => {
                        let _ = write!(html, "<td>{}</td>", self.text(&scalar_text(value)));
                    }
                    None => html.push_str("<td></td>"),
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");

        html.push_str("</table>");
    }

    fn text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.config.escape_html {
            escape_html(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Render tables with the default configuration
pub fn render_tables(tables: &[Table]) -> String {
    TableRenderer::default().render_tables(tables)
}

/// Natural text form of a leaf: strings unquoted, everything else as JSON
pub fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Replace `& < > " '` with their HTML entities
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    MARKUP_CHARS.replace_all(raw, |caps: &Captures| {
        match &caps[0] {
            "&" => "&amp;",
            "<" => "&lt;",
            ">" => "&gt;",
            "\"" => "&quot;",
            _ => "&#39;",
        }
    })
}

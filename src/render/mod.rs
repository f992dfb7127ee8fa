//! Column-consistent HTML rendering of flattened tables
//!
//! Each table's records are flattened, the union of their paths becomes the
//! header, and every record is emitted as one row padded with empty cells
//! for the paths it lacks.

pub mod types;
pub mod columns;
pub mod html;
pub mod document;

pub use types::{RequestError, Table, TablesRequest};
pub use columns::{ColumnSet, TabularData};
pub use html::{escape_html, render_tables, scalar_text, RenderConfig, TableRenderer, DEFAULT_EMPTY_NOTICE};
pub use document::{convert_to_html, wrap_document};

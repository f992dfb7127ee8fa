//! Column discovery and row materialization for one table

use crate::flatten::{FlattenedRecord, Flattener, Path};
use indexmap::IndexSet;
use serde_json::Value;

/// Union of paths seen across a table's records, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    paths: IndexSet<Path>,
}

impl ColumnSet {
    pub fn new() -> Self {
        ColumnSet {
            paths: IndexSet::new(),
        }
    }

    /// Add every path of `record` not already present
    pub fn extend_from(&mut self, record: &FlattenedRecord) {
        for path in record.paths() {
            if !self.paths.contains(path) {
                self.paths.insert(path.clone());
            }
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// A table's records flattened against a shared column set
#[derive(Debug, Clone, Default)]
pub struct TabularData {
    pub columns: ColumnSet,
    pub rows: Vec<FlattenedRecord>,
}

impl TabularData {
    /// Flatten each record and accumulate the column set in one pass
    pub fn from_records(records: &[Value], flattener: &Flattener) -> Self {
        let mut columns = ColumnSet::new();
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let flattened = flattener.flatten(record);
            columns.extend_from(&flattened);
            rows.push(flattened);
        }

        TabularData { columns, rows }
    }

    /// Cells of one row in column order; `None` where the record lacks a path
    pub fn row_cells<'a>(
        &'a self,
        row: &'a FlattenedRecord,
    ) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.columns.iter().map(move |path| row.get(path))
    }
}

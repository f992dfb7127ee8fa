use indexmap::IndexMap;
use serde_json::Value;

/// A path identifying one leaf position inside a value tree,
/// e.g. `SA.posts[0].title`
pub type Path = String;

/// Default seed prefix for flattening a top-level record
pub const DEFAULT_ROOT_MARKER: &str = "SA";

/// All leaves of one record, keyed by path, in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedRecord {
    entries: IndexMap<Path, Value>,
}

impl FlattenedRecord {
    pub fn new() -> Self {
        FlattenedRecord {
            entries: IndexMap::new(),
        }
    }

    /// Insert a leaf, returning the value it replaced on a path collision
    pub fn insert(&mut self, path: Path, value: Value) -> Option<Value> {
        self.entries.insert(path, value)
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Configuration for the flattening process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    /// Seed prefix for top-level records; also the key used when a bare
    /// scalar is flattened with an empty prefix
    pub root_marker: String,

    /// Joins an object key onto its parent path
    pub separator: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        FlattenConfig {
            root_marker: String::from(DEFAULT_ROOT_MARKER),
            separator: String::from("."),
        }
    }
}

impl FlattenConfig {
    pub fn with_root_marker(mut self, marker: impl Into<String>) -> Self {
        self.root_marker = marker.into();
        self
    }
}

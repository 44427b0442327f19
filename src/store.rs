use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::EntryError;

/// One (name, location) pair processed by the pipeline.
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    pub name: String,
    pub location: PathBuf,
}

/// Fixed mapping from logical schema name to its on-disk document. The roster
/// is set at construction and never changes during a run; documents are
/// reloaded from disk on every run, since the files are the source of truth.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    entries: Vec<SchemaEntry>,
}

impl SchemaStore {
    /// Build a store over `schema_dir` for the given logical names. Locations
    /// follow the `<name>.json` convention inside the directory.
    pub fn new<S: AsRef<str>>(schema_dir: impl AsRef<Path>, names: &[S]) -> Self {
        let schema_dir = schema_dir.as_ref();
        let entries = names
            .iter()
            .map(|name| SchemaEntry {
                name: name.as_ref().to_string(),
                location: schema_dir.join(format!("{}.json", name.as_ref())),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Load and parse one schema document. Unreadable paths and malformed
    /// JSON are distinguished so the batch report can name the right cause.
    pub fn load(&self, entry: &SchemaEntry) -> Result<Value, EntryError> {
        let raw = std::fs::read_to_string(&entry.location).map_err(|source| {
            EntryError::NotFound {
                path: entry.location.clone(),
                source,
            }
        })?;

        serde_json::from_str(&raw).map_err(|source| EntryError::Parse {
            path: entry.location.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::SchemaStore;
    use crate::error::EntryError;

    #[test]
    fn entries_follow_the_name_json_convention() {
        let store = SchemaStore::new("json_schemas", &["client_schema", "user_schema"]);
        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "client_schema");
        assert_eq!(
            entries[0].location,
            std::path::Path::new("json_schemas/client_schema.json")
        );
    }

    #[test]
    fn missing_document_reports_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SchemaStore::new(dir.path(), &["ghost_schema"]);
        let err = store.load(&store.entries()[0]).unwrap_err();
        assert!(matches!(err, EntryError::NotFound { .. }));
    }

    #[test]
    fn malformed_document_reports_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("broken_schema.json"), "{ not json").expect("write");
        let store = SchemaStore::new(dir.path(), &["broken_schema"]);
        let err = store.load(&store.entries()[0]).unwrap_err();
        assert!(matches!(err, EntryError::Parse { .. }));
    }

    #[test]
    fn well_formed_document_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("widget_schema.json"),
            r#"{"type": "object", "properties": {}}"#,
        )
        .expect("write");
        let store = SchemaStore::new(dir.path(), &["widget_schema"]);
        let document = store.load(&store.entries()[0]).expect("load");
        assert_eq!(document["type"], "object");
    }
}

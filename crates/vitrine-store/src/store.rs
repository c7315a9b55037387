//! File-backed project collection.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use vitrine_model::Project;

/// A project together with its store-assigned id. The id sits alongside the
/// document fields when serialized, which is the shape the list and get
/// endpoints return.
#[derive(Debug, Clone, Serialize)]
pub struct StoredProject {
    pub id: String,
    #[serde(flatten)]
    pub project: Project,
}

/// Errors that can occur on store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project not found: {id}")]
    NotFound { id: String },

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The project collection: one JSON file per document under
/// `<data_dir>/projects/`.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    /// Open (and create if missing) the collection under a data directory.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let root = data_dir.join("projects");
        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    /// Insert a new document and return its generated id.
    pub fn insert(&self, project: &Project) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.write_document(&id, project)?;

        tracing::debug!(%id, name = %project.name, "Inserted project");
        Ok(id)
    }

    /// Fetch one document by id.
    pub fn get(&self, id: &str) -> Result<Project, StoreError> {
        let path = self.document_path(id)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound { id: id.to_string() }
            } else {
                StoreError::Io(e)
            }
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// List every document with its id, in stable id order.
    pub fn list(&self) -> Result<Vec<StoredProject>, StoreError> {
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)?;
            records.push(StoredProject {
                id: id.to_string(),
                project: serde_json::from_str(&content)?,
            });
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    /// Replace an existing document in full. Fails with `NotFound` rather
    /// than creating documents with caller-chosen ids.
    pub fn replace(&self, id: &str, project: &Project) -> Result<(), StoreError> {
        let path = self.document_path(id)?;
        if !path.exists() {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        self.write_document(id, project)?;

        tracing::debug!(%id, "Replaced project");
        Ok(())
    }

    /// Number of documents in the collection.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }

    fn write_document(&self, id: &str, project: &Project) -> Result<(), StoreError> {
        let path = self.document_path(id)?;
        let json = serde_json::to_string_pretty(project)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn document_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        // Ids are store-generated uuids; anything that could escape the
        // collection directory is treated as an unknown document.
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        Ok(self.root.join(format!("{}.json", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> ProjectStore {
        ProjectStore::open(dir.path()).unwrap()
    }

    #[test]
    fn insert_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let mut project = Project::default();
        project.name = "Nocturne".to_string();

        let id = store.insert(&project).unwrap();
        let fetched = store.get(&id).unwrap();

        assert_eq!(fetched, project);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let err = store.get("no-such-id").unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn traversal_ids_are_not_found() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let err = store.get("../escape").unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn list_returns_every_document_with_id() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let a = store.insert(&Project::default()).unwrap();
        let b = store.insert(&Project::default()).unwrap();

        let records = store.list().unwrap();

        assert_eq!(records.len(), 2);
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        let mut expected = vec![a.as_str(), b.as_str()];
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn replace_overwrites_in_full() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let id = store.insert(&Project::default()).unwrap();

        let mut updated = Project::default();
        updated.name = "Renamed".to_string();
        updated.products.clear();
        store.replace(&id, &updated).unwrap();

        let fetched = store.get(&id).unwrap();
        assert_eq!(fetched.name, "Renamed");
        assert!(fetched.products.is_empty());
    }

    #[test]
    fn replace_unknown_id_does_not_create() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let err = store.replace("missing", &Project::default()).unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn stored_project_serializes_id_alongside_fields() {
        let record = StoredProject {
            id: "abc-123".to_string(),
            project: Project::default(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "abc-123");
        assert_eq!(json["name"], "New Project");
    }
}

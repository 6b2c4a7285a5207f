use crate::{
    config::StorageConfig,
    constants::STORAGE_FILE_NAME,
    error::{GridColumnsError, Result},
    selection::SelectionMap,
};
use log::warn;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Key/value store holding the last saved selection of each view.
pub trait PreferenceStore {
    /// Stored selection for `resource_key`, `None` when nothing was saved.
    fn get(&self, resource_key: &str) -> Result<Option<SelectionMap>>;

    /// Replaces the stored selection for `resource_key` entirely.
    fn set(&mut self, resource_key: &str, selection: &SelectionMap) -> Result<()>;
}

/// Store that lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, SelectionMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, resource_key: &str) -> Result<Option<SelectionMap>> {
        Ok(self.entries.get(resource_key).cloned())
    }

    fn set(&mut self, resource_key: &str, selection: &SelectionMap) -> Result<()> {
        self.entries
            .insert(resource_key.to_string(), selection.clone());
        Ok(())
    }
}

// namespaced key -> JSON text of a selection map
type Document = BTreeMap<String, String>;

/// File backed store in the spirit of browser local storage.
///
/// All views share one JSON document. Each entry maps `<namespace>.<resource>`
/// to the JSON text of that view's selection.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    namespace: String,
}

impl LocalStorage {
    pub fn new(dir: impl AsRef<Path>, namespace: impl Into<String>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE_NAME),
            namespace: namespace.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.dir, config.namespace.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage_key(&self, resource_key: &str) -> String {
        format!("{}.{}", self.namespace, resource_key)
    }

    /// Drops the stored selection of one view. Returns whether one existed.
    pub fn remove(&mut self, resource_key: &str) -> Result<bool> {
        let mut document = self.load_document()?;
        let removed = document.remove(&self.storage_key(resource_key)).is_some();
        if removed {
            self.write_document(&document)?;
        }
        Ok(removed)
    }

    /// Reads the document, treating a corrupt one as empty.
    fn load_document(&self) -> Result<Document> {
        match self.read_document() {
            Ok(document) => Ok(document),
            Err(GridColumnsError::Json(e)) => {
                warn!(
                    "Discarding unreadable preferences in {}: {e}",
                    self.path.display()
                );
                Ok(Document::new())
            }
            Err(e) => Err(e),
        }
    }

    fn read_document(&self) -> Result<Document> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(GridColumnsError::ReadFile {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_document(&self, document: &Document) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| GridColumnsError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let content = serde_json::to_string_pretty(document)?;

        // Each writer gets its own temp file; the rename replaces the document whole.
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GridColumnsError::WriteFile {
            path: dir.to_path_buf(),
            source: e,
        })?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| GridColumnsError::WriteFile {
                path: tmp.path().to_path_buf(),
                source: e,
            })?;
        tmp.persist(&self.path)
            .map_err(|e| GridColumnsError::WriteFile {
                path: self.path.clone(),
                source: e.error,
            })?;
        Ok(())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, resource_key: &str) -> Result<Option<SelectionMap>> {
        let document = self.load_document()?;
        let Some(value) = document.get(&self.storage_key(resource_key)) else {
            return Ok(None);
        };

        if value.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(value) {
            Ok(selection) => Ok(Some(selection)),
            Err(e) => {
                warn!("Ignoring malformed columns stored for '{resource_key}': {e}");
                Ok(None)
            }
        }
    }

    fn set(&mut self, resource_key: &str, selection: &SelectionMap) -> Result<()> {
        let mut document = self.load_document()?;

        document.insert(
            self.storage_key(resource_key),
            serde_json::to_string(selection)?,
        );
        self.write_document(&document)
    }
}

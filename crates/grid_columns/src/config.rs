use crate::{
    constants::{
        DEFAULT_BUTTON_LABEL, DEFAULT_NAMESPACE, DEFAULT_STORAGE_DIR, ENV_NAMESPACE,
        ENV_STORAGE_DIR,
    },
    error::{GridColumnsError, Result},
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

/// Options a caller sets on a customizable grid
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridOptions {
    /// Identifies the view whose column choice is stored
    pub resource_key: String,
    /// Visible columns when nothing has been stored yet (empty = all)
    #[serde(default)]
    pub default_columns: Vec<String>,
    #[serde(default = "default_button_label")]
    pub button_label: String,
    /// Display labels by column identifier
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

fn default_button_label() -> String {
    DEFAULT_BUTTON_LABEL.to_string()
}

impl GridOptions {
    pub fn new(resource_key: impl Into<String>) -> Self {
        Self {
            resource_key: resource_key.into(),
            default_columns: Vec::new(),
            button_label: default_button_label(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_default_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    /// Reads options from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GridColumnsError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;

        let options: GridOptions = toml::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.resource_key.trim().is_empty() {
            return Err(GridColumnsError::InvalidConfiguration(
                "resource_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Location of the local preference store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub dir: PathBuf,
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = env::var(ENV_STORAGE_DIR)
            && !dir.trim().is_empty()
        {
            let path = PathBuf::from(dir);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(GridColumnsError::InvalidConfiguration(format!(
                    "Storage path is not a directory: {}",
                    path.display()
                )));
            }
            config.dir = path;
        }

        if let Ok(namespace) = env::var(ENV_NAMESPACE)
            && !namespace.trim().is_empty()
        {
            config.namespace = namespace.trim().to_string();
        }

        Ok(config)
    }
}

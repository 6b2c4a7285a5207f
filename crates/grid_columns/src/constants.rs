/// Label of the toolbar control that opens the column picker
pub const DEFAULT_BUTTON_LABEL: &str = "columns";

/// Local storage settings
pub const DEFAULT_NAMESPACE: &str = "columns"; // prefix of every stored key
pub const DEFAULT_STORAGE_DIR: &str = ".grid_columns";
pub const STORAGE_FILE_NAME: &str = "preferences.json";

/// Environment variables read by `StorageConfig::from_env`
pub const ENV_STORAGE_DIR: &str = "GRID_COLUMNS_STORAGE_DIR";
pub const ENV_NAMESPACE: &str = "GRID_COLUMNS_NAMESPACE";

//! Persisted column visibility for tabular list views.
//!
//! A [`CustomizableGrid`] resolves which columns start visible (stored
//! preference, then configured defaults, then every column), flips them on
//! picker events and writes each change to a [`PreferenceStore`].

pub mod catalog;
pub mod column;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod grid;
pub mod picker;
pub mod selection;
pub mod storage;
pub mod table;

pub use catalog::{column_descriptors, column_identifiers};
pub use column::{ColumnDefinition, ColumnDescriptor};
pub use config::{GridOptions, StorageConfig};
pub use constants::{DEFAULT_BUTTON_LABEL, DEFAULT_NAMESPACE, DEFAULT_STORAGE_DIR};
pub use error::{GridColumnsError, Result};
pub use filter::{visible_columns, visible_indexes};
pub use grid::{CustomizableGrid, RenderedGrid, ToolbarButton};
pub use picker::{PickerEvent, PickerView};
pub use selection::{SelectionMap, SelectionModel, SelectionSource, resolve_initial_selection};
pub use storage::{LocalStorage, MemoryStore, PreferenceStore};
pub use table::{Table, read_table, read_table_csv};

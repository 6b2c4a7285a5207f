use crate::storage::PreferenceStore;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Visibility of each column, keyed by identifier.
///
/// An identifier missing from the map is not visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionMap {
    entries: BTreeMap<String, bool>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every given identifier visible, nothing else
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        identifiers.into_iter().map(|id| (id, true)).collect()
    }

    pub fn is_visible(&self, identifier: &str) -> bool {
        self.entries.get(identifier).copied().unwrap_or(false)
    }

    /// Explicit value, `None` when the identifier was never decided
    pub fn get(&self, identifier: &str) -> Option<bool> {
        self.entries.get(identifier).copied()
    }

    pub fn set(&mut self, identifier: impl Into<String>, visible: bool) {
        self.entries.insert(identifier.into(), visible);
    }

    /// Copy of this map with `identifier` flipped; an absent entry counts as hidden.
    pub fn toggled(&self, identifier: &str) -> Self {
        let mut next = self.clone();
        next.set(identifier, !self.is_visible(identifier));
        next
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for SelectionMap {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, v)| (id.into(), v)).collect(),
        }
    }
}

/// Where the initial selection of a model came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Stored,
    DefaultColumns,
    AllColumns,
}

/// Resolves the selection a view starts with. First match wins:
/// a non-empty stored map (returned as is, never reconciled with the
/// current columns), then `default_columns`, then every identifier.
pub fn resolve_initial_selection(
    stored: Option<SelectionMap>,
    default_columns: &[String],
    all_identifiers: &[String],
) -> (SelectionMap, SelectionSource) {
    match stored {
        Some(previous) if !previous.is_empty() => (previous, SelectionSource::Stored),
        _ if !default_columns.is_empty() => (
            SelectionMap::from_identifiers(default_columns.iter().cloned()),
            SelectionSource::DefaultColumns,
        ),
        _ => (
            SelectionMap::from_identifiers(all_identifiers.iter().cloned()),
            SelectionSource::AllColumns,
        ),
    }
}

/// Current column selection of one view, persisted on every change.
#[derive(Debug)]
pub struct SelectionModel<S> {
    resource_key: String,
    selection: SelectionMap,
    source: SelectionSource,
    store: S,
}

impl<S: PreferenceStore> SelectionModel<S> {
    /// Builds the model and resolves its initial selection.
    ///
    /// Store read failures are logged and treated as "nothing stored".
    pub fn initialize(
        resource_key: impl Into<String>,
        default_columns: &[String],
        all_identifiers: &[String],
        store: S,
    ) -> Self {
        let resource_key = resource_key.into();

        let stored = match store.get(&resource_key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Ignoring stored columns for '{resource_key}': {e}");
                None
            }
        };

        let (selection, source) =
            resolve_initial_selection(stored, default_columns, all_identifiers);
        debug!(
            "Initial columns for '{resource_key}' from {source:?}: {} entries",
            selection.len()
        );

        Self {
            resource_key,
            selection,
            source,
            store,
        }
    }

    /// Flips one column and writes the whole resulting map to the store.
    ///
    /// A failed write is logged; the in-memory selection still changes.
    pub fn toggle(&mut self, identifier: &str) -> &SelectionMap {
        self.selection = self.selection.toggled(identifier);

        match self.store.set(&self.resource_key, &self.selection) {
            Ok(()) => debug!(
                "Saved columns for '{}' after toggling '{identifier}'",
                self.resource_key
            ),
            Err(e) => error!(
                "Failed to save columns for '{}': {e}",
                self.resource_key
            ),
        }

        &self.selection
    }

    pub fn is_visible(&self, identifier: &str) -> bool {
        self.selection.is_visible(identifier)
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    pub fn source(&self) -> SelectionSource {
        self.source
    }

    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

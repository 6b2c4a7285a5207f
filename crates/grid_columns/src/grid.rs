use crate::{
    catalog::{column_descriptors, column_identifiers},
    column::ColumnDefinition,
    config::GridOptions,
    error::Result,
    filter::visible_columns,
    picker::{PickerEvent, PickerView},
    selection::{SelectionMap, SelectionModel},
    storage::PreferenceStore,
};
use log::debug;

/// Control that opens the column picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub label: String,
}

/// One render pass of a grid
#[derive(Debug)]
pub struct RenderedGrid<'a> {
    pub toolbar: ToolbarButton,
    /// Columns handed to the table renderer
    pub columns: Vec<&'a ColumnDefinition>,
    /// Present while the picker is open
    pub picker: Option<PickerView<'a>>,
}

/// A list view whose columns the user can show and hide.
///
/// The initial selection is resolved once, in [`CustomizableGrid::new`].
/// Replacing the columns afterwards does not resolve it again.
#[derive(Debug)]
pub struct CustomizableGrid<S> {
    options: GridOptions,
    columns: Vec<ColumnDefinition>,
    model: SelectionModel<S>,
    picker_open: bool,
}

impl<S: PreferenceStore> CustomizableGrid<S> {
    pub fn new(options: GridOptions, columns: Vec<ColumnDefinition>, store: S) -> Result<Self> {
        options.validate()?;

        let model = SelectionModel::initialize(
            options.resource_key.clone(),
            &options.default_columns,
            &column_identifiers(&columns),
            store,
        );

        Ok(Self {
            options,
            columns,
            model,
            picker_open: false,
        })
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn handle(&mut self, event: PickerEvent) {
        debug!("Picker event for '{}': {event:?}", self.options.resource_key);
        match event {
            PickerEvent::Toggle(identifier) => {
                self.model.toggle(&identifier);
            }
            PickerEvent::Close => self.close_picker(),
        }
    }

    pub fn toggle(&mut self, identifier: &str) -> &SelectionMap {
        self.model.toggle(identifier)
    }

    pub fn is_visible(&self, identifier: &str) -> bool {
        self.model.is_visible(identifier)
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDefinition>) {
        self.columns = columns;
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn selection(&self) -> &SelectionMap {
        self.model.selection()
    }

    pub fn model(&self) -> &SelectionModel<S> {
        &self.model
    }

    /// Catalog and check state for the picker, regardless of whether it is open
    pub fn picker_view(&self) -> PickerView<'_> {
        PickerView {
            columns: column_descriptors(&self.columns),
            selection: self.model.selection(),
        }
    }

    pub fn render(&self) -> RenderedGrid<'_> {
        RenderedGrid {
            toolbar: ToolbarButton {
                label: self.options.button_label.clone(),
            },
            columns: visible_columns(&self.columns, self.model.selection()),
            picker: self.picker_open.then(|| self.picker_view()),
        }
    }
}

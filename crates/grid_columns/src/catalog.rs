use crate::column::{ColumnDefinition, ColumnDescriptor};

/// Identifiers of the toggleable columns, in declaration order.
pub fn column_identifiers(columns: &[ColumnDefinition]) -> Vec<String> {
    columns
        .iter()
        .filter_map(|column| column.identifier().map(str::to_owned))
        .collect()
}

/// Catalog offered by the picker: one descriptor per toggleable column.
pub fn column_descriptors(columns: &[ColumnDefinition]) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .filter_map(|column| {
            column.identifier().map(|identifier| ColumnDescriptor {
                identifier: identifier.to_owned(),
                label: column.label.clone(),
            })
        })
        .collect()
}

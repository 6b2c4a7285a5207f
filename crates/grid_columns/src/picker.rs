use crate::{column::ColumnDescriptor, selection::SelectionMap};

/// Events a picker surface sends back to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Toggle(String),
    Close,
}

/// What a picker surface is given to draw: the catalog and a read-only
/// snapshot of the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerView<'a> {
    pub columns: Vec<ColumnDescriptor>,
    pub selection: &'a SelectionMap,
}

impl PickerView<'_> {
    /// Catalog entries paired with their check state
    pub fn entries(&self) -> impl Iterator<Item = (&ColumnDescriptor, bool)> + '_ {
        self.columns
            .iter()
            .map(|column| (column, self.selection.is_visible(&column.identifier)))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_report_check_state() {
        let selection: SelectionMap = [("a", true), ("b", false)].into_iter().collect();
        let view = PickerView {
            columns: vec![
                ColumnDescriptor {
                    identifier: "a".to_string(),
                    label: Some("Alpha".to_string()),
                },
                ColumnDescriptor {
                    identifier: "b".to_string(),
                    label: None,
                },
                ColumnDescriptor {
                    identifier: "c".to_string(),
                    label: None,
                },
            ],
            selection: &selection,
        };

        let states: Vec<_> = view
            .entries()
            .map(|(column, checked)| (column.identifier.clone(), checked))
            .collect();
        assert_eq!(
            states,
            vec![
                ("a".to_string(), true),
                ("b".to_string(), false),
                ("c".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_empty_view() {
        let selection = SelectionMap::new();
        let view = PickerView {
            columns: Vec::new(),
            selection: &selection,
        };
        assert!(view.is_empty());
        assert_eq!(view.entries().count(), 0);
    }
}

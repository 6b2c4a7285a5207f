use crate::{column::ColumnDefinition, selection::SelectionMap};

/// Columns forwarded to the table renderer, in declaration order.
///
/// Structural columns always pass. A field column passes only when the
/// selection marks it visible.
pub fn visible_columns<'a>(
    columns: &'a [ColumnDefinition],
    selection: &SelectionMap,
) -> Vec<&'a ColumnDefinition> {
    columns
        .iter()
        .filter(|column| is_rendered(column, selection))
        .collect()
}

/// Positions of the rendered columns, for renderers that work on cell indexes
pub fn visible_indexes(columns: &[ColumnDefinition], selection: &SelectionMap) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, column)| is_rendered(column, selection))
        .map(|(index, _)| index)
        .collect()
}

fn is_rendered(column: &ColumnDefinition, selection: &SelectionMap) -> bool {
    match column.identifier() {
        Some(identifier) => selection.is_visible(identifier),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(columns: &[&ColumnDefinition]) -> Vec<String> {
        columns.iter().map(|c| c.header().to_string()).collect()
    }

    #[test]
    fn test_order_is_preserved() {
        let columns = vec![
            ColumnDefinition::field("c"),
            ColumnDefinition::field("a"),
            ColumnDefinition::field("b"),
        ];
        let selection = SelectionMap::from_identifiers(["a", "b", "c"]);

        assert_eq!(headers(&visible_columns(&columns, &selection)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_structural_columns_always_pass() {
        let columns = vec![
            ColumnDefinition::structural("select"),
            ColumnDefinition::field("a"),
            ColumnDefinition::field("b"),
            ColumnDefinition::structural("edit"),
        ];

        let rendered = visible_columns(&columns, &SelectionMap::new());
        assert_eq!(headers(&rendered), vec!["select", "edit"]);

        let selection: SelectionMap = [("b", true)].into_iter().collect();
        let rendered = visible_columns(&columns, &selection);
        assert_eq!(headers(&rendered), vec!["select", "b", "edit"]);
    }

    #[test]
    fn test_hidden_and_absent_columns_are_dropped() {
        let columns = vec![
            ColumnDefinition::field("a"),
            ColumnDefinition::field("b"),
            ColumnDefinition::field("c"),
        ];
        let selection: SelectionMap = [("a", true), ("b", false)].into_iter().collect();

        assert_eq!(headers(&visible_columns(&columns, &selection)), vec!["a"]);
        assert_eq!(visible_indexes(&columns, &selection), vec![0]);
    }

    #[test]
    fn test_unknown_selection_entries_have_no_effect() {
        let columns = vec![ColumnDefinition::field("a")];
        let selection: SelectionMap = [("a", true), ("ghost", true)].into_iter().collect();

        assert_eq!(visible_columns(&columns, &selection).len(), 1);
    }

    #[test]
    fn test_empty_identifier_is_never_hidden() {
        let columns = vec![
            ColumnDefinition {
                identifier: Some(String::new()),
                label: Some("actions".to_string()),
            },
            ColumnDefinition::field("a"),
        ];
        let selection: SelectionMap = [("", false), ("a", true)].into_iter().collect();

        assert_eq!(headers(&visible_columns(&columns, &selection)), vec!["actions", "a"]);
        assert_eq!(visible_indexes(&columns, &SelectionMap::new()), vec![0]);
    }

    #[test]
    fn test_duplicate_identifiers_share_visibility() {
        let columns = vec![
            ColumnDefinition::field("a").with_label("first"),
            ColumnDefinition::field("a").with_label("second"),
        ];
        let selection = SelectionMap::from_identifiers(["a"]);

        assert_eq!(visible_indexes(&columns, &selection), vec![0, 1]);
        assert!(visible_columns(&columns, &SelectionMap::new()).is_empty());
    }
}

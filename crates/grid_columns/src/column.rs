use serde::{Deserialize, Serialize};

/// A column declared by the caller of a grid.
///
/// Columns with an `identifier` name a data field and can be toggled by the
/// user. Columns without one are structural (row selection, action buttons)
/// and are always rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl ColumnDefinition {
    /// A toggleable column bound to a data field
    pub fn field(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            label: None,
        }
    }

    /// A column that is never hidden
    pub fn structural(label: impl Into<String>) -> Self {
        Self {
            identifier: None,
            label: Some(label.into()),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Identifier of a toggleable column; an empty one counts as none.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref().filter(|id| !id.is_empty())
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Text shown in a header cell: the label, falling back to the identifier.
    pub fn header(&self) -> &str {
        self.label()
            .or_else(|| self.identifier())
            .unwrap_or_default()
    }
}

/// Entry of the column catalog offered by the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub identifier: String,
    pub label: Option<String>,
}

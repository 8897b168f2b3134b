//! Column configuration.

use serde::{Deserialize, Serialize};

use super::sort::SortDirection;

/// Column configuration.
///
/// Columns define the structure of a table: which fields are shown, in what
/// order, and whether the user may hide, move or sort them.
///
/// # Examples
///
/// ```
/// use panels::table::{Column, SortDirection};
///
/// let columns = vec![
///     Column::new("drag").fixed().unsortable().hide_label(),
///     Column::new("title"),
///     Column::new("size").hidden(),
///     Column::new("rejections").fixed_sort(SortDirection::Ascending),
/// ];
/// assert!(!columns[0].is_modifiable);
/// assert!(!columns[2].is_visible);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field name the column displays
    pub name: String,
    /// Whether the column is shown
    pub is_visible: bool,
    /// Whether the user may hide or move the column
    pub is_modifiable: bool,
    /// Whether clicking the header sorts by this column
    pub is_sortable: bool,
    /// Render the header without a label (checkbox, drag and action columns)
    #[serde(default)]
    pub hide_header_label: bool,
    /// Direction forced whenever this column becomes the sort key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_sort_direction: Option<SortDirection>,
}

impl Column {
    /// Create a visible, modifiable, sortable column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_visible: true,
            is_modifiable: true,
            is_sortable: true,
            hide_header_label: false,
            fixed_sort_direction: None,
        }
    }

    /// Hide the column by default.
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Pin the column: it can be neither hidden nor moved.
    pub fn fixed(mut self) -> Self {
        self.is_modifiable = false;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.is_sortable = false;
        self
    }

    pub fn hide_label(mut self) -> Self {
        self.hide_header_label = true;
        self
    }

    pub fn fixed_sort(mut self, direction: SortDirection) -> Self {
        self.fixed_sort_direction = Some(direction);
        self
    }
}

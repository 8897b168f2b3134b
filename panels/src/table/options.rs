//! Per-table sort and column options.

use serde::{Deserialize, Serialize};

use crate::drag::{DragReorder, HoverUpdate, Reorder};
use crate::geometry::Rect;

use super::column::Column;
use super::sort::SortDirection;

/// Sort state and column layout of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    pub sort_key: String,
    pub sort_direction: SortDirection,
    #[serde(default)]
    pub secondary_sort_key: Option<String>,
    #[serde(default)]
    pub secondary_sort_direction: Option<SortDirection>,
    pub columns: Vec<Column>,
    /// Column drag in progress in the options editor.
    #[serde(skip)]
    column_drag: DragReorder,
}

impl TableOptions {
    pub fn new(sort_key: impl Into<String>, sort_direction: SortDirection, columns: Vec<Column>) -> Self {
        Self {
            sort_key: sort_key.into(),
            sort_direction,
            secondary_sort_key: None,
            secondary_sort_direction: None,
            columns,
            column_drag: DragReorder::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Columns to render, in order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_visible)
    }

    /// Show or hide a column. Pinned columns are left alone.
    ///
    /// Returns true if the column changed.
    pub fn set_column_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) if column.is_modifiable && column.is_visible != visible => {
                column.is_visible = visible;
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Change the sort key.
    ///
    /// An explicit `direction` wins. Without one, picking the current key
    /// again flips the direction and picking a new key keeps it. Columns with
    /// a fixed sort direction always sort that way.
    pub fn set_sort(&mut self, key: &str, direction: Option<SortDirection>) {
        let fixed = self.column(key).and_then(|c| c.fixed_sort_direction);
        let direction = match (fixed, direction) {
            (Some(fixed), _) => fixed,
            (None, Some(direction)) => direction,
            (None, None) if key == self.sort_key => self.sort_direction.toggle(),
            (None, None) => self.sort_direction,
        };
        self.sort_key = key.to_string();
        self.sort_direction = direction;
    }

    /// Sort key used to break ties of the primary key.
    pub fn set_secondary_sort(&mut self, key: Option<&str>, direction: Option<SortDirection>) {
        self.secondary_sort_key = key.map(str::to_string);
        self.secondary_sort_direction = key.and(direction);
    }

    // -------------------------------------------------------------------------
    // Column reordering
    // -------------------------------------------------------------------------

    /// Drag state of the column list, for placeholder rendering.
    pub fn column_drag(&self) -> &DragReorder {
        &self.column_drag
    }

    fn is_movable(&self, index: usize) -> bool {
        self.columns.get(index).is_some_and(|c| c.is_modifiable)
    }

    /// Start dragging the column at `index`. Pinned columns have no handle.
    pub fn begin_column_drag(&mut self, index: usize) -> bool {
        if !self.is_movable(index) {
            return false;
        }
        self.column_drag.begin(index);
        true
    }

    /// Pointer moved over the column entry at `index`.
    pub fn hover_column(&mut self, index: usize, rect: Rect, pointer_y: f32) -> bool {
        if !self.is_movable(index) {
            return false;
        }
        self.column_drag.hover(index, rect, pointer_y)
    }

    /// Finish the column drag. Returns true if the column order changed.
    pub fn end_column_drag(&mut self, did_drop: bool) -> bool {
        match self.column_drag.end(did_drop) {
            Some(reorder) => self.commit(reorder),
            None => false,
        }
    }

    /// Move a column in one step, with the same rules as a drag.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        if !self.is_movable(to) || !self.begin_column_drag(from) {
            return false;
        }
        let update = if from == to {
            HoverUpdate::Origin
        } else {
            HoverUpdate::Over(to)
        };
        self.column_drag.apply_hover(update);
        self.end_column_drag(true)
    }

    fn commit(&mut self, reorder: Reorder) -> bool {
        let moved = reorder.apply(&mut self.columns);
        if moved {
            log::debug!(
                "Column order changed: {}",
                self.columns
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        moved
    }
}

/// Tables whose options are kept across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableName {
    IssueTable,
    QueueTable,
    SearchResults,
    VolumeIndex,
}

impl TableName {
    pub const ALL: [TableName; 4] = [
        TableName::IssueTable,
        TableName::QueueTable,
        TableName::SearchResults,
        TableName::VolumeIndex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::IssueTable => "issueTable",
            TableName::QueueTable => "queueTable",
            TableName::SearchResults => "searchResults",
            TableName::VolumeIndex => "volumeIndex",
        }
    }

    /// Parse the camelCase table name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Factory options of the table.
    pub fn defaults(&self) -> TableOptions {
        use SortDirection::{Ascending, Descending};

        match self {
            TableName::IssueTable => TableOptions::new(
                "issueNumber",
                Descending,
                vec![
                    Column::new("monitored").fixed().hide_label(),
                    Column::new("issueNumber"),
                    Column::new("title"),
                    Column::new("path").hidden(),
                    Column::new("relativePath").hidden(),
                    Column::new("size").hidden(),
                    Column::new("releaseGroup").hidden(),
                    Column::new("status"),
                    Column::new("actions").fixed().unsortable().hide_label(),
                ],
            ),
            TableName::QueueTable => TableOptions::new(
                "priority",
                Ascending,
                vec![
                    Column::new("drag").fixed().unsortable().hide_label(),
                    Column::new("priority"),
                    Column::new("status"),
                    Column::new("title"),
                    Column::new("sourceName"),
                    Column::new("size"),
                    Column::new("speed"),
                    Column::new("timeLeft"),
                    Column::new("progress"),
                    Column::new("actions").fixed().unsortable().hide_label(),
                ],
            ),
            TableName::SearchResults => TableOptions::new(
                "issueNumber",
                Ascending,
                vec![
                    Column::new("match").fixed(),
                    Column::new("issueNumber").fixed(),
                    Column::new("displayTitle").fixed(),
                    Column::new("filesize").fixed(),
                    Column::new("pages").fixed(),
                    Column::new("releaser").fixed(),
                    Column::new("scanType").fixed(),
                    Column::new("resolution").fixed(),
                    Column::new("dpi").fixed(),
                    Column::new("source").fixed(),
                    Column::new("matchRejections").fixed().fixed_sort(Ascending),
                    Column::new("actions").fixed().unsortable().hide_label(),
                ],
            ),
            TableName::VolumeIndex => TableOptions::new(
                "title",
                Ascending,
                vec![
                    Column::new("monitored").fixed(),
                    Column::new("title").fixed(),
                    Column::new("year").fixed(),
                    Column::new("publisher").fixed(),
                    Column::new("issuesDownloadedMonitored").fixed(),
                    Column::new("issueCountMonitored").fixed().hidden(),
                    Column::new("folder").fixed().hidden(),
                    Column::new("totalSize").fixed().hidden(),
                    Column::new("monitorNewIssues").fixed().hidden(),
                    Column::new("actions").fixed().unsortable().hide_label(),
                ],
            ),
        }
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of every persisted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptionsState {
    #[serde(default = "issue_table_defaults")]
    pub issue_table: TableOptions,
    #[serde(default = "queue_table_defaults")]
    pub queue_table: TableOptions,
    #[serde(default = "search_results_defaults")]
    pub search_results: TableOptions,
    #[serde(default = "volume_index_defaults")]
    pub volume_index: TableOptions,
}

fn issue_table_defaults() -> TableOptions {
    TableName::IssueTable.defaults()
}

fn queue_table_defaults() -> TableOptions {
    TableName::QueueTable.defaults()
}

fn search_results_defaults() -> TableOptions {
    TableName::SearchResults.defaults()
}

fn volume_index_defaults() -> TableOptions {
    TableName::VolumeIndex.defaults()
}

impl Default for TableOptionsState {
    fn default() -> Self {
        Self {
            issue_table: issue_table_defaults(),
            queue_table: queue_table_defaults(),
            search_results: search_results_defaults(),
            volume_index: volume_index_defaults(),
        }
    }
}

impl TableOptionsState {
    pub fn get(&self, name: TableName) -> &TableOptions {
        match name {
            TableName::IssueTable => &self.issue_table,
            TableName::QueueTable => &self.queue_table,
            TableName::SearchResults => &self.search_results,
            TableName::VolumeIndex => &self.volume_index,
        }
    }

    pub fn get_mut(&mut self, name: TableName) -> &mut TableOptions {
        match name {
            TableName::IssueTable => &mut self.issue_table,
            TableName::QueueTable => &mut self.queue_table,
            TableName::SearchResults => &mut self.search_results,
            TableName::VolumeIndex => &mut self.volume_index,
        }
    }
}

//! Queue table state: rows in priority order, selection and drag reorder.

use serde::{Deserialize, Serialize};

use crate::drag::{DragReorder, Reorder};
use crate::events::CheckEvent;
use crate::geometry::Rect;
use crate::id::{ItemId, ids_of};
use crate::selection::{SelectAction, SelectionState};
use crate::socket::{QueueStatusData, SocketEvent};
use crate::table::{SortDirection, SortValue, Sortable, TableName, TableOptions, sort_rows};

use super::item::QueueItem;

/// Request body of the "move queue item" API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQueueItem {
    pub id: i64,
    pub index: usize,
}

/// A queue item together with its position in the server order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueRow<'a> {
    pub priority: usize,
    pub item: &'a QueueItem,
}

impl Sortable for QueueRow<'_> {
    fn sort_value(&self, column: &str) -> SortValue {
        match column {
            "priority" => SortValue::Number(self.priority as f64),
            _ => self.item.sort_value(column),
        }
    }
}

/// The download queue as shown in the activity page.
///
/// Selection ranges follow the rows as displayed under the current
/// [`TableOptions`]. Dragging is only possible while the rows are shown in
/// priority order, so drag indices are both display and server positions.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueTable {
    items: Vec<QueueItem>,
    options: TableOptions,
    selection: SelectionState,
    drag: DragReorder,
}

impl Default for QueueTable {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            options: TableName::QueueTable.defaults(),
            selection: SelectionState::default(),
            drag: DragReorder::new(),
        }
    }
}

impl QueueTable {
    pub fn new(items: Vec<QueueItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Items in priority order.
    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&QueueItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        ids_of(&self.items)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn drag(&self) -> &DragReorder {
        &self.drag
    }

    /// Ids of the selected downloads, for bulk actions.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selection
            .selected_ids()
            .iter()
            .filter_map(ItemId::as_number)
            .collect()
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Rows sorted for display. Priority is the position in server order.
    pub fn rows(&self) -> Vec<QueueRow<'_>> {
        let mut rows: Vec<QueueRow<'_>> = self
            .items
            .iter()
            .enumerate()
            .map(|(priority, item)| QueueRow { priority, item })
            .collect();
        sort_rows(&mut rows, &self.options);
        rows
    }

    /// Ids in display order.
    pub fn display_ids(&self) -> Vec<ItemId> {
        self.rows()
            .iter()
            .map(|row| ItemId::Number(row.item.id))
            .collect()
    }

    /// True while the rows are shown in priority order.
    pub fn is_reorderable(&self) -> bool {
        self.options.sort_key == "priority"
            && self.options.sort_direction == SortDirection::Ascending
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Switch sort and column options. Changing the view cancels a drag.
    pub fn set_options(&mut self, options: TableOptions) {
        if options != self.options {
            self.cancel_drag();
        }
        self.options = options;
    }

    /// Header clicked: sort by `key` with the usual toggle rule.
    pub fn set_sort(&mut self, key: &str, direction: Option<SortDirection>) {
        let mut options = self.options.clone();
        options.set_sort(key, direction);
        self.set_options(options);
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Replace the whole queue and start over with an empty selection.
    pub fn replace_items(&mut self, items: Vec<QueueItem>) {
        self.items = items;
        self.cancel_drag();
        self.selection.reset();
    }

    /// Replace the queue after a refetch, keeping the selection of rows that
    /// are still present.
    pub fn refresh_items(&mut self, items: Vec<QueueItem>) {
        self.items = items;
        self.cancel_drag();
        let ids = self.ids();
        self.selection.sync_items(&ids);
    }

    /// Drop a row. Returns the removed item.
    pub fn remove(&mut self, id: i64) -> Option<QueueItem> {
        let index = self.position(id)?;
        self.cancel_drag();
        let item = self.items.remove(index);
        let ids = self.ids();
        self.selection.remove_item(&ItemId::Number(id), &ids);
        Some(item)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn select(&mut self, action: SelectAction) {
        let ids = self.display_ids();
        self.selection.apply(action, &ids);
    }

    /// Row checkbox clicked. Shift extends from the last clicked row.
    pub fn on_check(&mut self, event: CheckEvent<i64>) {
        self.select(SelectAction::ToggleSelected {
            id: ItemId::Number(event.id),
            is_selected: event.value,
            shift_key: event.modifiers.shift,
        });
    }

    // -------------------------------------------------------------------------
    // Reordering
    // -------------------------------------------------------------------------

    /// Grab the drag handle of `id`. Refused unless [`Self::is_reorderable`].
    pub fn begin_drag(&mut self, id: i64) -> bool {
        if !self.is_reorderable() {
            log::debug!("Queue sorted by {}; drag refused", self.options.sort_key);
            return false;
        }
        match self.position(id) {
            Some(index) => {
                self.drag.begin(index);
                true
            }
            None => false,
        }
    }

    /// Pointer moved over the row of `candidate_id`.
    pub fn hover(&mut self, candidate_id: i64, rect: Rect, pointer_y: f32) -> bool {
        if !self.is_reorderable() {
            return false;
        }
        match self.position(candidate_id) {
            Some(index) => self.drag.hover(index, rect, pointer_y),
            None => false,
        }
    }

    /// Finish the drag.
    ///
    /// A committed move is applied locally right away; the returned request
    /// tells the server. Nothing is returned for a cancelled or empty drag.
    pub fn end_drag(&mut self, did_drop: bool) -> Option<MoveQueueItem> {
        let reorder = self.drag.end(did_drop)?;
        self.commit(reorder)
    }

    /// Move one row up by one position.
    pub fn move_up(&mut self, id: i64) -> Option<MoveQueueItem> {
        let from = self.position(id)?;
        let to = from.checked_sub(1)?;
        self.commit(Reorder::new(from, to))
    }

    /// Move one row down by one position.
    pub fn move_down(&mut self, id: i64) -> Option<MoveQueueItem> {
        let from = self.position(id)?;
        self.commit(Reorder::new(from, from + 1))
    }

    fn commit(&mut self, reorder: Reorder) -> Option<MoveQueueItem> {
        let id = self.items.get(reorder.from)?.id;
        if !reorder.apply(&mut self.items) {
            return None;
        }
        log::debug!("Queue item {} moved to {}", id, reorder.to);
        Some(MoveQueueItem {
            id,
            index: reorder.to,
        })
    }

    fn cancel_drag(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("Queue changed during drag; cancelling it");
            self.drag.cancel();
        }
    }

    // -------------------------------------------------------------------------
    // Socket events
    // -------------------------------------------------------------------------

    /// Apply a server push. Returns true if the queue changed.
    pub fn apply_socket_event(&mut self, event: &SocketEvent) -> bool {
        match event {
            SocketEvent::QueueAdded(item) => {
                match self.position(item.id) {
                    Some(index) => self.items[index] = item.clone(),
                    None => {
                        self.cancel_drag();
                        self.items.push(item.clone());
                        let ids = self.ids();
                        self.selection.sync_items(&ids);
                    }
                }
                log::debug!("Queue item {} added", item.id);
                true
            }
            SocketEvent::QueueStatus(status) => self.update_status(status),
            SocketEvent::QueueEnded(ended) => self.remove(ended.id).is_some(),
            _ => false,
        }
    }

    fn update_status(&mut self, status: &QueueStatusData) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == status.id) else {
            log::trace!("Status for unknown queue item {} ignored", status.id);
            return false;
        };
        item.status = status.status;
        item.size = status.size;
        item.speed = status.speed;
        item.progress = status.progress;
        true
    }
}

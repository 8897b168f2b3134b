//! Multi-select state for tables.
//!
//! Selection is keyed by [`ItemId`] so it survives re-sorting and refreshes of
//! the backing list. The caller always passes the current list of ids in
//! display order; that list is the source of truth for what "all" means and
//! for which rows a shift-click range covers.

use std::collections::HashMap;

use crate::id::{ItemId, position_of};

/// Tri-state value for a "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    /// Some, but not all, rows are selected.
    Indeterminate,
}

/// A transition of the selection reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    SelectAll,
    UnselectAll,
    ToggleSelected {
        id: ItemId,
        is_selected: bool,
        shift_key: bool,
    },
    /// The row left the list (deleted, finished downloading, ...).
    RemoveItem { id: ItemId },
    /// The list was replaced wholesale (e.g. a new page of results).
    Reset,
}

/// Per-row checkbox state of a multi-select table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_state: HashMap<ItemId, bool>,
    all_selected: bool,
    all_unselected: bool,
    /// Anchor for range selection (shift+click starting point).
    last_selected: Option<ItemId>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_state: HashMap::new(),
            all_selected: false,
            all_unselected: true,
            last_selected: None,
        }
    }
}

impl SelectionState {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The raw id -> selected mapping.
    pub fn selected_state(&self) -> &HashMap<ItemId, bool> {
        &self.selected_state
    }

    /// Check if an id is selected. Unknown ids are not selected.
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected_state.get(id).copied().unwrap_or(false)
    }

    /// Whether every row of the last-provided list is selected.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Whether no row of the last-provided list is selected.
    pub fn all_unselected(&self) -> bool {
        self.all_unselected
    }

    /// The anchor used by shift-click range selection.
    pub fn last_selected(&self) -> Option<&ItemId> {
        self.last_selected.as_ref()
    }

    /// Get all selected ids (sorted for deterministic ordering).
    pub fn selected_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<_> = self
            .selected_state
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.selected_state.values().filter(|selected| **selected).count()
    }

    /// Value for the header checkbox.
    pub fn check_state(&self) -> CheckState {
        if self.all_selected {
            CheckState::Checked
        } else if self.all_unselected {
            CheckState::Unchecked
        } else {
            CheckState::Indeterminate
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply an action against the current list of ids (display order).
    pub fn apply(&mut self, action: SelectAction, ids: &[ItemId]) {
        match action {
            SelectAction::SelectAll => self.select_all(ids),
            SelectAction::UnselectAll => self.unselect_all(ids),
            SelectAction::ToggleSelected {
                id,
                is_selected,
                shift_key,
            } => self.toggle_selected(&id, is_selected, shift_key, ids),
            SelectAction::RemoveItem { id } => self.remove_item(&id, ids),
            SelectAction::Reset => self.reset(),
        }
    }

    /// Pure form of [`apply`](Self::apply).
    pub fn reduce(&self, action: SelectAction, ids: &[ItemId]) -> Self {
        let mut next = self.clone();
        next.apply(action, ids);
        next
    }

    /// Select every row of the list.
    pub fn select_all(&mut self, ids: &[ItemId]) {
        for id in ids {
            self.selected_state.insert(id.clone(), true);
        }
        self.recompute(ids);
    }

    /// Unselect every known row.
    pub fn unselect_all(&mut self, ids: &[ItemId]) {
        for selected in self.selected_state.values_mut() {
            *selected = false;
        }
        self.recompute(ids);
    }

    /// Toggle one row, or a contiguous range when `shift_key` is held.
    ///
    /// The range runs from the anchor to `id` inclusive, in either direction.
    /// When the anchor or the target is no longer in `ids` this falls back to
    /// a single toggle.
    pub fn toggle_selected(
        &mut self,
        id: &ItemId,
        is_selected: bool,
        shift_key: bool,
        ids: &[ItemId],
    ) {
        let range = match (&self.last_selected, shift_key) {
            (Some(anchor), true) => match (position_of(ids, anchor), position_of(ids, id)) {
                (Some(a), Some(t)) => Some(if a <= t { (a, t) } else { (t, a) }),
                _ => None,
            },
            _ => None,
        };

        match range {
            Some((start, end)) => {
                for row in &ids[start..=end] {
                    self.selected_state.insert(row.clone(), is_selected);
                }
            }
            None => {
                self.selected_state.insert(id.clone(), is_selected);
            }
        }

        self.last_selected = Some(id.clone());
        self.recompute(ids);
    }

    /// Forget a row that left the list.
    pub fn remove_item(&mut self, id: &ItemId, ids: &[ItemId]) {
        self.selected_state.remove(id);
        if self.last_selected.as_ref() == Some(id) {
            self.last_selected = None;
        }
        self.recompute(ids);
    }

    /// Prune every id that is no longer part of `ids`.
    ///
    /// Call after the list was refreshed in place (rows added or removed) to
    /// keep the selection of the rows that survived.
    pub fn sync_items(&mut self, ids: &[ItemId]) {
        let stale: Vec<ItemId> = self
            .selected_state
            .keys()
            .filter(|id| !ids.contains(id))
            .cloned()
            .collect();
        for id in &stale {
            log::trace!("Pruning stale selection entry {}", id);
            self.selected_state.remove(id);
        }
        if let Some(anchor) = &self.last_selected
            && !ids.contains(anchor)
        {
            self.last_selected = None;
        }
        self.recompute(ids);
    }

    /// Clear everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-derive the flags from the authoritative list.
    ///
    /// Ids of the list that have no entry yet are materialised as unselected
    /// so the mapping always covers the current rows.
    fn recompute(&mut self, ids: &[ItemId]) {
        for id in ids {
            self.selected_state.entry(id.clone()).or_insert(false);
        }
        self.all_selected = ids.iter().all(|id| self.is_selected(id));
        self.all_unselected = ids.iter().all(|id| !self.is_selected(id));
    }
}

//! Drag-reorder state machine.

use crate::geometry::Rect;

use super::hover::{HoverUpdate, hover_update};
use super::reorder::Reorder;

/// Where a row should render the drop placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    origin: usize,
    hover: Option<usize>,
}

/// In-progress drag of one item of an ordered list.
///
/// Idle when no session exists, so every index is absent and every derived
/// flag is false by construction. The backing list is never touched while a
/// drag is in progress; [`end`](Self::end) hands back a [`Reorder`] for the
/// caller to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragReorder {
    session: Option<DragSession>,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging the item at `origin`.
    ///
    /// A drag that is still in progress is discarded without committing.
    pub fn begin(&mut self, origin: usize) {
        if let Some(previous) = self.session {
            log::warn!(
                "Drag from {} started while drag from {} was active; discarding it",
                origin,
                previous.origin
            );
        }
        log::debug!("Drag started at index {}", origin);
        self.session = Some(DragSession {
            origin,
            hover: None,
        });
    }

    /// Original position of the dragged item.
    pub fn drag_index(&self) -> Option<usize> {
        self.session.map(|s| s.origin)
    }

    /// Current candidate insertion position.
    pub fn hover_index(&self) -> Option<usize> {
        self.session.and_then(|s| s.hover)
    }

    /// Position the item would land at if dropped now.
    pub fn drop_index(&self) -> Option<usize> {
        self.hover_index()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging_up(&self) -> bool {
        matches!(self.session, Some(DragSession { origin, hover: Some(hover) }) if hover < origin)
    }

    pub fn is_dragging_down(&self) -> bool {
        matches!(self.session, Some(DragSession { origin, hover: Some(hover) }) if hover > origin)
    }

    /// Feed a pointer move over the row at `candidate_index`.
    ///
    /// Returns true if the hover index changed.
    pub fn hover(&mut self, candidate_index: usize, candidate: Rect, pointer_y: f32) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let update = hover_update(pointer_y, candidate, session.origin, candidate_index);
        self.apply_hover(update)
    }

    /// Apply a precomputed [`HoverUpdate`].
    pub fn apply_hover(&mut self, update: HoverUpdate) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let next = match update {
            HoverUpdate::Hold => return false,
            HoverUpdate::Origin => None,
            HoverUpdate::Over(index) => Some(index),
        };
        if session.hover == next {
            return false;
        }
        log::trace!("Drag from {} now over {:?}", session.origin, next);
        session.hover = next;
        true
    }

    /// End the gesture.
    ///
    /// Returns the reorder to commit when the item was dropped somewhere
    /// other than its origin. The state is idle afterwards either way.
    pub fn end(&mut self, did_drop: bool) -> Option<Reorder> {
        let session = self.session.take()?;
        match (did_drop, session.hover) {
            (true, Some(to)) if to != session.origin => {
                log::debug!("Drag committed: {} -> {}", session.origin, to);
                Some(Reorder::new(session.origin, to))
            }
            _ => {
                log::debug!("Drag from {} ended without a move", session.origin);
                None
            }
        }
    }

    /// Abort the gesture without committing.
    pub fn cancel(&mut self) {
        let _ = self.end(false);
    }

    /// Whether `row` is the item being dragged.
    pub fn is_dragged_row(&self, row: usize) -> bool {
        self.drag_index() == Some(row)
    }

    /// Placeholder to render around `row`, if any.
    ///
    /// Only the hovered row gets one: before it when dragging up, after it
    /// when dragging down. The dragged row never does.
    pub fn placeholder(&self, row: usize) -> Option<Placeholder> {
        if self.is_dragged_row(row) || self.hover_index() != Some(row) {
            return None;
        }
        if self.is_dragging_up() {
            Some(Placeholder::Before)
        } else if self.is_dragging_down() {
            Some(Placeholder::After)
        } else {
            None
        }
    }
}

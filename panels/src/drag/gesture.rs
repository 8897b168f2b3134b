//! Pointer-event adapter for [`DragReorder`].
//!
//! Turns a raw stream of pointer events plus the current row layout into drag
//! transitions. The renderer owns the layout and hands a fresh one in with
//! every event, so positions are always looked up against the rows as they
//! are drawn right now.

use crate::events::{PointerEvent, PointerKind};
use crate::geometry::{Point, Rect};

use super::reorder::Reorder;
use super::state::DragReorder;

/// Pointer travel (in pixels) before a press on a handle becomes a drag.
pub const DRAG_THRESHOLD: f32 = 4.0;

/// Layout of one row as last rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBox {
    /// Bounds of the whole row.
    pub rect: Rect,
    /// Drag handle within the row. `None` makes the whole row a handle.
    pub handle: Option<Rect>,
    /// Whether the row may be moved or displaced.
    pub reorderable: bool,
}

impl RowBox {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            handle: None,
            reorderable: true,
        }
    }

    pub fn with_handle(mut self, handle: Rect) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.reorderable = false;
        self
    }

    fn grabbable_at(&self, point: Point) -> bool {
        self.reorderable && self.handle.unwrap_or(self.rect).contains(point)
    }
}

/// Layout of a reorderable list as last rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Bounds of the list; releasing outside cancels the drag.
    pub bounds: Rect,
    /// Rows in display order.
    pub rows: Vec<RowBox>,
}

impl RowLayout {
    pub fn new(bounds: Rect, rows: Vec<RowBox>) -> Self {
        Self { bounds, rows }
    }

    /// Stack `count` rows of equal height starting at the top of `bounds`.
    pub fn uniform(bounds: Rect, row_height: f32, count: usize) -> Self {
        let rows = (0..count)
            .map(|i| {
                RowBox::new(Rect::new(
                    bounds.x,
                    bounds.y + i as f32 * row_height,
                    bounds.width,
                    row_height,
                ))
            })
            .collect();
        Self { bounds, rows }
    }

    /// Index of the row whose vertical extent contains `y`.
    pub fn row_at_y(&self, y: f32) -> Option<usize> {
        self.rows.iter().position(|row| row.rect.contains_y(y))
    }
}

/// Result of feeding one pointer event to a [`DragGesture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed by the gesture.
    Consumed,
    /// The press turned into a drag.
    Started,
    /// The item was dropped on a new position.
    Committed(Reorder),
    /// The gesture ended without a move.
    Cancelled,
}

impl GestureResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, GestureResult::Ignored)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    /// Pressed on a handle, not moved far enough yet.
    Armed { origin: usize, start: Point },
    Dragging,
}

/// Drives a [`DragReorder`] from pointer events.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    phase: Phase,
    state: DragReorder,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying drag state, for placeholder rendering.
    pub fn state(&self) -> &DragReorder {
        &self.state
    }

    /// Handle one pointer event against the current layout.
    pub fn handle(&mut self, event: PointerEvent, layout: &RowLayout) -> GestureResult {
        match event.kind {
            PointerKind::Down => self.on_down(event.position, layout),
            PointerKind::Move => self.on_move(event.position, layout),
            PointerKind::Up => self.on_release(event.position, layout),
            PointerKind::Leave => self.on_leave(),
        }
    }

    fn on_down(&mut self, point: Point, layout: &RowLayout) -> GestureResult {
        if self.phase != Phase::Idle {
            return GestureResult::Ignored;
        }
        let Some(origin) = layout.rows.iter().position(|row| row.grabbable_at(point)) else {
            return GestureResult::Ignored;
        };
        self.phase = Phase::Armed {
            origin,
            start: point,
        };
        GestureResult::Consumed
    }

    fn on_move(&mut self, point: Point, layout: &RowLayout) -> GestureResult {
        match self.phase {
            Phase::Idle => GestureResult::Ignored,
            Phase::Armed { origin, start } => {
                if point.distance(start) < DRAG_THRESHOLD {
                    return GestureResult::Consumed;
                }
                self.phase = Phase::Dragging;
                self.state.begin(origin);
                self.track(point, layout);
                GestureResult::Started
            }
            Phase::Dragging => {
                self.track(point, layout);
                GestureResult::Consumed
            }
        }
    }

    fn on_release(&mut self, point: Point, layout: &RowLayout) -> GestureResult {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => GestureResult::Ignored,
            // A press without movement is a click, not a drag.
            Phase::Armed { .. } => GestureResult::Ignored,
            Phase::Dragging => {
                let did_drop = layout.bounds.contains(point);
                match self.state.end(did_drop) {
                    Some(reorder) => GestureResult::Committed(reorder),
                    None => GestureResult::Cancelled,
                }
            }
        }
    }

    fn on_leave(&mut self) -> GestureResult {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => GestureResult::Ignored,
            Phase::Armed { .. } => GestureResult::Consumed,
            Phase::Dragging => {
                self.state.cancel();
                GestureResult::Cancelled
            }
        }
    }

    fn track(&mut self, point: Point, layout: &RowLayout) {
        let Some(index) = layout.row_at_y(point.y) else {
            return;
        };
        let row = &layout.rows[index];
        if !row.reorderable {
            return;
        }
        self.state.hover(index, row.rect, point.y);
    }
}

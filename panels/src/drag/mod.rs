//! Drag-and-drop reordering of list rows.
//!
//! This module provides:
//! - `hover_update`, the midpoint-crossing rule as a pure function
//! - `DragReorder`, the idle/dragging state machine with derived up/down flags
//! - `Reorder` and `move_item` for committing a drop to an ordered list
//! - `DragGesture`, an adapter from raw pointer events to drag transitions
//!
//! Used by the download queue, the table column options and the preference
//! lists.

mod gesture;
mod hover;
mod reorder;
mod state;

pub use gesture::{DRAG_THRESHOLD, DragGesture, GestureResult, RowBox, RowLayout};
pub use hover::{HoverUpdate, hover_update};
pub use reorder::{Reorder, move_item};
pub use state::{DragReorder, Placeholder};

//! UI state for a comic library manager.
//!
//! Framework-independent state machines behind the library tables:
//! checkbox selection with shift-click ranges, drag-to-reorder with midpoint
//! hysteresis, table column options and sorting, the download queue, and the
//! socket events that keep it all current. Rendering is left to the caller;
//! everything here is plain data plus transitions.

pub mod drag;
pub mod error;
pub mod events;
pub mod geometry;
pub mod id;
pub mod preference;
pub mod queue;
pub mod selection;
pub mod settings;
pub mod socket;
pub mod table;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::drag::{DragGesture, DragReorder, GestureResult, HoverUpdate, Placeholder, Reorder};
    pub use crate::error::{Error, Result};
    pub use crate::events::{CheckEvent, Modifiers, PointerEvent, PointerKind};
    pub use crate::geometry::{Point, Rect};
    pub use crate::id::{Identified, ItemId};
    pub use crate::preference::{DownloadSource, PreferenceList};
    pub use crate::queue::{DownloadState, MoveQueueItem, QueueItem, QueueTable};
    pub use crate::selection::{CheckState, SelectAction, SelectionState};
    pub use crate::settings::{SettingsStore, UiSettings};
    pub use crate::socket::{Invalidation, SocketEnvelope, SocketEvent, SocketState};
    pub use crate::table::{Column, SortDirection, TableName, TableOptions, TableOptionsState};
}

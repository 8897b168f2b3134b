//! Download queue.

mod item;
mod table;

pub use item::{DownloadState, QueueItem};
pub use table::{MoveQueueItem, QueueRow, QueueTable};

//! Server-pushed events.
//!
//! The server announces queue progress, task lifecycles and library changes
//! over a socket. Events are decoded into [`SocketEvent`]; each one names the
//! cached resources it makes stale ([`Invalidation`]) and may update the
//! [`SocketState`] and the queue table.

mod event;
mod state;

pub use event::{
    DownloadedStatusData, Invalidation, IssueDeletedData, IssuePayload, IssueRef, MassEditAction,
    MassEditorData, QueueEndedData, QueueStatusData, SocketEnvelope, SocketEvent, TaskAction,
    TaskData, TaskStatusData, VolumeDeletedData, VolumePayload, VolumeRef,
};
pub use state::{Activity, MassEditProgress, SocketState};

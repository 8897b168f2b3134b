//! Server-pushed socket events.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::queue::{DownloadState, QueueItem};

/// Background task kinds announced by `task_added` / `task_ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    SearchAll,
    UpdateAll,
    RefreshAndScan,
    AutoSearch,
    AutoSearchIssue,
    MassRename,
    MassRenameIssue,
    MassConvert,
    MassConvertIssue,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub action: TaskAction,
    #[serde(default)]
    pub volume_id: Option<i64>,
    #[serde(default)]
    pub issue_id: Option<i64>,
    #[serde(default)]
    pub called_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueStatusData {
    pub id: i64,
    pub status: DownloadState,
    pub size: i64,
    pub speed: f64,
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEndedData {
    pub id: i64,
}

/// Bulk actions of the volume mass editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassEditAction {
    Delete,
    Rename,
    Search,
    Update,
    Convert,
    Monitor,
    Unmonitor,
    RemoveAds,
    RootFolder,
    MonitoringScheme,
}

impl MassEditAction {
    pub const ALL: [MassEditAction; 10] = [
        MassEditAction::Delete,
        MassEditAction::Rename,
        MassEditAction::Search,
        MassEditAction::Update,
        MassEditAction::Convert,
        MassEditAction::Monitor,
        MassEditAction::Unmonitor,
        MassEditAction::RemoveAds,
        MassEditAction::RootFolder,
        MassEditAction::MonitoringScheme,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassEditorData {
    pub identifier: MassEditAction,
    pub current_item: u64,
    pub total_items: u64,
}

impl MassEditorData {
    pub fn is_finished(&self) -> bool {
        self.current_item == self.total_items
    }
}

/// The fields of an issue the client needs to route an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: i64,
    pub volume_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePayload {
    #[serde(default)]
    pub called_from: Option<String>,
    pub issue: IssueRef,
}

/// The fields of a volume the client needs to route an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePayload {
    #[serde(default)]
    pub called_from: Option<String>,
    pub volume: VolumeRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeDeletedData {
    pub volume_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDeletedData {
    pub volume_id: i64,
    pub issue_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedStatusData {
    pub volume_id: i64,
    #[serde(default)]
    pub not_downloaded_issues: Vec<i64>,
    #[serde(default)]
    pub downloaded_issues: Vec<i64>,
}

/// A cached resource the data layer should refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Invalidation {
    Queue,
    Volume(i64),
    AllVolumes,
    Stats,
}

fn volume_endpoints(volume_id: i64) -> Vec<Invalidation> {
    vec![
        Invalidation::Volume(volume_id),
        Invalidation::AllVolumes,
        Invalidation::Stats,
    ]
}

/// A decoded server event.
#[derive(Debug, Clone, PartialEq)]
pub enum SocketEvent {
    Connect,
    Disconnect,
    TaskAdded(TaskData),
    TaskStatus(TaskStatusData),
    TaskEnded(TaskData),
    QueueAdded(QueueItem),
    QueueStatus(QueueStatusData),
    QueueEnded(QueueEndedData),
    VolumeUpdated(VolumePayload),
    IssueUpdated(IssuePayload),
    VolumeDeleted(VolumeDeletedData),
    IssueDeleted(IssueDeletedData),
    MassEditorStatus(MassEditorData),
    DownloadedStatus(DownloadedStatusData),
}

fn payload<T: DeserializeOwned>(event: &str, data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|source| Error::Payload {
        event: event.to_string(),
        source,
    })
}

impl SocketEvent {
    /// Decode an event from its wire name and JSON payload.
    pub fn decode(name: &str, data: Value) -> Result<Self> {
        let event = match name {
            "connect" => SocketEvent::Connect,
            "disconnect" => SocketEvent::Disconnect,
            "task_added" => SocketEvent::TaskAdded(payload(name, data)?),
            "task_status" => SocketEvent::TaskStatus(payload(name, data)?),
            "task_ended" => SocketEvent::TaskEnded(payload(name, data)?),
            "queue_added" => SocketEvent::QueueAdded(payload(name, data)?),
            "queue_status" => SocketEvent::QueueStatus(payload(name, data)?),
            "queue_ended" => SocketEvent::QueueEnded(payload(name, data)?),
            "volume_updated" => SocketEvent::VolumeUpdated(payload(name, data)?),
            "issue_updated" => SocketEvent::IssueUpdated(payload(name, data)?),
            "volume_deleted" => SocketEvent::VolumeDeleted(payload(name, data)?),
            "issue_deleted" => SocketEvent::IssueDeleted(payload(name, data)?),
            "mass_editor_status" => SocketEvent::MassEditorStatus(payload(name, data)?),
            "downloaded_status" => SocketEvent::DownloadedStatus(payload(name, data)?),
            other => return Err(Error::UnknownEvent(other.to_string())),
        };
        Ok(event)
    }

    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            SocketEvent::Connect => "connect",
            SocketEvent::Disconnect => "disconnect",
            SocketEvent::TaskAdded(_) => "task_added",
            SocketEvent::TaskStatus(_) => "task_status",
            SocketEvent::TaskEnded(_) => "task_ended",
            SocketEvent::QueueAdded(_) => "queue_added",
            SocketEvent::QueueStatus(_) => "queue_status",
            SocketEvent::QueueEnded(_) => "queue_ended",
            SocketEvent::VolumeUpdated(_) => "volume_updated",
            SocketEvent::IssueUpdated(_) => "issue_updated",
            SocketEvent::VolumeDeleted(_) => "volume_deleted",
            SocketEvent::IssueDeleted(_) => "issue_deleted",
            SocketEvent::MassEditorStatus(_) => "mass_editor_status",
            SocketEvent::DownloadedStatus(_) => "downloaded_status",
        }
    }

    /// Cached resources made stale by this event.
    pub fn invalidations(&self) -> Vec<Invalidation> {
        match self {
            SocketEvent::Connect
            | SocketEvent::Disconnect
            | SocketEvent::TaskAdded(_)
            | SocketEvent::TaskStatus(_) => Vec::new(),
            SocketEvent::QueueAdded(item) => {
                let mut stale = vec![Invalidation::Queue];
                stale.extend(volume_endpoints(item.volume_id));
                stale
            }
            SocketEvent::QueueStatus(_) | SocketEvent::QueueEnded(_) => vec![Invalidation::Queue],
            SocketEvent::TaskEnded(task) => match (task.action, task.volume_id) {
                (TaskAction::SearchAll | TaskAction::UpdateAll, _) => {
                    vec![Invalidation::AllVolumes, Invalidation::Stats]
                }
                (TaskAction::Other, _) | (_, None) => Vec::new(),
                (_, Some(volume_id)) => volume_endpoints(volume_id),
            },
            SocketEvent::VolumeUpdated(payload) => volume_endpoints(payload.volume.id),
            SocketEvent::IssueUpdated(payload) => vec![Invalidation::Volume(payload.issue.volume_id)],
            SocketEvent::VolumeDeleted(data) => volume_endpoints(data.volume_id),
            SocketEvent::IssueDeleted(data) => vec![Invalidation::Volume(data.volume_id)],
            SocketEvent::MassEditorStatus(data) if data.is_finished() => {
                vec![Invalidation::AllVolumes, Invalidation::Stats]
            }
            SocketEvent::MassEditorStatus(_) => Vec::new(),
            SocketEvent::DownloadedStatus(data) => volume_endpoints(data.volume_id),
        }
    }
}

/// One line of a socket transcript: `{"event": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketEnvelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl SocketEnvelope {
    /// Parse one JSON line.
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(Error::Envelope)
    }

    pub fn into_event(self) -> Result<SocketEvent> {
        SocketEvent::decode(&self.event, self.data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_queue_ended() {
        let event = SocketEvent::decode("queue_ended", json!({ "id": 4 })).unwrap();
        assert_eq!(event, SocketEvent::QueueEnded(QueueEndedData { id: 4 }));
        assert_eq!(event.name(), "queue_ended");
        assert_eq!(event.invalidations(), vec![Invalidation::Queue]);
    }

    #[test]
    fn test_unknown_task_action() {
        let event = SocketEvent::decode(
            "task_ended",
            json!({ "action": "backup_database", "volume_id": null, "issue_id": null }),
        )
        .unwrap();
        match &event {
            SocketEvent::TaskEnded(task) => assert_eq!(task.action, TaskAction::Other),
            other => panic!("unexpected event {:?}", other),
        }
        assert!(event.invalidations().is_empty());
    }

    #[test]
    fn test_unknown_event() {
        let err = SocketEvent::decode("volume_exploded", Value::Null).unwrap_err();
        assert!(matches!(err, Error::UnknownEvent(name) if name == "volume_exploded"));
    }

    #[test]
    fn test_malformed_payload() {
        let err = SocketEvent::decode("queue_ended", json!({ "id": "four" })).unwrap_err();
        assert!(err.to_string().contains("queue_ended"));
    }
}

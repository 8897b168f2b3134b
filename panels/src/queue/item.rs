//! Download queue entries as served by the API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::id::{Identified, ItemId};
use crate::preference::DownloadSource;
use crate::table::{SortValue, Sortable};

/// Lifecycle of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadState {
    Queued,
    Paused,
    Downloading,
    Seeding,
    Importing,
    /// Download was unsuccessful.
    Failed,
    /// Download was removed from the queue.
    Canceled,
    /// Download was stopped because the server is shutting down.
    #[serde(rename = "shutting down")]
    ShuttingDown,
}

impl DownloadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::Queued => "queued",
            DownloadState::Paused => "paused",
            DownloadState::Downloading => "downloading",
            DownloadState::Seeding => "seeding",
            DownloadState::Importing => "importing",
            DownloadState::Failed => "failed",
            DownloadState::Canceled => "canceled",
            DownloadState::ShuttingDown => "shutting down",
        }
    }

    /// The download will not make further progress.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            DownloadState::Failed | DownloadState::Canceled | DownloadState::ShuttingDown
        )
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the download queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: i64,
    pub volume_id: i64,
    #[serde(default)]
    pub issue_id: Option<i64>,
    pub web_link: Option<String>,
    pub web_title: Option<String>,
    pub web_sub_title: Option<String>,
    pub source_type: DownloadSource,
    pub source_name: String,
    pub title: String,
    /// Total size in bytes; `-1` while unknown.
    pub size: i64,
    pub status: DownloadState,
    /// Percentage, `0.0..=100.0`.
    pub progress: f64,
    /// Bytes per second.
    pub speed: f64,
}

impl QueueItem {
    /// Bytes still to download, if the size is known.
    pub fn size_left(&self) -> Option<f64> {
        if self.size < 0 {
            return None;
        }
        Some((1.0 - self.progress / 100.0) * self.size as f64)
    }

    /// Estimated remaining time at the current speed.
    ///
    /// `None` while stalled, when the size is unknown or when the estimate
    /// does not fit a [`Duration`].
    pub fn time_left(&self) -> Option<Duration> {
        let size_left = self.size_left()?;
        if self.speed <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(size_left.max(0.0) / self.speed).ok()
    }
}

impl Identified for QueueItem {
    fn id(&self) -> ItemId {
        ItemId::Number(self.id)
    }
}

impl Sortable for QueueItem {
    fn sort_value(&self, column: &str) -> SortValue {
        match column {
            "status" => SortValue::Text(self.status.as_str().to_string()),
            "title" => SortValue::Text(self.title.clone()),
            "sourceName" => SortValue::Text(self.source_name.clone()),
            "size" => SortValue::Number(self.size as f64),
            "speed" => SortValue::Number(self.speed),
            "timeLeft" => self.time_left().map(|d| d.as_secs_f64()).into(),
            "progress" => SortValue::Number(self.progress),
            _ => SortValue::Null,
        }
    }
}

//! Connection and background-task state fed by socket events.

use std::collections::HashMap;

use super::event::{MassEditAction, SocketEvent, TaskAction, TaskData};

/// Progress of one mass-editor action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MassEditProgress {
    pub current_item: u64,
    pub total_items: u64,
}

impl MassEditProgress {
    pub fn is_running(&self) -> bool {
        self.current_item != self.total_items
    }

    /// Completed fraction in `0.0..=1.0`. Empty runs count as done.
    pub fn fraction(&self) -> f64 {
        if self.total_items == 0 {
            1.0
        } else {
            self.current_item as f64 / self.total_items as f64
        }
    }
}

/// Per-volume or per-issue task flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activity {
    pub refreshing: bool,
    pub searching: bool,
    pub renaming: bool,
    pub converting: bool,
}

impl Activity {
    pub fn is_idle(&self) -> bool {
        *self == Activity::default()
    }

    fn flag_mut(&mut self, action: TaskAction) -> Option<&mut bool> {
        match action {
            TaskAction::RefreshAndScan => Some(&mut self.refreshing),
            TaskAction::AutoSearch | TaskAction::AutoSearchIssue => Some(&mut self.searching),
            TaskAction::MassRename | TaskAction::MassRenameIssue => Some(&mut self.renaming),
            TaskAction::MassConvert | TaskAction::MassConvertIssue => Some(&mut self.converting),
            TaskAction::SearchAll | TaskAction::UpdateAll | TaskAction::Other => None,
        }
    }
}

fn is_issue_action(action: TaskAction) -> bool {
    matches!(
        action,
        TaskAction::AutoSearchIssue | TaskAction::MassRenameIssue | TaskAction::MassConvertIssue
    )
}

/// Client-side view of the server connection and running tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocketState {
    is_connected: bool,
    search_all_running: bool,
    update_all_running: bool,
    mass_edit: HashMap<MassEditAction, MassEditProgress>,
    volumes: HashMap<i64, Activity>,
    issues: HashMap<i64, Activity>,
}

impl SocketState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn search_all_running(&self) -> bool {
        self.search_all_running
    }

    pub fn update_all_running(&self) -> bool {
        self.update_all_running
    }

    pub fn mass_edit_progress(&self, action: MassEditAction) -> Option<MassEditProgress> {
        self.mass_edit.get(&action).copied()
    }

    /// Whether the mass editor is still working through `action`.
    pub fn is_mass_edit_running(&self, action: MassEditAction) -> bool {
        self.mass_edit
            .get(&action)
            .is_some_and(MassEditProgress::is_running)
    }

    pub fn volume_activity(&self, volume_id: i64) -> Activity {
        self.volumes.get(&volume_id).copied().unwrap_or_default()
    }

    pub fn issue_activity(&self, issue_id: i64) -> Activity {
        self.issues.get(&issue_id).copied().unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply an event. Returns true if any tracked flag changed.
    pub fn apply(&mut self, event: &SocketEvent) -> bool {
        let before = self.clone();
        match event {
            SocketEvent::Connect => {
                log::debug!("Socket connected");
                self.is_connected = true;
            }
            SocketEvent::Disconnect => {
                log::debug!("Socket disconnected");
                self.is_connected = false;
            }
            SocketEvent::TaskAdded(task) => self.set_task(task, true),
            SocketEvent::TaskEnded(task) => self.set_task(task, false),
            SocketEvent::MassEditorStatus(data) => {
                let progress = MassEditProgress {
                    current_item: data.current_item,
                    total_items: data.total_items,
                };
                log::trace!(
                    "Mass edit {:?}: {}/{}",
                    data.identifier,
                    progress.current_item,
                    progress.total_items
                );
                self.mass_edit.insert(data.identifier, progress);
            }
            SocketEvent::VolumeDeleted(data) => {
                self.volumes.remove(&data.volume_id);
            }
            SocketEvent::IssueDeleted(data) => {
                self.issues.remove(&data.issue_id);
            }
            _ => {}
        }
        *self != before
    }

    fn set_task(&mut self, task: &TaskData, running: bool) {
        match task.action {
            TaskAction::SearchAll => self.search_all_running = running,
            TaskAction::UpdateAll => self.update_all_running = running,
            TaskAction::Other => {}
            action => {
                let (map, key) = if is_issue_action(action) {
                    (&mut self.issues, task.issue_id)
                } else {
                    (&mut self.volumes, task.volume_id)
                };
                let Some(key) = key else {
                    log::trace!("Task {:?} without target id ignored", action);
                    return;
                };
                let activity = map.entry(key).or_default();
                if let Some(flag) = activity.flag_mut(action) {
                    *flag = running;
                }
                if activity.is_idle() {
                    map.remove(&key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::socket::event::MassEditorData;

    fn task(action: TaskAction, volume_id: Option<i64>, issue_id: Option<i64>) -> TaskData {
        TaskData {
            action,
            volume_id,
            issue_id,
            called_from: None,
        }
    }

    #[test]
    fn test_connect_disconnect() {
        let mut state = SocketState::new();
        assert!(state.apply(&SocketEvent::Connect));
        assert!(state.is_connected());
        assert!(!state.apply(&SocketEvent::Connect));
        assert!(state.apply(&SocketEvent::Disconnect));
        assert!(!state.is_connected());
    }

    #[test]
    fn test_search_all_flag() {
        let mut state = SocketState::new();
        state.apply(&SocketEvent::TaskAdded(task(TaskAction::SearchAll, None, None)));
        assert!(state.search_all_running());
        assert!(!state.update_all_running());
        state.apply(&SocketEvent::TaskEnded(task(TaskAction::SearchAll, None, None)));
        assert!(!state.search_all_running());
    }

    #[test]
    fn test_volume_and_issue_activity() {
        let mut state = SocketState::new();
        state.apply(&SocketEvent::TaskAdded(task(TaskAction::RefreshAndScan, Some(3), None)));
        state.apply(&SocketEvent::TaskAdded(task(TaskAction::AutoSearchIssue, Some(3), Some(40))));
        assert!(state.volume_activity(3).refreshing);
        assert!(!state.volume_activity(3).searching);
        assert!(state.issue_activity(40).searching);

        state.apply(&SocketEvent::TaskEnded(task(TaskAction::RefreshAndScan, Some(3), None)));
        assert!(state.volume_activity(3).is_idle());
    }

    #[test]
    fn test_mass_edit_progress() {
        let mut state = SocketState::new();
        let status = |current_item, total_items| {
            SocketEvent::MassEditorStatus(MassEditorData {
                identifier: MassEditAction::Rename,
                current_item,
                total_items,
            })
        };
        state.apply(&status(2, 5));
        assert!(state.is_mass_edit_running(MassEditAction::Rename));
        assert!(!state.is_mass_edit_running(MassEditAction::Convert));
        state.apply(&status(5, 5));
        assert!(!state.is_mass_edit_running(MassEditAction::Rename));
        assert_eq!(
            state.mass_edit_progress(MassEditAction::Rename).map(|p| p.fraction()),
            Some(1.0)
        );
    }
}

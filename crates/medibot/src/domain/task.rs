use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Delivery urgency chosen by the requester.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Priority {
    /// Returns the wire name of this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of item carried by a delivery.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    #[default]
    Medication,
    Sample,
    Equipment,
    Supplies,
}

impl Payload {
    /// Returns the wire name of this payload kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Payload::Medication => "medication",
            Payload::Sample => "sample",
            Payload::Equipment => "equipment",
            Payload::Supplies => "supplies",
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of one delivery task.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Queued,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Queued,
        TaskStatus::Assigned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    /// Returns the wire name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Queued => "queued",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// Returns whether the task has left the active workflow.
    pub fn is_terminal(self) -> bool {
        match self {
            TaskStatus::Completed | TaskStatus::Cancelled => true,
            TaskStatus::Queued | TaskStatus::Assigned | TaskStatus::InProgress => false,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown task status: {s}"))
    }
}

/// One delivery request between two zones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub requester_id: String,
    pub from_zone: String,
    pub to_zone: String,
    pub priority: Priority,
    pub payload: Payload,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_robot_id: Option<String>,
    /// Set once at creation and never changed afterwards.
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Estimated minutes until delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<u32>,
}

/// Caller-supplied fields for `AppStore::add_task`.
///
/// The store assigns `id`, `created_at` and forces `status` to
/// [`TaskStatus::Queued`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewTask {
    pub requester_id: String,
    pub from_zone: String,
    pub to_zone: String,
    pub priority: Priority,
    pub payload: Payload,
    pub assigned_robot_id: Option<String>,
    pub completed_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub eta: Option<u32>,
}

impl NewTask {
    /// Materializes the task with store-assigned identity fields.
    pub(crate) fn into_task(self, id: String, created_at: Timestamp) -> Task {
        Task {
            id,
            requester_id: self.requester_id,
            from_zone: self.from_zone,
            to_zone: self.to_zone,
            priority: self.priority,
            payload: self.payload,
            status: TaskStatus::Queued,
            assigned_robot_id: self.assigned_robot_id,
            created_at,
            completed_at: self.completed_at,
            notes: self.notes,
            eta: self.eta,
        }
    }
}

/// Partial task update merged by `AppStore::update_task`.
///
/// `id` and `created_at` are deliberately absent. Optional task fields are
/// doubly optional so `Some(None)` clears them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskUpdate {
    pub requester_id: Option<String>,
    pub from_zone: Option<String>,
    pub to_zone: Option<String>,
    pub priority: Option<Priority>,
    pub payload: Option<Payload>,
    pub status: Option<TaskStatus>,
    pub assigned_robot_id: Option<Option<String>>,
    pub completed_at: Option<Option<Timestamp>>,
    pub notes: Option<Option<String>>,
    pub eta: Option<Option<u32>>,
}

impl TaskUpdate {
    /// Builds a patch that only changes the task status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Merges the set fields into `task`.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(requester_id) = self.requester_id {
            task.requester_id = requester_id;
        }
        if let Some(from_zone) = self.from_zone {
            task.from_zone = from_zone;
        }
        if let Some(to_zone) = self.to_zone {
            task.to_zone = to_zone;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(payload) = self.payload {
            task.payload = payload;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assigned_robot_id) = self.assigned_robot_id {
            task.assigned_robot_id = assigned_robot_id;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = completed_at;
        }
        if let Some(notes) = self.notes {
            task.notes = notes;
        }
        if let Some(eta) = self.eta {
            task.eta = eta;
        }
    }
}

/// Task list filter used by the tasks page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against both zone names.
    pub search: String,
    /// Restricts results to one status; `None` keeps every status.
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Returns whether `task` passes both the search and status criteria.
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = task.from_zone.to_lowercase().contains(&needle)
            || task.to_zone.to_lowercase().contains(&needle);
        let matches_status = self.status.is_none_or(|status| task.status == status);

        matches_search && matches_status
    }
}

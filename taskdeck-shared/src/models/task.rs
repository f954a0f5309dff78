//! Tasks, their partial-update form and the paginated listing envelope.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Workflow state of a task.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

/// Relative urgency of a task.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

/// A task as listed by `GET task`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Server-assigned identifier.
    pub id: u64,

    /// Short title.
    pub task_title: String,

    /// Free-form description.
    pub task_description: String,

    /// Due date, slash-delimited (`YYYY/MM/DD`).
    pub due_date: String,

    /// Workflow state.
    pub status: TaskStatus,

    /// Urgency.
    pub priority: TaskPriority,
}

impl Task {
    /// Build the local copy of a freshly created task from the submitted
    /// payload and the id returned by the server.
    pub fn from_new(id: u64, new_task: NewTask) -> Self {
        let NewTask {
            task_title,
            task_description,
            due_date,
            status,
            priority,
        } = new_task;
        Self {
            id,
            task_title,
            task_description,
            due_date,
            status,
            priority,
        }
    }
}

/// Body of `POST task/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    /// Short title.
    pub task_title: String,

    /// Free-form description.
    pub task_description: String,

    /// Due date; dash-delimited input is accepted and normalized before
    /// submission.
    pub due_date: String,

    /// Initial workflow state.
    pub status: TaskStatus,

    /// Urgency.
    pub priority: TaskPriority,
}

impl NewTask {
    /// Returns the payload with its due date rewritten to the slash-delimited
    /// form the API stores.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.due_date = normalize_due_date(&self.due_date);
        self
    }
}

/// Body of `PUT task/{id}`. Only the fields that are set are sent and merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskChanges {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,

    /// New due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// New workflow state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// New urgency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl TaskChanges {
    /// A change set that only moves the task to `status`.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns `true` when no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.task_title.is_none()
            && self.task_description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }

    /// Shallow-merges the present fields into `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.task_title {
            task.task_title.clone_from(title);
        }
        if let Some(description) = &self.task_description {
            task.task_description.clone_from(description);
        }
        if let Some(due_date) = &self.due_date {
            task.due_date.clone_from(due_date);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}

/// Response of `GET task?page=N`. Other paginator fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskPage {
    /// Tasks on this page.
    pub data: Vec<Task>,

    /// One-based index of this page.
    pub current_page: u32,

    /// Index of the final page.
    pub last_page: u32,
}

/// Response of `POST task/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCreated {
    /// Identifier assigned to the new task.
    pub id: u64,

    /// Human-readable confirmation.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `PUT task/{id}` and `DELETE task/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[serde(default)]
    pub message: Option<String>,
}

/// Rewrites every `-` in a date to `/` (`2024-01-02` becomes `2024/01/02`).
pub fn normalize_due_date(date: &str) -> String {
    date.replace('-', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn sample_task() -> Task {
        Task {
            id: 5,
            task_title: "Write report".to_string(),
            task_description: "Quarterly numbers".to_string(),
            due_date: "2024/03/01".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
        }
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            json!("in-progress")
        );
        assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            TaskStatus::from_str("completed").unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn priority_uses_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::from_value::<TaskPriority>(json!("high")).unwrap(),
            TaskPriority::High
        );
        assert_eq!(TaskPriority::Low.as_ref(), "low");
        assert_eq!(TaskPriority::iter().count(), 3);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_value::<TaskStatus>(json!("archived")).is_err());
        assert!(TaskStatus::from_str("archived").is_err());
    }

    #[test]
    fn normalize_due_date_replaces_every_dash() {
        assert_eq!(normalize_due_date("2024-01-02"), "2024/01/02");
        assert_eq!(normalize_due_date("2024/01/02"), "2024/01/02");
        assert_eq!(normalize_due_date(""), "");
    }

    #[test]
    fn new_task_normalized_only_touches_due_date() {
        let new_task = NewTask {
            task_title: "A-B".to_string(),
            task_description: "d".to_string(),
            due_date: "2024-01-02".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Low,
        }
        .normalized();

        assert_eq!(new_task.due_date, "2024/01/02");
        assert_eq!(new_task.task_title, "A-B");
    }

    #[test]
    fn changes_serialize_only_present_fields() {
        let changes = TaskChanges::status(TaskStatus::Completed);
        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            json!({ "status": "completed" })
        );
        assert!(!changes.is_empty());
        assert!(TaskChanges::default().is_empty());
    }

    #[test]
    fn apply_to_merges_only_present_fields() {
        let mut task = sample_task();
        let changes = TaskChanges {
            task_title: Some("Write summary".to_string()),
            status: Some(TaskStatus::Completed),
            ..TaskChanges::default()
        };

        changes.apply_to(&mut task);

        assert_eq!(task.task_title, "Write summary");
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.task_description, "Quarterly numbers");
        assert_eq!(task.due_date, "2024/03/01");
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.id, 5);
    }

    #[test]
    fn task_page_ignores_paginator_extras() {
        let body = json!({
            "data": [{
                "id": 1,
                "task_title": "t",
                "task_description": "d",
                "due_date": "2024/01/02",
                "status": "pending",
                "priority": "medium"
            }],
            "current_page": 2,
            "last_page": 4,
            "per_page": 10,
            "total": 31
        });

        let page: TaskPage = serde_json::from_value(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 4);
    }

    #[test]
    fn task_from_new_keeps_submitted_fields() {
        let new_task = NewTask {
            task_title: "A".to_string(),
            task_description: "d".to_string(),
            due_date: "2024/01/02".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Low,
        };

        let task = Task::from_new(42, new_task.clone());
        assert_eq!(task.id, 42);
        assert_eq!(task.task_title, new_task.task_title);
        assert_eq!(task.due_date, new_task.due_date);
    }

    #[test]
    fn message_response_tolerates_missing_message() {
        let response: MessageResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.message.is_none());
    }
}

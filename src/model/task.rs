use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{deserialize_id, deserialize_optional_id};
use super::Priority;
use crate::utils::datetime::{self, serde_timestamp};

/// A task as owned by the backend.
///
/// The client only ever holds a transient copy for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, with = "serde_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
}

impl Task {
    /// Calendar day the task is due, if it has a due date
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due_date.map(|dt| dt.date_naive())
    }

    /// Description text, empty when none was given
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Overlay the fields of an edit onto this task.
    ///
    /// `id` and `user_id` never change after creation.
    pub fn apply_update(&mut self, update: &TaskUpdate) {
        self.title = update.title.clone();
        self.description = update.description.clone();
        self.priority = update.priority.clone();
        self.due_date = update.due_date;
        self.completed = update.completed;
    }
}

/// Values collected by the task creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due: NaiveDate,
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    #[serde(with = "serde_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl NewTask {
    /// Build the creation request for the signed-in user.
    ///
    /// Title and description are trimmed; new tasks always start pending.
    pub fn from_draft(draft: &TaskDraft, user_id: impl Into<String>) -> Self {
        Self {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            completed: false,
            priority: draft.priority.clone(),
            due_date: Some(datetime::due_from_date(draft.due)),
            user_id: user_id.into(),
        }
    }
}

/// Body of `PUT /api/tasks/:taskId`: every editable field of a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(with = "serde_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl TaskUpdate {
    /// Start an edit from the task's current values
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.clone(),
            due_date: task.due_date,
            completed: task.completed,
        }
    }

    /// Set the due date from a calendar day picked in a form
    pub fn with_due_day(mut self, day: NaiveDate) -> Self {
        self.due_date = Some(datetime::due_from_date(day));
        self
    }
}

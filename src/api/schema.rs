//! Request and response schemas, one per endpoint.
//!
//! Several endpoints answer with either an envelope (`{ "tasks": [...] }`,
//! `{ "task": {...} }`) or the bare payload. Each shape is an explicit
//! untagged enum normalized right here, so callers always get the payload.

use serde::{Deserialize, Serialize};

use crate::model::{PlatformStats, Task, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest<'a> {
    pub token_id: &'a str,
}

/// Body of `POST /admin/createAdmin`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub confirm_password: String,
}

/// `POST /auth/login` and `POST /auth/google/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// `POST /api/auth/register`; only the optional token matters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// `GET /api/tasks/:userId`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskListResponse {
    Wrapped { tasks: Vec<Task> },
    Bare(Vec<Task>),
}

impl TaskListResponse {
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            TaskListResponse::Wrapped { tasks } | TaskListResponse::Bare(tasks) => tasks,
        }
    }
}

/// Single-task responses: fetch, create and toggle
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskResponse {
    Wrapped { task: Task },
    Bare(Task),
}

impl TaskResponse {
    pub fn into_task(self) -> Task {
        match self {
            TaskResponse::Wrapped { task } | TaskResponse::Bare(task) => task,
        }
    }
}

/// Admin endpoints wrap their payload in `{ "data": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

pub type AdminStatsResponse = DataEnvelope<PlatformStats>;

#[derive(Debug, Clone, Deserialize)]
pub struct UsersPayload {
    #[serde(default)]
    pub users: Vec<User>,
}

pub type AdminUsersResponse = DataEnvelope<UsersPayload>;

#[derive(Debug, Clone, Deserialize)]
pub struct UserTasksPayload {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

pub type AdminUserTasksResponse = DataEnvelope<UserTasksPayload>;

/// Error bodies carry a human-readable `message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

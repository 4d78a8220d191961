//! Backend API abstraction.
//!
//! This module defines the interface to the task backend ([`TaskApi`]), the
//! error type shared by every call and the request/response schemas. The
//! reqwest implementation lives in [`http`].

use async_trait::async_trait;

use crate::model::{NewTask, PlatformStats, Task, TaskUpdate, User};

pub mod http;
pub mod schema;

pub use http::HttpApi;
pub use schema::{CreateAdminRequest, LoginResponse, RegisterRequest};

/// Failures of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// The response body did not match the endpoint's schema
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The token was rejected; the user has to sign in again
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for the UI, without the status decoration
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Every backend operation the client uses.
///
/// Authenticated calls take the bearer token explicitly; the trait holds no
/// session state of its own.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `POST /api/auth/register`. Returns the token when the backend issues
    /// one on registration.
    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError>;

    /// `POST /auth/login`
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/google/login` with a Google ID token
    async fn google_login(&self, id_token: &str) -> Result<LoginResponse, ApiError>;

    // Task operations
    async fn list_tasks(&self, token: &str, user_id: &str) -> Result<Vec<Task>, ApiError>;
    async fn fetch_task(&self, token: &str, task_id: &str) -> Result<Task, ApiError>;
    async fn create_task(&self, token: &str, task: &NewTask) -> Result<Task, ApiError>;
    async fn update_task(&self, token: &str, task_id: &str, update: &TaskUpdate) -> Result<(), ApiError>;
    async fn toggle_task(&self, token: &str, task_id: &str) -> Result<Task, ApiError>;
    async fn delete_task(&self, token: &str, task_id: &str) -> Result<(), ApiError>;

    // Admin operations
    async fn admin_stats(&self, token: &str) -> Result<PlatformStats, ApiError>;
    async fn admin_users(&self, token: &str) -> Result<Vec<User>, ApiError>;
    async fn admin_user_tasks(&self, token: &str, user_id: &str) -> Result<Vec<Task>, ApiError>;
    async fn create_admin(&self, token: &str, request: &CreateAdminRequest) -> Result<(), ApiError>;
}

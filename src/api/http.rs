//! reqwest implementation of [`TaskApi`].

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::schema::{
    AdminStatsResponse, AdminUserTasksResponse, AdminUsersResponse, CreateAdminRequest, ErrorBody,
    GoogleLoginRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, TaskListResponse,
    TaskResponse,
};
use super::{ApiError, TaskApi};
use crate::model::{NewTask, PlatformStats, Task, TaskUpdate, User};

/// HTTP client for the task backend.
///
/// No timeout and no retry: a call either completes, fails, or keeps the
/// caller waiting.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build http client: {}", e)))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("API: {} {}", status.as_u16(), response.url().path());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|error| error.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        warn!("API: request failed with {}: {}", status.as_u16(), message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }
}

#[async_trait]
impl TaskApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        let response = self
            .execute(self.client.post(self.url("/api/auth/register")).json(request))
            .await?;

        // Registration only has to succeed; a token in the body is a bonus.
        let body = response.text().await.unwrap_or_default();
        let parsed: RegisterResponse = serde_json::from_str(&body).unwrap_or_default();
        Ok(parsed.token.filter(|token| !token.is_empty()))
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email, password };
        self.fetch_json(self.client.post(self.url("/auth/login")).json(&body))
            .await
    }

    async fn google_login(&self, id_token: &str) -> Result<LoginResponse, ApiError> {
        let body = GoogleLoginRequest { token_id: id_token };
        self.fetch_json(self.client.post(self.url("/auth/google/login")).json(&body))
            .await
    }

    async fn list_tasks(&self, token: &str, user_id: &str) -> Result<Vec<Task>, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/api/tasks/{}", user_id)))
            .bearer_auth(token);
        let response: TaskListResponse = self.fetch_json(request).await?;
        Ok(response.into_tasks())
    }

    async fn fetch_task(&self, token: &str, task_id: &str) -> Result<Task, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/api/tasks/single/{}", task_id)))
            .bearer_auth(token);
        let response: TaskResponse = self.fetch_json(request).await?;
        Ok(response.into_task())
    }

    async fn create_task(&self, token: &str, task: &NewTask) -> Result<Task, ApiError> {
        let request = self.client.post(self.url("/api/tasks")).bearer_auth(token).json(task);
        let response: TaskResponse = self.fetch_json(request).await?;
        Ok(response.into_task())
    }

    async fn update_task(&self, token: &str, task_id: &str, update: &TaskUpdate) -> Result<(), ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/api/tasks/{}", task_id)))
            .bearer_auth(token)
            .json(update);
        self.fetch_empty(request).await
    }

    async fn toggle_task(&self, token: &str, task_id: &str) -> Result<Task, ApiError> {
        let request = self
            .client
            .patch(self.url(&format!("/api/tasks/{}/toggle", task_id)))
            .bearer_auth(token);
        let response: TaskResponse = self.fetch_json(request).await?;
        Ok(response.into_task())
    }

    async fn delete_task(&self, token: &str, task_id: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .delete(self.url(&format!("/api/tasks/{}", task_id)))
            .bearer_auth(token);
        self.fetch_empty(request).await
    }

    async fn admin_stats(&self, token: &str) -> Result<PlatformStats, ApiError> {
        let request = self.client.get(self.url("/admin/stats")).bearer_auth(token);
        let response: AdminStatsResponse = self.fetch_json(request).await?;
        Ok(response.data)
    }

    async fn admin_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let request = self.client.get(self.url("/admin/users")).bearer_auth(token);
        let response: AdminUsersResponse = self.fetch_json(request).await?;
        Ok(response.data.users)
    }

    async fn admin_user_tasks(&self, token: &str, user_id: &str) -> Result<Vec<Task>, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/admin/users/{}/tasks", user_id)))
            .bearer_auth(token);
        let response: AdminUserTasksResponse = self.fetch_json(request).await?;
        Ok(response.data.tasks)
    }

    async fn create_admin(&self, token: &str, request: &CreateAdminRequest) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.url("/admin/createAdmin"))
            .bearer_auth(token)
            .json(request);
        self.fetch_empty(request).await
    }
}

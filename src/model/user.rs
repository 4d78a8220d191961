use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::deserialize_id;
use crate::utils::datetime::serde_timestamp;

/// A registered user as listed in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub task_count: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default, with = "serde_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Platform-wide counters from `GET /admin/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default)]
    pub pending_tasks: u64,
}

//! Session context and its on-disk store.
//!
//! A [`Session`] is created on successful login, read by every authenticated
//! request and destroyed on logout or when its token can no longer be
//! decoded. It is held by [`crate::service::TaskService`] and never looked up
//! globally.
//!
//! Token claims are decoded without verifying the signature. They only drive
//! display and navigation (the user's name, whether to offer the admin
//! panel); the backend enforces authorization on every request.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::id_from_value;

/// Identity claims read from the bearer token's payload segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No authentication token found. Please login.")]
    NotAuthenticated,

    #[error("Invalid token. Please login again.")]
    InvalidToken,

    #[error("Administrator access required")]
    NotAdmin,

    /// The user signed out or switched accounts while a request was pending
    #[error("The session ended before the request completed")]
    Superseded,
}

/// Decode the claims of a JWT-shaped token.
///
/// Returns `None` unless the token has three dot-separated segments and the
/// middle one is base64 (URL-safe or standard, padding optional) JSON
/// carrying a user id under `id`, `userId` or `user_id`.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return None;
    }

    let normalized: String = segments[1]
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = STANDARD_NO_PAD.decode(normalized.as_bytes()).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes).ok()?;

    let id = ["id", "userId", "user_id"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(id_from_value))?;

    let text = |key: &str| {
        payload
            .get(key)
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string()
    };

    Some(Claims {
        id,
        name: text("name"),
        email: text("email"),
        is_admin: payload.get("isAdmin").and_then(|value| value.as_bool()).unwrap_or(false),
    })
}

/// An authenticated session: the opaque bearer token and what it says about
/// the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    claims: Claims,
    user: Option<serde_json::Value>,
}

impl Session {
    /// Start a session from a freshly issued token
    pub fn from_token(token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::NotAuthenticated);
        }
        let claims = decode_claims(&token).ok_or(SessionError::InvalidToken)?;
        Ok(Self {
            token,
            claims,
            user: None,
        })
    }

    /// Attach the user record some login endpoints return alongside the token
    pub fn with_user(mut self, user: Option<serde_json::Value>) -> Self {
        self.user = user;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn user(&self) -> Option<&serde_json::Value> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> &str {
        &self.claims.id
    }

    pub fn is_admin(&self) -> bool {
        self.claims.is_admin
    }

    /// Display name, falling back to the e-mail address
    pub fn display_name(&self) -> &str {
        if self.claims.name.is_empty() {
            &self.claims.email
        } else {
            &self.claims.name
        }
    }
}

/// What the session file holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Persists the bearer token between runs.
///
/// Removing the file is the sign-out operation.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<data_dir>/taskdesk/session.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("taskdesk").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, if any
    pub fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;
        let stored: StoredSession = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {}", self.path.display()))?;

        debug!("Session: loaded stored token from {}", self.path.display());
        Ok(Some(stored))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory: {}", parent.display()))?;
        }

        let stored = StoredSession {
            token: session.token().to_string(),
            user: session.user().cloned(),
        };
        let content = serde_json::to_string_pretty(&stored).context("Failed to serialize session")?;

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;
        Ok(())
    }

    /// Forget the stored token. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!("Session: failed to remove {}: {}", self.path.display(), e);
                Err(e).with_context(|| format!("Failed to remove session file: {}", self.path.display()))
            }
        }
    }
}

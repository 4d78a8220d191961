//! Application service for the taskdesk client.
//!
//! [`TaskService`] is the single entry point the UI talks to. It owns the
//! current [`Session`], the local [`TaskCollection`] and the backend client,
//! and offers one async method per user-visible operation:
//! - Authentication: login, Google login, registration, logout and restoring a
//!   stored session
//! - Task operations that reconcile the local collection after the backend
//!   confirms them
//! - Admin operations, gated on the token's `isAdmin` claim
//!
//! Every method is a single await point from the caller's perspective; the
//! local state only changes once the server has answered.

pub mod admin;
pub mod auth;
pub mod tasks;

pub use admin::{AdminDashboard, AdminForm};
pub use auth::Registration;

use anyhow::Result;
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::api::TaskApi;
use crate::reconcile::TaskCollection;
use crate::session::{Claims, Session, SessionError, SessionStore};

/// The signed-in session and a counter bumped on every sign-in and sign-out
#[derive(Default)]
struct SessionSlot {
    current: Option<Session>,
    generation: u64,
}

/// Session snapshot an operation started under
pub(crate) struct Ticket {
    session: Session,
    generation: u64,
}

impl Deref for Ticket {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

/// Service shared between the UI loop and its background operations.
///
/// Cloning is cheap; clones share the session and the task collection.
#[derive(Clone)]
pub struct TaskService {
    api: Arc<dyn TaskApi>,
    store: SessionStore,
    session: Arc<RwLock<SessionSlot>>,
    tasks: Arc<Mutex<TaskCollection>>,
}

impl TaskService {
    pub fn new(api: Arc<dyn TaskApi>, store: SessionStore) -> Self {
        Self {
            api,
            store,
            session: Arc::new(RwLock::new(SessionSlot::default())),
            tasks: Arc::new(Mutex::new(TaskCollection::new())),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Claims of the signed-in user, if any
    pub async fn current_claims(&self) -> Option<Claims> {
        self.session
            .read()
            .await
            .current
            .as_ref()
            .map(|session| session.claims().clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.current.is_some()
    }

    /// Install `session` (or none) and invalidate every ticket issued so far
    pub(crate) async fn replace_session(&self, session: Option<Session>) {
        let mut slot = self.session.write().await;
        slot.current = session;
        slot.generation += 1;
    }

    /// Snapshot of the current session for an authenticated call
    pub(crate) async fn require_session(&self) -> Result<Ticket> {
        let slot = self.session.read().await;
        let session = slot.current.clone().ok_or(SessionError::NotAuthenticated)?;
        Ok(Ticket {
            session,
            generation: slot.generation,
        })
    }

    /// Like [`Self::require_session`], but the token must also carry `isAdmin`
    pub(crate) async fn require_admin(&self) -> Result<Ticket> {
        let ticket = self.require_session().await?;
        if !ticket.is_admin() {
            return Err(SessionError::NotAdmin.into());
        }
        Ok(ticket)
    }

    /// Lock the task collection for a result obtained under `ticket`.
    ///
    /// Fails with [`SessionError::Superseded`] once the user has signed out or
    /// another session has begun, so a late response never lands in the
    /// wrong user's collection.
    pub(crate) async fn collection_for(&self, ticket: &Ticket) -> Result<MutexGuard<'_, TaskCollection>> {
        let collection = self.tasks.lock().await;
        if self.session.read().await.generation != ticket.generation {
            log::warn!("Session: dropping a response for {} from an ended session", ticket.user_id());
            return Err(SessionError::Superseded.into());
        }
        Ok(collection)
    }
}

use anyhow::Result;
use log::{info, warn};

use crate::api::{LoginResponse, RegisterRequest};
use crate::service::TaskService;
use crate::session::{Claims, Session};
use crate::validation;

/// How a successful registration continues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The backend issued a token and the user is now signed in
    SignedIn(Claims),
    /// The account exists; the user still has to sign in
    LoginRequired,
}

impl TaskService {
    /// Resume the session stored by a previous run.
    ///
    /// A corrupt session file or an undecodable token clears the store and
    /// reports no session.
    pub async fn restore_session(&self) -> Result<Option<Claims>> {
        let stored = match self.store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!("Session: discarding unreadable session file: {:#}", e);
                self.store.clear()?;
                return Ok(None);
            }
        };

        match Session::from_token(stored.token) {
            Ok(session) => {
                let session = session.with_user(stored.user);
                let claims = session.claims().clone();
                info!("Session: restored session for {}", session.display_name());
                self.replace_session(Some(session)).await;
                Ok(Some(claims))
            }
            Err(e) => {
                warn!("Session: stored token rejected: {}", e);
                self.store.clear()?;
                Ok(None)
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Claims> {
        validation::validate_login(email, password)?;
        let response = self.api.login(email.trim(), password).await?;
        self.begin_session(response).await
    }

    /// Sign in with an ID token obtained from Google
    pub async fn google_login(&self, id_token: &str) -> Result<Claims> {
        let response = self.api.google_login(id_token.trim()).await?;
        self.begin_session(response).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Registration> {
        validation::validate_registration(name, email, password)?;
        let request = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        match self.api.register(&request).await? {
            Some(token) => {
                let claims = self.begin_session(LoginResponse { token, user: None }).await?;
                Ok(Registration::SignedIn(claims))
            }
            None => {
                info!("Auth: registered {}", request.email);
                Ok(Registration::LoginRequired)
            }
        }
    }

    /// Drop the session, the stored token and every cached task.
    ///
    /// The in-memory session is gone even when removing the stored token
    /// fails.
    pub async fn logout(&self) -> Result<()> {
        self.replace_session(None).await;
        self.tasks.lock().await.clear();
        self.store.clear()?;
        info!("Auth: signed out");
        Ok(())
    }

    async fn begin_session(&self, response: LoginResponse) -> Result<Claims> {
        let session = Session::from_token(response.token)?.with_user(response.user);
        let claims = session.claims().clone();

        // A session that cannot be persisted still works for this run
        if let Err(e) = self.store.save(&session) {
            warn!("Session: could not persist token: {:#}", e);
        }

        self.replace_session(Some(session)).await;
        self.tasks.lock().await.clear();
        info!("Auth: signed in as {}", claims.email);
        Ok(claims)
    }
}

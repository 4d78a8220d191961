use anyhow::Result;
use log::{error, info};

use crate::api::CreateAdminRequest;
use crate::model::{PlatformStats, Task, User};
use crate::service::TaskService;
use crate::validation;

/// Everything the admin panel shows on entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminDashboard {
    pub stats: PlatformStats,
    pub users: Vec<User>,
}

/// Values collected by the "create admin" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AdminForm {
    pub fn validate(&self) -> Result<(), validation::ValidationError> {
        validation::validate_admin_form(&self.name, &self.email, &self.password, &self.confirm_password)
    }

    fn to_request(&self) -> CreateAdminRequest {
        CreateAdminRequest {
            admin_name: self.name.trim().to_string(),
            admin_email: self.email.trim().to_string(),
            admin_password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

impl TaskService {
    /// Fetch platform statistics and the user list concurrently.
    ///
    /// Both requests must succeed; the first failure is returned.
    pub async fn admin_dashboard(&self) -> Result<AdminDashboard> {
        let session = self.require_admin().await?;
        let token = session.token();

        let (stats, users) = tokio::try_join!(self.api.admin_stats(token), self.api.admin_users(token))
            .inspect_err(|e| error!("Admin: dashboard load failed: {}", e))?;

        info!("Admin: loaded {} users", users.len());
        Ok(AdminDashboard { stats, users })
    }

    pub async fn admin_user_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let session = self.require_admin().await?;
        Ok(self.api.admin_user_tasks(session.token(), user_id).await?)
    }

    /// Validate the form locally, then ask the backend to create the account
    pub async fn create_admin(&self, form: AdminForm) -> Result<()> {
        form.validate()?;
        let session = self.require_admin().await?;

        self.api.create_admin(session.token(), &form.to_request()).await?;
        info!("Admin: created administrator {}", form.email.trim());
        Ok(())
    }
}

use anyhow::Result;
use log::{error, info};

use crate::model::{NewTask, Task, TaskDraft, TaskUpdate};
use crate::projection::{self, SortBy, TaskFilter, TaskView};
use crate::service::TaskService;
use crate::validation;

impl TaskService {
    /// Replace the local collection with the signed-in user's tasks.
    ///
    /// # Errors
    /// Fails without a session, when the backend call fails, or when the
    /// session ended while the call was in flight; the collection is left
    /// untouched in those cases.
    pub async fn load_tasks(&self) -> Result<Vec<Task>> {
        let session = self.require_session().await?;
        let tasks = self
            .api
            .list_tasks(session.token(), session.user_id())
            .await
            .inspect_err(|e| error!("Tasks: list failed: {}", e))?;

        let mut collection = self.collection_for(&session).await?;
        info!("Tasks: loaded {} tasks", tasks.len());
        collection.replace_all(tasks);
        Ok(collection.to_vec())
    }

    /// Fresh copy of one task from the server, used to prefill the edit form
    pub async fn fetch_task(&self, task_id: &str) -> Result<Task> {
        let session = self.require_session().await?;
        Ok(self.api.fetch_task(session.token(), task_id).await?)
    }

    /// Create a task for the signed-in user and append the server's copy
    pub async fn create_task(&self, draft: TaskDraft) -> Result<Task> {
        validation::validate_task_form(&draft.title)?;
        let session = self.require_session().await?;

        let request = NewTask::from_draft(&draft, session.user_id());
        let created = self.api.create_task(session.token(), &request).await?;
        info!("Tasks: created '{}'", created.title);

        self.collection_for(&session).await?.upsert(created.clone());
        Ok(created)
    }

    /// Send every editable field, then overlay them on the local copy.
    ///
    /// Returns the merged task, or `None` when the task is not in the local
    /// collection (e.g. it was removed while the edit was pending).
    pub async fn update_task(&self, task_id: &str, update: TaskUpdate) -> Result<Option<Task>> {
        validation::validate_task_form(&update.title)?;
        let session = self.require_session().await?;

        self.api.update_task(session.token(), task_id, &update).await?;
        info!("Tasks: updated {}", task_id);

        Ok(self.collection_for(&session).await?.merge_update(task_id, &update).cloned())
    }

    /// Flip completion on the server and take its returned copy
    pub async fn toggle_task(&self, task_id: &str) -> Result<Task> {
        let session = self.require_session().await?;
        let toggled = self.api.toggle_task(session.token(), task_id).await?;
        info!("Tasks: {} is now {}", task_id, if toggled.completed { "completed" } else { "pending" });

        self.collection_for(&session).await?.upsert(toggled.clone());
        Ok(toggled)
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<()> {
        let session = self.require_session().await?;
        self.api.delete_task(session.token(), task_id).await?;
        info!("Tasks: deleted {}", task_id);

        self.collection_for(&session).await?.remove(task_id);
        Ok(())
    }

    /// Snapshot of the local collection in server order
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().await.to_vec()
    }

    /// Project the local collection for display
    pub async fn view(&self, filter: TaskFilter, sort_by: SortBy) -> TaskView {
        let collection = self.tasks.lock().await;
        projection::project(collection.as_slice(), filter, sort_by)
    }
}

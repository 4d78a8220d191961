use super::actions::{Action, DialogType};
use crate::api::ApiError;
use crate::constants::ERROR_ADMIN_ONLY;
use crate::session::SessionError;
use crate::validation::ValidationError;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    Completed,
    Failed(String),
}

/// Runs backend operations off the UI loop.
///
/// Each operation resolves to one [`Action`] that is sent back over the
/// channel and applied by the loop on its next tick.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background operation.
    ///
    /// `description` is shown while the operation runs. On success the
    /// returned action is delivered as is; on failure the error is turned
    /// into an action by [`error_action`] with `failure` as context.
    pub fn spawn_operation<F, Fut>(&mut self, description: impl Into<String>, failure: &'static str, operation: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<Action>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(action) => {
                    let _ = action_sender.send(action);
                    TaskResult::Completed
                }
                Err(e) => {
                    log::error!("{}: {:#}", desc_for_task, e);
                    let _ = action_sender.send(error_action(failure, &e));
                    TaskResult::Failed(e.to_string())
                }
            }
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished tasks; their results were already sent as actions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }
        finished
    }

    /// Description of the oldest operation still running
    pub fn current_activity(&self) -> Option<&str> {
        self.tasks
            .values()
            .filter(|task| !task.handle.is_finished())
            .min_by_key(|task| task.started_at)
            .map(|task| task.description.as_str())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}

/// Map a failed operation onto what the UI should do next.
///
/// Missing or rejected credentials send the user back to the login screen;
/// results of an ended session are dropped; everything else is reported in
/// an error dialog titled with the operation.
pub fn error_action(context: &str, error: &anyhow::Error) -> Action {
    if let Some(session_error) = error.downcast_ref::<SessionError>() {
        return match session_error {
            SessionError::NotAdmin => Action::ShowDialog(DialogType::Error(ERROR_ADMIN_ONLY.to_string())),
            // Belongs to a session that is already gone
            SessionError::Superseded => Action::None,
            other => Action::SessionExpired(other.to_string()),
        };
    }

    if let Some(api_error) = error.downcast_ref::<ApiError>() {
        if api_error.is_unauthorized() {
            return Action::SessionExpired(api_error.user_message());
        }
        return Action::ShowDialog(DialogType::Error(format!("{}\n\n{}", context, api_error.user_message())));
    }

    if let Some(validation_error) = error.downcast_ref::<ValidationError>() {
        return Action::ShowDialog(DialogType::Error(validation_error.to_string()));
    }

    Action::ShowDialog(DialogType::Error(format!("{}\n\n{}", context, error)))
}

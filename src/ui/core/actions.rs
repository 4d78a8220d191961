use crate::model::{Task, TaskDraft, TaskUpdate};
use crate::service::{AdminDashboard, AdminForm, Registration};
use crate::session::Claims;

/// Top-level views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Dashboard,
    Admin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Screen),
    NextItem,
    PreviousItem,

    // Authentication
    Login {
        email: String,
        password: String,
    },
    GoogleLogin {
        id_token: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
    Logout,
    SessionRestored(Option<Claims>),
    LoggedIn(Claims),
    Registered(Registration),
    AuthFailed(String),
    /// Carries the reason the stored token could not be removed, if any
    LoggedOut(Option<String>),
    SessionExpired(String),

    // Task operations
    LoadTasks,
    TasksLoaded(Vec<Task>),
    CreateTask(TaskDraft),
    EditTask(String),
    TaskFetched(Task),
    UpdateTask {
        id: String,
        update: TaskUpdate,
    },
    ToggleTask(String),
    DeleteTask(String),
    /// A mutation was confirmed; carries the reconciled collection
    TasksChanged {
        tasks: Vec<Task>,
        message: String,
    },

    // Admin operations
    OpenAdmin,
    AdminLoaded(AdminDashboard),
    LoadUserTasks(String),
    UserTasksLoaded {
        user_id: String,
        tasks: Vec<Task>,
    },
    CreateAdmin(AdminForm),
    AdminCreated,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    SetStatus(String),

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    TaskCreation,
    /// Prefilled from a fresh copy of the task
    TaskEdit {
        task: Task,
    },
    DeleteConfirmation {
        task_id: String,
        title: String,
    },
    CreateAdmin,
    Error(String),
    Info(String),
    Help,
    Logs,
}

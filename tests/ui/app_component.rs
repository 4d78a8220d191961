use crate::support::{ctrl, key, render_to_string};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use crossterm::event::KeyCode;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use taskdesk::api::{ApiError, CreateAdminRequest, LoginResponse, RegisterRequest, TaskApi};
use taskdesk::config::Config;
use taskdesk::constants::{
    ERROR_ADMIN_ONLY, ERROR_LOGOUT_FAILED, SUCCESS_LOGOUT, SUCCESS_REGISTERED, SUCCESS_TASK_COMPLETED,
};
use taskdesk::logger::Logger;
use taskdesk::model::{NewTask, PlatformStats, Priority, Task, TaskUpdate, User};
use taskdesk::service::{Registration, TaskService};
use taskdesk::session::SessionStore;
use taskdesk::ui::app_component::AppComponent;
use taskdesk::ui::core::{Action, Component, DialogType, EventType, Screen};

fn token_for(is_admin: bool) -> String {
    let payload = json!({"id": "u1", "name": "Ada", "email": "ada@example.com", "isAdmin": is_admin});
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

fn stored_task(id: &str, completed: bool) -> Task {
    crate::support::task(id, &format!("Task {}", id), completed, Priority::Medium, None)
}

/// Backend with one account whose password is "secret"
struct FakeBackend {
    is_admin: bool,
    tasks: Mutex<Vec<Task>>,
}

impl FakeBackend {
    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: "Task not found".to_string(),
        }
    }

    fn with_task<T>(&self, task_id: &str, apply: impl FnOnce(&mut Task) -> T) -> Result<T, ApiError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks.iter_mut().find(|t| t.id == task_id).ok_or_else(Self::not_found)?;
        Ok(apply(task))
    }
}

#[async_trait]
impl TaskApi for FakeBackend {
    async fn register(&self, _request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        Ok(None)
    }

    async fn login(&self, _email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        if password != "secret" {
            return Err(ApiError::Status {
                status: 401,
                message: "Invalid credentials".to_string(),
            });
        }
        Ok(LoginResponse {
            token: token_for(self.is_admin),
            user: None,
        })
    }

    async fn google_login(&self, _id_token: &str) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            token: token_for(false),
            user: None,
        })
    }

    async fn list_tasks(&self, _token: &str, _user_id: &str) -> Result<Vec<Task>, ApiError> {
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn fetch_task(&self, _token: &str, task_id: &str) -> Result<Task, ApiError> {
        self.with_task(task_id, |task| task.clone())
    }

    async fn create_task(&self, _token: &str, new_task: &NewTask) -> Result<Task, ApiError> {
        let task = Task {
            id: "new".to_string(),
            title: new_task.title.clone(),
            description: Some(new_task.description.clone()),
            priority: new_task.priority.clone(),
            due_date: new_task.due_date,
            completed: false,
            user_id: Some(new_task.user_id.clone()),
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, _token: &str, task_id: &str, update: &TaskUpdate) -> Result<(), ApiError> {
        self.with_task(task_id, |task| task.apply_update(update))
    }

    async fn toggle_task(&self, _token: &str, task_id: &str) -> Result<Task, ApiError> {
        self.with_task(task_id, |task| {
            task.completed = !task.completed;
            task.clone()
        })
    }

    async fn delete_task(&self, _token: &str, task_id: &str) -> Result<(), ApiError> {
        self.tasks.lock().unwrap().retain(|t| t.id != task_id);
        Ok(())
    }

    async fn admin_stats(&self, _token: &str) -> Result<PlatformStats, ApiError> {
        Ok(PlatformStats::default())
    }

    async fn admin_users(&self, _token: &str) -> Result<Vec<User>, ApiError> {
        Ok(Vec::new())
    }

    async fn admin_user_tasks(&self, _token: &str, _user_id: &str) -> Result<Vec<Task>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_admin(&self, _token: &str, _request: &CreateAdminRequest) -> Result<(), ApiError> {
        Ok(())
    }
}

fn app(name: &str, is_admin: bool) -> AppComponent {
    let backend = FakeBackend {
        is_admin,
        tasks: Mutex::new(vec![stored_task("1", false), stored_task("2", true)]),
    };
    let dir = std::env::temp_dir().join(format!("taskdesk-app-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let service = TaskService::new(Arc::new(backend), SessionStore::new(dir.join("session.json")));
    AppComponent::new(service, &Config::default(), Logger::new())
}

/// Apply background results until `done` holds
async fn settle(app: &mut AppComponent, done: impl Fn(&AppComponent) -> bool) {
    for _ in 0..200 {
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("background work did not settle");
}

async fn signed_in(name: &str, is_admin: bool) -> AppComponent {
    let mut app = app(name, is_admin);
    app.dispatch(Action::Login {
        email: "ada@example.com".to_string(),
        password: "secret".to_string(),
    });
    settle(&mut app, |app| app.task_list().view().tasks.len() == 2).await;
    app
}

#[tokio::test]
async fn test_starts_on_login_without_stored_session() {
    let mut app = app("start", false);
    assert_eq!(app.screen(), Screen::Login);
    app.start();
    settle(&mut app, |app| !app.is_busy()).await;
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.claims().is_none());
}

#[tokio::test]
async fn test_ctrl_c_quits() {
    let mut app = app("quit", false);
    app.handle_event(EventType::Key(ctrl('c')));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_login_shows_dashboard() {
    let app = signed_in("login", false).await;
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.claims().map(|c| c.id.as_str()), Some("u1"));
    assert_eq!(app.task_list().view().stats.completed, 1);
}

#[tokio::test]
async fn test_wrong_password_stays_on_form() {
    let mut app = app("badlogin", false);
    app.dispatch(Action::Login {
        email: "ada@example.com".to_string(),
        password: "nope".to_string(),
    });
    settle(&mut app, |app| app.auth().error().is_some()).await;
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.auth().error().unwrap_or_default().contains("Invalid credentials"));
}

#[tokio::test]
async fn test_toggle_from_keyboard() {
    let mut app = signed_in("toggle", false).await;
    app.handle_event(EventType::Key(key(KeyCode::Char(' '))));
    settle(&mut app, |app| app.task_list().view().stats.completed == 2).await;
    assert_eq!(app.status_bar().message(), Some(SUCCESS_TASK_COMPLETED));
}

#[tokio::test]
async fn test_edit_opens_prefilled_dialog() {
    let mut app = signed_in("edit", false).await;
    app.dispatch(Action::EditTask("2".to_string()));
    settle(&mut app, |app| app.dialog().is_visible()).await;
    assert!(matches!(
        &app.dialog().dialog_type,
        Some(DialogType::TaskEdit { task }) if task.id == "2"
    ));
}

#[tokio::test]
async fn test_session_expiry_returns_to_login() {
    let mut app = signed_in("expired", false).await;
    app.dispatch(Action::SessionExpired("Token expired".to_string()));

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.claims().is_none());
    assert_eq!(app.auth().error(), Some("Token expired"));
    assert!(app.task_list().view().tasks.is_empty());
}

#[tokio::test]
async fn test_sign_out_returns_to_login() {
    let mut app = signed_in("logout", false).await;
    app.handle_event(EventType::Key(key(KeyCode::Char('L'))));
    settle(&mut app, |app| app.screen() == Screen::Login).await;

    assert!(app.claims().is_none());
    assert_eq!(app.auth().notice(), Some(SUCCESS_LOGOUT));
    assert!(!app.is_busy());
}

#[tokio::test]
async fn test_results_arriving_after_sign_out_are_ignored() {
    let mut app = signed_in("late", false).await;
    app.dispatch(Action::LoggedOut(None));

    app.dispatch(Action::TasksLoaded(vec![stored_task("1", false)]));
    app.dispatch(Action::TaskFetched(stored_task("1", false)));
    assert!(app.task_list().view().tasks.is_empty());
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_failed_token_removal_still_signs_out() {
    let mut app = signed_in("stuck", false).await;
    app.dispatch(Action::LoggedOut(Some("permission denied".to_string())));

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.claims().is_none());
    assert_eq!(
        app.auth().error(),
        Some(format!("{}: permission denied", ERROR_LOGOUT_FAILED).as_str())
    );
}

#[tokio::test]
async fn test_admin_panel_requires_admin() {
    let mut app = signed_in("notadmin", false).await;
    app.handle_event(EventType::Key(key(KeyCode::Char('A'))));
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Error(ERROR_ADMIN_ONLY.to_string()))
    );
}

#[tokio::test]
async fn test_admin_opens_panel() {
    let mut app = signed_in("admin", true).await;
    app.dispatch(Action::OpenAdmin);
    assert_eq!(app.screen(), Screen::Admin);
    settle(&mut app, |app| app.admin().dashboard().is_some()).await;

    app.handle_event(EventType::Key(key(KeyCode::Char('b'))));
    assert_eq!(app.screen(), Screen::Dashboard);
}

#[tokio::test]
async fn test_registration_without_token_asks_to_sign_in() {
    let mut app = app("register", false);
    app.dispatch(Action::Navigate(Screen::Register));
    assert_eq!(app.screen(), Screen::Register);

    app.dispatch(Action::Registered(Registration::LoginRequired));
    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.auth().notice(), Some(SUCCESS_REGISTERED));
}

#[tokio::test]
async fn test_dashboard_requires_session() {
    let mut app = app("nodash", false);
    app.dispatch(Action::Navigate(Screen::Dashboard));
    assert_eq!(app.screen(), Screen::Login);
}

#[tokio::test]
async fn test_help_dialog_and_render() {
    let mut app = signed_in("help", false).await;
    app.handle_event(EventType::Key(key(KeyCode::Char('?'))));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));

    let screen = render_to_string(120, 40, |f, area| app.render(f, area));
    assert!(screen.contains("Help"));

    // Keys go to the dialog while it is open
    app.handle_event(EventType::Key(key(KeyCode::Char('q'))));
    assert!(!app.should_quit());
    assert!(!app.dialog().is_visible());
}

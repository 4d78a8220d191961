use crate::api::ApiError;
use crate::config::Config;
use crate::constants::{
    ERROR_ADMIN_CREATE_FAILED, ERROR_ADMIN_LOAD_FAILED, ERROR_ADMIN_ONLY, ERROR_FETCH_TASKS_FAILED,
    ERROR_FETCH_TASK_FAILED, ERROR_LOGIN_FAILED, ERROR_LOGOUT_FAILED, ERROR_REGISTER_FAILED, ERROR_RESTORE_FAILED,
    ERROR_TASK_CREATE_FAILED, ERROR_TASK_DELETE_FAILED, ERROR_TASK_TOGGLE_FAILED, ERROR_TASK_UPDATE_FAILED,
    ERROR_USER_TASKS_FAILED, SUCCESS_ADMIN_CREATED, SUCCESS_LOGIN, SUCCESS_LOGOUT, SUCCESS_REGISTERED,
    SUCCESS_TASK_COMPLETED, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_REOPENED, SUCCESS_TASK_UPDATED,
};
use crate::logger::Logger;
use crate::service::{Registration, TaskService};
use crate::session::Claims;
use crate::ui::components::{AdminComponent, AuthComponent, AuthMode, DialogComponent, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Screen},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// Top-level component: owns the screens, the dialog overlay and the
/// background operations, and applies every [`Action`] they produce.
pub struct AppComponent {
    // Screens
    auth: AuthComponent,
    task_list: TaskListComponent,
    admin: AdminComponent,
    dialog: DialogComponent,
    status_bar: StatusBar,

    // Application state
    screen: Screen,
    claims: Option<Claims>,
    mouse_enabled: bool,

    // Services
    service: TaskService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: TaskService, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        Self {
            auth: AuthComponent::new(),
            task_list: TaskListComponent::new(&config.ui, config.display.clone()),
            admin: AdminComponent::new(&config.display.date_format),
            dialog,
            status_bar: StatusBar::new(),
            screen: Screen::Login,
            claims: None,
            mouse_enabled: config.ui.mouse_enabled,
            service,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn auth(&self) -> &AuthComponent {
        &self.auth
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn admin(&self) -> &AdminComponent {
        &self.admin
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Pick up a stored session, if there is one
    pub fn start(&mut self) {
        let service = self.service.clone();
        self.task_manager
            .spawn_operation("Restoring session", ERROR_RESTORE_FAILED, move || async move {
                Ok(Action::SessionRestored(service.restore_session().await?))
            });
    }

    /// Apply `action` and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            next = self.handle_app_action(next);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) if self.mouse_enabled && !self.dialog.is_visible() => match mouse.kind {
                MouseEventKind::ScrollDown => Action::NextItem,
                MouseEventKind::ScrollUp => Action::PreviousItem,
                _ => Action::None,
            },
            _ => Action::None,
        };
        self.dispatch(action);
    }

    /// Drain the results of finished background operations
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished operations", finished.len());
        }
        self.status_bar
            .set_activity(self.task_manager.current_activity().map(str::to_string));

        actions
    }

    /// Keys that work on the dashboard and the admin panel alike
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('A') => Action::OpenAdmin,
            KeyCode::Char('L') => Action::Logout,
            _ => Action::None,
        }
    }

    fn show_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Login => self.auth.set_mode(AuthMode::Login),
            Screen::Register => self.auth.set_mode(AuthMode::Register),
            Screen::Dashboard | Screen::Admin => {}
        }
        self.screen = screen;
    }

    fn begin_session(&mut self, claims: Claims) -> Action {
        log::info!("Session: signed in as {}", claims.email);
        self.task_list.set_claims(Some(claims.clone()));
        self.claims = Some(claims);
        self.auth.reset();
        self.show_screen(Screen::Dashboard);
        Action::LoadTasks
    }

    /// Forget everything that belonged to the signed-in user, including
    /// operations still running on their behalf and results not yet applied
    fn end_session(&mut self) {
        self.task_manager.cancel_all_tasks();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Session: discarding {:?}", action);
        }
        self.status_bar.set_activity(None);
        self.claims = None;
        self.task_list.clear();
        self.admin.clear();
        self.dialog.update(Action::HideDialog);
        self.status_bar.clear_message();
        self.show_screen(Screen::Login);
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        if self.claims.is_none() && is_session_result(&action) {
            log::debug!("Session: ignoring {:?} without a signed-in user", action);
            return Action::None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(Screen::Admin) => Action::OpenAdmin,
            Action::Navigate(screen) => {
                if matches!(screen, Screen::Dashboard) && self.claims.is_none() {
                    self.show_screen(Screen::Login);
                } else {
                    self.show_screen(screen);
                }
                Action::None
            }
            Action::NextItem | Action::PreviousItem => match self.screen {
                Screen::Dashboard => self.task_list.update(action),
                Screen::Admin => self.admin.update(action),
                Screen::Login | Screen::Register => Action::None,
            },

            // Authentication
            Action::Login { email, password } => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Signing in", ERROR_LOGIN_FAILED, move || async move {
                        Ok(match service.login(&email, &password).await {
                            Ok(claims) => Action::LoggedIn(claims),
                            Err(e) => auth_failure(ERROR_LOGIN_FAILED, &e),
                        })
                    });
                Action::None
            }
            Action::GoogleLogin { id_token } => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Signing in with Google", ERROR_LOGIN_FAILED, move || async move {
                        Ok(match service.google_login(&id_token).await {
                            Ok(claims) => Action::LoggedIn(claims),
                            Err(e) => auth_failure(ERROR_LOGIN_FAILED, &e),
                        })
                    });
                Action::None
            }
            Action::Register { name, email, password } => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Creating account", ERROR_REGISTER_FAILED, move || async move {
                        Ok(match service.register(&name, &email, &password).await {
                            Ok(registration) => Action::Registered(registration),
                            Err(e) => auth_failure(ERROR_REGISTER_FAILED, &e),
                        })
                    });
                Action::None
            }
            Action::SessionRestored(Some(claims)) => self.begin_session(claims),
            Action::SessionRestored(None) => {
                self.show_screen(Screen::Login);
                Action::None
            }
            Action::LoggedIn(claims) => {
                self.status_bar.set_message(SUCCESS_LOGIN);
                self.begin_session(claims)
            }
            Action::Registered(Registration::SignedIn(claims)) => Action::LoggedIn(claims),
            Action::Registered(Registration::LoginRequired) => {
                self.show_screen(Screen::Login);
                self.auth.set_notice(SUCCESS_REGISTERED);
                Action::None
            }
            Action::AuthFailed(message) => {
                self.auth.set_error(message);
                Action::None
            }
            Action::Logout => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Signing out", ERROR_LOGOUT_FAILED, move || async move {
                        // The in-memory session is gone either way
                        let failure = service.logout().await.err().map(|e| format!("{:#}", e));
                        Ok(Action::LoggedOut(failure))
                    });
                Action::None
            }
            Action::LoggedOut(failure) => {
                self.end_session();
                match failure {
                    None => self.auth.set_notice(SUCCESS_LOGOUT),
                    Some(reason) => {
                        log::warn!("Session: could not clear stored session: {}", reason);
                        self.auth.set_error(format!("{}: {}", ERROR_LOGOUT_FAILED, reason));
                    }
                }
                Action::None
            }
            Action::SessionExpired(message) => {
                log::warn!("Session: ended ({})", message);
                self.end_session();
                self.auth.set_error(message);
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Signing out", ERROR_LOGOUT_FAILED, move || async move {
                        if let Err(e) = service.logout().await {
                            log::warn!("Session: could not clear stored session: {:#}", e);
                        }
                        Ok(Action::None)
                    });
                Action::None
            }

            // Tasks
            Action::LoadTasks => {
                self.task_list.set_loading(true);
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Loading tasks", ERROR_FETCH_TASKS_FAILED, move || async move {
                        Ok(Action::TasksLoaded(service.load_tasks().await?))
                    });
                Action::None
            }
            Action::TasksLoaded(tasks) => {
                log::info!("Tasks: loaded {}", tasks.len());
                self.task_list.set_tasks(tasks);
                Action::None
            }
            Action::CreateTask(draft) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Creating task", ERROR_TASK_CREATE_FAILED, move || async move {
                        service.create_task(draft).await?;
                        Ok(Action::TasksChanged {
                            tasks: service.tasks().await,
                            message: SUCCESS_TASK_CREATED.to_string(),
                        })
                    });
                Action::None
            }
            Action::EditTask(task_id) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Loading task", ERROR_FETCH_TASK_FAILED, move || async move {
                        Ok(Action::TaskFetched(service.fetch_task(&task_id).await?))
                    });
                Action::None
            }
            Action::TaskFetched(task) => Action::ShowDialog(DialogType::TaskEdit { task }),
            Action::UpdateTask { id, update } => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Saving task", ERROR_TASK_UPDATE_FAILED, move || async move {
                        service.update_task(&id, update).await?;
                        Ok(Action::TasksChanged {
                            tasks: service.tasks().await,
                            message: SUCCESS_TASK_UPDATED.to_string(),
                        })
                    });
                Action::None
            }
            Action::ToggleTask(task_id) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Updating task", ERROR_TASK_TOGGLE_FAILED, move || async move {
                        let task = service.toggle_task(&task_id).await?;
                        let message = if task.completed {
                            SUCCESS_TASK_COMPLETED
                        } else {
                            SUCCESS_TASK_REOPENED
                        };
                        Ok(Action::TasksChanged {
                            tasks: service.tasks().await,
                            message: message.to_string(),
                        })
                    });
                Action::None
            }
            Action::DeleteTask(task_id) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Deleting task", ERROR_TASK_DELETE_FAILED, move || async move {
                        service.delete_task(&task_id).await?;
                        Ok(Action::TasksChanged {
                            tasks: service.tasks().await,
                            message: SUCCESS_TASK_DELETED.to_string(),
                        })
                    });
                Action::None
            }
            Action::TasksChanged { tasks, message } => {
                self.task_list.set_tasks(tasks);
                self.status_bar.set_message(message);
                Action::None
            }

            // Admin panel
            Action::OpenAdmin => {
                if !self.claims.as_ref().is_some_and(|claims| claims.is_admin) {
                    return Action::ShowDialog(DialogType::Error(ERROR_ADMIN_ONLY.to_string()));
                }
                self.show_screen(Screen::Admin);
                self.admin.set_loading(true);
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Loading admin dashboard", ERROR_ADMIN_LOAD_FAILED, move || async move {
                        Ok(Action::AdminLoaded(service.admin_dashboard().await?))
                    });
                Action::None
            }
            Action::AdminLoaded(dashboard) => {
                self.admin.set_dashboard(dashboard);
                Action::None
            }
            Action::LoadUserTasks(user_id) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Loading user tasks", ERROR_USER_TASKS_FAILED, move || async move {
                        let tasks = service.admin_user_tasks(&user_id).await?;
                        Ok(Action::UserTasksLoaded { user_id, tasks })
                    });
                Action::None
            }
            Action::UserTasksLoaded { user_id, tasks } => {
                self.admin.set_user_tasks(user_id, tasks);
                Action::None
            }
            Action::CreateAdmin(form) => {
                let service = self.service.clone();
                self.task_manager
                    .spawn_operation("Creating admin", ERROR_ADMIN_CREATE_FAILED, move || async move {
                        service.create_admin(form).await?;
                        Ok(Action::AdminCreated)
                    });
                Action::None
            }
            Action::AdminCreated => {
                // Refresh counts and the user table behind the notice
                self.dispatch(Action::OpenAdmin);
                Action::ShowDialog(DialogType::Info(SUCCESS_ADMIN_CREATED.to_string()))
            }

            // UI
            Action::ShowDialog(dialog_type) => {
                log::debug!("Dialog: showing {:?}", dialog_type);
                self.dialog.update(Action::ShowDialog(dialog_type))
            }
            Action::HideDialog => self.dialog.update(Action::HideDialog),
            Action::SetStatus(message) => {
                self.status_bar.set_message(message);
                Action::None
            }
            Action::None => Action::None,
        }
    }
}

/// Results that only make sense for the user who requested them
fn is_session_result(action: &Action) -> bool {
    matches!(
        action,
        Action::TasksLoaded(_)
            | Action::TasksChanged { .. }
            | Action::TaskFetched(_)
            | Action::AdminLoaded(_)
            | Action::UserTasksLoaded { .. }
            | Action::AdminCreated
    )
}

/// Sign-in failures stay on the form instead of ending a session
fn auth_failure(prefix: &str, error: &anyhow::Error) -> Action {
    let reason = match error.downcast_ref::<ApiError>() {
        Some(api_error) => api_error.user_message(),
        None => error.to_string(),
    };
    Action::AuthFailed(format!("{}: {}", prefix, reason))
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        let action = match self.screen {
            Screen::Login | Screen::Register => return self.auth.handle_key_events(key),
            Screen::Dashboard => self.task_list.handle_key_events(key),
            Screen::Admin => self.admin.handle_key_events(key),
        };

        if matches!(action, Action::None) {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        match self.screen {
            Screen::Login | Screen::Register => self.auth.render(f, chunks[0]),
            Screen::Dashboard => self.task_list.render(f, chunks[0]),
            Screen::Admin => self.admin.render(f, chunks[0]),
        }
        self.status_bar.render(f, chunks[1], self.screen);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

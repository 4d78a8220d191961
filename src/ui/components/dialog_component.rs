//! Modal dialog component for various user interactions.
//!
//! This component is a container for every dialog the application shows:
//!
//! # Dialog Types
//! - **Task dialogs** - Create and edit tasks, confirm deletion
//! - **Admin dialogs** - Create an administrator account
//! - **System dialogs** - Errors, notices, help and logs
//!
//! Form dialogs validate locally and keep the dialog open with an inline
//! message when a check fails; only valid input becomes an action.

use crate::logger::Logger;
use crate::ui::components::dialogs::{admin_dialogs, system_dialogs, task_dialogs};
use crate::ui::components::form::{Form, FormEvent};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    form: Form,
    form_error: Option<String>,
    // Scrolling support for long content dialogs
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            form: Form::default(),
            form_error: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.form = match &dialog_type {
            DialogType::TaskCreation => task_dialogs::task_creation_form(),
            DialogType::TaskEdit { task } => task_dialogs::task_edit_form(task),
            DialogType::CreateAdmin => admin_dialogs::create_admin_form(),
            _ => Form::default(),
        };
        self.form_error = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        self.dialog_type = Some(dialog_type);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.form = Form::default();
        self.form_error = None;
        self.scroll_offset = 0;
    }

    /// Turn the form into an action, or keep the dialog open with the reason
    fn handle_submit(&mut self) -> Action {
        let result = match &self.dialog_type {
            Some(DialogType::TaskCreation) => task_dialogs::draft_from_form(&self.form).map(Action::CreateTask),
            Some(DialogType::TaskEdit { task }) => {
                task_dialogs::update_from_form(task, &self.form).map(|update| Action::UpdateTask {
                    id: task.id.clone(),
                    update,
                })
            }
            Some(DialogType::CreateAdmin) => admin_dialogs::admin_form_from(&self.form).map(Action::CreateAdmin),
            _ => return Action::None,
        };

        match result {
            Ok(action) => {
                self.clear_dialog();
                action
            }
            Err(e) => {
                self.form_error = Some(e.to_string());
                Action::None
            }
        }
    }

    fn scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(10),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(10),
            KeyCode::Home => self.scroll_offset = 0,
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match dialog_type {
            DialogType::TaskCreation | DialogType::TaskEdit { .. } | DialogType::CreateAdmin => {
                match self.form.handle_key(key) {
                    FormEvent::Submit => self.handle_submit(),
                    FormEvent::Cancel => Action::HideDialog,
                    FormEvent::None => Action::None,
                }
            }
            DialogType::DeleteConfirmation { task_id, .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    let action = Action::DeleteTask(task_id.clone());
                    self.clear_dialog();
                    action
                }
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Error(_) | DialogType::Info(_) => {
                if self.scroll_keys(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll_keys(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.scroll_keys(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = &self.dialog_type else {
            return;
        };

        match dialog_type {
            DialogType::TaskCreation => {
                task_dialogs::render_task_form_dialog(f, rect, " New Task ", &self.form, self.form_error.as_deref())
            }
            DialogType::TaskEdit { .. } => {
                task_dialogs::render_task_form_dialog(f, rect, " Edit Task ", &self.form, self.form_error.as_deref())
            }
            DialogType::CreateAdmin => {
                admin_dialogs::render_create_admin_dialog(f, rect, &self.form, self.form_error.as_deref())
            }
            DialogType::DeleteConfirmation { title, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, title)
            }
            DialogType::Error(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                "❌ Error",
                Color::Red,
                message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Info(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                "ℹ Info",
                Color::Blue,
                message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                self.logger.as_ref(),
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}

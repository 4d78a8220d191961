//! Sign-in, Google sign-in and registration screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::APP_TITLE;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_error_paragraph, create_instructions_paragraph, shortcuts, InstructionShortcut,
};
use crate::ui::components::form::{Form, FormEvent, FormField};
use crate::ui::core::{Action, Component, Screen};
use crate::ui::layout::LayoutManager;
use crate::validation;

const NAME: &str = "Name";
const EMAIL: &str = "Email";
const PASSWORD: &str = "Password";
const GOOGLE_TOKEN: &str = "Google ID token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Google,
    Register,
}

pub struct AuthComponent {
    mode: AuthMode,
    form: Form,
    error: Option<String>,
    notice: Option<String>,
}

impl Default for AuthComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthComponent {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            form: Self::form_for(AuthMode::Login),
            error: None,
            notice: None,
        }
    }

    fn form_for(mode: AuthMode) -> Form {
        match mode {
            AuthMode::Login => Form::new(vec![FormField::text(EMAIL, ""), FormField::secret(PASSWORD)]),
            AuthMode::Google => Form::new(vec![FormField::text(GOOGLE_TOKEN, "")]),
            AuthMode::Register => Form::new(vec![
                FormField::text(NAME, ""),
                FormField::text(EMAIL, ""),
                FormField::secret(PASSWORD),
            ]),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Switch mode with an empty form; the notice survives so that
    /// "account created" stays visible on the way back to sign-in.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            self.mode = mode;
            self.form = Self::form_for(mode);
        }
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.notice = None;
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Forget everything typed so far
    pub fn reset(&mut self) {
        self.form = Self::form_for(self.mode);
        self.error = None;
    }

    fn submit(&mut self) -> Action {
        let form = &self.form;
        let result = match self.mode {
            AuthMode::Login => validation::validate_login(form.value(EMAIL), form.value(PASSWORD)).map(|_| Action::Login {
                email: form.value(EMAIL).trim().to_string(),
                password: form.value(PASSWORD).to_string(),
            }),
            AuthMode::Google => {
                if form.value(GOOGLE_TOKEN).trim().is_empty() {
                    Err(validation::ValidationError::MissingFields)
                } else {
                    Ok(Action::GoogleLogin {
                        id_token: form.value(GOOGLE_TOKEN).trim().to_string(),
                    })
                }
            }
            AuthMode::Register => {
                validation::validate_registration(form.value(NAME), form.value(EMAIL), form.value(PASSWORD)).map(|_| {
                    Action::Register {
                        name: form.value(NAME).trim().to_string(),
                        email: form.value(EMAIL).trim().to_string(),
                        password: form.value(PASSWORD).to_string(),
                    }
                })
            }
        };

        match result {
            Ok(action) => {
                self.error = None;
                action
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Action::None
            }
        }
    }

    fn title(&self) -> String {
        match self.mode {
            AuthMode::Login => format!(" {} - Sign in ", APP_TITLE),
            AuthMode::Google => format!(" {} - Sign in with Google ", APP_TITLE),
            AuthMode::Register => format!(" {} - Create account ", APP_TITLE),
        }
    }

    fn instructions(&self) -> Vec<InstructionShortcut> {
        let mut instructions = vec![shortcuts::ENTER_SUBMIT, shortcuts::SEPARATOR, shortcuts::TAB_NEXT];
        match self.mode {
            AuthMode::Login => {
                instructions.extend([
                    shortcuts::SEPARATOR,
                    ("Ctrl+N", Color::Cyan, " Register"),
                    shortcuts::SEPARATOR,
                    ("Ctrl+G", Color::Cyan, " Google"),
                    shortcuts::SEPARATOR,
                    ("Esc", Color::Red, " Quit"),
                ]);
            }
            AuthMode::Google | AuthMode::Register => {
                instructions.extend([shortcuts::SEPARATOR, ("Esc", Color::Red, " Back to sign in")]);
            }
        }
        instructions
    }
}

impl Component for AuthComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => Action::Navigate(Screen::Register),
                KeyCode::Char('g') => {
                    self.set_mode(AuthMode::Google);
                    Action::None
                }
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match self.form.handle_key(key) {
            FormEvent::Submit => self.submit(),
            FormEvent::Cancel => match self.mode {
                AuthMode::Login => Action::Quit,
                AuthMode::Google => {
                    self.set_mode(AuthMode::Login);
                    Action::None
                }
                AuthMode::Register => Action::Navigate(Screen::Login),
            },
            FormEvent::None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let message_lines = 2;
        let height = self.form.height() + message_lines + 4;
        let area = LayoutManager::centered_rect_lines(60, height, rect);
        f.render_widget(Clear, area);

        let title = self.title();
        f.render_widget(create_dialog_block(&title, Color::Cyan), area);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.form.height()),
                Constraint::Length(message_lines),
                Constraint::Min(1),
            ])
            .split(inner);

        self.form.render(f, chunks[0]);

        if let Some(notice) = &self.notice {
            let paragraph = Paragraph::new(notice.clone())
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, chunks[1]);
        } else {
            f.render_widget(create_error_paragraph(self.error.as_deref()).wrap(Wrap { trim: true }), chunks[1]);
        }

        f.render_widget(create_instructions_paragraph(&self.instructions()), chunks[2]);
    }
}

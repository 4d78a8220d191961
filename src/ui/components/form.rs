//! Multi-field text form shared by the auth screen and the dialogs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::ui::components::dialogs::common::{create_input_paragraph, create_selection_paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered masked
    Secret,
    /// One of a fixed set of options, picked with the arrow keys
    Choice { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn secret(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            kind: FieldKind::Secret,
        }
    }

    /// `selected` is clamped to the available options
    pub fn choice(label: impl Into<String>, options: Vec<String>, selected: usize) -> Self {
        let selected = selected.min(options.len().saturating_sub(1));
        let value = options.get(selected).cloned().unwrap_or_default();
        Self {
            label: label.into(),
            value,
            kind: FieldKind::Choice { options, selected },
        }
    }

    fn cycle(&mut self, forward: bool) {
        if let FieldKind::Choice { options, selected } = &mut self.kind {
            if options.is_empty() {
                return;
            }
            *selected = if forward {
                (*selected + 1) % options.len()
            } else {
                (*selected + options.len() - 1) % options.len()
            };
            self.value = options[*selected].clone();
        }
    }

    fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Secret => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }
}

/// What a key press meant for the form as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    None,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    /// Value of the field with this label, empty when absent
    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
            .unwrap_or_default()
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Esc => return FormEvent::Cancel,
            KeyCode::Enter => return FormEvent::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            _ => {}
        }

        let Some(field) = self.fields.get_mut(self.focused) else {
            return FormEvent::None;
        };

        match (&field.kind, key.code) {
            (FieldKind::Choice { .. }, KeyCode::Left) => field.cycle(false),
            (FieldKind::Choice { .. }, KeyCode::Right | KeyCode::Char(' ')) => field.cycle(true),
            (FieldKind::Choice { .. }, _) => {}
            (_, KeyCode::Backspace) => {
                field.value.pop();
            }
            (_, KeyCode::Char(c)) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.value.push(c),
            _ => {}
        }
        FormEvent::None
    }

    /// Rows needed to draw every field
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 * 3
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self.fields.iter().map(|_| Constraint::Length(3)).collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (index, (field, chunk)) in self.fields.iter().zip(chunks.iter()).enumerate() {
            let focused = index == self.focused;
            let paragraph = match field.kind {
                FieldKind::Choice { .. } => create_selection_paragraph(&field.value, &field.label, focused),
                _ => create_input_paragraph(&field.display_value(), &field.label, focused),
            };
            f.render_widget(paragraph, *chunk);
        }
    }
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

use super::common::{
    self, create_dialog_block, create_error_paragraph, create_instructions_paragraph, InstructionShortcut,
};
use crate::model::{Priority, Task, TaskDraft, TaskUpdate};
use crate::ui::components::form::{Form, FormField};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crate::validation::{self, ValidationError};

pub const TITLE: &str = "Title";
pub const DESCRIPTION: &str = "Description";
pub const PRIORITY: &str = "Priority";
pub const DUE_DATE: &str = "Due date (YYYY-MM-DD)";
pub const STATUS: &str = "Status";

const STATUS_PENDING: &str = "Pending";
const STATUS_COMPLETED: &str = "Completed";

const TASK_FORM_SHORTCUTS: [InstructionShortcut; 7] = [
    common::shortcuts::ENTER_SUBMIT,
    common::shortcuts::SEPARATOR,
    common::shortcuts::TAB_NEXT,
    common::shortcuts::SEPARATOR,
    common::shortcuts::ARROWS_CHOOSE,
    common::shortcuts::SEPARATOR,
    common::shortcuts::ESC_CANCEL,
];

fn priority_options(current: &Priority) -> (Vec<String>, usize) {
    let mut options: Vec<String> = Priority::SELECTABLE.iter().map(|p| p.label().to_string()).collect();
    let selected = match current {
        Priority::Unrecognized(label) if !label.is_empty() => {
            // Keep an unknown label selectable so an edit does not rewrite it
            options.push(label.clone());
            options.len() - 1
        }
        Priority::Unrecognized(_) => 0,
        known => Priority::SELECTABLE.iter().position(|p| p == known).unwrap_or(0),
    };
    (options, selected)
}

/// Empty creation form: priority High, due today
pub fn task_creation_form() -> Form {
    let (options, selected) = priority_options(&Priority::High);
    Form::new(vec![
        FormField::text(TITLE, ""),
        FormField::text(DESCRIPTION, ""),
        FormField::choice(PRIORITY, options, selected),
        FormField::text(DUE_DATE, datetime::format_today()),
    ])
}

/// Edit form prefilled from the task
pub fn task_edit_form(task: &Task) -> Form {
    let (options, selected) = priority_options(&task.priority);
    let due = task.due_day().map(datetime::format_ymd).unwrap_or_default();
    Form::new(vec![
        FormField::text(TITLE, task.title.clone()),
        FormField::text(DESCRIPTION, task.description_text()),
        FormField::choice(PRIORITY, options, selected),
        FormField::text(DUE_DATE, due),
        FormField::choice(
            STATUS,
            vec![STATUS_PENDING.to_string(), STATUS_COMPLETED.to_string()],
            usize::from(task.completed),
        ),
    ])
}

fn parse_due(value: &str) -> Result<Option<chrono::NaiveDate>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    datetime::parse_date(value)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(value.to_string()))
}

/// Read a creation form; every task needs a title and a due date
pub fn draft_from_form(form: &Form) -> Result<TaskDraft, ValidationError> {
    validation::validate_task_form(form.value(TITLE))?;
    let due = parse_due(form.value(DUE_DATE))?
        .ok_or(ValidationError::MissingDueDate)?;

    Ok(TaskDraft {
        title: form.value(TITLE).trim().to_string(),
        description: form.value(DESCRIPTION).trim().to_string(),
        priority: Priority::from(form.value(PRIORITY)),
        due,
    })
}

/// Read an edit form into the full replacement for `task`.
///
/// Clearing the due date field removes the due date.
pub fn update_from_form(task: &Task, form: &Form) -> Result<TaskUpdate, ValidationError> {
    validation::validate_task_form(form.value(TITLE))?;
    let due = parse_due(form.value(DUE_DATE))?;

    let description = form.value(DESCRIPTION).trim().to_string();
    let mut update = TaskUpdate::from_task(task);
    update.title = form.value(TITLE).trim().to_string();
    update.description = if description.is_empty() && task.description.is_none() {
        None
    } else {
        Some(description)
    };
    update.priority = Priority::from(form.value(PRIORITY));
    update.completed = form.value(STATUS) == STATUS_COMPLETED;

    Ok(match due {
        Some(day) if Some(day) == task.due_day() => update,
        Some(day) => update.with_due_day(day),
        None => TaskUpdate { due_date: None, ..update },
    })
}

pub fn render_task_form_dialog(f: &mut Frame, area: Rect, title: &str, form: &Form, error: Option<&str>) {
    let height = form.height() + 5;
    let dialog_area = LayoutManager::centered_rect_lines(65, height, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(title, Color::Cyan), dialog_area);

    let inner = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    form.render(f, chunks[0]);
    f.render_widget(create_error_paragraph(error), chunks[1]);
    f.render_widget(create_instructions_paragraph(&TASK_FORM_SHORTCUTS), chunks[2]);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

use super::common::{self, create_dialog_block, create_error_paragraph, create_instructions_paragraph};
use crate::service::AdminForm;
use crate::ui::components::form::{Form, FormField};
use crate::ui::layout::LayoutManager;
use crate::validation::ValidationError;

pub const NAME: &str = "Admin name";
pub const EMAIL: &str = "Admin email";
pub const PASSWORD: &str = "Password";
pub const CONFIRM_PASSWORD: &str = "Confirm password";

pub fn create_admin_form() -> Form {
    Form::new(vec![
        FormField::text(NAME, ""),
        FormField::text(EMAIL, ""),
        FormField::secret(PASSWORD),
        FormField::secret(CONFIRM_PASSWORD),
    ])
}

/// Read and validate the form
pub fn admin_form_from(form: &Form) -> Result<AdminForm, ValidationError> {
    let admin = AdminForm {
        name: form.value(NAME).to_string(),
        email: form.value(EMAIL).to_string(),
        password: form.value(PASSWORD).to_string(),
        confirm_password: form.value(CONFIRM_PASSWORD).to_string(),
    };
    admin.validate()?;
    Ok(admin)
}

pub fn render_create_admin_dialog(f: &mut Frame, area: Rect, form: &Form, error: Option<&str>) {
    let height = form.height() + 5;
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(" Create Admin Account ", Color::Magenta), dialog_area);

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
    f.render_widget(
        create_instructions_paragraph(&[
            common::shortcuts::ENTER_SUBMIT,
            common::shortcuts::SEPARATOR,
            common::shortcuts::TAB_NEXT,
            common::shortcuts::SEPARATOR,
            common::shortcuts::ESC_CANCEL,
        ]),
        chunks[2],
    );
}

use crate::support::task;
use chrono::NaiveDate;
use taskdesk::model::Priority;
use taskdesk::ui::components::dialogs::admin_dialogs::{
    admin_form_from, create_admin_form, CONFIRM_PASSWORD, EMAIL, NAME, PASSWORD,
};
use taskdesk::ui::components::dialogs::task_dialogs::{
    draft_from_form, task_creation_form, task_edit_form, update_from_form, DESCRIPTION, DUE_DATE, PRIORITY, STATUS,
    TITLE,
};
use taskdesk::ui::components::form::Form;
use taskdesk::utils::datetime;
use taskdesk::validation::ValidationError;

fn set(form: &mut Form, label: &str, value: &str) {
    let field = form.fields.iter_mut().find(|field| field.label == label).unwrap();
    field.value = value.to_string();
}

#[test]
fn test_creation_form_defaults() {
    let form = task_creation_form();
    assert_eq!(form.value(TITLE), "");
    assert_eq!(form.value(PRIORITY), "High");
    assert_eq!(form.value(DUE_DATE), datetime::format_today());
}

#[test]
fn test_draft_from_form() {
    let mut form = task_creation_form();
    set(&mut form, TITLE, "  Essay  ");
    set(&mut form, DESCRIPTION, "Chapter 3");
    set(&mut form, DUE_DATE, "2025-04-02");

    let draft = draft_from_form(&form).unwrap();
    assert_eq!(draft.title, "Essay");
    assert_eq!(draft.description, "Chapter 3");
    assert_eq!(draft.priority, Priority::High);
    assert_eq!(draft.due, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
}

#[test]
fn test_draft_requires_title_and_due_date() {
    let mut form = task_creation_form();
    set(&mut form, TITLE, "   ");
    assert_eq!(draft_from_form(&form), Err(ValidationError::MissingTitle));

    set(&mut form, TITLE, "Essay");
    set(&mut form, DUE_DATE, "");
    assert_eq!(draft_from_form(&form), Err(ValidationError::MissingDueDate));

    set(&mut form, DUE_DATE, "next week");
    assert_eq!(
        draft_from_form(&form),
        Err(ValidationError::InvalidDueDate("next week".to_string()))
    );
}

#[test]
fn test_edit_form_is_prefilled() {
    let existing = task("1", "Lab report", true, Priority::Low, Some((2025, 3, 1)));
    let form = task_edit_form(&existing);
    assert_eq!(form.value(TITLE), "Lab report");
    assert_eq!(form.value(PRIORITY), "Low");
    assert_eq!(form.value(DUE_DATE), "2025-03-01");
    assert_eq!(form.value(STATUS), "Completed");
}

#[test]
fn test_unchanged_due_day_keeps_timestamp() {
    let existing = task("1", "Lab report", false, Priority::Low, Some((2025, 3, 1)));
    let mut form = task_edit_form(&existing);
    set(&mut form, TITLE, "Lab report v2");

    let update = update_from_form(&existing, &form).unwrap();
    assert_eq!(update.title, "Lab report v2");
    assert_eq!(update.due_date, existing.due_date);
    assert!(!update.completed);
}

#[test]
fn test_changed_due_day_and_status() {
    let existing = task("1", "Lab report", false, Priority::Low, Some((2025, 3, 1)));
    let mut form = task_edit_form(&existing);
    set(&mut form, DUE_DATE, "2025-03-09");
    set(&mut form, STATUS, "Completed");

    let update = update_from_form(&existing, &form).unwrap();
    assert_eq!(
        update.due_date.map(|d| d.date_naive()),
        Some(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
    );
    assert!(update.completed);
}

#[test]
fn test_cleared_due_date_removes_it() {
    let existing = task("1", "Lab report", false, Priority::Low, Some((2025, 3, 1)));
    let mut form = task_edit_form(&existing);
    set(&mut form, DUE_DATE, "");

    let update = update_from_form(&existing, &form).unwrap();
    assert_eq!(update.due_date, None);
}

#[test]
fn test_empty_description_stays_absent() {
    let existing = task("1", "Lab report", false, Priority::Low, None);
    let update = update_from_form(&existing, &task_edit_form(&existing)).unwrap();
    assert_eq!(update.description, None);
}

#[test]
fn test_unknown_priority_survives_edit() {
    let existing = task("1", "Lab report", false, Priority::from("urgent"), None);
    let form = task_edit_form(&existing);
    assert_eq!(form.value(PRIORITY), "urgent");

    let update = update_from_form(&existing, &form).unwrap();
    assert_eq!(update.priority, Priority::from("urgent"));
}

#[test]
fn test_admin_form_validation() {
    let mut form = create_admin_form();
    assert_eq!(admin_form_from(&form), Err(ValidationError::MissingFields));

    set(&mut form, NAME, "Root");
    set(&mut form, EMAIL, "root@example.com");
    set(&mut form, PASSWORD, "secret1");
    set(&mut form, CONFIRM_PASSWORD, "secret2");
    assert_eq!(admin_form_from(&form), Err(ValidationError::PasswordMismatch));

    set(&mut form, PASSWORD, "abc");
    set(&mut form, CONFIRM_PASSWORD, "abc");
    assert_eq!(admin_form_from(&form), Err(ValidationError::PasswordTooShort(6)));

    set(&mut form, PASSWORD, "secret1");
    set(&mut form, CONFIRM_PASSWORD, "secret1");
    let admin = admin_form_from(&form).unwrap();
    assert_eq!(admin.email, "root@example.com");
}

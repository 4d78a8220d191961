//! Client-side form validation.
//!
//! These checks only save a round trip; the backend validates again.

use crate::constants::MIN_PASSWORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a task title")]
    MissingTitle,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Please choose a due date")]
    MissingDueDate,

    #[error("Invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDueDate(String),
}

fn all_present(values: &[&str]) -> bool {
    values.iter().all(|value| !value.trim().is_empty())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if !all_present(&[email, password]) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if !all_present(&[name, email, password]) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Title is the only required task field
pub fn validate_task_form(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    Ok(())
}

/// Checks for the "create admin" form, in the order the user sees them
pub fn validate_admin_form(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    if !all_present(&[name, email, password, confirm]) {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    Ok(())
}

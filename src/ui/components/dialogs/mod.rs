//! Dialog renderers and form builders

pub mod admin_dialogs;
pub mod common;
pub mod system_dialogs;
pub mod task_dialogs;

//! Reusable UI components

pub mod badge;
pub mod form;
pub mod status_bar;

// Component architecture
pub mod admin_component;
pub mod auth_component;
pub mod dialog_component;
pub mod dialogs;
pub mod task_list_component;

// Component exports
pub use admin_component::AdminComponent;
pub use auth_component::{AuthComponent, AuthMode};
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;

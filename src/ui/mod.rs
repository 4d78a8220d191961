//! Terminal user interface for taskdesk.
//!
//! Screens are components that turn key presses into actions; the
//! [`app_component::AppComponent`] applies those actions and runs backend
//! calls in the background.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::run_app;

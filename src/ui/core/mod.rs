//! Core UI functionality for taskdesk.
//!
//! This module contains the building blocks every view relies on:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background operations and error routing
//!
//! Components turn key presses into [`Action`]s; the app component applies
//! them, spawning backend calls through the [`TaskManager`] whose results come
//! back as further actions.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Screen};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{error_action, TaskId, TaskManager, TaskResult};

//! taskdesk - A terminal client for the Student Task Manager backend
//!
//! This library provides a terminal-based interface for managing personal
//! tasks stored on a Student Task Manager server: signing in, listing,
//! filtering and sorting tasks, creating, editing, completing and deleting
//! them, and an admin panel for platform statistics and user management.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - REST client for the task backend
//! * [`config`] - Application configuration management
//! * [`projection`] - Filtering, sorting and statistics for the dashboard
//! * [`service`] - Session-aware operations the UI invokes
//! * [`session`] - Bearer token decoding and persistence
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Backend API trait, HTTP client and wire schemas
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging sink for the `log` facade
pub mod logger;

/// Domain types exchanged with the backend
pub mod model;

/// Pure task view projection (filter, sort, stats)
pub mod projection;

/// Local task collection kept in sync with server responses
pub mod reconcile;

/// Application service coordinating session, API and local state
pub mod service;

/// Authenticated session and its on-disk store
pub mod session;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

/// Client-side form validation
pub mod validation;

pub use model::{Priority, Task};

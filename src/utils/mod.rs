//! Utility modules shared across the application.
//!
//! - [`datetime`] - Due date parsing, wire formatting and human-readable labels

pub mod datetime;

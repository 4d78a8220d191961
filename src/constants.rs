//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_LOGIN: &str = "✅ Login successful!";
pub const SUCCESS_REGISTERED: &str = "✅ Account created. Please sign in.";
pub const SUCCESS_LOGOUT: &str = "✅ Signed out";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created successfully";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated successfully";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted successfully";
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_REOPENED: &str = "✅ Task marked as pending";
pub const SUCCESS_ADMIN_CREATED: &str = "✅ Admin account created successfully!";

// Error Messages
pub const ERROR_LOGIN_FAILED: &str = "❌ Login failed";
pub const ERROR_REGISTER_FAILED: &str = "❌ Registration failed";
pub const ERROR_RESTORE_FAILED: &str = "❌ Could not restore the saved session";
pub const ERROR_LOGOUT_FAILED: &str = "❌ Could not remove the saved session";
pub const ERROR_FETCH_TASKS_FAILED: &str = "❌ Failed to fetch tasks";
pub const ERROR_FETCH_TASK_FAILED: &str = "❌ Could not load task";
pub const ERROR_TASK_CREATE_FAILED: &str = "❌ Failed to create task";
pub const ERROR_TASK_UPDATE_FAILED: &str = "❌ Failed to update task";
pub const ERROR_TASK_TOGGLE_FAILED: &str = "❌ Failed to toggle task completion";
pub const ERROR_TASK_DELETE_FAILED: &str = "❌ Failed to delete task";
pub const ERROR_ADMIN_LOAD_FAILED: &str = "❌ Failed to load admin dashboard";
pub const ERROR_USER_TASKS_FAILED: &str = "❌ Failed to load user tasks";
pub const ERROR_ADMIN_CREATE_FAILED: &str = "❌ Failed to create admin";
pub const ERROR_ADMIN_ONLY: &str = "❌ The admin panel is only available to administrators";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const EMPTY_NO_TASKS: &str = "You haven't added any tasks yet. Press 'a' to get started!";
pub const EMPTY_NO_MATCH: &str = "No tasks match your current filter. Press 'f' to change it.";
pub const APP_TITLE: &str = "Student Task Manager";

// Environment
/// Overrides `api.base_url` from the config file
pub const API_BASE_URL_ENV: &str = "TASKDESK_API_BASE_URL";

// Limits
/// Minimum password length accepted by the admin creation form
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Number of log lines kept in memory for the logs dialog
pub const MAX_LOG_LINES: usize = 1000;

//! Domain types exchanged with the task backend.
//!
//! Wire shapes are normalized here, at the boundary: identifiers become
//! strings, due dates become UTC timestamps and priority labels collapse onto
//! one canonical enumeration.

mod ids;
mod priority;
mod task;
mod user;

pub use ids::id_from_value;
pub use priority::Priority;
pub use task::{NewTask, Task, TaskDraft, TaskUpdate};
pub use user::{PlatformStats, User};

//! Merge-by-id reconciliation of the local task collection.
//!
//! The collection only changes after the backend confirmed an operation, so
//! it always reflects the last known-good server state. Each method maps to
//! one kind of server response.

use crate::model::{Task, TaskUpdate};

/// The signed-in user's tasks, in the order the server returned them
/// (creations are appended).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Replace everything with a fresh list fetch
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Replace the task with the same id in place, or append it.
    ///
    /// Returns `true` when an existing task was replaced.
    pub fn upsert(&mut self, task: Task) -> bool {
        match self.position(&task.id) {
            Some(index) => {
                self.tasks[index] = task;
                true
            }
            None => {
                self.tasks.push(task);
                false
            }
        }
    }

    /// Overlay an accepted edit onto the stored task.
    ///
    /// Returns the merged task, or `None` when the id is unknown.
    pub fn merge_update(&mut self, id: &str, update: &TaskUpdate) -> Option<&Task> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.apply_update(update);
        Some(task)
    }

    /// Drop the task with this id; returns it when it was present
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn to_vec(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

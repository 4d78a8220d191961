//! Task view projection.
//!
//! Derives what the dashboard shows from the raw task collection and the two
//! view parameters the user controls: which tasks to keep ([`TaskFilter`]) and
//! in what order ([`SortBy`]). The projection is a pure function; it never
//! touches the collection it reads from and is simply re-run whenever the
//! tasks, the filter or the sort order change.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::Task;

/// Which tasks the dashboard keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Order of the dashboard list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Latest due date first
    #[default]
    Newest,
    /// Earliest due date first
    Oldest,
    /// High, then Medium, then Low
    Priority,
}

/// Summary counters over the whole, unfiltered task set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Result of projecting a task set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskView {
    pub tasks: Vec<Task>,
    pub stats: TaskStats,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }

    /// Next filter in UI cycling order
    pub fn next(self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::Pending,
            TaskFilter::Pending => TaskFilter::All,
        }
    }
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Newest, SortBy::Oldest, SortBy::Priority];

    /// Next sort order in UI cycling order
    pub fn next(self) -> Self {
        match self {
            SortBy::Newest => SortBy::Oldest,
            SortBy::Oldest => SortBy::Priority,
            SortBy::Priority => SortBy::Newest,
        }
    }

    /// Compare two tasks under this order.
    ///
    /// Tasks without a due date go after every dated task for both date
    /// orders. Equal keys compare `Equal` so a stable sort keeps input order.
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortBy::Newest => match (a.due_date, b.due_date) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortBy::Oldest => match (a.due_date, b.due_date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortBy::Priority => b.priority.rank().cmp(&a.priority.rank()),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Pending => "Pending",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Newest => "Newest",
            SortBy::Oldest => "Oldest",
            SortBy::Priority => "Priority",
        };
        f.write_str(name)
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "completed" => Ok(TaskFilter::Completed),
            "pending" => Ok(TaskFilter::Pending),
            other => Err(format!("unknown filter '{}' (expected All, Completed or Pending)", other)),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortBy::Newest),
            "oldest" => Ok(SortBy::Oldest),
            "priority" => Ok(SortBy::Priority),
            other => Err(format!("unknown sort order '{}' (expected Newest, Oldest or Priority)", other)),
        }
    }
}

/// Keep the tasks matching `filter`, in their original order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

/// Stable in-place sort
pub fn sort_tasks(tasks: &mut [Task], sort_by: SortBy) {
    tasks.sort_by(|a, b| sort_by.compare(a, b));
}

/// Counters over every task, whatever the active filter
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    TaskStats {
        total,
        completed,
        pending: total - completed,
    }
}

/// Filter, then sort, then count.
pub fn project(tasks: &[Task], filter: TaskFilter, sort_by: SortBy) -> TaskView {
    let mut visible = filter_tasks(tasks, filter);
    sort_tasks(&mut visible, sort_by);
    TaskView {
        tasks: visible,
        stats: compute_stats(tasks),
    }
}

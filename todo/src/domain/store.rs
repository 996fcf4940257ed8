//! In-memory task collection with file persistence.

use std::path::Path;

use tracing::{debug, warn};

use super::TaskFilter;
use crate::entities::{Task, TaskRecord};
use crate::errors::{TodoError, TodoResult};
use crate::storage::FileStorage;

/// Ordered collection of tasks, kept in insertion order.
///
/// Tasks are looked up by exact description; if several share one, the
/// first in order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from the file at `path`
    pub fn open(path: impl AsRef<Path>) -> TodoResult<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Append a task. Duplicate descriptions are allowed.
    pub fn add(&mut self, task: Task) {
        debug!(description = task.description(), "adding task");
        self.tasks.push(task);
    }

    /// Remove and return the first task with exactly this description
    pub fn remove(&mut self, description: &str) -> TodoResult<Task> {
        let idx = self.position(description)?;
        debug!(description, "removing task");
        Ok(self.tasks.remove(idx))
    }

    /// Mark the first task with exactly this description as completed
    pub fn mark_completed(&mut self, description: &str) -> TodoResult<()> {
        let idx = self.position(description)?;
        debug!(description, "marking task completed");
        self.tasks[idx].mark_completed();
        Ok(())
    }

    /// Tasks in store order that satisfy `filter`, or all tasks for `None`
    pub fn list(&self, filter: Option<&TaskFilter>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.map_or(true, |f| f.matches(task)))
            .collect()
    }

    /// First task with exactly this description
    pub fn find(&self, description: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.description() == description)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    /// Write every task to `path`, replacing whatever was there
    pub fn save(&self, path: impl AsRef<Path>) -> TodoResult<()> {
        let records: Vec<TaskRecord> = self.tasks.iter().map(Task::to_record).collect();
        FileStorage::new(path).write_records(&records)
    }

    /// Replace the current tasks with those stored at `path`.
    ///
    /// A missing file leaves the store empty. On any other failure the
    /// current tasks are kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> TodoResult<()> {
        let records = FileStorage::new(path).read_records()?.unwrap_or_default();
        self.tasks = records
            .into_iter()
            .map(Task::from_record)
            .collect::<TodoResult<Vec<_>>>()?;
        debug!(count = self.tasks.len(), "loaded tasks");
        Ok(())
    }

    fn position(&self, description: &str) -> TodoResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.description() == description)
            .ok_or_else(|| {
                warn!(description, "task not found");
                TodoError::TaskNotFound {
                    description: description.to_string(),
                }
            })
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

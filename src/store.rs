//! The task store: the in-memory collection plus its persistence path.
//!
//! One invocation loads the whole collection, applies at most one mutation,
//! and writes the whole collection back. Every mutating method saves
//! immediately; a failed save leaves memory ahead of disk (no rollback).
//! There is no locking: concurrent invocations race last-writer-wins on the
//! whole file.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::storage;
use crate::task::{Status, Task};

/// Result of a mutation that targets a task by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Applied,
    /// The id matched no task. The store was not saved.
    NotFound,
}

impl Outcome {
    pub fn applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Owns the task collection for the duration of one process run.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from `path`.
    ///
    /// A missing file initializes an empty collection and persists it right
    /// away, so the file exists from the first invocation on.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut store = match storage::read_tasks(&path)? {
            Some(tasks) => Self { path, tasks },
            None => {
                let store = Self {
                    path,
                    tasks: Vec::new(),
                };
                store.save()?;
                store
            }
        };
        // Insertion order is creation order; older files are already sorted,
        // but a hand-edited one may not be.
        store.tasks.sort_by_key(|task| task.id);
        debug!(path = %store.path.display(), tasks = store.tasks.len(), "store loaded");
        Ok(store)
    }

    /// Persist the full collection, replacing the file contents.
    pub fn save(&self) -> Result<()> {
        storage::write_tasks(&self.path, &self.tasks)?;
        debug!(path = %self.path.display(), tasks = self.tasks.len(), "store saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a new `todo` task and persist the collection.
    ///
    /// Ids are `max(existing) + 1`, not `len + 1`, so deleting a task never
    /// frees its id for reuse.
    pub fn add(&mut self, description: impl Into<String>) -> Result<u64> {
        let id = self.next_id();
        self.tasks.push(Task::new(id, description));
        self.save()?;
        Ok(id)
    }

    /// Iterate tasks in insertion order, optionally filtered by status.
    pub fn list(&self, filter: Option<Status>) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| filter.map_or(true, |status| task.status == status))
    }

    /// Replace the description of the task with `id` and persist.
    pub fn update(&mut self, id: u64, description: impl Into<String>) -> Result<Outcome> {
        match self.find_mut(id) {
            Some(task) => {
                task.description = description.into();
                task.updated_at = Utc::now();
                self.save()?;
                Ok(Outcome::Applied)
            }
            None => Ok(Outcome::NotFound),
        }
    }

    /// Remove the task with `id` and persist. Remaining tasks keep their ids
    /// and relative order.
    pub fn delete(&mut self, id: u64) -> Result<Outcome> {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                self.save()?;
                Ok(Outcome::Applied)
            }
            None => Ok(Outcome::NotFound),
        }
    }

    /// Set the status of the task with `id` and persist.
    pub fn mark(&mut self, id: u64, status: Status) -> Result<Outcome> {
        match self.find_mut(id) {
            Some(task) => {
                task.status = status;
                task.updated_at = Utc::now();
                self.save()?;
                Ok(Outcome::Applied)
            }
            None => Ok(Outcome::NotFound),
        }
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }
}

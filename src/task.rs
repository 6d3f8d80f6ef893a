//! Task records and status values.
//!
//! Tasks are persisted as a pretty-printed JSON array. Field names on disk
//! use the camelCase timestamps (`createdAt`, `updatedAt`) that existing
//! store files already carry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle state of a task.
///
/// This is a closed set: anything outside `todo`, `in-progress`, and `done`
/// is rejected at the CLI boundary rather than stored verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// A single tracked task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a fresh `todo` task. Both timestamps start at `now`.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: description.into(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// One-line human rendering used by `list`.
    pub fn render(&self) -> String {
        format!("{}: {} (Status: {})", self.id, self.description, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_canonical_values() {
        assert_eq!("todo".parse::<Status>().unwrap(), Status::Todo);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" done ".parse::<Status>().unwrap(), Status::Done);
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = "doing".parse::<Status>().unwrap_err();
        assert!(err.to_string().contains("doing"));
        assert_eq!(err.exit_code(), crate::error::exit_codes::USER_ERROR);
    }

    #[test]
    fn task_serializes_with_camel_case_timestamps() {
        let task = Task::new(1, "Buy milk");
        let json = serde_json::to_string(&task).expect("serialize");
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"status\":\"todo\""));
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = Task::new(7, "Water plants");
        let json = serde_json::to_string(&task).expect("serialize");
        let back: Task = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, task);
    }
}

//! taskdeck - Task Tracker Library
//!
//! This library provides the core functionality for the taskdeck CLI tool:
//! a small task list persisted to a local JSON file.
//!
//! # Core Concepts
//!
//! - **Task**: id, description, status (`todo`/`in-progress`/`done`), and
//!   creation/update timestamps
//! - **Task Store**: loads the whole collection, applies one mutation per
//!   invocation, and writes the whole collection back
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.taskdeck.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output emission
//! - `storage`: Store file I/O with atomic writes
//! - `store`: The in-memory task collection and its mutations
//! - `task`: Task records and status values

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};

//! File I/O for the task store.
//!
//! The whole collection lives in one JSON file that is replaced on every
//! save. Writes go through a temp file + rename so a crash mid-write never
//! leaves a truncated store behind.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::task::Task;

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

/// Read the task array from `path`.
///
/// Returns `Ok(None)` when the file does not exist yet; the caller decides
/// whether to create it. Any other read failure is `StorageRead`, and
/// content that does not parse as a task array is `Format`.
pub fn read_tasks(path: &Path) -> Result<Option<Vec<Task>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(Error::StorageRead {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    let tasks = serde_json::from_str(&content).map_err(|err| Error::Format {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(Some(tasks))
}

/// Write the task array to `path`, pretty-printed, fully replacing prior
/// contents.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    write_atomic(path, json.as_bytes()).map_err(|err| Error::StorageWrite {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Write data atomically using temp file + rename.
///
/// Readers never see a partial write: the file is either fully written or
/// untouched.
fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Temp file in the same directory, so the rename stays on one filesystem.
    let temp_path = temp_path_for(path);
    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

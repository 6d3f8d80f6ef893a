#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp working directory holding one task store file.
pub struct StoreDir {
    dir: TempDir,
}

impl StoreDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the default store file inside this directory.
    pub fn store_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    /// Parse the store file as a JSON value.
    pub fn read_store(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.store_file()).expect("store file");
        serde_json::from_str(&contents).expect("store file is valid JSON")
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file(".taskdeck.toml", contents)
    }
}

/// Build a `taskdeck` command running inside the store directory, with the
/// env override cleared so the ambient environment cannot leak in.
pub fn taskdeck_cmd(store: &StoreDir) -> Command {
    let mut cmd = Command::cargo_bin("taskdeck").expect("binary");
    cmd.current_dir(store.path());
    cmd.env_remove("TASKDECK_FILE");
    cmd
}

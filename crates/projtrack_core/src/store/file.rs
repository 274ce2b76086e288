//! Data file I/O.
//!
//! # Invariants
//! - A missing file reads as `None`, not as an error.
//! - Writes go to a sibling temp file that is renamed over the target, so a
//!   reader never observes a half-written array.

use super::{StoreError, StoreResult};
use crate::model::project::Project;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Reads and parses the data file. `Ok(None)` when the file does not exist.
pub(super) fn read_projects(path: &Path) -> StoreResult<Option<Vec<Project>>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Serializes `projects` as a pretty-printed array and replaces the data file.
pub(super) fn write_projects(path: &Path, projects: &[Project]) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(projects)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let temp_path = temp_path_for(path);
    let result = write_then_rename(&temp_path, path, json.as_bytes());
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result.map_err(write_err)
}

fn write_then_rename(temp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "projects.json".to_string());
    path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()))
}

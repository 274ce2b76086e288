//! In-memory project store bound to one JSON data file.
//!
//! # Responsibility
//! - Provide create/read/update/delete/filter over the project list.
//! - Persist the whole list after every successful mutation.
//!
//! # Invariants
//! - Insertion order is preserved; the list is never sorted.
//! - Lookups by id are linear and return the first match.
//! - A mutation stays applied in memory even when the following save fails;
//!   the next successful save persists it.

use super::file::{read_projects, write_projects};
use super::StoreResult;
use crate::model::project::{now_timestamp, NewProject, Project, ProjectId, ProjectPatch};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;
use uuid::Uuid;

/// Project store owning its data file path and the loaded records.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Creates a store bound to `path` and loads it.
    ///
    /// A load failure leaves the store empty; the failure is logged by
    /// `load` and otherwise dropped here.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::empty(path);
        if let Err(err) = store.load() {
            warn!(
                "event=store_open module=store status=degraded error_code={} path={}",
                err.code(),
                store.path.display()
            );
        }
        store
    }

    /// Creates an empty store bound to `path` without touching the disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            projects: Vec::new(),
        }
    }

    /// Data file this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Replaces the in-memory list with the contents of the data file.
    ///
    /// Returns the number of loaded records. A missing file loads as empty.
    ///
    /// # Errors
    /// - `Read`/`Parse` when the file exists but cannot be used. The
    ///   in-memory list is reset to empty before the error is returned.
    pub fn load(&mut self) -> StoreResult<usize> {
        let started_at = Instant::now();
        match read_projects(&self.path) {
            Ok(Some(projects)) => {
                self.projects = projects;
                info!(
                    "event=store_load module=store status=ok count={} duration_ms={}",
                    self.projects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(self.projects.len())
            }
            Ok(None) => {
                self.projects.clear();
                info!(
                    "event=store_load module=store status=ok count=0 missing_file=true path={}",
                    self.path.display()
                );
                Ok(0)
            }
            Err(err) => {
                self.projects.clear();
                error!(
                    "event=store_load module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Writes the full list to the data file.
    pub fn save(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        match write_projects(&self.path, &self.projects) {
            Ok(()) => {
                debug!(
                    "event=store_save module=store status=ok count={} duration_ms={}",
                    self.projects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Appends a new record built from `input` and saves.
    pub fn create(&mut self, input: NewProject) -> StoreResult<Project> {
        let project = Project::from_new(input, self.next_id(), now_timestamp());
        self.projects.push(project.clone());
        info!(
            "event=project_create module=store status=ok id={}",
            project.id
        );
        self.save()?;
        Ok(project)
    }

    /// Merges `patch` into the record with `id` and saves.
    ///
    /// Returns `Ok(None)` when no record has this id.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> StoreResult<Option<Project>> {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=project_update module=store status=not_found id={id}");
            return Ok(None);
        };

        project.apply_patch(patch, now_timestamp());
        let updated = project.clone();
        info!("event=project_update module=store status=ok id={id}");
        self.save()?;
        Ok(Some(updated))
    }

    /// Removes the record with `id` and saves.
    ///
    /// Returns the removed record, or `Ok(None)` when no record has this id.
    pub fn delete(&mut self, id: &str) -> StoreResult<Option<Project>> {
        let Some(index) = self.projects.iter().position(|project| project.id == id) else {
            debug!("event=project_delete module=store status=not_found id={id}");
            return Ok(None);
        };

        let removed = self.projects.remove(index);
        info!("event=project_delete module=store status=ok id={id}");
        self.save()?;
        Ok(Some(removed))
    }

    /// All records in insertion order.
    pub fn get_all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Records whose status equals `status` exactly (case-sensitive).
    pub fn get_by_status(&self, status: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .collect()
    }

    fn next_id(&self) -> ProjectId {
        loop {
            let candidate = Uuid::new_v4().to_string();
            if self.get_by_id(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

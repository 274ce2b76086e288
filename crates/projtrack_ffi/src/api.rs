//! FFI use-case API for the project tracker UI.
//!
//! # Responsibility
//! - Expose the five project requests (list, add, update, delete, filter by
//!   status) as sync calls on an explicitly constructed bridge handle.
//! - Translate core records and errors into UI-friendly envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every request is a pass-through to exactly one store operation.
//! - The store never pushes change notifications; callers re-fetch after
//!   each mutation.

use projtrack_core::{
    core_version as core_version_inner, format_timestamp, init_logging as init_logging_inner,
    ping as ping_inner, resolve_data_path, NewProject, Project, ProjectPatch, ProjectStore,
    StoreResult,
};
use std::sync::{Mutex, MutexGuard, PoisonError};

const NOT_FOUND_MESSAGE: &str = "Project not found.";

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Project record as shown by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    /// RFC 3339 with milliseconds, UTC.
    pub created_at: String,
    /// RFC 3339 with milliseconds, UTC.
    pub updated_at: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub progress: i64,
}

/// Form input for `add_project`. Unset fields take store defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub progress: Option<i64>,
}

/// Partial update for `update_project`.
///
/// `None` leaves a field untouched. Dates are cleared through the explicit
/// `clear_*` flags, which win over a provided value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatchInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub clear_start_date: bool,
    pub clear_end_date: bool,
    pub progress: Option<i64>,
}

/// Result envelope for mutating requests.
///
/// - success: `ok = true`, `project = Some(..)`
/// - not found: `ok = true`, `project = None`
/// - persistence failure: `ok = false`, `project = None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectActionResponse {
    pub ok: bool,
    pub project: Option<ProjectItem>,
    pub message: String,
}

impl ProjectActionResponse {
    fn from_found(
        result: StoreResult<Option<Project>>,
        success: &str,
        operation: &str,
    ) -> Self {
        match result {
            Ok(Some(project)) => Self {
                ok: true,
                project: Some(to_project_item(&project)),
                message: success.to_string(),
            },
            Ok(None) => Self {
                ok: true,
                project: None,
                message: NOT_FOUND_MESSAGE.to_string(),
            },
            Err(err) => {
                log::warn!(
                    "event=bridge_call module=ffi status=error op={operation} error_code={}",
                    err.code()
                );
                Self {
                    ok: false,
                    project: None,
                    message: format!("{operation} failed: {err}"),
                }
            }
        }
    }

    /// Whether the call succeeded but no record matched the id.
    pub fn is_not_found(&self) -> bool {
        self.ok && self.project.is_none()
    }
}

/// Bridge handle owning one project store.
///
/// Built once by the host's composition root and passed to every request.
#[flutter_rust_bridge::frb(opaque)]
pub struct ProjectBridge {
    store: Mutex<ProjectStore>,
}

impl ProjectBridge {
    /// Opens the store at `data_path`, or at the configured default when unset.
    ///
    /// An unreadable or malformed data file opens as an empty store.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open(data_path: Option<String>) -> ProjectBridge {
        let path = resolve_data_path(data_path.as_deref());
        log::info!(
            "event=bridge_open module=ffi status=start path={}",
            path.display()
        );
        Self {
            store: Mutex::new(ProjectStore::open(path)),
        }
    }

    /// `get-all-projects`
    #[flutter_rust_bridge::frb(sync)]
    pub fn get_all_projects(&self) -> Vec<ProjectItem> {
        self.lock_store()
            .get_all()
            .iter()
            .map(to_project_item)
            .collect()
    }

    /// `add-project`
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_project(&self, input: ProjectInput) -> ProjectActionResponse {
        let result = self.lock_store().create(to_new_project(input)).map(Some);
        ProjectActionResponse::from_found(result, "Project created.", "add_project")
    }

    /// `update-project`
    #[flutter_rust_bridge::frb(sync)]
    pub fn update_project(&self, id: String, patch: ProjectPatchInput) -> ProjectActionResponse {
        let result = self.lock_store().update(&id, to_patch(patch));
        ProjectActionResponse::from_found(result, "Project updated.", "update_project")
    }

    /// `delete-project`
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_project(&self, id: String) -> ProjectActionResponse {
        let result = self.lock_store().delete(&id);
        ProjectActionResponse::from_found(result, "Project deleted.", "delete_project")
    }

    /// `get-projects-by-status`
    #[flutter_rust_bridge::frb(sync)]
    pub fn get_projects_by_status(&self, status: String) -> Vec<ProjectItem> {
        self.lock_store()
            .get_by_status(&status)
            .into_iter()
            .map(to_project_item)
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_project(&self, id: String) -> Option<ProjectItem> {
        self.lock_store().get_by_id(&id).map(to_project_item)
    }

    /// Re-reads the data file, e.g. after it was edited outside the app.
    #[flutter_rust_bridge::frb(sync)]
    pub fn reload(&self) -> ProjectActionResponse {
        match self.lock_store().load() {
            Ok(count) => ProjectActionResponse {
                ok: true,
                project: None,
                message: format!("Loaded {count} project(s)."),
            },
            Err(err) => ProjectActionResponse {
                ok: false,
                project: None,
                message: format!("reload failed: {err}"),
            },
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, ProjectStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn to_project_item(project: &Project) -> ProjectItem {
    ProjectItem {
        id: project.id.clone(),
        name: project.name.clone(),
        description: project.description.clone(),
        status: project.status.clone(),
        priority: project.priority.clone(),
        created_at: format_timestamp(&project.created_at),
        updated_at: format_timestamp(&project.updated_at),
        start_date: project.start_date.clone(),
        end_date: project.end_date.clone(),
        progress: project.progress,
    }
}

fn to_new_project(input: ProjectInput) -> NewProject {
    NewProject {
        name: input.name,
        description: input.description,
        status: input.status,
        priority: input.priority,
        start_date: input.start_date,
        end_date: input.end_date,
        progress: input.progress,
    }
}

fn to_patch(input: ProjectPatchInput) -> ProjectPatch {
    let date = |clear: bool, value: Option<String>| {
        if clear {
            Some(None)
        } else {
            value.map(Some)
        }
    };
    ProjectPatch {
        name: input.name,
        description: input.description,
        status: input.status,
        priority: input.priority,
        start_date: date(input.clear_start_date, input.start_date),
        end_date: date(input.clear_end_date, input.end_date),
        progress: input.progress,
    }
}

//! Core record store for the project tracker.
//! This crate is the single source of truth for project record invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{resolve_data_path, resolve_log_level};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    format_timestamp, now_timestamp, NewProject, Project, ProjectId, ProjectPatch,
    DEFAULT_PRIORITY, DEFAULT_PROGRESS, DEFAULT_STATUS,
};
pub use store::{ProjectStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

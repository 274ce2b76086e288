//! JSON-file persistence and the in-memory project store.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered list of projects.
//! - Rewrite the data file in full after every successful mutation.
//!
//! # Invariants
//! - Not-found is an `Option::None` sentinel, never a `StoreError`.
//! - Durable-medium failures are logged where they happen and then returned.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod project_store;

pub use project_store::ProjectStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable-medium failure.
#[derive(Debug)]
pub enum StoreError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed project data in `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize projects: {err}"),
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl StoreError {
    /// Stable short code used in log lines and UI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read_failed",
            Self::Parse { .. } => "parse_failed",
            Self::Serialize(_) => "serialize_failed",
            Self::Write { .. } => "write_failed",
        }
    }
}

//! UI-facing bridge over `projtrack_core`.

pub mod api;

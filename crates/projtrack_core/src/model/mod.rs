//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define the persisted project record and its create/update inputs.
//! - Own field defaults and merge rules so every caller applies them the
//!   same way.
//!
//! # Invariants
//! - `id` and `createdAt` never change after creation.
//! - `status` and `priority` are free-form labels, not a state machine.

pub mod project;

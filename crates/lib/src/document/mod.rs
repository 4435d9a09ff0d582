//! Collection management and entity overrides for a parsed devfile.
//!
//! Each of the four named collections (commands, components, projects,
//! starter projects) gets uniqueness-checked get/add/update/delete
//! operations, and the singleton events record gets a dedicated fold. The
//! same operations serve API consumers editing a document directly and the
//! ancestor resolver folding an ancestor's content in.
//!
//! Batch adds are NOT transactional: when the Nth entry of a batch
//! violates uniqueness, the first N-1 entries have already been appended.
//! This matches the long-standing observable behavior consumers rely on.

mod commands;
mod components;
mod events;
mod overrides;
mod projects;

pub use overrides::OverrideError;

use thiserror::Error;

/// Errors from the collection operations.
#[derive(Debug, Error)]
pub enum CollectionError {
  /// An add would duplicate a key within its uniqueness scope. Never
  /// silently deduplicated.
  #[error("{kind} '{key}' already exists in the devfile")]
  AlreadyExists { kind: &'static str, key: String },

  /// A delete target is missing.
  #[error("{kind} '{key}' is not found in the devfile")]
  NotFound { kind: &'static str, key: String },
}

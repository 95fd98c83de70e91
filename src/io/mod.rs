//! Persistence: the plain-text world format and binary snapshots.
//!
//! The text format (`text`) is the compatibility contract for saved worlds.
//! Snapshots (`snapshot`) are a bincode checkpoint that also carries history.

pub mod error;
pub mod text;
pub mod snapshot;

pub use error::{LoadError, SaveError, SnapshotError};

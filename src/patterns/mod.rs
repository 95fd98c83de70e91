//! Stampable shapes and random world seeding.
//!
//! - `Pattern`: a named list of live-cell offsets plus the built-ins
//! - `PatternLibrary`: name lookup
//! - `scatter` / `fill_random`: seeded random placement

pub mod pattern;
pub mod library;
pub mod scatter;

pub use pattern::{Offsets, Pattern};
pub use library::PatternLibrary;
pub use scatter::{fill_random, scatter};

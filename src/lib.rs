//! # toroid-life
//!
//! Conway's Game of Life (B3/S23) on a toroidal grid.
//!
//! ## Design Principles
//!
//! 1. **Wrap, don't reject**: every coordinate is valid. Reads and writes
//!    wrap around both axes, negative values included.
//!
//! 2. **Synchronous generations**: the next generation is computed from a
//!    frozen copy of the current one into a separate buffer, then swapped in.
//!
//! 3. **Fixed-depth history**: the grid keeps exactly two prior generations,
//!    enough to detect still lifes and period-2 oscillators.
//!
//! ## Example
//!
//! ```
//! use toroid_life::{Grid, Pattern};
//!
//! let mut grid = Grid::new(8, 8);
//! Pattern::glider().stamp(&mut grid, 0, 0);
//!
//! grid.evolve_n(4);
//! assert_eq!(grid.population(), 5);
//! assert!(grid.get_cell(3, 1));
//! ```
//!
//! ## Modules
//!
//! - `core`: coordinates, cell matrices, the grid, RNG, configuration
//! - `rules`: the B3/S23 transition
//! - `io`: plain-text world files and binary snapshots
//! - `patterns`: stampable shapes and random seeding
//! - `sim`: batch runs with stability detection

pub mod core;
pub mod rules;
pub mod io;
pub mod patterns;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CellMatrix, Grid, LifeRng, RunConfig};

pub use crate::io::{LoadError, SaveError, SnapshotError};

pub use crate::patterns::{fill_random, scatter, Pattern, PatternLibrary};

pub use crate::sim::{NoopObserver, Observer, RunReport, Runner};

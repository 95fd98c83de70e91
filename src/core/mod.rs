//! Core engine types: coordinates, cell matrices, the grid, RNG, configuration.
//!
//! The transition rule itself lives in `rules`; everything here is
//! representation and bookkeeping.

pub mod coord;
pub mod matrix;
pub mod grid;
pub mod rng;
pub mod config;

pub use matrix::CellMatrix;
pub use grid::Grid;
pub use rng::LifeRng;
pub use config::RunConfig;

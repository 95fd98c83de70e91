//! The Game of Life transition rule (B3/S23).
//!
//! Only the classic rule is supported. `life::step_into` is the single
//! place a generation is computed; `Grid::evolve` calls it and handles the
//! history bookkeeping.

pub mod life;

pub use life::{next_state, step, step_into};

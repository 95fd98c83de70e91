//! Python bindings for the toroid-life engine.
//!
//! # Quick Start
//!
//! ```python
//! import toroid_life as life
//!
//! grid = life.Grid(32, 32)
//! grid.stamp("glider", 0, 0)
//! steps, stable_at = grid.run(200, stop_when_stable=True)
//! cells = grid.to_numpy()
//! ```

use pyo3::prelude::*;

mod py_grid;

pub use py_grid::*;

/// toroid_life: Conway's Game of Life on a torus.
#[pymodule]
fn toroid_life(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGrid>()?;
    Ok(())
}

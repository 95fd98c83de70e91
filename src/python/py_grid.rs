//! Grid bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Grid, LifeRng, RunConfig};
use crate::io::{LoadError, SaveError};
use crate::patterns::{scatter, Pattern, PatternLibrary};
use crate::sim::Runner;

fn load_err(e: LoadError) -> PyErr {
    match e {
        LoadError::Open { .. } | LoadError::Read(_) => PyErr::new::<PyIOError, _>(e.to_string()),
        _ => PyErr::new::<PyValueError, _>(e.to_string()),
    }
}

fn save_err(e: SaveError) -> PyErr {
    PyErr::new::<PyIOError, _>(e.to_string())
}

/// Python wrapper for Grid.
///
/// A toroidal Game of Life world.
#[pyclass(name = "Grid")]
#[derive(Clone, Debug)]
pub struct PyGrid(pub Grid);

#[pymethods]
impl PyGrid {
    /// Create an all-dead grid.
    #[new]
    fn new(height: usize, width: usize) -> PyResult<Self> {
        if height == 0 || width == 0 {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "dimensions must be positive, got {}x{}",
                height, width
            )));
        }
        Ok(Self(Grid::new(height, width)))
    }

    /// Load a world file.
    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        Grid::load(path).map(Self).map_err(load_err)
    }

    /// Save the current generation to a world file.
    fn save(&self, path: &str) -> PyResult<()> {
        self.0.save(path).map_err(save_err)
    }

    #[getter]
    fn width(&self) -> usize {
        self.0.width()
    }

    #[getter]
    fn height(&self) -> usize {
        self.0.height()
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.0.generation()
    }

    #[getter]
    fn population(&self) -> usize {
        self.0.population()
    }

    fn get_cell(&self, x: i64, y: i64) -> bool {
        self.0.get_cell(x, y)
    }

    fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        self.0.set_cell(x, y, alive);
    }

    /// Advance `n` generations.
    #[pyo3(signature = (n = 1))]
    fn evolve(&mut self, n: u64) {
        self.0.evolve_n(n);
    }

    fn is_stable(&self) -> bool {
        self.0.is_stable()
    }

    /// Stamp a built-in pattern (glider, toad, beacon, methuselah) at (x, y).
    fn stamp(&mut self, name: &str, x: i64, y: i64) -> PyResult<()> {
        let library = PatternLibrary::builtin();
        let pattern = library
            .get(name)
            .ok_or_else(|| PyErr::new::<PyKeyError, _>(format!("unknown pattern: {}", name)))?;
        pattern.stamp(&mut self.0, x, y);
        Ok(())
    }

    /// Stamp `count` random built-in patterns at random origins.
    #[pyo3(signature = (count, seed = 42))]
    fn scatter(&mut self, count: usize, seed: u64) -> usize {
        let mut rng = LifeRng::new(seed);
        scatter(&mut self.0, &Pattern::builtins(), count, &mut rng)
    }

    /// Run up to `generations` steps.
    ///
    /// Returns (generations_run, stable_at) where stable_at is None unless
    /// the run stopped on a stable grid.
    #[pyo3(signature = (generations, stop_when_stable = false))]
    fn run(&mut self, generations: u64, stop_when_stable: bool) -> (u64, Option<u64>) {
        let config = RunConfig::new()
            .with_generations(generations)
            .with_stop_when_stable(stop_when_stable);
        let report = Runner::new(config).run(&mut self.0);
        (report.generations_run, report.stable_at)
    }

    /// Current generation as a (height, width) uint8 array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let cells: Vec<u8> = self
            .0
            .current()
            .as_slice()
            .iter()
            .map(|&alive| u8::from(alive))
            .collect();
        PyArray1::from_vec_bound(py, cells).reshape([self.0.height(), self.0.width()])
    }

    fn __repr__(&self) -> String {
        format!(
            "Grid(height={}, width={}, generation={})",
            self.0.height(),
            self.0.width(),
            self.0.generation()
        )
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }
}

//! The world: current generation plus two generations of history.
//!
//! ## History ring
//!
//! `Grid` owns three equally sized matrices:
//! - `current`: generation N, the only one callers can read or write
//! - `previous`: generation N-1
//! - `two_ago`: generation N-2
//!
//! `evolve` writes the next generation into the buffer that is about to fall
//! off the end of the ring (`two_ago`) and then rotates the three buffers, so
//! the history window moves without allocating.
//!
//! ## Stability
//!
//! `is_stable` compares `current` against both history buffers, which
//! catches still lifes (period 1) and period-2 oscillators. Longer cycles
//! are never reported as stable.

use super::coord::unflatten;
use super::matrix::CellMatrix;
use crate::rules::life;

/// A toroidal Game of Life world with two generations of history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    current: CellMatrix,
    previous: CellMatrix,
    two_ago: CellMatrix,
    generation: u64,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use toroid_life::Grid;
    ///
    /// let grid = Grid::new(3, 5);
    /// assert_eq!(grid.height(), 3);
    /// assert_eq!(grid.width(), 5);
    /// assert!(grid.is_stable());
    /// ```
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self::from_matrix(CellMatrix::new(height, width))
    }

    /// Wrap an existing generation. History starts all dead and the
    /// generation counter at zero.
    #[must_use]
    pub fn from_matrix(current: CellMatrix) -> Self {
        let empty = CellMatrix::new(current.height(), current.width());
        Self {
            previous: empty.clone(),
            two_ago: empty,
            current,
            generation: 0,
        }
    }

    /// Reassemble a grid from its parts. Returns `None` if the matrices are
    /// not all consistent and the same shape.
    pub(crate) fn from_parts(
        current: CellMatrix,
        previous: CellMatrix,
        two_ago: CellMatrix,
        generation: u64,
    ) -> Option<Self> {
        let consistent = [&current, &previous, &two_ago]
            .iter()
            .all(|m| m.is_consistent() && m.same_shape(&current));
        consistent.then_some(Self {
            current,
            previous,
            two_ago,
            generation,
        })
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.current.width()
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Number of `evolve` calls since construction or load.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation.
    #[must_use]
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Read-only view of the current generation.
    #[must_use]
    pub fn current(&self) -> &CellMatrix {
        &self.current
    }

    // === Cell access ===

    /// State of the cell at column `x`, row `y`.
    ///
    /// Any integer is accepted; coordinates wrap around the torus.
    #[must_use]
    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.current.get_wrapped(x, y)
    }

    /// Set the cell at column `x`, row `y` (wrapped) in the current generation.
    ///
    /// History is not touched.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        self.current.set_wrapped(x, y, alive);
    }

    /// State of the cell at row-major index `p`.
    #[must_use]
    pub fn get_index(&self, p: i64) -> bool {
        let (x, y) = unflatten(p, self.width());
        self.get_cell(x, y)
    }

    /// Set the cell at row-major index `p`.
    pub fn set_index(&mut self, p: i64, alive: bool) {
        let (x, y) = unflatten(p, self.width());
        self.set_cell(x, y, alive);
    }

    /// Kill every cell of the current generation.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    // === Evolution ===

    /// Advance one generation.
    ///
    /// The history ring shifts even when the new generation equals the old.
    pub fn evolve(&mut self) {
        life::step_into(&self.current, &mut self.two_ago);
        // two_ago now holds N+1: rotate it to the front.
        std::mem::swap(&mut self.two_ago, &mut self.previous);
        std::mem::swap(&mut self.previous, &mut self.current);
        self.generation += 1;

        log::trace!(
            "generation {} population {}",
            self.generation,
            self.current.population()
        );
    }

    /// Advance `n` generations.
    pub fn evolve_n(&mut self, n: u64) {
        for _ in 0..n {
            self.evolve();
        }
    }

    /// True if the current generation equals either of the two before it.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.current == self.previous || self.current == self.two_ago
    }

    pub(crate) fn history(&self) -> (&CellMatrix, &CellMatrix) {
        (&self.previous, &self.two_ago)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        let mut grid = Grid::new(5, 5);
        grid.set_cell(1, 2, true);
        grid.set_cell(2, 2, true);
        grid.set_cell(3, 2, true);
        grid
    }

    #[test]
    fn test_new_grid_is_dead_and_stable() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert!(grid.is_stable());
    }

    #[test]
    #[should_panic(expected = "Grid dimensions must be positive")]
    fn test_zero_height_panics() {
        let _ = Grid::new(0, 3);
    }

    #[test]
    fn test_set_cell_leaves_history() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 1, true);
        let (previous, two_ago) = grid.history();
        assert_eq!(previous.population(), 0);
        assert_eq!(two_ago.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_evolve_rotates_history() {
        let mut grid = blinker();
        let gen0 = grid.current().clone();

        grid.evolve();
        let gen1 = grid.current().clone();
        assert_eq!(grid.history().0, &gen0);

        grid.evolve();
        assert_eq!(grid.history().0, &gen1);
        assert_eq!(grid.history().1, &gen0);
        assert_eq!(grid.current(), &gen0);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_blinker_not_stable_after_one_step() {
        let mut grid = blinker();
        grid.evolve();
        assert!(!grid.is_stable());
        grid.evolve();
        assert!(grid.is_stable());
    }

    #[test]
    fn test_index_addressing() {
        let mut grid = Grid::new(3, 4);
        grid.set_index(6, true);
        assert!(grid.get_cell(2, 1));
        assert!(grid.get_index(6));
        assert!(grid.get_index(6 + 12));
        grid.set_index(-1, true);
        assert!(grid.get_cell(3, 2));
    }

    #[test]
    fn test_from_parts_rejects_mismatched_shapes() {
        let a = CellMatrix::new(2, 2);
        let b = CellMatrix::new(2, 3);
        assert!(Grid::from_parts(a.clone(), b, a.clone(), 0).is_none());
        assert!(Grid::from_parts(a.clone(), a.clone(), a, 7).is_some());
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut grid = blinker();
        grid.evolve();
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.history().0.population(), 3);
    }
}

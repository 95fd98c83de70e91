//! Row-major boolean cell buffer.
//!
//! `CellMatrix` is one generation of the world. It knows its own dimensions
//! and how to count toroidal neighbours, but nothing about history or the
//! transition rule.

use serde::{Deserialize, Serialize};

use super::coord::{wrap, wrap_point};

/// Offsets of the eight Moore neighbours, `(dx, dy)`.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A `height x width` grid of alive/dead cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellMatrix {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl CellMatrix {
    /// Create an all-dead matrix.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "Grid dimensions must be positive");

        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build from a row-major cell vector.
    ///
    /// Returns `None` if either dimension is zero or the vector length
    /// does not match.
    #[must_use]
    pub fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Option<Self> {
        let expected = height.checked_mul(width)?;
        if height == 0 || width == 0 || cells.len() != expected {
            return None;
        }
        Some(Self { width, height, cells })
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if `other` has the same dimensions.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Checks the length/dimension invariant. Only needed for matrices that
    /// came from outside the crate (deserialized data).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width.checked_mul(self.height) == Some(self.cells.len())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at in-range `(x, y)`. Panics if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[self.index(x, y)]
    }

    /// Set the cell at in-range `(x, y)`. Panics if out of range.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    /// Cell at any `(x, y)`, wrapped onto the torus.
    #[inline]
    #[must_use]
    pub fn get_wrapped(&self, x: i64, y: i64) -> bool {
        let (x, y) = wrap_point(x, y, self.width, self.height);
        self.get(x, y)
    }

    /// Set the cell at any `(x, y)`, wrapped onto the torus.
    #[inline]
    pub fn set_wrapped(&mut self, x: i64, y: i64, alive: bool) {
        let (x, y) = wrap_point(x, y, self.width, self.height);
        self.set(x, y, alive);
    }

    /// Number of live cells among the eight toroidal neighbours of `(x, y)`.
    ///
    /// On axes shorter than three cells several offsets wrap onto the same
    /// cell; each offset is counted separately.
    #[must_use]
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);
        let mut count = 0;
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let nx = wrap(x + dx, self.width);
            let ny = wrap(y + dy, self.height);
            if self.cells[self.index(nx, ny)] {
                count += 1;
            }
        }
        count
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Iterate rows top to bottom, each as a slice of `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterate the coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % self.width, i / self.width))
    }

    /// Row-major cell slice.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_dead() {
        let m = CellMatrix::new(3, 4);
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 3);
        assert_eq!(m.population(), 0);
        assert_eq!(m.rows().count(), 3);
    }

    #[test]
    #[should_panic(expected = "Grid dimensions must be positive")]
    fn test_zero_width_panics() {
        let _ = CellMatrix::new(3, 0);
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(CellMatrix::from_cells(2, 2, vec![false; 4]).is_some());
        assert!(CellMatrix::from_cells(2, 2, vec![false; 3]).is_none());
        assert!(CellMatrix::from_cells(0, 2, vec![]).is_none());
    }

    #[test]
    fn test_set_and_get_wrapped() {
        let mut m = CellMatrix::new(3, 5);
        m.set_wrapped(-1, -1, true);
        assert!(m.get(4, 2));
        assert!(m.get_wrapped(9, 5));
        assert_eq!(m.live_cells().collect::<Vec<_>>(), vec![(4, 2)]);
    }

    #[test]
    fn test_neighbors_wrap_across_corner() {
        let mut m = CellMatrix::new(4, 4);
        m.set(3, 3, true);
        m.set(0, 3, true);
        m.set(3, 0, true);
        // (0, 0) touches all three through the wrap.
        assert_eq!(m.live_neighbors(0, 0), 3);
        assert_eq!(m.live_neighbors(1, 1), 0);
    }

    #[test]
    fn test_neighbors_excludes_self() {
        let mut m = CellMatrix::new(5, 5);
        m.set(2, 2, true);
        assert_eq!(m.live_neighbors(2, 2), 0);
        assert_eq!(m.live_neighbors(1, 1), 1);
    }

    #[test]
    fn test_neighbors_single_cell_torus() {
        let mut m = CellMatrix::new(1, 1);
        m.set(0, 0, true);
        // All eight offsets wrap back onto the only cell.
        assert_eq!(m.live_neighbors(0, 0), 8);
    }

    #[test]
    fn test_clear() {
        let mut m = CellMatrix::new(2, 2);
        m.set(1, 1, true);
        m.clear();
        assert_eq!(m.population(), 0);
    }
}

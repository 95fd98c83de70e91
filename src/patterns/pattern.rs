//! Patterns: named sets of live-cell offsets.

use smallvec::SmallVec;

use crate::core::Grid;

/// Live-cell offsets `(dx, dy)` relative to a pattern's origin.
///
/// Every built-in shape fits inline without a heap allocation.
pub type Offsets = SmallVec<[(i64, i64); 8]>;

/// A named shape that can be stamped onto a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Lookup name.
    pub name: String,

    /// Offsets of the live cells from the origin.
    pub cells: Offsets,
}

impl Pattern {
    /// Create a pattern from its offsets.
    pub fn new(name: impl Into<String>, cells: &[(i64, i64)]) -> Self {
        Self {
            name: name.into(),
            cells: SmallVec::from_slice(cells),
        }
    }

    /// Diagonal spaceship, period 4, moves `(+1, +1)`.
    #[must_use]
    pub fn glider() -> Self {
        Self::new("glider", &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    /// Period-2 oscillator.
    #[must_use]
    pub fn toad() -> Self {
        Self::new("toad", &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)])
    }

    /// Two offset corner triples. Grows to eight cells, then settles into
    /// a beehive still life by generation 4.
    #[must_use]
    pub fn beacon() -> Self {
        Self::new("beacon", &[(0, 0), (1, 0), (0, 1), (2, 2), (3, 2), (3, 3)])
    }

    /// R-pentomino: five cells that take over a thousand generations to settle.
    #[must_use]
    pub fn methuselah() -> Self {
        Self::new("methuselah", &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
    }

    /// All built-in patterns.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        vec![Self::glider(), Self::toad(), Self::beacon(), Self::methuselah()]
    }

    /// Number of live cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the pattern has no live cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Set the pattern's cells alive with its origin at `(x, y)`.
    ///
    /// Cells wrap around the torus like any other write. Existing live
    /// cells are never cleared.
    pub fn stamp(&self, grid: &mut Grid, x: i64, y: i64) {
        for &(dx, dy) in &self.cells {
            grid.set_cell(x.wrapping_add(dx), y.wrapping_add(dy), true);
        }
    }
}

impl AsRef<Pattern> for Pattern {
    fn as_ref(&self) -> &Pattern {
        self
    }
}

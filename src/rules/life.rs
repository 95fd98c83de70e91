//! The B3/S23 transition.
//!
//! A live cell survives with two or three live neighbours; a dead cell is
//! born with exactly three. Everything else is dead next generation.

use crate::core::matrix::CellMatrix;

/// Next state of one cell given its current state and live neighbour count.
#[inline]
#[must_use]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the generation after `src` into `dst`.
///
/// `src` is only read and `dst` is only written, so no neighbour count ever
/// sees a cell already updated in this sweep. `dst` must have the same
/// shape as `src`; its previous contents are overwritten.
pub fn step_into(src: &CellMatrix, dst: &mut CellMatrix) {
    assert!(src.same_shape(dst), "step target must match source dimensions");

    for y in 0..src.height() {
        for x in 0..src.width() {
            let neighbors = src.live_neighbors(x, y);
            dst.set(x, y, next_state(src.get(x, y), neighbors));
        }
    }
}

/// Compute the generation after `src` into a fresh matrix.
#[must_use]
pub fn step(src: &CellMatrix) -> CellMatrix {
    let mut next = CellMatrix::new(src.height(), src.width());
    step_into(src, &mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        for n in 4..=8 {
            assert!(!next_state(true, n), "live cell with {} neighbours", n);
        }
    }

    #[test]
    fn test_birth() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead cell with {} neighbours", n);
        }
    }

    #[test]
    fn test_step_block_is_still() {
        let mut m = CellMatrix::new(4, 4);
        m.set(1, 1, true);
        m.set(2, 1, true);
        m.set(1, 2, true);
        m.set(2, 2, true);
        assert_eq!(step(&m), m);
    }

    #[test]
    fn test_step_into_overwrites_target() {
        let src = CellMatrix::new(3, 3);
        let mut dst = CellMatrix::new(3, 3);
        dst.set(0, 0, true);
        step_into(&src, &mut dst);
        assert_eq!(dst.population(), 0);
    }

    #[test]
    fn test_step_blinker_flips() {
        let mut m = CellMatrix::new(5, 5);
        m.set(1, 2, true);
        m.set(2, 2, true);
        m.set(3, 2, true);

        let next = step(&m);
        let live: Vec<_> = next.live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    #[should_panic(expected = "step target must match")]
    fn test_step_into_shape_mismatch() {
        let src = CellMatrix::new(3, 3);
        let mut dst = CellMatrix::new(3, 4);
        step_into(&src, &mut dst);
    }
}

//! Random world seeding.

use super::pattern::Pattern;
use crate::core::{Grid, LifeRng};

/// Stamp `count` patterns, each picked uniformly from `patterns`, at
/// uniformly random origins.
///
/// Does nothing if `patterns` is empty. Returns the number of stamps made.
pub fn scatter<P>(grid: &mut Grid, patterns: &[P], count: usize, rng: &mut LifeRng) -> usize
where
    P: AsRef<Pattern>,
{
    if patterns.is_empty() {
        return 0;
    }

    for _ in 0..count {
        let x = rng.gen_range_usize(0..grid.width()) as i64;
        let y = rng.gen_range_usize(0..grid.height()) as i64;
        if let Some(pattern) = rng.choose(patterns) {
            pattern.as_ref().stamp(grid, x, y);
        }
    }

    log::debug!("scattered {} patterns, population {}", count, grid.population());
    count
}

/// Set each cell of the current generation alive with probability `density`.
///
/// `density` is clamped to `[0, 1]`; NaN is treated as zero. Cells not
/// chosen are killed, so this replaces the current generation outright.
pub fn fill_random(grid: &mut Grid, density: f64, rng: &mut LifeRng) {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };

    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            grid.set_cell(x, y, rng.gen_bool(density));
        }
    }
}

//! Toroidal coordinate wrapping.
//!
//! Every place that turns a caller-supplied coordinate into a buffer index
//! goes through [`wrap`], so negative inputs are handled the same way
//! everywhere. Rust's `%` truncates toward zero (`-1 % 5 == -1`), which is
//! why this uses `rem_euclid` instead.

/// Wrap `n` into `0..len` on a ring of `len` cells.
///
/// ```
/// use toroid_life::core::coord::wrap;
///
/// assert_eq!(wrap(-1, 5), 4);
/// assert_eq!(wrap(5, 5), 0);
/// assert_eq!(wrap(-11, 5), 4);
/// ```
#[inline]
#[must_use]
pub fn wrap(n: i64, len: usize) -> usize {
    debug_assert!(len > 0, "cannot wrap onto an empty axis");
    n.rem_euclid(len as i64) as usize
}

/// Wrap a point onto a `width x height` torus, returning `(x, y)`.
#[inline]
#[must_use]
pub fn wrap_point(x: i64, y: i64, width: usize, height: usize) -> (usize, usize) {
    (wrap(x, width), wrap(y, height))
}

/// Map a linear index to `(x, y)` on a grid `width` cells wide.
///
/// Uses Euclidean division so `p = -1` maps to the last column of row `-1`,
/// which then wraps like any other coordinate.
#[inline]
#[must_use]
pub fn unflatten(p: i64, width: usize) -> (i64, i64) {
    let w = width as i64;
    (p.rem_euclid(w), p.div_euclid(w))
}

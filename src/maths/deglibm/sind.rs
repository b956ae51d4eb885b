//! sind(x) implementation.
//!
//! Thin wrapper around the shared degree-domain reducer in trig.rs. Reduces
//! mod 360 exactly, folds to the nearest quarter turn and evaluates kernel
//! polynomials on a residual of at most 45 degrees.

#[inline(always)]
pub fn sind(x: f64) -> f64 {
    super::trig::sind(x)
}

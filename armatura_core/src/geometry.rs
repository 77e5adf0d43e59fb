//! # Section Geometry
//!
//! Effective depths of a rectangular section measured from the most
//! compressed (top) fiber:
//!
//! ```text
//!   ┌───────────────┐  ─┬─ top fiber
//!   │  ●    ●    ●  │   │ c' = d'
//!   │               │   │
//!   │               │   h        d = h - c
//!   │  ●    ●    ●  │   │
//!   └───────────────┘  ─┴─ c (bottom cover to steel centroid)
//!   ◄────── b ──────►
//! ```
//!
//! No validation happens here; callers check `0 < c < h` first
//! (see [`crate::calculations::SectionInput::validate`]).

use serde::{Deserialize, Serialize};

use crate::units::Meters;

/// Effective depths of the tension and compression reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Depth from the top fiber to the tension (bottom) steel, d = h - c (m)
    pub d_m: f64,
    /// Depth from the top fiber to the compression (top) steel, d' = c' (m)
    pub d_prime_m: f64,
}

impl SectionGeometry {
    /// Lever arm between the two steel layers, d - d' (m)
    pub fn steel_lever_arm_m(&self) -> f64 {
        self.d_m - self.d_prime_m
    }
}

/// Compute the effective depths `d` and `d'`.
///
/// ```rust
/// use armatura_core::geometry::compute_geometry;
///
/// let g = compute_geometry(0.7, 0.07, 0.05);
/// assert!((g.d_m - 0.63).abs() < 1e-12);
/// assert_eq!(g.d_prime_m, 0.05);
/// ```
pub fn compute_geometry(h_m: f64, c_m: f64, c_prime_m: f64) -> SectionGeometry {
    SectionGeometry {
        d_m: (Meters(h_m) - Meters(c_m)).value(),
        d_prime_m: c_prime_m,
    }
}

//! # Load Combination
//!
//! Reduces the applied internal forces (`Med`, `Ned`) to a single
//! equivalent moment about the tension reinforcement, `Meq`, which the
//! reinforcement solver uses as the design moment magnitude.
//!
//! ## Sign Convention
//!
//! - `Med > 0` compresses the top fiber and tensions the bottom fiber
//! - `Ned > 0` is compression, `Ned < 0` is tension
//!
//! ## Geometric Imperfections
//!
//! Compressed members (`Ned > 0`) receive the minimum eccentricity of
//! EN 1992-1-1 §6.1(4): `e0 = max(20 mm, h/30)`. Tension members and pure
//! bending receive none.

use crate::units::Meters;

/// Lower bound of the imperfection eccentricity (m)
const MIN_ECCENTRICITY_M: f64 = 0.02;

/// Minimum eccentricity `e0` (m) applied to the axial force.
///
/// ```rust
/// use armatura_core::loads::minimum_eccentricity;
///
/// assert_eq!(minimum_eccentricity(0.3, 100.0), 0.02);
/// assert!((minimum_eccentricity(0.9, 100.0) - 0.03).abs() < 1e-12);
/// assert_eq!(minimum_eccentricity(0.9, -100.0), 0.0);
/// ```
pub fn minimum_eccentricity(h_m: f64, ned_kn: f64) -> f64 {
    if ned_kn > 0.0 {
        MIN_ECCENTRICITY_M.max(h_m / 30.0)
    } else {
        0.0
    }
}

/// Equivalent moment `Meq` (kN·m) about the tension steel.
///
/// `Meq = |Med| + Ned·((d - h/2) + e0)`
///
/// ```rust
/// use armatura_core::loads::compute_meq;
///
/// // Pure bending
/// assert_eq!(compute_meq(700.0, 0.0, 0.63, 0.7), 700.0);
///
/// // Compression adds the axial force times its lever arm to the steel,
/// // here (0.45 - 0.25) + 0.02
/// let meq = compute_meq(100.0, 500.0, 0.45, 0.5);
/// assert!((meq - 210.0).abs() < 1e-9);
/// ```
pub fn compute_meq(med_knm: f64, ned_kn: f64, d_m: f64, h_m: f64) -> f64 {
    let e0 = minimum_eccentricity(h_m, ned_kn);
    let lever = (Meters(d_m) - Meters(h_m) / 2.0).value() + e0;
    med_knm.abs() + ned_kn * lever
}

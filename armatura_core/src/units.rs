//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by Eurocode 2 section design.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers that serialize as bare numbers).
//!
//! ## Units
//!
//! - Length: metres (m)
//! - Stress: megapascals (MPa = N/mm² = MN/m²)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kN·m), meganewton-metres (MN·m)
//! - Area: square metres (m²), square centimetres (cm²) for steel areas
//!
//! ## Example
//!
//! ```rust
//! use armatura_core::units::{SquareCentimeters, SquareMeters, KiloNewtonMeters, MegaNewtonMeters};
//!
//! let area: SquareCentimeters = SquareMeters(0.0014).into();
//! assert!((area.0 - 14.0).abs() < 1e-9);
//!
//! let moment: MegaNewtonMeters = KiloNewtonMeters(700.0).into();
//! assert!((moment.0 - 0.7).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Round half away from zero to `decimals` decimal places.
///
/// Every rounded quantity reported by the engine goes through this helper.
///
/// ```rust
/// use armatura_core::units::round_dp;
///
/// assert_eq!(round_dp(26.666_666, 2), 26.67);
/// assert_eq!(round_dp(-0.125, 2), -0.13);
/// ```
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (numerically equal to MN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Force in meganewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaNewtons(pub f64);

impl From<KiloNewtons> for MegaNewtons {
    fn from(kn: KiloNewtons) -> Self {
        MegaNewtons(kn.0 * 0.001)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in meganewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaNewtonMeters(pub f64);

impl From<KiloNewtonMeters> for MegaNewtonMeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        MegaNewtonMeters(knm.0 * 0.001)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Area in square centimetres (the unit for reported steel areas)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

impl From<SquareMeters> for SquareCentimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareCentimeters(m2.0 * 10_000.0)
    }
}

impl From<SquareCentimeters> for SquareMeters {
    fn from(cm2: SquareCentimeters) -> Self {
        SquareMeters(cm2.0 / 10_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Megapascals);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(MegaNewtons);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(MegaNewtonMeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(SquareCentimeters);

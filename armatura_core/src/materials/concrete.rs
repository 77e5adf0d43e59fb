//! Concrete Properties (EN 1992-1-1 Table 3.1)
//!
//! Derived strengths of normal-weight concrete from the characteristic
//! cylinder strength `fck`:
//!
//! - `fcm = fck + 8` (mean compressive strength)
//! - `fcd = αcc·fck/γc` (design compressive strength)
//! - `fctm` (mean axial tensile strength, piecewise in `fck`)
//!
//! Strength classes C12/15 through C90/105 are provided for convenience so
//! callers can pick a class by name instead of typing `fck`.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{round_dp, Megapascals};

/// Strength classes above this `fck` use the logarithmic `fctm` expression
const HIGH_STRENGTH_FCK_MPA: f64 = 50.0;

/// Derived compressive strengths of the concrete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Mean compressive strength fcm (MPa)
    pub fcm_mpa: f64,
    /// Design compressive strength fcd (MPa), rounded to 2 decimals
    pub fcd_mpa: f64,
}

/// Compute `fcm` and `fcd`.
///
/// ```rust
/// use armatura_core::materials::concrete::compute_concrete;
///
/// let props = compute_concrete(40.0, 1.0, 1.5);
/// assert_eq!(props.fcm_mpa, 48.0);
/// assert_eq!(props.fcd_mpa, 26.67);
/// ```
pub fn compute_concrete(fck_mpa: f64, alpha_cc: f64, gamma_c: f64) -> ConcreteProperties {
    let fcd = Megapascals(fck_mpa) * alpha_cc / gamma_c;
    ConcreteProperties {
        fcm_mpa: fck_mpa + 8.0,
        fcd_mpa: round_dp(fcd.value(), 2),
    }
}

/// Mean axial tensile strength `fctm` (MPa), rounded to 2 decimals.
///
/// `0.30·fck^(2/3)` up to C50/60, `2.12·ln(1 + fcm/10)` above.
pub fn mean_tensile_strength(fck_mpa: f64) -> f64 {
    let fctm = if fck_mpa > HIGH_STRENGTH_FCK_MPA {
        2.12 * (1.0 + (fck_mpa + 8.0) / 10.0).ln()
    } else {
        0.3 * fck_mpa.powf(2.0 / 3.0)
    };
    round_dp(fctm, 2)
}

/// Concrete strength classes per EN 1992-1-1 Table 3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteClass {
    #[serde(rename = "C12/15")]
    C12,
    #[serde(rename = "C16/20")]
    C16,
    #[serde(rename = "C20/25")]
    C20,
    #[serde(rename = "C25/30")]
    C25,
    #[serde(rename = "C30/37")]
    C30,
    #[serde(rename = "C35/45")]
    C35,
    #[serde(rename = "C40/50")]
    C40,
    #[serde(rename = "C45/55")]
    C45,
    #[serde(rename = "C50/60")]
    C50,
    #[serde(rename = "C55/67")]
    C55,
    #[serde(rename = "C60/75")]
    C60,
    #[serde(rename = "C70/85")]
    C70,
    #[serde(rename = "C80/95")]
    C80,
    #[serde(rename = "C90/105")]
    C90,
}

impl ConcreteClass {
    /// All classes in ascending strength order
    pub const ALL: [ConcreteClass; 14] = [
        ConcreteClass::C12,
        ConcreteClass::C16,
        ConcreteClass::C20,
        ConcreteClass::C25,
        ConcreteClass::C30,
        ConcreteClass::C35,
        ConcreteClass::C40,
        ConcreteClass::C45,
        ConcreteClass::C50,
        ConcreteClass::C55,
        ConcreteClass::C60,
        ConcreteClass::C70,
        ConcreteClass::C80,
        ConcreteClass::C90,
    ];

    /// Characteristic cylinder strength fck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteClass::C12 => 12.0,
            ConcreteClass::C16 => 16.0,
            ConcreteClass::C20 => 20.0,
            ConcreteClass::C25 => 25.0,
            ConcreteClass::C30 => 30.0,
            ConcreteClass::C35 => 35.0,
            ConcreteClass::C40 => 40.0,
            ConcreteClass::C45 => 45.0,
            ConcreteClass::C50 => 50.0,
            ConcreteClass::C55 => 55.0,
            ConcreteClass::C60 => 60.0,
            ConcreteClass::C70 => 70.0,
            ConcreteClass::C80 => 80.0,
            ConcreteClass::C90 => 90.0,
        }
    }

    /// Class designation (e.g., "C30/37")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteClass::C12 => "C12/15",
            ConcreteClass::C16 => "C16/20",
            ConcreteClass::C20 => "C20/25",
            ConcreteClass::C25 => "C25/30",
            ConcreteClass::C30 => "C30/37",
            ConcreteClass::C35 => "C35/45",
            ConcreteClass::C40 => "C40/50",
            ConcreteClass::C45 => "C45/55",
            ConcreteClass::C50 => "C50/60",
            ConcreteClass::C55 => "C55/67",
            ConcreteClass::C60 => "C60/75",
            ConcreteClass::C70 => "C70/85",
            ConcreteClass::C80 => "C80/95",
            ConcreteClass::C90 => "C90/105",
        }
    }

    /// Parse "C30/37", "c30-37" or just "C30"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "/");
        let prefix = format!("{}/", normalized);
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.code() == normalized || class.code().starts_with(&prefix))
            .ok_or_else(|| CalcError::invalid_input("concrete_class", s, "Unknown concrete strength class"))
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Reinforcing Steel Properties (EN 1992-1-1 §3.2)
//!
//! Design yield strength `fyd = fyk/γs`. The concrete tensile strength
//! `fctm` is bundled here as well because the minimum-reinforcement rule
//! (§9.2.1.1) needs `fctm` and `fyk` together.

use serde::{Deserialize, Serialize};

use super::concrete::mean_tensile_strength;
use crate::errors::{CalcError, CalcResult};
use crate::units::round_dp;

/// Default steel modulus of elasticity Es (MPa)
pub const DEFAULT_ES_MPA: f64 = 200_000.0;

/// Tensile-side material properties used by the reinforcement solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelTensileProperties {
    /// Mean tensile strength of the concrete fctm (MPa), rounded to 2 decimals
    pub fctm_mpa: f64,
    /// Design yield strength of the steel fyd (MPa), rounded to 2 decimals
    pub fyd_mpa: f64,
}

/// Compute `fctm` and `fyd`.
///
/// ```rust
/// use armatura_core::materials::reinforcing_steel::compute_steel_and_tensile;
///
/// let props = compute_steel_and_tensile(40.0, 500.0, 1.15);
/// assert_eq!(props.fctm_mpa, 3.51);
/// assert_eq!(props.fyd_mpa, 434.78);
/// ```
pub fn compute_steel_and_tensile(fck_mpa: f64, fyk_mpa: f64, gamma_s: f64) -> SteelTensileProperties {
    SteelTensileProperties {
        fctm_mpa: mean_tensile_strength(fck_mpa),
        fyd_mpa: round_dp(fyk_mpa / gamma_s, 2),
    }
}

/// Common reinforcing steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarGrade {
    #[serde(rename = "B400")]
    B400,
    #[serde(rename = "B450")]
    B450,
    #[serde(rename = "B500")]
    B500,
}

impl RebarGrade {
    pub const ALL: [RebarGrade; 3] = [RebarGrade::B400, RebarGrade::B450, RebarGrade::B500];

    /// Characteristic yield strength fyk (MPa)
    pub fn fyk_mpa(&self) -> f64 {
        match self {
            RebarGrade::B400 => 400.0,
            RebarGrade::B450 => 450.0,
            RebarGrade::B500 => 500.0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RebarGrade::B400 => "B400",
            RebarGrade::B450 => "B450",
            RebarGrade::B500 => "B500",
        }
    }

    /// Parse "B500", "b500" or "B500B" (ductility class suffix ignored)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|grade| match normalized.strip_prefix(grade.code()) {
                Some(rest) => rest.is_empty() || matches!(rest, "A" | "B" | "C"),
                None => false,
            })
            .ok_or_else(|| CalcError::invalid_input("rebar_grade", s, "Unknown reinforcing steel grade"))
    }
}

impl std::fmt::Display for RebarGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_steel() {
        let props = compute_steel_and_tensile(40.0, 500.0, 1.15);
        assert_eq!(props.fyd_mpa, 434.78);
        assert_eq!(props.fctm_mpa, 3.51);
    }

    #[test]
    fn test_unit_partial_factor() {
        let props = compute_steel_and_tensile(30.0, 400.0, 1.0);
        assert_eq!(props.fyd_mpa, 400.0);
        assert_eq!(props.fctm_mpa, 2.9);
    }

    #[test]
    fn test_grades() {
        assert_eq!(RebarGrade::B500.fyk_mpa(), 500.0);
        assert_eq!(serde_json::to_string(&RebarGrade::B450).unwrap(), "\"B450\"");
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!(RebarGrade::from_str_flexible("b500").unwrap(), RebarGrade::B500);
        assert_eq!(RebarGrade::from_str_flexible("B450C").unwrap(), RebarGrade::B450);
        assert!(RebarGrade::from_str_flexible("B5000").is_err());
        assert!(RebarGrade::from_str_flexible("S355").is_err());
    }
}

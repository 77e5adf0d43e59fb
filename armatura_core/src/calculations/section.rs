//! # Section Input
//!
//! The immutable record describing one rectangular reinforced-concrete
//! section and the internal forces acting on it. A fresh `SectionInput` is
//! built for every calculation; all derived properties are recomputed from
//! it.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Beam B-1 midspan",
//!   "h_m": 0.7,
//!   "b_m": 0.5,
//!   "c_m": 0.07,
//!   "c_prime_m": 0.07,
//!   "fck_mpa": 40.0,
//!   "alpha_cc": 1.0,
//!   "gamma_c": 1.5,
//!   "fyk_mpa": 500.0,
//!   "gamma_s": 1.15,
//!   "es_mpa": 200000.0,
//!   "med_knm": 700.0,
//!   "ned_kn": 0.0
//! }
//! ```
//!
//! Every numeric field is required. Missing or non-numeric fields are
//! rejected by serde before the solver ever runs.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{compute_geometry, SectionGeometry};

/// Input parameters for a rectangular section under `Med` + `Ned`.
///
/// Units are SI: metres, MPa, kN and kN·m.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    /// User label for this section (e.g., "B-1", "Column C3 base")
    #[serde(default)]
    pub label: String,

    // === Geometry ===
    /// Overall depth h (m)
    pub h_m: f64,
    /// Width b (m)
    pub b_m: f64,
    /// Bottom cover to the tension steel centroid c (m)
    pub c_m: f64,
    /// Top cover to the compression steel centroid c' (m)
    pub c_prime_m: f64,

    // === Concrete ===
    /// Characteristic compressive strength fck (MPa)
    pub fck_mpa: f64,
    /// Long-term effects coefficient αcc (typically 1.0)
    pub alpha_cc: f64,
    /// Concrete partial safety factor γc (typically 1.5)
    pub gamma_c: f64,

    // === Steel ===
    /// Characteristic yield strength fyk (MPa)
    pub fyk_mpa: f64,
    /// Steel partial safety factor γs (typically 1.15)
    pub gamma_s: f64,
    /// Steel modulus of elasticity Es (MPa)
    pub es_mpa: f64,

    // === Actions ===
    /// Design bending moment Med (kN·m), positive tensions the bottom fiber
    pub med_knm: f64,
    /// Design axial force Ned (kN), positive is compression
    pub ned_kn: f64,
}

impl SectionInput {
    /// The worked example used throughout the documentation: a 0.5 × 0.7 m
    /// C40/50 beam with B500 steel under 700 kN·m of pure bending.
    pub fn reference() -> Self {
        SectionInput {
            label: "Reference section".to_string(),
            h_m: 0.7,
            b_m: 0.5,
            c_m: 0.07,
            c_prime_m: 0.07,
            fck_mpa: 40.0,
            alpha_cc: 1.0,
            gamma_c: 1.5,
            fyk_mpa: 500.0,
            gamma_s: 1.15,
            es_mpa: 200_000.0,
            med_knm: 700.0,
            ned_kn: 0.0,
        }
    }

    /// Parse a JSON document, reporting a missing field by name.
    ///
    /// ```rust
    /// use armatura_core::calculations::SectionInput;
    /// use armatura_core::errors::CalcError;
    ///
    /// let err = SectionInput::from_json(r#"{ "h_m": 0.7 }"#).unwrap_err();
    /// assert_eq!(err, CalcError::missing_field("b_m"));
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            let message = e.to_string();
            match message
                .strip_prefix("missing field `")
                .and_then(|rest| rest.split_once('`'))
            {
                Some((field, _)) => CalcError::missing_field(field),
                None => CalcError::serialization(message),
            }
        })
    }

    /// Effective depths d and d'.
    pub fn geometry(&self) -> SectionGeometry {
        compute_geometry(self.h_m, self.c_m, self.c_prime_m)
    }

    /// Validate input parameters.
    ///
    /// The solver performs no checks of its own, so callers that accept
    /// user input should run this first (or use
    /// [`crate::calculations::rectangular_section::design`]).
    pub fn validate(&self) -> CalcResult<()> {
        let numeric = [
            ("h_m", self.h_m),
            ("b_m", self.b_m),
            ("c_m", self.c_m),
            ("c_prime_m", self.c_prime_m),
            ("fck_mpa", self.fck_mpa),
            ("alpha_cc", self.alpha_cc),
            ("gamma_c", self.gamma_c),
            ("fyk_mpa", self.fyk_mpa),
            ("gamma_s", self.gamma_s),
            ("es_mpa", self.es_mpa),
            ("med_knm", self.med_knm),
            ("ned_kn", self.ned_kn),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
            }
        }

        let positive = [
            ("h_m", self.h_m, "Section depth must be positive"),
            ("b_m", self.b_m, "Section width must be positive"),
            ("c_m", self.c_m, "Bottom cover must be positive"),
            ("c_prime_m", self.c_prime_m, "Top cover must be positive"),
            ("fck_mpa", self.fck_mpa, "Concrete strength must be positive"),
            ("alpha_cc", self.alpha_cc, "Coefficient alpha_cc must be positive"),
            ("gamma_c", self.gamma_c, "Concrete safety factor must be positive"),
            ("fyk_mpa", self.fyk_mpa, "Steel yield strength must be positive"),
            ("gamma_s", self.gamma_s, "Steel safety factor must be positive"),
            ("es_mpa", self.es_mpa, "Steel modulus must be positive"),
        ];
        for (field, value, reason) in positive {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }

        if self.c_m >= self.h_m {
            return Err(CalcError::invalid_input(
                "c_m",
                self.c_m.to_string(),
                "Bottom cover must be smaller than the section depth",
            ));
        }
        if self.c_prime_m >= self.h_m {
            return Err(CalcError::invalid_input(
                "c_prime_m",
                self.c_prime_m.to_string(),
                "Top cover must be smaller than the section depth",
            ));
        }
        if self.geometry().steel_lever_arm_m() <= 0.0 {
            return Err(CalcError::invalid_input(
                "c_prime_m",
                self.c_prime_m.to_string(),
                "Top and bottom steel layers overlap (c + c' must be smaller than h)",
            ));
        }
        Ok(())
    }
}

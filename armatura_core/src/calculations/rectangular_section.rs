//! # Rectangular Section Design
//!
//! Entry point of the design engine. Derives geometry, material and load
//! properties from a [`SectionInput`], runs the reinforcement solver and
//! assembles a [`SectionResult`].
//!
//! ## Example
//!
//! ```rust
//! use armatura_core::calculations::{design, SectionInput};
//!
//! let result = design(&SectionInput::reference()).unwrap();
//! assert_eq!(result.derived.fcd_mpa, 26.67);
//! assert_eq!(result.reinforcement.as_min_cm2, 5.75);
//! assert!(result.reinforcement.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::reinforcement::{self, ReinforcementResult, SolverContext};
use super::section::SectionInput;
use super::DesignValue;
use crate::errors::CalcResult;
use crate::loads::compute_meq;
use crate::materials::{compute_concrete, compute_steel_and_tensile};

/// Properties derived from the input before the solver runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedProperties {
    /// Effective depth to the tension steel (m)
    pub d_m: f64,
    /// Effective depth to the compression steel (m)
    pub d_prime_m: f64,
    /// Mean compressive strength (MPa)
    pub fcm_mpa: f64,
    /// Design compressive strength (MPa)
    pub fcd_mpa: f64,
    /// Mean tensile strength (MPa)
    pub fctm_mpa: f64,
    /// Design yield strength (MPa)
    pub fyd_mpa: f64,
    /// Equivalent moment about the tension steel (kN·m)
    pub meq_knm: f64,
}

impl DerivedProperties {
    pub fn from_input(input: &SectionInput) -> Self {
        let geometry = input.geometry();
        let concrete = compute_concrete(input.fck_mpa, input.alpha_cc, input.gamma_c);
        let steel = compute_steel_and_tensile(input.fck_mpa, input.fyk_mpa, input.gamma_s);
        let meq_knm = compute_meq(input.med_knm, input.ned_kn, geometry.d_m, input.h_m);

        DerivedProperties {
            d_m: geometry.d_m,
            d_prime_m: geometry.d_prime_m,
            fcm_mpa: concrete.fcm_mpa,
            fcd_mpa: concrete.fcd_mpa,
            fctm_mpa: steel.fctm_mpa,
            fyd_mpa: steel.fyd_mpa,
            meq_knm,
        }
    }

    pub fn solver_context(&self) -> SolverContext {
        SolverContext {
            d_m: self.d_m,
            d_prime_m: self.d_prime_m,
            fcd_mpa: self.fcd_mpa,
            fctm_mpa: self.fctm_mpa,
            fyd_mpa: self.fyd_mpa,
            meq_knm: self.meq_knm,
        }
    }
}

/// One line of a tabular report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Stable machine key (matches the JSON field name)
    pub key: &'static str,
    /// Short symbol shown in tables
    pub label: &'static str,
    pub value: DesignValue,
    pub unit: &'static str,
    pub description: &'static str,
}

impl ReportRow {
    fn new(
        key: &'static str,
        label: &'static str,
        value: impl Into<DesignValue>,
        unit: &'static str,
        description: &'static str,
    ) -> Self {
        ReportRow {
            key,
            label,
            value: value.into(),
            unit,
            description,
        }
    }
}

/// Complete design of one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Label copied from the input
    pub label: String,
    pub derived: DerivedProperties,
    pub reinforcement: ReinforcementResult,
}

impl SectionResult {
    /// Flatten the result into report rows, derived properties first.
    pub fn report_rows(&self) -> Vec<ReportRow> {
        let d = &self.derived;
        let r = &self.reinforcement;
        vec![
            ReportRow::new("d_m", "d", d.d_m, "m", "Effective depth to tension steel"),
            ReportRow::new("d_prime_m", "d'", d.d_prime_m, "m", "Effective depth to compression steel"),
            ReportRow::new("fcm_mpa", "fcm", d.fcm_mpa, "MPa", "Mean compressive strength"),
            ReportRow::new("fcd_mpa", "fcd", d.fcd_mpa, "MPa", "Design compressive strength"),
            ReportRow::new("fctm_mpa", "fctm", d.fctm_mpa, "MPa", "Mean tensile strength"),
            ReportRow::new("fyd_mpa", "fyd", d.fyd_mpa, "MPa", "Design yield strength"),
            ReportRow::new("meq_knm", "Meq", d.meq_knm, "kN·m", "Equivalent moment about tension steel"),
            ReportRow::new("mud", "μ", r.mud, "-", "Reduced design moment"),
            ReportRow::new("alphau", "αu", r.alphau, "-", "Relative neutral-axis depth"),
            ReportRow::new("zu_m", "zu", r.zu_m, "m", "Lever arm"),
            ReportRow::new("sigma_s_mpa", "σs", r.sigma_s_mpa, "MPa", "Tension steel stress"),
            ReportRow::new("as_min_cm2", "As,min", r.as_min_cm2, "cm²", "Minimum steel area"),
            ReportRow::new("as_max_cm2", "As,max", r.as_max_cm2, "cm²", "Maximum steel area"),
            ReportRow::new("as_sup_cm2", "As,sup", r.as_sup_cm2, "cm²", "Required top steel"),
            ReportRow::new("as_inf_cm2", "As,inf", r.as_inf_cm2, "cm²", "Required bottom steel"),
            ReportRow::new("as_sup_real_cm2", "As,sup,real", r.as_sup_real_cm2, "cm²", "Top steel to provide"),
            ReportRow::new("as_inf_real_cm2", "As,inf,real", r.as_inf_real_cm2, "cm²", "Bottom steel to provide"),
        ]
    }
}

/// Run the design without validating the input.
///
/// Never fails; meaningless inputs (for example `c >= h`) produce
/// meaningless numbers. Use [`design`] for user-supplied data.
pub fn calculate(input: &SectionInput) -> SectionResult {
    let derived = DerivedProperties::from_input(input);
    debug!(
        label = %input.label,
        d_m = derived.d_m,
        fcd_mpa = derived.fcd_mpa,
        fyd_mpa = derived.fyd_mpa,
        meq_knm = derived.meq_knm,
        "derived section properties"
    );
    let reinforcement = reinforcement::solve(input, &derived.solver_context());

    SectionResult {
        label: input.label.clone(),
        derived,
        reinforcement,
    }
}

/// Validate the input, then run the design.
pub fn design(input: &SectionInput) -> CalcResult<SectionResult> {
    input.validate()?;
    Ok(calculate(input))
}

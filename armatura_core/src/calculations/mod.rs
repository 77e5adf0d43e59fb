//! # Section Design Calculations
//!
//! This module contains the reinforced-concrete section design engine. It
//! follows the crate-wide pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`rectangular_section`] - Bending + axial force reinforcement design (EC2)
//! - [`reinforcement`] - The solver used by `rectangular_section`
//!
//! ## Not Applicable Values
//!
//! Several outputs only exist on some branches of the design procedure
//! (for instance `mud` has no meaning for a fully tensioned section). These
//! are reported as [`DesignValue::NotApplicable`], never as `0.0` or `NaN`.

pub mod rectangular_section;
pub mod reinforcement;
pub mod section;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Re-export commonly used types
pub use rectangular_section::{calculate, design, DerivedProperties, ReportRow, SectionResult};
pub use reinforcement::ReinforcementResult;
pub use section::SectionInput;

/// A numeric output that may not exist on the current design branch.
///
/// Serializes as a bare number, or as the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DesignValue {
    /// A finite computed value
    Value(f64),
    /// Not computed on this branch of the procedure
    #[default]
    NotApplicable,
}

impl DesignValue {
    /// Text used for the not-applicable marker in JSON and tables
    pub const NOT_APPLICABLE: &'static str = "N/A";

    /// The numeric value, if any
    pub fn value(self) -> Option<f64> {
        match self {
            DesignValue::Value(v) => Some(v),
            DesignValue::NotApplicable => None,
        }
    }

    /// True when a numeric value is present
    pub fn is_applicable(self) -> bool {
        matches!(self, DesignValue::Value(_))
    }

    /// Apply `f` to the contained value
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> DesignValue {
        match self {
            DesignValue::Value(v) => DesignValue::Value(f(v)),
            DesignValue::NotApplicable => DesignValue::NotApplicable,
        }
    }
}

impl From<f64> for DesignValue {
    fn from(value: f64) -> Self {
        DesignValue::Value(value)
    }
}

impl From<Option<f64>> for DesignValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(DesignValue::NotApplicable, DesignValue::Value)
    }
}

impl std::fmt::Display for DesignValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignValue::Value(v) => std::fmt::Display::fmt(v, f),
            // Precision applies to numbers only, keep width and alignment
            DesignValue::NotApplicable => {
                let width = f.width().unwrap_or(0);
                match f.align() {
                    Some(std::fmt::Alignment::Left) => write!(f, "{:<width$}", Self::NOT_APPLICABLE),
                    Some(std::fmt::Alignment::Center) => write!(f, "{:^width$}", Self::NOT_APPLICABLE),
                    _ => write!(f, "{:>width$}", Self::NOT_APPLICABLE),
                }
            }
        }
    }
}

impl Serialize for DesignValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DesignValue::Value(v) => serializer.serialize_f64(*v),
            DesignValue::NotApplicable => serializer.serialize_str(Self::NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for DesignValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(DesignValue::Value(v)),
            Repr::Text(s) if s == Self::NOT_APPLICABLE => Ok(DesignValue::NotApplicable),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", got \"{}\"",
                Self::NOT_APPLICABLE,
                s
            ))),
        }
    }
}

/// How the axial force loads the section (EC2 section classification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionCase {
    /// `Ned >= 0`: compression or pure bending, bending-dominated path
    CompressionOrZeroAxial,
    /// `Ned < 0` with a large eccentricity: a concrete compression zone remains
    PartiallyTensioned,
    /// `Ned < 0` with a small eccentricity: pure steel couple, no concrete in compression
    FullyTensioned,
}

impl SectionCase {
    /// Short description for reports
    pub fn label(&self) -> &'static str {
        match self {
            SectionCase::CompressionOrZeroAxial => "Ned non-negative",
            SectionCase::PartiallyTensioned => "Partially tensioned section",
            SectionCase::FullyTensioned => "Fully tensioned section",
        }
    }

    /// True when the solver follows the reduced-moment (pivot) path
    pub fn is_bending_dominated(&self) -> bool {
        !matches!(self, SectionCase::FullyTensioned)
    }
}

impl std::fmt::Display for SectionCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Strain-compatibility domain of the EC2 interaction diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotDomain {
    /// `mud <= 0.056`: steel strain governs
    A,
    /// `0.056 < mud <= 0.372`: concrete strain governs
    B,
    /// `0.372 < mud < 0.48`: compression steel required
    D,
    /// `mud >= 0.48`: fully compressed, outside the method's design domain
    FullyCompressed,
}

impl PivotDomain {
    /// Short description for reports
    pub fn label(&self) -> &'static str {
        match self {
            PivotDomain::A => "Pivot A",
            PivotDomain::B => "Pivot B",
            PivotDomain::D => "Pivot D (compression steel)",
            PivotDomain::FullyCompressed => "Fully compressed",
        }
    }
}

/// Overall verdict of a section design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Conclusion {
    /// The section carries the actions as given
    #[default]
    Satisfied,
    /// `Med` is within ±0.01 kN·m, no meaningful design is possible
    InvalidInput,
    /// Required steel reaches `As,max` or the section is fully compressed
    IncreaseSection,
}

impl Conclusion {
    /// Message shown to the user; empty when the design succeeds
    pub fn message(&self) -> &'static str {
        match self {
            Conclusion::Satisfied => "",
            Conclusion::InvalidInput => "Invalid input: design moment is zero",
            Conclusion::IncreaseSection => "Increase the concrete section",
        }
    }

    /// True when the design succeeded
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Conclusion::Satisfied)
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.message())
    }
}

/// Enum wrapper for all calculation types stored in a project.
///
/// Only rectangular sections exist today; the tag keeps project files
/// forward compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Rectangular section under bending + axial force
    RectangularSection(SectionInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::RectangularSection(s) => &s.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::RectangularSection(_) => "RectangularSection",
        }
    }

    /// Run the calculation for this item (validating first)
    pub fn run(&self) -> crate::errors::CalcResult<SectionResult> {
        match self {
            CalculationItem::RectangularSection(s) => design(s),
        }
    }
}

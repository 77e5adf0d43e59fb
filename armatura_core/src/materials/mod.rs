//! # Materials
//!
//! Material property derivations for reinforced-concrete design per
//! EN 1992-1-1.
//!
//! - [`concrete`] - `fcm`, `fcd`, `fctm` and the strength-class table
//! - [`reinforcing_steel`] - `fyd` and the tensile-side property bundle
//!
//! ## Example
//!
//! ```rust
//! use armatura_core::materials::{compute_concrete, compute_steel_and_tensile, ConcreteClass};
//!
//! let fck = ConcreteClass::C30.fck_mpa();
//! let concrete = compute_concrete(fck, 1.0, 1.5);
//! let steel = compute_steel_and_tensile(fck, 500.0, 1.15);
//! println!("fcd = {} MPa, fyd = {} MPa", concrete.fcd_mpa, steel.fyd_mpa);
//! ```

pub mod concrete;
pub mod reinforcing_steel;

pub use concrete::{compute_concrete, mean_tensile_strength, ConcreteClass, ConcreteProperties};
pub use reinforcing_steel::{compute_steel_and_tensile, RebarGrade, SteelTensileProperties, DEFAULT_ES_MPA};

//! # armatura_core - Reinforced-Concrete Section Design Engine
//!
//! `armatura_core` designs the longitudinal reinforcement of rectangular
//! reinforced-concrete sections under a bending moment and an axial force,
//! following EN 1992-1-1 (Eurocode 2). All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the engine is a pure function of its [`SectionInput`]
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Typed outcomes**: "not applicable" is a [`DesignValue`] variant, never `NaN`
//! - **Rich Errors**: structured [`CalcError`]s for invalid input and file I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use armatura_core::calculations::{design, SectionInput};
//!
//! let result = design(&SectionInput::reference()).unwrap();
//! println!("As,inf = {:.2} cm²", result.reinforcement.as_inf_real_cm2);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section input, solver and results
//! - [`materials`] - Concrete and reinforcing steel properties
//! - [`geometry`] - Effective depths
//! - [`loads`] - Equivalent moment about the tension steel
//! - [`project`] - Project container, metadata and settings
//! - [`file_io`] - Atomic saves and file locking
//! - [`units`] - Unit wrappers and rounding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod project;
pub mod units;

pub use calculations::{design, DesignValue, SectionInput, SectionResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};

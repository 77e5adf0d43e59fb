//! `armatura design`: one section, from a JSON file or from flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use armatura_core::calculations::{design, SectionInput};
use armatura_core::materials::{ConcreteClass, RebarGrade};
use armatura_core::project::DesignDefaults;
use clap::Args;
use tracing::debug;

use crate::output;

const GEOMETRY_FLAGS: [&str; 11] = [
    "h", "b", "c", "c_prime", "fck", "class", "fyk", "grade", "med", "ned", "label",
];

#[derive(Args, Debug)]
pub struct DesignArgs {
    /// JSON file holding a section input
    #[arg(short, long, value_name = "FILE", conflicts_with_all = GEOMETRY_FLAGS)]
    pub input: Option<PathBuf>,

    /// Label shown in the report
    #[arg(long)]
    pub label: Option<String>,

    /// Overall depth h (m)
    #[arg(long, value_name = "M", required_unless_present = "input")]
    pub h: Option<f64>,

    /// Width b (m)
    #[arg(long, value_name = "M", required_unless_present = "input")]
    pub b: Option<f64>,

    /// Bottom cover to steel centroid c (m)
    #[arg(long, value_name = "M", required_unless_present = "input")]
    pub c: Option<f64>,

    /// Top cover to steel centroid c' (m)
    #[arg(long, value_name = "M", required_unless_present = "input")]
    pub c_prime: Option<f64>,

    /// Characteristic concrete strength fck (MPa)
    #[arg(long, value_name = "MPA", conflicts_with = "class", required_unless_present_any = ["input", "class"])]
    pub fck: Option<f64>,

    /// Concrete strength class instead of fck (e.g. C30/37)
    #[arg(long)]
    pub class: Option<String>,

    /// Characteristic steel yield strength fyk (MPa) [default: 500]
    #[arg(long, value_name = "MPA", conflicts_with = "grade")]
    pub fyk: Option<f64>,

    /// Steel grade instead of fyk (B400, B450, B500)
    #[arg(long)]
    pub grade: Option<String>,

    /// Design bending moment Med (kN·m)
    #[arg(long, value_name = "KNM", allow_negative_numbers = true, required_unless_present = "input")]
    pub med: Option<f64>,

    /// Design axial force Ned (kN), compression positive
    #[arg(long, value_name = "KN", allow_negative_numbers = true)]
    pub ned: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl DesignArgs {
    /// Build the section input from the file or the flags.
    pub fn section_input(&self, defaults: &DesignDefaults) -> Result<SectionInput> {
        if let Some(path) = &self.input {
            return read_section_input(path);
        }

        let fck = match (&self.class, self.fck) {
            (Some(class), _) => ConcreteClass::from_str_flexible(class)?.fck_mpa(),
            (None, Some(fck)) => fck,
            (None, None) => anyhow::bail!("either --fck or --class is required"),
        };
        let fyk = match (&self.grade, self.fyk) {
            (Some(grade), _) => RebarGrade::from_str_flexible(grade)?.fyk_mpa(),
            (None, Some(fyk)) => fyk,
            (None, None) => defaults.fyk_mpa,
        };

        let required = |value: Option<f64>, flag: &str| value.with_context(|| format!("--{} is required", flag));
        let mut input = defaults.section(
            self.label.clone().unwrap_or_default(),
            required(self.h, "h")?,
            required(self.b, "b")?,
            required(self.c, "c")?,
            required(self.c_prime, "c-prime")?,
            fck,
            required(self.med, "med")?,
            self.ned.unwrap_or(0.0),
        );
        input.fyk_mpa = fyk;
        Ok(input)
    }
}

/// Read and parse a section input JSON file.
pub fn read_section_input(path: &Path) -> Result<SectionInput> {
    debug!(path = %path.display(), "reading section input");
    let contents = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    SectionInput::from_json(&contents).with_context(|| format!("invalid section input in {}", path.display()))
}

pub fn run(args: &DesignArgs) -> Result<()> {
    let input = args.section_input(&DesignDefaults::default())?;
    let result = design(&input)?;
    output::emit(&result, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> DesignArgs {
        let mut argv = vec!["armatura", "design"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Design(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flags_build_reference_section() {
        let args = parse(&[
            "--label", "Reference section", "--h", "0.7", "--b", "0.5", "--c", "0.07", "--c-prime", "0.07",
            "--fck", "40", "--med", "700",
        ]);
        let input = args.section_input(&DesignDefaults::default()).unwrap();
        assert_eq!(input, SectionInput::reference());
    }

    #[test]
    fn test_class_grade_and_negative_actions() {
        let args = parse(&[
            "--h", "0.5", "--b", "0.3", "--c", "0.05", "--c-prime", "0.05", "--class", "C30/37", "--grade",
            "B400", "--med", "-120", "--ned", "-40",
        ]);
        let input = args.section_input(&DesignDefaults::default()).unwrap();
        assert_eq!(input.fck_mpa, 30.0);
        assert_eq!(input.fyk_mpa, 400.0);
        assert_eq!(input.med_knm, -120.0);
        assert_eq!(input.ned_kn, -40.0);
    }

    #[test]
    fn test_unknown_class_is_an_error() {
        let args = parse(&[
            "--h", "0.5", "--b", "0.3", "--c", "0.05", "--c-prime", "0.05", "--class", "C33", "--med", "10",
        ]);
        assert!(args.section_input(&DesignDefaults::default()).is_err());
    }

    #[test]
    fn test_missing_geometry_rejected_by_parser() {
        assert!(Cli::try_parse_from(["armatura", "design", "--h", "0.5"]).is_err());
    }

    #[test]
    fn test_input_conflicts_with_flags() {
        assert!(Cli::try_parse_from(["armatura", "design", "--input", "a.json", "--h", "0.5"]).is_err());
    }

    #[test]
    fn test_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section.json");
        fs::write(&path, serde_json::to_string(&SectionInput::reference()).unwrap()).unwrap();

        let args = parse(&["--input", path.to_str().unwrap()]);
        let input = args.section_input(&DesignDefaults::default()).unwrap();
        assert_eq!(input, SectionInput::reference());
    }

    #[test]
    fn test_input_file_with_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section.json");
        fs::write(&path, r#"{ "h_m": 0.7 }"#).unwrap();
        assert!(read_section_input(&path).is_err());
    }
}

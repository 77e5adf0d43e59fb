//! Result rendering: a labelled table for people, JSON for tools.

use std::fmt::Write as _;

use anyhow::Result;
use armatura_core::calculations::{ReportRow, SectionResult};

const RULE: &str = "═══════════════════════════════════════════════════════════════";

pub fn emit(result: &SectionResult, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_table(result));
    }
    Ok(())
}

/// Lengths get 3 decimals, everything else 2.
fn decimals(row: &ReportRow) -> usize {
    if row.unit == "m" {
        3
    } else {
        2
    }
}

pub fn render_table(result: &SectionResult) -> String {
    let r = &result.reinforcement;
    let title = if result.label.is_empty() { "Section" } else { result.label.as_str() };

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {:<12} {}", "Case", r.case);
    let pivot = r.pivot.map_or("-", |p| p.label());
    let _ = writeln!(out, "  {:<12} {}", "Domain", pivot);
    let _ = writeln!(out);

    for row in result.report_rows() {
        let _ = writeln!(
            out,
            "  {:<12} {:>10.prec$} {:<5} {}",
            row.label,
            row.value,
            row.unit,
            row.description,
            prec = decimals(&row)
        );
    }
    if let Some(total) = r.total_real_cm2() {
        let _ = writeln!(out, "  {:<12} {:>10.2} {:<5} {}", "As,total", total, "cm²", "Total steel to provide");
    }

    let _ = writeln!(out, "{}", RULE);
    let verdict = if r.passes() { "OK" } else { r.conclusion.message() };
    let _ = writeln!(out, "  RESULT: {}", verdict);
    let _ = writeln!(out, "{}", RULE);
    out
}

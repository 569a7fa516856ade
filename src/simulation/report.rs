use std::fmt::Write;

use crate::include::common::config::PolicyKind;
use crate::include::common::error::SimulationError;
use crate::include::seek::seek_report::SeekReport;
use crate::simulation::compare::Comparison;

pub fn render_report(policy: PolicyKind, report: &SeekReport) -> String {
    let sequence = report
        .sequence
        .tracks()
        .iter()
        .map(|track| track.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    let _ = writeln!(out, "{} Disk Scheduling:", policy.name());
    let _ = writeln!(out, "Seek Sequence: {}", sequence);
    let _ = writeln!(out, "Total Seek Time: {}", report.total_seek);
    let _ = writeln!(out, "Average Seek Time: {:.2}", report.average_seek);
    out
}

pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    for entry in &comparison.reports {
        out.push_str(&render_report(entry.policy, &entry.report));
        out.push('\n');
    }
    if let Some(best) = comparison.best() {
        let _ = writeln!(
            out,
            "Best Policy: {} (total seek {})",
            best.policy.name(),
            best.report.total_seek
        );
    }
    out
}

pub fn render_json(comparison: &Comparison) -> Result<String, SimulationError> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

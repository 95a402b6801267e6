//! Plain-text rendering of job results.
//!
//! Every renderer returns a `String` so output can be checked in tests and
//! printed by `main` unchanged.

use stress_core::calculations::{PointStress, StressEnvelope, StressSample, TransverseStressPoint};
use stress_core::job::JobReport;
use stress_core::sections::{SectionKind, SectionProperties};

const RULE: &str = "═══════════════════════════════════════";

fn banner(title: &str) -> Vec<String> {
    vec![RULE.to_string(), format!("  {}", title), RULE.to_string()]
}

fn peak_marker(is_peak: bool) -> &'static str {
    if is_peak { "<- peak" } else { "" }
}

/// Section properties block
pub fn render_properties(kind: SectionKind, props: &SectionProperties) -> String {
    let lines = [
        format!("Section: {}", kind),
        format!("  A     = {:.6}", props.area),
        format!("  I     = {:.6e}", props.moment_of_inertia),
        format!("  y_bar = {:.4}", props.centroid_height),
        format!("  c     = {:.4}", props.max_distance_from_centroid),
        format!("  t     = {:.4}", props.thickness),
        format!("  Q     = {:.6e}", props.first_moment_of_area),
    ];
    lines.join("\n")
}

/// Station table with the peak rows marked
pub fn render_profile(profile: &[StressSample], envelope: Option<&StressEnvelope>) -> String {
    if profile.is_empty() {
        return "Profile: no diagram stations".to_string();
    }

    let mut lines = vec![
        format!("Profile ({} stations):", profile.len()),
        format!("  {:>10}  {:>14}  {:>14}", "x", "sigma", "tau"),
    ];
    for sample in profile {
        let is_peak = envelope.map_or(false, |e| {
            sample.x == e.max_bending_position && sample.bending_stress == e.max_bending_stress
        });
        lines.push(
            format!(
                "  {:>10.3}  {:>14.2}  {:>14.2}  {}",
                sample.x,
                sample.bending_stress,
                sample.shear_stress,
                peak_marker(is_peak)
            )
            .trim_end()
            .to_string(),
        );
    }
    lines.join("\n")
}

/// Point query at one position
pub fn render_point(position: f64, point: &PointStress) -> String {
    let lines = [
        format!("At x = {:.3}:", position),
        format!("  M     = {:.2}", point.moment),
        format!("  V     = {:.2}", point.shear_force),
        format!("  sigma = {:.2}", point.bending_stress),
        format!("  tau   = {:.2}", point.shear_stress),
    ];
    lines.join("\n")
}

/// Fiber table across the section height
pub fn render_distribution(kind: SectionKind, position: f64, points: &[TransverseStressPoint]) -> String {
    let mut lines = vec![
        format!("Distribution across {} section at x = {:.3}:", kind, position),
        format!("  {:>10}  {:>14}  {:>14}", "y", "sigma", "tau"),
    ];
    lines.extend(points.iter().map(|p| {
        format!("  {:>10.4}  {:>14.2}  {:>14.2}", p.y, p.bending_stress, p.shear_stress)
    }));
    if kind != SectionKind::Rectangular {
        lines.push("  (shear uses the linear approximation for this shape)".to_string());
    }
    lines.join("\n")
}

/// Full job summary
pub fn render_report(report: &JobReport) -> String {
    let mut lines = banner(&format!("STRESS REPORT: {}", report.label));
    lines.push(String::new());
    lines.push(render_properties(report.section_kind, &report.properties));
    lines.push(String::new());

    match &report.envelope {
        Some(e) => {
            lines.push("Envelope:".to_string());
            lines.push(format!(
                "  sigma_max = {:.2} at x = {:.3}",
                e.max_bending_stress, e.max_bending_position
            ));
            lines.push(format!(
                "  tau_max   = {:.2} at x = {:.3}",
                e.max_shear_stress, e.max_shear_position
            ));
        }
        None => lines.push("Envelope: no diagram stations".to_string()),
    }
    lines.push(String::new());
    lines.push(render_point(report.analysis_position, &report.point));
    lines.push(String::new());

    let peak_tau = report
        .distribution
        .iter()
        .map(|p| p.shear_stress)
        .fold(0.0_f64, f64::max);
    lines.push(format!(
        "Distribution: {} fibers, peak tau = {:.2}",
        report.distribution.len(),
        peak_tau
    ));
    lines.push(String::new());
    lines.extend(banner(&format!("{} stations analyzed", report.profile.len())));
    lines.join("\n")
}

//! # Longitudinal Stress Profile
//!
//! Maximum bending and shear stress at every station of a force diagram,
//! plus the single-position query used by the transverse distribution.
//!
//! ## Formulas
//!
//! ```text
//! σ(x) = |M(x)|·c / I          (extreme fiber)
//! τ(x) = |V(x)|·Q / (I·t)      (neutral axis)
//! ```
//!
//! Signs are dropped: only stress magnitudes are reported.
//!
//! ## Example
//!
//! ```rust
//! use stress_core::calculations::compute_stress_profile;
//! use stress_core::diagram::{ForceDiagram, ForceSample};
//! use stress_core::sections::{compute_properties, SectionDescriptor};
//!
//! let i = 0.2 * 0.4_f64.powi(3) / 12.0;
//! let props = compute_properties(&SectionDescriptor::rectangular(0.2, 0.4), i);
//! let diagram = ForceDiagram::new(vec![ForceSample::new(0.0, 1000.0, 500.0)]).unwrap();
//!
//! let profile = compute_stress_profile(&props, &diagram).unwrap();
//! assert!((profile[0].bending_stress - 93_750.0).abs() < 1e-6);
//! assert!((profile[0].shear_stress - 18_750.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::diagram::{ForceDiagram, ForceSample};
use crate::equations::stress::{bending_stress, shear_stress};
use crate::errors::{require_non_negative, require_positive, StressError, StressResult};
use crate::sections::SectionProperties;

/// Stress magnitudes at one diagram station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressSample {
    /// Position along the span
    pub x: f64,
    /// Extreme-fiber bending stress magnitude
    pub bending_stress: f64,
    /// Neutral-axis shear stress magnitude
    pub shear_stress: f64,
}

/// Result of a single-position query.
///
/// `moment` and `shear_force` are magnitudes of the governing sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointStress {
    pub bending_stress: f64,
    pub shear_stress: f64,
    pub moment: f64,
    pub shear_force: f64,
}

/// Peak stresses over a profile and where they occur
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressEnvelope {
    /// Largest bending stress
    pub max_bending_stress: f64,
    /// Position of the largest bending stress
    pub max_bending_position: f64,
    /// Largest shear stress
    pub max_shear_stress: f64,
    /// Position of the largest shear stress
    pub max_shear_position: f64,
}

/// Section factors shared by every station of a profile.
///
/// I, t and c must be positive and Q must not be negative, so every stress
/// built from them is a non-negative magnitude.
struct SectionFactors {
    moment_of_inertia: f64,
    thickness: f64,
    max_distance: f64,
    first_moment: f64,
}

impl SectionFactors {
    fn check(props: &SectionProperties) -> StressResult<Self> {
        Ok(SectionFactors {
            moment_of_inertia: require_positive("moment_of_inertia", props.moment_of_inertia)?,
            thickness: require_positive("thickness", props.thickness)?,
            max_distance: require_positive(
                "max_distance_from_centroid",
                props.max_distance_from_centroid,
            )?,
            first_moment: require_non_negative("first_moment_of_area", props.first_moment_of_area)?,
        })
    }

    fn evaluate(&self, sample: &ForceSample) -> (f64, f64) {
        let sigma = bending_stress(sample.moment.abs(), self.max_distance, self.moment_of_inertia);
        let tau = shear_stress(
            sample.shear.abs(),
            self.first_moment,
            self.moment_of_inertia,
            self.thickness,
        );
        (sigma, tau)
    }
}

/// Compute the bending/shear stress pair at every diagram station.
///
/// An empty diagram gives an empty profile without looking at the section.
///
/// # Errors
///
/// [`StressError::DegenerateSection`] when the moment of inertia, the
/// thickness or the extreme-fiber distance is not a positive finite number,
/// or the first moment of area is negative. These are section-wide, so the
/// whole profile fails rather than individual stations.
pub fn compute_stress_profile(
    props: &SectionProperties,
    diagram: &ForceDiagram,
) -> StressResult<Vec<StressSample>> {
    if diagram.is_empty() {
        return Ok(Vec::new());
    }

    let factors = SectionFactors::check(props)?;
    let profile: Vec<StressSample> = diagram
        .samples()
        .iter()
        .map(|sample| {
            let (bending_stress, shear_stress) = factors.evaluate(sample);
            StressSample {
                x: sample.x,
                bending_stress,
                shear_stress,
            }
        })
        .collect();

    log::debug!("stress profile computed for {} stations", profile.len());
    Ok(profile)
}

/// Stresses and forces at an arbitrary position.
///
/// Uses the ceiling lookup of [`ForceDiagram::sample_at`]: the first station
/// at or beyond `position`, clamped to the last station. Returns all zeros
/// for an empty diagram.
///
/// # Errors
///
/// - [`StressError::InvalidInput`] when `position` is not finite
/// - [`StressError::DegenerateSection`] as for [`compute_stress_profile`]
pub fn stress_at(
    props: &SectionProperties,
    diagram: &ForceDiagram,
    position: f64,
) -> StressResult<PointStress> {
    if !position.is_finite() {
        return Err(StressError::invalid_input(
            "position",
            position.to_string(),
            "Query position must be finite",
        ));
    }

    let sample = match diagram.sample_at(position) {
        Some(sample) => sample,
        None => return Ok(PointStress::default()),
    };

    let (bending_stress, shear_stress) = SectionFactors::check(props)?.evaluate(sample);
    Ok(PointStress {
        bending_stress,
        shear_stress,
        moment: sample.moment.abs(),
        shear_force: sample.shear.abs(),
    })
}

/// Summarize a profile by its peak values.
///
/// Ties keep the first position. Returns `None` for an empty profile.
pub fn stress_envelope(profile: &[StressSample]) -> Option<StressEnvelope> {
    let first = profile.first()?;
    let mut envelope = StressEnvelope {
        max_bending_stress: first.bending_stress,
        max_bending_position: first.x,
        max_shear_stress: first.shear_stress,
        max_shear_position: first.x,
    };

    for sample in &profile[1..] {
        if sample.bending_stress > envelope.max_bending_stress {
            envelope.max_bending_stress = sample.bending_stress;
            envelope.max_bending_position = sample.x;
        }
        if sample.shear_stress > envelope.max_shear_stress {
            envelope.max_shear_stress = sample.shear_stress;
            envelope.max_shear_position = sample.x;
        }
    }

    Some(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{compute_properties, SectionDescriptor};
    use approx::assert_relative_eq;

    fn rect_props() -> SectionProperties {
        // 0.2 × 0.4 rectangle with its own geometric inertia
        compute_properties(
            &SectionDescriptor::rectangular(0.2, 0.4),
            0.2 * 0.4_f64.powi(3) / 12.0,
        )
    }

    fn diagram(samples: &[(f64, f64, f64)]) -> ForceDiagram {
        ForceDiagram::new(
            samples
                .iter()
                .map(|&(x, v, m)| ForceSample::new(x, v, m))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_sample_hand_calculation() {
        let profile = compute_stress_profile(&rect_props(), &diagram(&[(0.0, 1000.0, 500.0)])).unwrap();
        assert_eq!(profile.len(), 1);
        // σ = 500 × 0.2 / 0.0010667 ≈ 93 750
        assert_relative_eq!(profile[0].bending_stress, 93_750.0, max_relative = 1e-9);
        // τ = 1000 × 0.004 / (0.0010667 × 0.2) ≈ 18 750
        assert_relative_eq!(profile[0].shear_stress, 18_750.0, max_relative = 1e-9);
    }

    #[test]
    fn test_signs_are_discarded() {
        let profile = compute_stress_profile(
            &rect_props(),
            &diagram(&[(0.0, -1000.0, -500.0), (1.0, 1000.0, 500.0)]),
        )
        .unwrap();
        assert_eq!(profile[0].bending_stress, profile[1].bending_stress);
        assert_eq!(profile[0].shear_stress, profile[1].shear_stress);
        assert!(profile[0].bending_stress > 0.0);
    }

    #[test]
    fn test_doubling_moment_doubles_bending() {
        let props = rect_props();
        let single = compute_stress_profile(&props, &diagram(&[(0.0, 0.0, 750.0)])).unwrap();
        let double = compute_stress_profile(&props, &diagram(&[(0.0, 0.0, 1500.0)])).unwrap();
        assert_relative_eq!(double[0].bending_stress, 2.0 * single[0].bending_stress, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_diagram_gives_empty_profile() {
        let profile = compute_stress_profile(&rect_props(), &ForceDiagram::empty()).unwrap();
        assert!(profile.is_empty());
        // Degenerate sections are not inspected when there is nothing to compute
        let mut props = rect_props();
        props.moment_of_inertia = 0.0;
        assert!(compute_stress_profile(&props, &ForceDiagram::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_inertia_is_degenerate() {
        let mut props = rect_props();
        props.moment_of_inertia = 0.0;
        let err = compute_stress_profile(&props, &diagram(&[(0.0, 1.0, 1.0)])).unwrap_err();
        assert_eq!(
            err,
            StressError::degenerate_section("moment_of_inertia", 0.0)
        );
    }

    #[test]
    fn test_zero_thickness_is_degenerate() {
        let mut props = rect_props();
        props.thickness = 0.0;
        let err = compute_stress_profile(&props, &diagram(&[(0.0, 1.0, 1.0)])).unwrap_err();
        assert!(err.is_degenerate());
        assert!(stress_at(&props, &diagram(&[(0.0, 1.0, 1.0)]), 0.0).is_err());
    }

    #[test]
    fn test_negative_height_is_degenerate() {
        // c = h/2 < 0 would turn σ negative
        let props = compute_properties(&SectionDescriptor::rectangular(0.2, -0.4), 1.0e-3);
        let d = diagram(&[(0.0, 1000.0, 500.0)]);
        let err = compute_stress_profile(&props, &d).unwrap_err();
        assert_eq!(err, StressError::degenerate_section("max_distance_from_centroid", -0.2));
        assert!(stress_at(&props, &d, 0.0).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_negative_first_moment_is_degenerate() {
        let props = compute_properties(&SectionDescriptor::i_beam(0.2, -0.02, 0.4, 0.01), 2.0e-4);
        assert!(props.first_moment_of_area < 0.0);
        let d = diagram(&[(0.0, 1000.0, 500.0)]);
        let err = compute_stress_profile(&props, &d).unwrap_err();
        assert!(matches!(
            err,
            StressError::DegenerateSection { ref property, .. } if property == "first_moment_of_area"
        ));
        assert!(stress_at(&props, &d, 0.0).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_zero_first_moment_gives_zero_shear() {
        let mut props = rect_props();
        props.first_moment_of_area = 0.0;
        let profile = compute_stress_profile(&props, &diagram(&[(0.0, 1000.0, 500.0)])).unwrap();
        assert_eq!(profile[0].shear_stress, 0.0);
        assert!(profile[0].bending_stress > 0.0);
    }

    #[test]
    fn test_point_query_ceiling_policy() {
        let props = rect_props();
        let d = diagram(&[
            (0.0, 100.0, 0.0),
            (1.0, 200.0, 10.0),
            (2.0, -300.0, 20.0),
            (3.0, 400.0, -30.0),
        ]);

        let mid = stress_at(&props, &d, 1.5).unwrap();
        assert_eq!(mid.shear_force, 300.0);
        assert_eq!(mid.moment, 20.0);

        let beyond = stress_at(&props, &d, 10.0).unwrap();
        assert_eq!(beyond.shear_force, 400.0);
        assert_eq!(beyond.moment, 30.0);

        let profile = compute_stress_profile(&props, &d).unwrap();
        assert_eq!(beyond.bending_stress, profile[3].bending_stress);
        assert_eq!(beyond.shear_stress, profile[3].shear_stress);
    }

    #[test]
    fn test_point_query_empty_diagram_is_zero() {
        let result = stress_at(&rect_props(), &ForceDiagram::empty(), 2.0).unwrap();
        assert_eq!(result, PointStress::default());
        assert_eq!(result.bending_stress, 0.0);
        assert_eq!(result.shear_stress, 0.0);
        assert_eq!(result.moment, 0.0);
        assert_eq!(result.shear_force, 0.0);
    }

    #[test]
    fn test_point_query_rejects_nan_position() {
        let err = stress_at(&rect_props(), &diagram(&[(0.0, 1.0, 1.0)]), f64::NAN).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_envelope_tracks_peaks() {
        let profile = compute_stress_profile(
            &rect_props(),
            &diagram(&[
                (0.0, 500.0, 0.0),
                (2.5, 250.0, 937.5),
                (5.0, 0.0, 1250.0),
                (7.5, -250.0, 937.5),
                (10.0, -500.0, 0.0),
            ]),
        )
        .unwrap();

        let envelope = stress_envelope(&profile).unwrap();
        assert_eq!(envelope.max_bending_position, 5.0);
        assert_eq!(envelope.max_bending_stress, profile[2].bending_stress);
        // Equal shear at both supports: the first one wins
        assert_eq!(envelope.max_shear_position, 0.0);
        assert_eq!(envelope.max_shear_stress, profile[0].shear_stress);
    }

    #[test]
    fn test_envelope_of_empty_profile() {
        assert!(stress_envelope(&[]).is_none());
    }
}

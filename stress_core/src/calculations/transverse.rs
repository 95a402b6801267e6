//! # Transverse Stress Distribution
//!
//! Stress across the section height at one analysis position.
//!
//! ```text
//!        bending            shear (rectangular)     shear (other shapes)
//!   +c ┤────────▶       +c ┤·                  +c ┤·
//!      │     ╱             │   ╲                  │  ╲
//!    0 ┤    ·            0 ┤     ▶ 1.5·V/A      0 ┤    ▶ V/A
//!      │     ╲             │   ╱                  │  ╱
//!   -c ┤────────▶       -c ┤·                  -c ┤·
//! ```
//!
//! - Bending is linear in `|y|` for every shape: zero on the neutral axis,
//!   equal to the longitudinal profile value at the extreme fibers.
//! - Rectangles use the exact parabolic shear distribution.
//! - Every other shape uses a linear fall-off from `V/A` on the neutral axis.
//!   That is an approximation, not the true distribution of an I, T or
//!   circular section.
//!
//! Forces come from [`stress_at`], so the same ceiling lookup applies.

use serde::{Deserialize, Serialize};

use crate::calculations::stress_profile::stress_at;
use crate::diagram::ForceDiagram;
use crate::equations::stress::{bending_stress, linear_shear_stress, parabolic_shear_stress};
use crate::errors::{require_positive, StressError, StressResult};
use crate::sections::{SectionKind, SectionProperties};

/// Number of intervals across the section height when none is given
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Stresses at one fiber of the section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransverseStressPoint {
    /// Signed distance from the neutral axis
    pub y: f64,
    /// Bending stress magnitude at this fiber
    pub bending_stress: f64,
    /// Shear stress at this fiber, never negative
    pub shear_stress: f64,
}

/// Sample the stress distribution across the section at `position`.
///
/// Returns `point_count + 1` fibers from `y = -c` to `y = +c` inclusive,
/// where `c` is the extreme-fiber distance. An empty diagram yields the
/// same grid with zero stresses.
///
/// # Errors
///
/// - [`StressError::InvalidInput`] for `point_count == 0` or a non-finite
///   position
/// - [`StressError::DegenerateSection`] when the moment of inertia, area or
///   extreme-fiber distance is not a positive finite number
///
/// # Example
///
/// ```rust
/// use stress_core::calculations::{cross_section_distribution, DEFAULT_POINT_COUNT};
/// use stress_core::diagram::{ForceDiagram, ForceSample};
/// use stress_core::sections::{compute_properties, SectionDescriptor, SectionKind};
///
/// let props = compute_properties(&SectionDescriptor::rectangular(0.2, 0.4), 0.0010667);
/// let diagram = ForceDiagram::new(vec![ForceSample::new(0.0, 1000.0, 500.0)]).unwrap();
///
/// let points = cross_section_distribution(
///     &props, &diagram, SectionKind::Rectangular, 0.0, DEFAULT_POINT_COUNT,
/// ).unwrap();
///
/// assert_eq!(points.len(), DEFAULT_POINT_COUNT + 1);
/// let middle = points[DEFAULT_POINT_COUNT / 2];
/// assert_eq!(middle.bending_stress, 0.0);
/// assert!((middle.shear_stress - 1.5 * 1000.0 / 0.08).abs() < 1e-6);
/// ```
pub fn cross_section_distribution(
    props: &SectionProperties,
    diagram: &ForceDiagram,
    kind: SectionKind,
    position: f64,
    point_count: usize,
) -> StressResult<Vec<TransverseStressPoint>> {
    if point_count == 0 {
        return Err(StressError::invalid_input(
            "point_count",
            "0",
            "At least one interval is needed across the section",
        ));
    }

    let point = stress_at(props, diagram, position)?;

    let inertia = require_positive("moment_of_inertia", props.moment_of_inertia)?;
    let area = require_positive("area", props.area)?;
    let c = require_positive("max_distance_from_centroid", props.max_distance_from_centroid)?;

    let steps = point_count as f64;
    let points: Vec<TransverseStressPoint> = (0..=point_count)
        .map(|i| {
            // exact at y = -c, 0, +c
            let y = c * (((2 * i) as f64 - steps) / steps);

            let shear = match kind {
                SectionKind::Rectangular => parabolic_shear_stress(point.shear_force, y, c, area),
                _ => linear_shear_stress(point.shear_force, y, c, area),
            };

            TransverseStressPoint {
                y,
                bending_stress: bending_stress(point.moment, y.abs(), inertia),
                shear_stress: shear.max(0.0),
            }
        })
        .collect();

    log::debug!(
        "{} transverse distribution at x = {}: {} fibers, M = {}, V = {}",
        kind,
        position,
        points.len(),
        point.moment,
        point.shear_force
    );
    Ok(points)
}

//! # Beam Stress Formulas
//!
//! Elementary beam-theory stress equations. These are the raw formulas; they
//! divide unconditionally, so callers must validate divisors first (see
//! [`crate::calculations`], which does this before every call).
//!
//! ## Sign Convention
//!
//! Every function here returns a magnitude. Moment and shear inputs are
//! taken as absolute values by the callers, so only the envelope is tracked.

/// Flexure formula: σ = M·y / I
///
/// # Example
/// ```rust
/// use stress_core::equations::stress::bending_stress;
///
/// // 500 N·m on a 0.2 × 0.4 m rectangle, extreme fiber at 0.2 m
/// let i = 0.2 * 0.4_f64.powi(3) / 12.0;
/// let sigma = bending_stress(500.0, 0.2, i);
/// assert!((sigma - 93_750.0).abs() < 1e-6);
/// ```
#[inline]
pub fn bending_stress(moment: f64, distance: f64, moment_of_inertia: f64) -> f64 {
    moment * distance / moment_of_inertia
}

/// Shear formula (Jourawski): τ = V·Q / (I·t)
#[inline]
pub fn shear_stress(shear: f64, first_moment: f64, moment_of_inertia: f64, thickness: f64) -> f64 {
    shear * first_moment / (moment_of_inertia * thickness)
}

/// Parabolic shear distribution over a rectangle.
///
/// ```text
///   y = +h/2  ┤ 0
///             │   ╲
///   y = 0     ┤     1.5·V/A   ← peak at the neutral axis
///             │   ╱
///   y = −h/2  ┤ 0
/// ```
///
/// # Formula
/// τ(y) = 1.5·(V/A)·(1 − (2y/h)²)
#[inline]
pub fn parabolic_shear_stress(shear: f64, y: f64, half_height: f64, area: f64) -> f64 {
    let ratio = y / half_height;
    shear * (1.0 - ratio * ratio) * 1.5 / area
}

/// Linear shear fall-off used for non-rectangular shapes.
///
/// τ(y) = (V/A)·(1 − |y|/c)
///
/// This is an approximation: it peaks at the average shear stress on the
/// neutral axis and vanishes at the extreme fibers. It is not the exact
/// distribution for I, T or circular sections.
#[inline]
pub fn linear_shear_stress(shear: f64, y: f64, max_distance: f64, area: f64) -> f64 {
    shear * (1.0 - y.abs() / max_distance) / area
}

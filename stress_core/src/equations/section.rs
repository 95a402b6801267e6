//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties for the supported cross-section shapes.
//! The section calculator in [`crate::sections`] resolves defaults and then
//! calls into these functions; keeping them here makes each one easy to check
//! against a hand calculation.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `ȳ` = Centroid height measured from the bottom fiber
//! - `c` = Distance from the neutral axis to the extreme fiber
//! - `t` = Thickness (width) at the fiber governing shear stress
//! - `Q` = First moment of area about the neutral axis
//! - `b`, `h` = Rectangle width and height
//! - `bf`, `tf` = Flange width and thickness
//! - `hw`, `tw` = Web height and thickness
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 8
//! - Gere & Goodno, Mechanics of Materials, Section 5.8 (shear in beams)

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Area of a solid rectangle: A = b × h
///
/// # Example
/// ```rust
/// use stress_core::equations::section::rectangular_area;
///
/// assert!((rectangular_area(0.2, 0.4) - 0.08).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// First moment of area of the half-section above the neutral axis.
///
/// ```text
///     ┌─────────┐  ─┬─
///     │/////////│   │ h/2   Q = (b·h/2)·(h/4)
///   h │═════════│  ─┴─ ← neutral axis
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// Q = b·h²/8
#[inline]
pub fn rectangular_first_moment(b: f64, h: f64) -> f64 {
    b * h * h / 8.0
}

/// Moment of inertia of a rectangle about its centroidal strong axis.
///
/// Not used by the section calculator: the inertia is always supplied by the
/// caller. Provided so callers can derive a geometry-consistent value.
///
/// # Formula
/// I = b·h³/12
///
/// # Example
/// ```rust
/// use stress_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(0.2, 0.4);
/// assert!((i - 0.0010667).abs() < 1e-6);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Area of a solid circle: A = π·r²
#[inline]
pub fn circular_area(r: f64) -> f64 {
    PI * r * r
}

/// First moment of area of a half-disc about the diameter.
///
/// # Formula
/// Q = (π·r²/2)·(4r/3π) = 2r³/3
#[inline]
pub fn circular_first_moment(r: f64) -> f64 {
    2.0 * r.powi(3) / 3.0
}

/// Moment of inertia of a solid circle about a diameter: I = π·d⁴/64
///
/// Caller-side helper, like [`rectangular_moment_of_inertia`].
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

// =============================================================================
// I-BEAM (doubly symmetric)
// =============================================================================

/// Overall depth of an I-beam: H = hw + 2·tf
#[inline]
pub fn i_beam_depth(tf: f64, hw: f64) -> f64 {
    hw + 2.0 * tf
}

/// Area of an I-beam: A = 2·bf·tf + tw·hw
#[inline]
pub fn i_beam_area(bf: f64, tf: f64, hw: f64, tw: f64) -> f64 {
    2.0 * bf * tf + tw * hw
}

/// First moment of one flange about the neutral axis.
///
/// Only the flange contributes; the web portion above the neutral axis is
/// neglected.
///
/// ```text
///   ┌───────────────┐  ← flange, centroid at H/2 − tf/2
///   └─────┐   ┌─────┘
///         │   │
///   ══════│═══│══════  ← neutral axis (H/2)
///         │   │
///   ┌─────┘   └─────┐
///   └───────────────┘
/// ```
///
/// # Formula
/// Q = bf·tf·(H/2 − tf/2)
#[inline]
pub fn i_beam_first_moment(bf: f64, tf: f64, hw: f64) -> f64 {
    let depth = i_beam_depth(tf, hw);
    bf * tf * (depth / 2.0 - tf / 2.0)
}

// =============================================================================
// T-BEAM (flange on top of the web)
// =============================================================================

/// Centroid height of a T-beam measured from the bottom of the web.
///
/// # Formula
/// ```text
/// A1 = bf·tf,  y1 = H − tf/2      (flange)
/// A2 = tw·hw,  y2 = hw/2          (web)
/// ȳ  = (A1·y1 + A2·y2) / (A1 + A2),  H = hw + tf
/// ```
///
/// Falls back to `H/2` when the two areas cancel to zero.
///
/// # Example
/// ```rust
/// use stress_core::equations::section::t_beam_centroid;
///
/// // Equal flange and web areas: centroid halfway between their centroids
/// let y = t_beam_centroid(0.1, 0.1, 0.1, 0.1);
/// assert!((y - 0.1).abs() < 1e-12);
/// ```
pub fn t_beam_centroid(bf: f64, tf: f64, hw: f64, tw: f64) -> f64 {
    let depth = hw + tf;
    let flange_area = bf * tf;
    let web_area = tw * hw;
    let total = flange_area + web_area;
    if total == 0.0 {
        return depth / 2.0;
    }
    let flange_y = depth - tf / 2.0;
    let web_y = hw / 2.0;
    (flange_area * flange_y + web_area * web_y) / total
}

/// First moment of the flange about the T-beam neutral axis: Q = A1·|y1 − ȳ|
#[inline]
pub fn t_beam_first_moment(bf: f64, tf: f64, hw: f64, centroid: f64) -> f64 {
    let flange_y = hw + tf - tf / 2.0;
    bf * tf * (flange_y - centroid).abs()
}

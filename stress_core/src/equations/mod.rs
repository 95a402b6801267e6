//! # Structural Mechanics Equations
//!
//! All closed-form equations used by the stress engine, kept in one place so
//! they can be verified against textbook references independently of the
//! input handling around them.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section geometric properties (A, ȳ, Q)
//! - [`stress`] - Bending and shear stress formulas
//!
//! ## Conventions
//!
//! - Lengths, forces and moments share one consistent unit system; nothing
//!   here converts units.
//! - Centroid heights are measured upward from the bottom fiber.
//! - Transverse coordinates `y` are signed distances from the neutral axis.

pub mod section;
pub mod stress;

pub use section::{
    circular_area,
    circular_first_moment,
    circular_moment_of_inertia,
    i_beam_area,
    i_beam_depth,
    i_beam_first_moment,
    rectangular_area,
    rectangular_first_moment,
    rectangular_moment_of_inertia,
    t_beam_centroid,
    t_beam_first_moment,
};

pub use stress::{
    bending_stress,
    linear_shear_stress,
    parabolic_shear_stress,
    shear_stress,
};

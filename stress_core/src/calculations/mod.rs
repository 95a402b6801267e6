//! # Stress Field Engine
//!
//! Combines [`SectionProperties`](crate::sections::SectionProperties) with a
//! [`ForceDiagram`](crate::diagram::ForceDiagram) to produce stresses. Each
//! calculation is a pure function:
//!
//! - [`compute_stress_profile`] - bending/shear stress at every station
//! - [`stress_at`] - stresses and forces at one position (ceiling lookup)
//! - [`cross_section_distribution`] - stresses across the section height
//! - [`stress_envelope`] - peak values of a profile
//!
//! Section factors are validated before use. A moment of inertia, thickness,
//! area or extreme-fiber distance that is not positive, or a negative first
//! moment of area, is reported as
//! [`StressError::DegenerateSection`](crate::errors::StressError::DegenerateSection)
//! instead of producing NaN, infinite or negative stresses.

pub mod stress_profile;
pub mod transverse;

// Re-export commonly used types
pub use stress_profile::{
    compute_stress_profile, stress_at, stress_envelope, PointStress, StressEnvelope, StressSample,
};
pub use transverse::{cross_section_distribution, TransverseStressPoint, DEFAULT_POINT_COUNT};

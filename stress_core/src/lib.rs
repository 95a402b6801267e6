//! # stress_core - Beam Cross-Section Stress Engine
//!
//! `stress_core` computes the stresses inside a beam cross-section from an
//! internal-force diagram (shear V(x) and moment M(x)) produced by an
//! upstream solver. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Guarded**: Degenerate sections are reported as errors, never as NaN
//! - **Unit-agnostic**: Inputs share one unit system; nothing is converted
//!
//! ## Quick Start
//!
//! ```rust
//! use stress_core::calculations::{compute_stress_profile, stress_at};
//! use stress_core::diagram::{ForceDiagram, ForceSample};
//! use stress_core::sections::{compute_properties, SectionDescriptor};
//!
//! let section = SectionDescriptor::rectangular(0.2, 0.4);
//! let props = compute_properties(&section, 0.2 * 0.4_f64.powi(3) / 12.0);
//!
//! let diagram = ForceDiagram::new(vec![
//!     ForceSample::new(0.0, 1000.0, 0.0),
//!     ForceSample::new(1.0, 1000.0, 500.0),
//! ]).unwrap();
//!
//! let profile = compute_stress_profile(&props, &diagram).unwrap();
//! let at_half = stress_at(&props, &diagram, 0.5).unwrap();
//! assert_eq!(at_half.bending_stress, profile[1].bending_stress);
//! ```
//!
//! ## Modules
//!
//! - [`sections`] - Section descriptors and the property calculator
//! - [`diagram`] - Internal-force diagrams and position lookup
//! - [`calculations`] - Stress profile, point query, transverse distribution
//! - [`equations`] - Closed-form section and stress formulas
//! - [`job`] - Job container, settings and reports
//! - [`file_io`] - Job file load/save
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod diagram;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod job;
pub mod sections;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_stress_profile, cross_section_distribution, stress_at, stress_envelope, PointStress,
    StressEnvelope, StressSample, TransverseStressPoint, DEFAULT_POINT_COUNT,
};
pub use diagram::{ForceDiagram, ForceSample};
pub use errors::{StressError, StressResult};
pub use file_io::{load_job, save_job};
pub use job::{AnalysisJob, AnalysisSettings, JobReport};
pub use sections::{compute_properties, SectionDescriptor, SectionKind, SectionProperties};

//! # Analysis Jobs
//!
//! An [`AnalysisJob`] bundles everything the stress engine needs for one
//! beam: the section, the externally supplied moment of inertia, the force
//! diagram from the upstream solver, and the analysis settings. Jobs
//! serialize to JSON files (see [`crate::file_io`]).
//!
//! ## Structure
//!
//! ```text
//! AnalysisJob
//! ├── meta: JobMetadata (schema version, id, engineer, label, timestamps)
//! ├── settings: AnalysisSettings (point count, analysis position)
//! ├── section: SectionDescriptor
//! ├── moment_of_inertia: f64
//! └── diagram: ForceDiagram
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stress_core::diagram::{ForceDiagram, ForceSample};
//! use stress_core::job::AnalysisJob;
//! use stress_core::sections::SectionDescriptor;
//!
//! let diagram = ForceDiagram::new(vec![
//!     ForceSample::new(0.0, 1000.0, 0.0),
//!     ForceSample::new(2.0, 0.0, 1000.0),
//!     ForceSample::new(4.0, -1000.0, 0.0),
//! ]).unwrap();
//!
//! let job = AnalysisJob::new("B-1", SectionDescriptor::rectangular(0.2, 0.4), 0.0010667, diagram);
//! let report = job.run().unwrap();
//!
//! assert_eq!(report.profile.len(), 3);
//! assert_eq!(report.analysis_position, 2.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{
    compute_stress_profile, cross_section_distribution, stress_at, stress_envelope, PointStress,
    StressEnvelope, StressSample, TransverseStressPoint, DEFAULT_POINT_COUNT,
};
use crate::diagram::ForceDiagram;
use crate::errors::StressResult;
use crate::sections::{compute_properties, SectionDescriptor, SectionKind, SectionProperties};

/// Current schema version for job files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One section + force diagram to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisJob {
    /// Job metadata (version, id, engineer, label)
    pub meta: JobMetadata,

    /// Analysis settings
    #[serde(default)]
    pub settings: AnalysisSettings,

    /// Cross-section geometry
    #[serde(default)]
    pub section: SectionDescriptor,

    /// Moment of inertia, supplied by the material/section configuration
    pub moment_of_inertia: f64,

    /// Internal-force diagram from the upstream solver
    #[serde(default)]
    pub diagram: ForceDiagram,
}

impl AnalysisJob {
    /// Create a job with default settings.
    pub fn new(
        label: impl Into<String>,
        section: SectionDescriptor,
        moment_of_inertia: f64,
        diagram: ForceDiagram,
    ) -> Self {
        let now = Utc::now();
        AnalysisJob {
            meta: JobMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                engineer: String::new(),
                label: label.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisSettings::default(),
            section,
            moment_of_inertia,
            diagram,
        }
    }

    /// Set the responsible engineer
    pub fn with_engineer(mut self, engineer: impl Into<String>) -> Self {
        self.meta.engineer = engineer.into();
        self
    }

    /// Replace the settings
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Section properties for this job
    pub fn properties(&self) -> SectionProperties {
        compute_properties(&self.section, self.moment_of_inertia)
    }

    /// Longitudinal stress profile only.
    ///
    /// Unlike [`run`](Self::run) this does not depend on the transverse
    /// settings, so a job with an unusable `point_count` still has a profile.
    pub fn profile(&self) -> StressResult<Vec<StressSample>> {
        compute_stress_profile(&self.properties(), &self.diagram)
    }

    /// Run every calculation for this job.
    ///
    /// The transverse distribution is taken at `settings.analysis_position`
    /// when set, otherwise at the position of peak bending stress (or `0.0`
    /// for an empty diagram).
    pub fn run(&self) -> StressResult<JobReport> {
        let properties = self.properties();
        let profile = self.profile()?;
        let envelope = stress_envelope(&profile);

        let analysis_position = self
            .settings
            .analysis_position
            .or_else(|| envelope.map(|e| e.max_bending_position))
            .unwrap_or(0.0);

        let point = stress_at(&properties, &self.diagram, analysis_position)?;
        let distribution = cross_section_distribution(
            &properties,
            &self.diagram,
            self.section.kind(),
            analysis_position,
            self.settings.point_count,
        )?;

        log::info!(
            "job '{}': {} stations, analysis at x = {}",
            self.meta.label,
            profile.len(),
            analysis_position
        );

        Ok(JobReport {
            label: self.meta.label.clone(),
            section_kind: self.section.kind(),
            properties,
            profile,
            envelope,
            analysis_position,
            point,
            distribution,
        })
    }
}

/// Job metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Unique job identifier
    pub id: Uuid,

    /// Name of the responsible engineer
    #[serde(default)]
    pub engineer: String,

    /// User label (e.g., "B-1", "Floor beam at grid A")
    #[serde(default)]
    pub label: String,

    /// When the job was created
    pub created: DateTime<Utc>,

    /// When the job was last modified
    pub modified: DateTime<Utc>,
}

/// Analysis settings.
///
/// Every field has a default, so a job file may omit the whole block or any
/// part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Intervals across the section height for the transverse distribution
    pub point_count: usize,

    /// Position of the transverse distribution; `None` picks the peak
    /// bending station
    pub analysis_position: Option<f64>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            point_count: DEFAULT_POINT_COUNT,
            analysis_position: None,
        }
    }
}

/// Everything computed for one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    /// Job label
    pub label: String,
    /// Section shape
    pub section_kind: SectionKind,
    /// Resolved section properties
    pub properties: SectionProperties,
    /// Stress at every diagram station
    pub profile: Vec<StressSample>,
    /// Peak stresses (absent for an empty diagram)
    pub envelope: Option<StressEnvelope>,
    /// Position used for the point query and transverse distribution
    pub analysis_position: f64,
    /// Point query at the analysis position
    pub point: PointStress,
    /// Stress across the section at the analysis position
    pub distribution: Vec<TransverseStressPoint>,
}

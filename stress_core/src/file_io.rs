//! # File I/O Module
//!
//! Reads and writes [`AnalysisJob`] files:
//! - **Atomic saves**: write to `.tmp`, fsync, rename over the target
//! - **Version validation**: reject job files from an incompatible schema
//!
//! ## File Format
//!
//! Jobs are plain pretty-printed JSON. Any extension works; `.json` is
//! conventional.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stress_core::diagram::ForceDiagram;
//! use stress_core::file_io::{load_job, save_job};
//! use stress_core::job::AnalysisJob;
//! use stress_core::sections::SectionDescriptor;
//! use std::path::Path;
//!
//! let job = AnalysisJob::new("B-1", SectionDescriptor::rectangular(0.2, 0.4), 0.0010667, ForceDiagram::empty());
//! let path = Path::new("b1.json");
//!
//! save_job(&job, path)?;
//! let loaded = load_job(path)?;
//! assert_eq!(loaded.meta.id, job.meta.id);
//! # Ok::<(), stress_core::errors::StressError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use semver::Version;

use crate::errors::{StressError, StressResult};
use crate::job::{AnalysisJob, SCHEMA_VERSION};

/// Save a job with atomic write semantics.
///
/// The save process:
/// 1. Serialize the job to JSON
/// 2. Write to a temporary file next to the target (`<name>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
///
/// An interrupted save leaves the previous file intact.
pub fn save_job(job: &AnalysisJob, path: &Path) -> StressResult<()> {
    let json = serde_json::to_string_pretty(job)
        .map_err(|e| StressError::serialization(e.to_string()))?;

    let tmp_path = temp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        StressError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        StressError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        StressError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StressError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved job '{}' to {}", job.meta.label, path.display());
    Ok(())
}

/// Load a job from a file.
///
/// # Returns
///
/// * `Ok(AnalysisJob)` - Successfully loaded job
/// * `Err(StressError::VersionMismatch)` - File version is incompatible
/// * `Err(StressError::SerializationError)` - Invalid JSON, or a force
///   diagram that is out of order
/// * `Err(StressError::FileError)` - I/O error
pub fn load_job(path: &Path) -> StressResult<AnalysisJob> {
    let mut file = File::open(path)
        .map_err(|e| StressError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| StressError::file_error("read", path.display().to_string(), e.to_string()))?;

    let job: AnalysisJob = serde_json::from_str(&contents).map_err(|e| {
        StressError::serialization(format!("Invalid job file {}: {}", path.display(), e))
    })?;

    validate_version(&job.meta.version)?;

    log::debug!(
        "loaded job '{}' ({} diagram stations) from {}",
        job.meta.label,
        job.diagram.len(),
        path.display()
    );
    Ok(job)
}

/// Temporary file used while saving `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match. While the schema is 0.x, a file with a newer
/// minor version than this build is rejected as well.
fn validate_version(file_version: &str) -> StressResult<()> {
    let mismatch = || StressError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file = Version::parse(file_version).map_err(|_| mismatch())?;
    let current = Version::parse(SCHEMA_VERSION).map_err(|_| mismatch())?;

    if file.major != current.major {
        return Err(mismatch());
    }
    if current.major == 0 && file.minor > current.minor {
        return Err(mismatch());
    }

    Ok(())
}

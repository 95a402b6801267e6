//! Internal-Force Diagrams
//!
//! A [`ForceDiagram`] is the discretized shear force V(x) and bending moment
//! M(x) produced by an upstream beam solver. The engine only reads it.
//!
//! ## Invariants
//! - Positions are finite and non-decreasing (repeated positions are allowed,
//!   which is how solvers represent jumps at point loads)
//! - Shear and moment values are finite
//! - The diagram may be empty
//!
//! ## Position Lookup
//! [`ForceDiagram::sample_at`] uses a ceiling policy: the first sample whose
//! `x` is at or beyond the query, or the last sample when the query lies past
//! the end. There is no interpolation and no nearest-neighbour search.
//!
//! ## Example
//! ```rust
//! use stress_core::diagram::{ForceDiagram, ForceSample};
//!
//! let diagram = ForceDiagram::new(vec![
//!     ForceSample::new(0.0, 500.0, 0.0),
//!     ForceSample::new(1.0, 250.0, 375.0),
//!     ForceSample::new(2.0, 0.0, 500.0),
//! ]).unwrap();
//!
//! assert_eq!(diagram.sample_at(0.5).unwrap().x, 1.0);
//! assert_eq!(diagram.sample_at(9.0).unwrap().x, 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StressError, StressResult};

/// One station of an internal-force diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    /// Position along the span
    pub x: f64,
    /// Shear force V(x)
    pub shear: f64,
    /// Bending moment M(x)
    pub moment: f64,
}

impl ForceSample {
    /// Create a sample
    pub fn new(x: f64, shear: f64, moment: f64) -> Self {
        ForceSample { x, shear, moment }
    }
}

/// Ordered internal-force samples along the beam.
///
/// Deserializes from a plain JSON array of samples; ordering and finiteness
/// are checked on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ForceSample>", into = "Vec<ForceSample>")]
pub struct ForceDiagram {
    samples: Vec<ForceSample>,
}

impl ForceDiagram {
    /// Build a diagram, validating the sample order.
    pub fn new(samples: Vec<ForceSample>) -> StressResult<Self> {
        for (i, sample) in samples.iter().enumerate() {
            if !sample.x.is_finite() || !sample.shear.is_finite() || !sample.moment.is_finite() {
                return Err(StressError::invalid_input(
                    format!("diagram[{}]", i),
                    format!("{:?}", sample),
                    "Positions, shear and moment must be finite",
                ));
            }
            if i > 0 && sample.x < samples[i - 1].x {
                return Err(StressError::invalid_input(
                    format!("diagram[{}].x", i),
                    sample.x.to_string(),
                    format!("Positions must be non-decreasing (previous x = {})", samples[i - 1].x),
                ));
            }
        }
        Ok(ForceDiagram { samples })
    }

    /// Empty diagram
    pub fn empty() -> Self {
        ForceDiagram::default()
    }

    /// Zip separate shear and moment series, each a list of `(x, value)`
    /// pairs at the same positions.
    ///
    /// This is the shape a superposition solver typically emits for plotting.
    ///
    /// ```rust
    /// use stress_core::diagram::ForceDiagram;
    ///
    /// let shear = vec![(0.0, 500.0), (5.0, 0.0), (10.0, -500.0)];
    /// let moment = vec![(0.0, 0.0), (5.0, 1250.0), (10.0, 0.0)];
    /// let diagram = ForceDiagram::from_diagrams(&shear, &moment).unwrap();
    /// assert_eq!(diagram.len(), 3);
    /// assert_eq!(diagram.samples()[1].moment, 1250.0);
    /// ```
    pub fn from_diagrams(shear: &[(f64, f64)], moment: &[(f64, f64)]) -> StressResult<Self> {
        if shear.len() != moment.len() {
            return Err(StressError::invalid_input(
                "moment_diagram",
                format!("{} samples", moment.len()),
                format!("Shear diagram has {} samples; both series must match", shear.len()),
            ));
        }

        let samples = shear
            .iter()
            .zip(moment)
            .enumerate()
            .map(|(i, (&(xv, v), &(xm, m)))| {
                if xv != xm {
                    return Err(StressError::invalid_input(
                        format!("moment_diagram[{}].x", i),
                        xm.to_string(),
                        format!("Shear sample is at x = {}; positions must match", xv),
                    ));
                }
                Ok(ForceSample::new(xv, v, m))
            })
            .collect::<StressResult<Vec<_>>>()?;

        ForceDiagram::new(samples)
    }

    /// All samples in order
    pub fn samples(&self) -> &[ForceSample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Span covered by the samples, `(first x, last x)`
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.x, self.samples.last()?.x))
    }

    /// Sample governing `position`: the first with `x >= position`, or the
    /// last sample when `position` is beyond every station. `None` only for
    /// an empty diagram.
    pub fn sample_at(&self, position: f64) -> Option<&ForceSample> {
        self.samples
            .iter()
            .find(|s| s.x >= position)
            .or_else(|| self.samples.last())
    }
}

impl TryFrom<Vec<ForceSample>> for ForceDiagram {
    type Error = StressError;

    fn try_from(samples: Vec<ForceSample>) -> StressResult<Self> {
        ForceDiagram::new(samples)
    }
}

impl From<ForceDiagram> for Vec<ForceSample> {
    fn from(diagram: ForceDiagram) -> Self {
        diagram.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_stations() -> ForceDiagram {
        ForceDiagram::new(
            (0..4)
                .map(|i| ForceSample::new(i as f64, 100.0 * i as f64, -10.0 * i as f64))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_ceiling_lookup() {
        let diagram = four_stations();
        assert_eq!(diagram.sample_at(1.5).unwrap().x, 2.0);
        assert_eq!(diagram.sample_at(1.0).unwrap().x, 1.0);
        assert_eq!(diagram.sample_at(-3.0).unwrap().x, 0.0);
    }

    #[test]
    fn test_lookup_past_end_clamps_to_last() {
        let diagram = four_stations();
        assert_eq!(diagram.sample_at(10.0).unwrap().x, 3.0);
    }

    #[test]
    fn test_lookup_on_repeated_positions_takes_first() {
        let diagram = ForceDiagram::new(vec![
            ForceSample::new(0.0, 500.0, 0.0),
            ForceSample::new(2.0, 500.0, 1000.0),
            ForceSample::new(2.0, -500.0, 1000.0),
            ForceSample::new(4.0, -500.0, 0.0),
        ])
        .unwrap();
        assert_eq!(diagram.sample_at(1.0).unwrap().shear, 500.0);
    }

    #[test]
    fn test_empty_diagram() {
        let diagram = ForceDiagram::empty();
        assert!(diagram.is_empty());
        assert!(diagram.sample_at(0.0).is_none());
        assert!(diagram.range().is_none());
    }

    #[test]
    fn test_rejects_decreasing_positions() {
        let err = ForceDiagram::new(vec![
            ForceSample::new(1.0, 0.0, 0.0),
            ForceSample::new(0.5, 0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(ForceDiagram::new(vec![ForceSample::new(0.0, f64::NAN, 0.0)]).is_err());
        assert!(ForceDiagram::new(vec![ForceSample::new(f64::INFINITY, 0.0, 0.0)]).is_err());
    }

    #[test]
    fn test_from_diagrams_mismatch() {
        let shear = vec![(0.0, 1.0), (1.0, 1.0)];
        assert!(ForceDiagram::from_diagrams(&shear, &[(0.0, 0.0)]).is_err());
        assert!(ForceDiagram::from_diagrams(&shear, &[(0.0, 0.0), (2.0, 0.0)]).is_err());
    }

    #[test]
    fn test_json_array_form() {
        let diagram: ForceDiagram = serde_json::from_str(
            r#"[{ "x": 0.0, "shear": 10.0, "moment": 0.0 }, { "x": 1.0, "shear": -10.0, "moment": 5.0 }]"#,
        )
        .unwrap();
        assert_eq!(diagram.range(), Some((0.0, 1.0)));

        let bad = serde_json::from_str::<ForceDiagram>(
            r#"[{ "x": 2.0, "shear": 0.0, "moment": 0.0 }, { "x": 1.0, "shear": 0.0, "moment": 0.0 }]"#,
        );
        assert!(bad.is_err());
    }
}

//! # Section Property Calculator
//!
//! Turns a [`SectionDescriptor`] plus an externally supplied moment of
//! inertia into the [`SectionProperties`] the stress engine works from.
//!
//! ## Leniency
//!
//! Geometry input is lenient: a missing
//! dimension, `null`, something that is not a number, NaN or zero all resolve
//! to the type default listed below. Numeric strings such as `"0.25"` are
//! accepted. Negative dimensions are kept as given and flow into degenerate
//! properties; the stress calculations reject those when they divide.
//!
//! | Type | Defaults |
//! |------|----------|
//! | rectangular | width = 0.3, height = 0.5 |
//! | circular | diameter = 0.4 |
//! | i-beam | flange 0.2 × 0.02, web 0.4 × 0.01 |
//! | t-beam | flange 0.3 × 0.05, web 0.4 × 0.02 |
//! | unspecified | fixed properties (A = 0.15, ȳ = c = 0.25, t = 0.3, Q = 0.01) |
//!
//! ## Moment of Inertia
//!
//! The inertia is never derived from the geometry here. It may come from a
//! user override or a tabulated value, so it is copied through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use stress_core::sections::{compute_properties, SectionDescriptor};
//!
//! let section: SectionDescriptor =
//!     serde_json::from_str(r#"{ "type": "rectangular", "width": 0.2, "height": "0.4" }"#).unwrap();
//!
//! let props = compute_properties(&section, 0.2 * 0.4_f64.powi(3) / 12.0);
//! assert!((props.area - 0.08).abs() < 1e-12);
//! assert!((props.max_distance_from_centroid - 0.2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::equations::section as eq;

/// Cross-section geometry, tagged by shape.
///
/// ## JSON Example
///
/// ```json
/// { "type": "i-beam", "flange_width": 0.2, "flange_thickness": 0.02,
///   "web_height": 0.4, "web_thickness": 0.01 }
/// ```
///
/// An unknown `"type"` deserializes as [`SectionDescriptor::Unspecified`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionDescriptor {
    /// Solid rectangle
    Rectangular {
        #[serde(default, deserialize_with = "lenient_dimension")]
        width: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        height: Option<f64>,
    },

    /// Solid circle
    Circular {
        #[serde(default, deserialize_with = "lenient_dimension")]
        diameter: Option<f64>,
    },

    /// Doubly symmetric I-beam (two equal flanges)
    IBeam {
        #[serde(default, deserialize_with = "lenient_dimension")]
        flange_width: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        flange_thickness: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        web_height: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        web_thickness: Option<f64>,
    },

    /// T-beam with the flange on top of the web
    TBeam {
        #[serde(default, deserialize_with = "lenient_dimension")]
        flange_width: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        flange_thickness: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        web_height: Option<f64>,
        #[serde(default, deserialize_with = "lenient_dimension")]
        web_thickness: Option<f64>,
    },

    /// No usable shape; fixed default properties are used
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Shape tag without dimensions.
///
/// Selects the transverse shear model in
/// [`cross_section_distribution`](crate::calculations::cross_section_distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Rectangular,
    Circular,
    IBeam,
    TBeam,
    Unspecified,
}

impl SectionKind {
    /// Human-readable name, matching the JSON tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Rectangular => "rectangular",
            SectionKind::Circular => "circular",
            SectionKind::IBeam => "i-beam",
            SectionKind::TBeam => "t-beam",
            SectionKind::Unspecified => "unspecified",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SectionDescriptor {
    /// Create a rectangular section
    pub fn rectangular(width: f64, height: f64) -> Self {
        SectionDescriptor::Rectangular {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create a circular section
    pub fn circular(diameter: f64) -> Self {
        SectionDescriptor::Circular {
            diameter: Some(diameter),
        }
    }

    /// Create an I-beam section
    pub fn i_beam(flange_width: f64, flange_thickness: f64, web_height: f64, web_thickness: f64) -> Self {
        SectionDescriptor::IBeam {
            flange_width: Some(flange_width),
            flange_thickness: Some(flange_thickness),
            web_height: Some(web_height),
            web_thickness: Some(web_thickness),
        }
    }

    /// Create a T-beam section
    pub fn t_beam(flange_width: f64, flange_thickness: f64, web_height: f64, web_thickness: f64) -> Self {
        SectionDescriptor::TBeam {
            flange_width: Some(flange_width),
            flange_thickness: Some(flange_thickness),
            web_height: Some(web_height),
            web_thickness: Some(web_thickness),
        }
    }

    /// The shape tag of this descriptor
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionDescriptor::Rectangular { .. } => SectionKind::Rectangular,
            SectionDescriptor::Circular { .. } => SectionKind::Circular,
            SectionDescriptor::IBeam { .. } => SectionKind::IBeam,
            SectionDescriptor::TBeam { .. } => SectionKind::TBeam,
            SectionDescriptor::Unspecified => SectionKind::Unspecified,
        }
    }
}

/// Geometric properties of a section, as used by the stress formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area
    pub area: f64,
    /// Second moment of area about the neutral axis (supplied by the caller)
    pub moment_of_inertia: f64,
    /// Height of the centroid above the bottom fiber
    pub centroid_height: f64,
    /// Distance from the neutral axis to the farthest fiber
    pub max_distance_from_centroid: f64,
    /// Width at the fiber governing shear stress
    pub thickness: f64,
    /// First moment of area Q about the neutral axis
    pub first_moment_of_area: f64,
}

// Defaults per section type
const RECT_WIDTH: f64 = 0.3;
const RECT_HEIGHT: f64 = 0.5;
const CIRCLE_DIAMETER: f64 = 0.4;
const I_FLANGE_WIDTH: f64 = 0.2;
const I_FLANGE_THICKNESS: f64 = 0.02;
const I_WEB_HEIGHT: f64 = 0.4;
const I_WEB_THICKNESS: f64 = 0.01;
const T_FLANGE_WIDTH: f64 = 0.3;
const T_FLANGE_THICKNESS: f64 = 0.05;
const T_WEB_HEIGHT: f64 = 0.4;
const T_WEB_THICKNESS: f64 = 0.02;

/// Properties reported for [`SectionDescriptor::Unspecified`]
const UNSPECIFIED: SectionProperties = SectionProperties {
    area: 0.15,
    moment_of_inertia: 0.0,
    centroid_height: 0.25,
    max_distance_from_centroid: 0.25,
    thickness: 0.3,
    first_moment_of_area: 0.01,
};

/// Compute section properties.
///
/// Never fails: unusable dimensions fall back to the type defaults (see the
/// module docs). `moment_of_inertia` is copied into the result verbatim.
///
/// # Example
///
/// ```rust
/// use stress_core::sections::{compute_properties, SectionDescriptor};
///
/// let props = compute_properties(&SectionDescriptor::circular(0.4), 0.00126);
/// assert!((props.thickness - 0.4).abs() < 1e-12);
/// assert_eq!(props.moment_of_inertia, 0.00126);
/// ```
pub fn compute_properties(section: &SectionDescriptor, moment_of_inertia: f64) -> SectionProperties {
    let props = match section {
        SectionDescriptor::Rectangular { width, height } => {
            let b = dimension("width", *width, RECT_WIDTH);
            let h = dimension("height", *height, RECT_HEIGHT);
            SectionProperties {
                area: eq::rectangular_area(b, h),
                moment_of_inertia,
                centroid_height: h / 2.0,
                max_distance_from_centroid: h / 2.0,
                thickness: b,
                first_moment_of_area: eq::rectangular_first_moment(b, h),
            }
        }
        SectionDescriptor::Circular { diameter } => {
            let d = dimension("diameter", *diameter, CIRCLE_DIAMETER);
            let r = d / 2.0;
            SectionProperties {
                area: eq::circular_area(r),
                moment_of_inertia,
                centroid_height: r,
                max_distance_from_centroid: r,
                thickness: d,
                first_moment_of_area: eq::circular_first_moment(r),
            }
        }
        SectionDescriptor::IBeam {
            flange_width,
            flange_thickness,
            web_height,
            web_thickness,
        } => {
            let bf = dimension("flange_width", *flange_width, I_FLANGE_WIDTH);
            let tf = dimension("flange_thickness", *flange_thickness, I_FLANGE_THICKNESS);
            let hw = dimension("web_height", *web_height, I_WEB_HEIGHT);
            let tw = dimension("web_thickness", *web_thickness, I_WEB_THICKNESS);
            let half_depth = eq::i_beam_depth(tf, hw) / 2.0;
            SectionProperties {
                area: eq::i_beam_area(bf, tf, hw, tw),
                moment_of_inertia,
                centroid_height: half_depth,
                max_distance_from_centroid: half_depth,
                thickness: tw,
                first_moment_of_area: eq::i_beam_first_moment(bf, tf, hw),
            }
        }
        SectionDescriptor::TBeam {
            flange_width,
            flange_thickness,
            web_height,
            web_thickness,
        } => {
            let bf = dimension("flange_width", *flange_width, T_FLANGE_WIDTH);
            let tf = dimension("flange_thickness", *flange_thickness, T_FLANGE_THICKNESS);
            let hw = dimension("web_height", *web_height, T_WEB_HEIGHT);
            let tw = dimension("web_thickness", *web_thickness, T_WEB_THICKNESS);
            let depth = hw + tf;
            let centroid = eq::t_beam_centroid(bf, tf, hw, tw);
            SectionProperties {
                area: bf * tf + tw * hw,
                moment_of_inertia,
                centroid_height: centroid,
                max_distance_from_centroid: centroid.max(depth - centroid),
                thickness: tw,
                first_moment_of_area: eq::t_beam_first_moment(bf, tf, hw, centroid),
            }
        }
        SectionDescriptor::Unspecified => SectionProperties {
            moment_of_inertia,
            ..UNSPECIFIED
        },
    };

    log::debug!("{} section properties: {:?}", section.kind(), props);
    props
}

/// Resolve a dimension, falling back to `default` when it is missing, zero
/// or not finite.
fn dimension(field: &str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => {
            log::warn!("section {} not usable ({:?}), using default {}", field, value, default);
            default
        }
    }
}

/// Accept numbers and numeric strings; anything else becomes `None` so the
/// type default is used.
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

//! Configuration options for slicing.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlicerError};

/// Default tolerance used to classify a vertex as lying on the cutting plane.
pub const DEFAULT_EPSILON: f32 = 1e-6;

/// Default distance under which two projected cap points are merged.
pub const DEFAULT_WELD_TOLERANCE: f32 = 1e-5;

/// Options controlling a slice operation.
///
/// Both tolerances are relative to the mesh extent: a slice scales them by the
/// largest distance of a mesh vertex from the origin, and uses them as-is for meshes
/// within the unit ball. See [`SliceOptions::scaled_to`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    /// Signed distances within this tolerance count as lying on the plane.
    pub epsilon: f32,

    /// Projected cap points closer than this are treated as duplicates.
    pub weld_tolerance: f32,

    /// Whether cap faces get planar texture coordinates.
    pub generate_cap_uvs: bool,

    /// Whether assembled surfaces share bit-identical vertices.
    pub weld_vertices: bool,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            weld_tolerance: DEFAULT_WELD_TOLERANCE,
            generate_cap_uvs: true,
            weld_vertices: true,
        }
    }
}

impl SliceOptions {
    /// Checks that all tolerances are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SlicerError::InvalidOptions(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        if !self.weld_tolerance.is_finite() || self.weld_tolerance < 0.0 {
            return Err(SlicerError::InvalidOptions(format!(
                "weld_tolerance must be finite and non-negative, got {}",
                self.weld_tolerance
            )));
        }
        Ok(())
    }

    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Returns the options with both tolerances scaled to a mesh of the given extent.
    ///
    /// Extents below one leave the tolerances unchanged, so small meshes never get a
    /// tolerance tighter than the configured one.
    #[must_use]
    pub fn scaled_to(&self, extent: f32) -> Self {
        let scale = if extent.is_finite() { extent.max(1.0) } else { 1.0 };
        Self {
            epsilon: self.epsilon * scale,
            weld_tolerance: self.weld_tolerance * scale,
            ..self.clone()
        }
    }

    /// Serializes the options to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Landmark samples and the per-frame set of tracked points.
//!
//! Coordinates are in the normalized space of the face mesh: `x` and `y` run
//! roughly from 0.0 to 1.0 across the image, `z` is relative depth where more
//! negative values are closer to the camera.

use crate::{
    constants::{BOTTOM_HEAD_LANDMARK, CHIN_LANDMARK, SIDE_HEAD_LANDMARK, TOP_HEAD_LANDMARK},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate axis of a landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal image axis
    X,
    /// Vertical image axis
    Y,
    /// Depth relative to the face
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Position of one tracked point in one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkSample {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Relative depth
    pub z: f64,
}

impl LandmarkSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinate of this sample along `axis`
    #[must_use]
    pub const fn axis_value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether every coordinate is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Free-function form of [`LandmarkSample::axis_value`]
#[must_use]
pub const fn axis_value(sample: &LandmarkSample, axis: Axis) -> f64 {
    sample.axis_value(axis)
}

/// Face mesh indices of the four points the gesture engine tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkIndices {
    /// Chin point, tracked for nodding
    pub nod_point: usize,
    /// Side-of-head point, tracked for shaking
    pub shake_point: usize,
    /// Top of the head, used for distance normalization
    pub top_head: usize,
    /// Bottom of the head, used for distance normalization
    pub bottom_head: usize,
}

impl Default for LandmarkIndices {
    fn default() -> Self {
        Self {
            nod_point: CHIN_LANDMARK,
            shake_point: SIDE_HEAD_LANDMARK,
            top_head: TOP_HEAD_LANDMARK,
            bottom_head: BOTTOM_HEAD_LANDMARK,
        }
    }
}

impl LandmarkIndices {
    /// Largest index referenced, i.e. the mesh must hold more landmarks than this
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.nod_point
            .max(self.shake_point)
            .max(self.top_head)
            .max(self.bottom_head)
    }
}

/// The four tracked points delivered for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceFrame {
    /// Chin point, tracked for nodding
    pub nod_point: LandmarkSample,
    /// Side-of-head point, tracked for shaking
    pub shake_point: LandmarkSample,
    /// Top of the head
    pub top_head: LandmarkSample,
    /// Bottom of the head
    pub bottom_head: LandmarkSample,
}

impl FaceFrame {
    /// Create a frame from its four points
    #[must_use]
    pub const fn new(
        nod_point: LandmarkSample,
        shake_point: LandmarkSample,
        top_head: LandmarkSample,
        bottom_head: LandmarkSample,
    ) -> Self {
        Self {
            nod_point,
            shake_point,
            top_head,
            bottom_head,
        }
    }

    /// Pick the tracked points out of a full face mesh
    ///
    /// # Errors
    ///
    /// Returns an error if any index lies outside the mesh
    pub fn from_mesh(mesh: &[LandmarkSample], indices: &LandmarkIndices) -> Result<Self> {
        let pick = |index: usize, name: &str| {
            mesh.get(index).copied().ok_or_else(|| {
                Error::InvalidInput(format!(
                    "{name} landmark {index} out of range for mesh of {} points",
                    mesh.len()
                ))
            })
        };

        Ok(Self {
            nod_point: pick(indices.nod_point, "nod")?,
            shake_point: pick(indices.shake_point, "shake")?,
            top_head: pick(indices.top_head, "top head")?,
            bottom_head: pick(indices.bottom_head, "bottom head")?,
        })
    }

    /// Check that every coordinate of every point is finite
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLandmark`] naming the first offending point
    pub fn validate(&self) -> Result<()> {
        let points = [
            ("nod", &self.nod_point),
            ("shake", &self.shake_point),
            ("top head", &self.top_head),
            ("bottom head", &self.bottom_head),
        ];

        for (name, point) in points {
            if !point.is_finite() {
                return Err(Error::InvalidLandmark(format!(
                    "{name} point has non-finite coordinates ({}, {}, {})",
                    point.x, point.y, point.z
                )));
            }
        }

        Ok(())
    }
}

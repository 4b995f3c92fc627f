//! Error types for scene and geometry construction.
//!
//! Rendering itself never fails: an invisible, culled or degenerate polygon
//! is a normal branch in the render loop, not an error. Failures surface
//! only when geometry or a target is built.

use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// A polygon referenced a point index outside the owning object's
    /// point list.
    InvalidGeometry { index: usize, point_count: usize },
    /// A polygon listed fewer than the three vertices needed to form a
    /// face.
    TooFewVertices { count: usize },
    /// The requested output target has zero extent.
    SurfaceUnavailable { width: u32, height: u32 },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidGeometry { index, point_count } => write!(
                f,
                "polygon references point {index} but the object has {point_count} points"
            ),
            SceneError::TooFewVertices { count } => {
                write!(f, "polygon has {count} vertices, need at least 3")
            }
            SceneError::SurfaceUnavailable { width, height } => {
                write!(f, "output surface has zero extent ({width}x{height})")
            }
        }
    }
}

impl Error for SceneError {}

//! Passive geometry records owned by an [`Object`](crate::object::Object).

use crate::color::Color;

/// A vertex with its immutable input coordinates and the rotated
/// coordinates the last [`Object::rotate`](crate::object::Object::rotate)
/// call produced.
///
/// The rotated fields start out equal to the raw coordinates, so an object
/// that is never rotated projects its geometry as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub xr: f32,
    pub yr: f32,
    pub zr: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            xr: x,
            yr: y,
            zr: z,
        }
    }

    /// The rotated coordinates as a tuple.
    pub fn rotated(&self) -> (f32, f32, f32) {
        (self.xr, self.yr, self.zr)
    }
}

/// A face over three or more of the owning object's points.
///
/// Indices are validated against the point list when the polygon is added;
/// the points must lie in a plane, which remains a caller contract.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Ordered indices into the owning object's point list.
    pub indices: Vec<usize>,
    /// Base color, channels in `[0, 1]`.
    pub color: Color,
    /// 0 = fully transparent, 1 = fully opaque.
    pub opacity: f32,
    /// 0 = absorbs all light, 1 = reflects all light.
    pub reflectivity: f32,
    /// Disabled polygons are skipped by the render loop entirely.
    pub enabled: bool,
}

impl Polygon {
    pub fn new(
        indices: Vec<usize>,
        color: Color,
        opacity: f32,
        reflectivity: f32,
        enabled: bool,
    ) -> Self {
        Self {
            indices,
            color,
            opacity,
            reflectivity,
            enabled,
        }
    }
}

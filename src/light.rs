//! Lighting types for the renderer.

use crate::color::Color;
use crate::math::vec3::Vec3;

/// A point light with a position and a color, both in scene-world units.
///
/// Lights are owned by the [`Scene`](crate::scene::Scene); their
/// contribution to a polygon falls off with the polygon's average depth and
/// is scaled by the polygon's reflectivity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            color: Color::new(r, g, b),
        }
    }
}

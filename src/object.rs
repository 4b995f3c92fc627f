//! A 3D object: a set of points and polygons plus its own rotation,
//! translation and scale state.
//!
//! Objects own their geometry exclusively. Rotation is always applied to
//! the *original* point coordinates, never to previously rotated ones, so
//! calling [`Object::rotate`] repeatedly with the same angles is idempotent
//! rather than cumulative.

use std::rc::Rc;

use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::{Point, Polygon};
use crate::math::vec3::Vec3;
use crate::trig::{TrigTable, DEGREES};

pub struct Object {
    points: Vec<Point>,
    polygons: Vec<Polygon>,
    /// Current rotation, one angle per axis, each in `[0, 360)` degrees.
    rotation: [usize; 3],
    translation: Vec3,
    zoom: f32,
    trig: Rc<TrigTable>,
}

impl Object {
    pub fn new(trig: Rc<TrigTable>) -> Self {
        Self {
            points: Vec::new(),
            polygons: Vec::new(),
            rotation: [0; 3],
            translation: Vec3::ZERO,
            zoom: 1.0,
            trig,
        }
    }

    /// Append a point. Its rotated coordinates start equal to the raw ones.
    pub fn add_point(&mut self, x: f32, y: f32, z: f32) {
        self.points.push(Point::new(x, y, z));
    }

    /// Replace the point list wholesale. Add points before the polygons
    /// that reference them, since polygon indices are validated against the
    /// current point list.
    pub fn set_points(&mut self, coords: &[(f32, f32, f32)]) {
        self.points.clear();
        for &(x, y, z) in coords {
            self.add_point(x, y, z);
        }
    }

    /// Append a polygon over existing points.
    ///
    /// Fails with [`SceneError::InvalidGeometry`] if any index is out of
    /// range, or [`SceneError::TooFewVertices`] for fewer than three
    /// indices. The indices must describe a planar face; that part of the
    /// contract is not checked.
    pub fn add_polygon(
        &mut self,
        indices: Vec<usize>,
        color: Color,
        opacity: f32,
        reflectivity: f32,
        enabled: bool,
    ) -> Result<(), SceneError> {
        if indices.len() < 3 {
            return Err(SceneError::TooFewVertices {
                count: indices.len(),
            });
        }
        for &index in &indices {
            if index >= self.points.len() {
                return Err(SceneError::InvalidGeometry {
                    index,
                    point_count: self.points.len(),
                });
            }
        }
        self.polygons
            .push(Polygon::new(indices, color, opacity, reflectivity, enabled));
        Ok(())
    }

    /// Replace the polygon list wholesale, validating each entry.
    pub fn set_polygons(&mut self, polygons: Vec<Polygon>) -> Result<(), SceneError> {
        self.polygons.clear();
        for polygon in polygons {
            self.add_polygon(
                polygon.indices,
                polygon.color,
                polygon.opacity,
                polygon.reflectivity,
                polygon.enabled,
            )?;
        }
        Ok(())
    }

    /// Rotate every point around the X, then Y, then Z axis by the given
    /// angles in degrees.
    ///
    /// Angles are rounded to the nearest integer degree and normalized into
    /// `[0, 360)` per axis. The rotation always reads the original
    /// coordinates and writes the rotated fields, so the result depends
    /// only on the angles passed, not on any earlier call. Cost is linear
    /// in the point count; intended to run once per object per frame.
    pub fn rotate(&mut self, x_deg: f32, y_deg: f32, z_deg: f32) {
        self.rotation = [
            wrap_degrees(x_deg),
            wrap_degrees(y_deg),
            wrap_degrees(z_deg),
        ];
        let [rx, ry, rz] = self.rotation;
        let (sx, cx) = (self.trig.sin(rx), self.trig.cos(rx));
        let (sy, cy) = (self.trig.sin(ry), self.trig.cos(ry));
        let (sz, cz) = (self.trig.sin(rz), self.trig.cos(rz));

        for point in &mut self.points {
            // X axis
            let y1 = cx * point.y - sx * point.z;
            let z1 = sx * point.y + cx * point.z;
            // Y axis
            let x2 = cy * point.x - sy * z1;
            let z2 = sy * point.x + cy * z1;
            // Z axis
            point.xr = cz * x2 - sz * y1;
            point.yr = sz * x2 + cz * y1;
            point.zr = z2;
        }
    }

    /// Position the object in scene space. The offset is applied at render
    /// time, never baked into the point coordinates.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.translation = Vec3::new(x, y, z);
    }

    /// Per-object scale factor, combined multiplicatively with the scene's
    /// global zoom during projection.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons
    }

    pub fn rotation(&self) -> [usize; 3] {
        self.rotation
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

/// Round to the nearest integer degree and normalize into `[0, 360)`.
/// Negative angles wrap (-90 becomes 270), on every axis independently.
fn wrap_degrees(degrees: f32) -> usize {
    (degrees.round() as i64).rem_euclid(DEGREES as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn object_with_points(coords: &[(f32, f32, f32)]) -> Object {
        let mut object = Object::new(Rc::new(TrigTable::new()));
        object.set_points(coords);
        object
    }

    #[test]
    fn zero_rotation_is_identity() {
        let mut object = object_with_points(&[(1.0, 2.0, 3.0), (-4.0, 0.5, -6.0)]);
        object.rotate(0.0, 0.0, 0.0);
        for point in object.points() {
            assert_relative_eq!(point.xr, point.x);
            assert_relative_eq!(point.yr, point.y);
            assert_relative_eq!(point.zr, point.z);
        }
    }

    #[test]
    fn rotation_is_idempotent_not_cumulative() {
        let mut object = object_with_points(&[(1.0, 2.0, 3.0), (0.3, -0.7, 1.1)]);
        object.rotate(30.0, 45.0, 60.0);
        let once: Vec<_> = object.points().iter().map(Point::rotated).collect();
        object.rotate(30.0, 45.0, 60.0);
        let twice: Vec<_> = object.points().iter().map(Point::rotated).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn rotate_z_quarter_turn() {
        let mut object = object_with_points(&[(1.0, 0.0, 0.0)]);
        object.rotate(0.0, 0.0, 90.0);
        let (xr, yr, zr) = object.points()[0].rotated();
        assert_relative_eq!(xr, 0.0, epsilon = 1e-6);
        assert_relative_eq!(yr, 1.0, epsilon = 1e-6);
        assert_relative_eq!(zr, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn negative_angles_wrap_per_axis() {
        let mut a = object_with_points(&[(1.0, 2.0, 3.0)]);
        let mut b = object_with_points(&[(1.0, 2.0, 3.0)]);
        a.rotate(-90.0, -45.0, -30.0);
        b.rotate(270.0, 315.0, 330.0);
        assert_eq!(a.rotation(), [270, 315, 330]);
        assert_eq!(a.points()[0].rotated(), b.points()[0].rotated());
    }

    #[test]
    fn polygon_index_out_of_range_is_rejected() {
        let mut object = object_with_points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let result = object.add_polygon(vec![0, 1, 2], Color::WHITE, 1.0, 0.5, true);
        assert_eq!(
            result,
            Err(SceneError::InvalidGeometry {
                index: 2,
                point_count: 2
            })
        );
        assert!(object.polygons().is_empty());
    }

    #[test]
    fn polygon_needs_three_vertices() {
        let mut object = object_with_points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let result = object.add_polygon(vec![0, 1], Color::WHITE, 1.0, 0.5, true);
        assert_eq!(result, Err(SceneError::TooFewVertices { count: 2 }));
    }
}

//! Built-in primitive geometry for demos, tests and benches.

use std::rc::Rc;

use crate::color::Color;
use crate::error::SceneError;
use crate::object::Object;
use crate::trig::TrigTable;

pub const CUBE_POINTS: [(f32, f32, f32); 8] = [
    (-1.0, -1.0, -1.0),
    (-1.0, 1.0, -1.0),
    (1.0, 1.0, -1.0),
    (1.0, -1.0, -1.0),
    (1.0, 1.0, 1.0),
    (1.0, -1.0, 1.0),
    (-1.0, 1.0, 1.0),
    (-1.0, -1.0, 1.0),
];

pub const CUBE_FACES: [[usize; 4]; 6] = [
    // Front
    [0, 1, 2, 3],
    // Right
    [3, 2, 4, 5],
    // Back
    [5, 4, 6, 7],
    // Left
    [7, 6, 1, 0],
    // Top
    [1, 6, 4, 2],
    // Bottom
    [5, 7, 0, 3],
];

/// A unit cube of six quads sharing one color and reflectivity.
pub fn cube(trig: Rc<TrigTable>, color: Color, reflectivity: f32) -> Result<Object, SceneError> {
    let mut object = Object::new(trig);
    object.set_points(&CUBE_POINTS);
    for face in CUBE_FACES {
        object.add_polygon(face.to_vec(), color, 1.0, reflectivity, true)?;
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_valid_geometry() {
        let cube = cube(Rc::new(TrigTable::new()), Color::WHITE, 0.8).unwrap();
        assert_eq!(cube.points().len(), 8);
        assert_eq!(cube.polygons().len(), 6);
        for polygon in cube.polygons() {
            assert_eq!(polygon.indices.len(), 4);
        }
    }
}

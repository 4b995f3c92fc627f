//! A CPU-only painter's-algorithm 3D scene renderer.
//!
//! This crate transforms, projects, lights and depth-sorts polygonal
//! objects, then paints them far-to-near onto an owned 2D raster target.
//! There is no GPU, no z-buffer and no clipping: nearer polygons simply
//! overpaint farther ones.
//!
//! # Quick Start
//!
//! ```ignore
//! use polyscene::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let trig = Rc::new(TrigTable::new());
//! let mut scene = Scene::new(320, 240, 0)?;
//! let cube = Rc::new(RefCell::new(shapes::cube(trig, Color::WHITE, 0.8)?));
//! scene.add_object(Rc::clone(&cube));
//!
//! cube.borrow_mut().rotate(30.0, 45.0, 0.0);
//! scene.render();
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod light;
pub mod math;
pub mod object;
pub mod scene;
pub mod shapes;
pub mod sorting;
pub mod trig;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use color::Color;
pub use error::SceneError;
pub use light::Light;
pub use object::Object;
pub use scene::{DrawCommand, ObjectHandle, Scene};
pub use trig::TrigTable;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use polyscene::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::error::SceneError;
    pub use crate::geometry::{Point, Polygon};
    pub use crate::light::Light;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::object::Object;
    pub use crate::scene::{DrawCommand, ObjectHandle, Scene};
    pub use crate::shapes;
    pub use crate::trig::TrigTable;
}

//! The scene: object and light collections, projection state, and the
//! per-frame render pipeline.
//!
//! [`Scene::render`] runs the whole pipeline in one blocking pass: project
//! every enabled polygon of every object, drop the invisible and culled
//! ones, light the rest, sort the resulting draw list far-to-near, and
//! paint it onto the bound target. There is no depth buffer; ordering alone
//! decides occlusion (the painter's algorithm).

use std::cell::RefCell;
use std::rc::Rc;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::{Point, Polygon};
use crate::light::Light;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::object::Object;
use crate::sorting;

/// Shared handle to an object. The scene keeps handles, not copies: callers
/// hold their own clone and mutate the object between frames.
pub type ObjectHandle = Rc<RefCell<Object>>;

/// One projected, lit polygon, ready to paint.
///
/// Built fresh every frame and fully consumed (sorted, painted, dropped)
/// before [`Scene::render`] returns. Never persisted.
#[derive(Clone, Debug)]
pub struct DrawCommand {
    /// Projected screen-space vertices, in polygon order.
    pub vertices: Vec<Vec2>,
    /// Mean of the per-vertex projected depths. Used only as the sort key.
    pub avg_depth: f32,
    /// Final lit color, channels already clamped.
    pub color: Color,
    pub opacity: f32,
}

/// Divisor applied to z before it becomes a projection depth.
const DEPTH_SCALE: f32 = 64.0;
/// Light contribution fades to zero at this average depth.
const FADE_RANGE: f32 = 40.0;
/// The lighting math divides magnitudes and dot products by this before
/// forming ratios. The constants above are tuned to that scale.
const MAGNITUDE_SCALE: f32 = 10.0;

const DEFAULT_ORIGIN_Z: f32 = 6.0;
const DEFAULT_AMBIENT: f32 = 0.1;

pub struct Scene {
    objects: Vec<ObjectHandle>,
    lights: Vec<Light>,
    origin: Vec3,
    zoom: f32,
    ambient: f32,
    cull_back: bool,
    background: u32,
    primary: Canvas,
    buffers: Vec<Canvas>,
    /// `None` means the primary target is bound.
    active_buffer: Option<usize>,
    /// Pending whole-buffer rotation in radians, applied by
    /// [`Scene::blit_buffer`].
    buffer_rotation: f32,
}

impl Scene {
    /// Create a scene bound to a primary target of the given pixel
    /// dimensions, plus `num_buffers` equally sized secondary targets.
    ///
    /// The projection origin defaults to the target center at eye distance
    /// 6, ambient to 0.1, global zoom to 1, with backface culling enabled
    /// and a black background. The primary target starts cleared.
    pub fn new(width: u32, height: u32, num_buffers: usize) -> Result<Self, SceneError> {
        let mut primary = Canvas::new(width, height)?;
        let buffers = (0..num_buffers)
            .map(|_| Canvas::new(width, height))
            .collect::<Result<Vec<_>, _>>()?;

        let background = Color::BLACK.to_argb(1.0);
        primary.clear(background);

        Ok(Self {
            objects: Vec::new(),
            lights: Vec::new(),
            origin: Vec3::new(width as f32 / 2.0, height as f32 / 2.0, DEFAULT_ORIGIN_Z),
            zoom: 1.0,
            ambient: DEFAULT_AMBIENT,
            cull_back: true,
            background,
            primary,
            buffers,
            active_buffer: None,
            buffer_rotation: 0.0,
        })
    }

    // ============ Collections ============

    pub fn add_object(&mut self, object: ObjectHandle) {
        self.objects.push(object);
    }

    pub fn remove_objects(&mut self) {
        self.objects.clear();
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Reposition the light at `index`. Out-of-range indices are ignored.
    pub fn move_light(&mut self, index: usize, x: f32, y: f32, z: f32) {
        if let Some(light) = self.lights.get_mut(index) {
            light.position = Vec3::new(x, y, z);
        }
    }

    pub fn remove_lights(&mut self) {
        self.lights.clear();
    }

    // ============ Projection state ============

    /// Set the projection center and eye distance.
    pub fn set_origin(&mut self, x: f32, y: f32, z: f32) {
        self.origin = Vec3::new(x, y, z);
    }

    /// Global projection scale, combined with each object's own zoom.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Baseline illumination applied regardless of lights.
    pub fn set_ambient(&mut self, ambient: f32) {
        self.ambient = ambient;
    }

    pub fn set_bg_color(&mut self, color: Color) {
        self.background = color.to_argb(1.0);
    }

    /// Toggle the winding-order visibility test.
    pub fn cull_back_facing(&mut self, cull: bool) {
        self.cull_back = cull;
    }

    // ============ Targets ============

    /// The primary target.
    pub fn frame(&self) -> &Canvas {
        &self.primary
    }

    /// A secondary target, if it exists.
    pub fn buffer(&self, index: usize) -> Option<&Canvas> {
        self.buffers.get(index)
    }

    /// Redirect subsequent rendering to the secondary target at `index`,
    /// or back to the primary with `None`. An out-of-range index leaves the
    /// selection unchanged. The selection persists across renders.
    pub fn set_buffer(&mut self, index: Option<usize>) {
        match index {
            Some(ix) if ix >= self.buffers.len() => {}
            selection => self.active_buffer = selection,
        }
    }

    /// Record the rotation, in radians, that the next
    /// [`Scene::blit_buffer`] will apply.
    pub fn set_buffer_rotation(&mut self, angle: f32) {
        self.buffer_rotation = angle;
    }

    /// Composite the secondary target at `index` onto the currently bound
    /// target, rotated about its own center by the pending buffer rotation.
    /// The rotation happens here, at composition time, not at render time.
    pub fn blit_buffer(&mut self, index: usize) {
        if index >= self.buffers.len() {
            return;
        }
        let angle = self.buffer_rotation;
        match self.active_buffer {
            None => self.primary.blit_rotated(&self.buffers[index], angle),
            Some(active) if active == index => {}
            Some(active) => {
                let (dst, src) = if active < index {
                    let (head, tail) = self.buffers.split_at_mut(index);
                    (&mut head[active], &tail[0])
                } else {
                    let (head, tail) = self.buffers.split_at_mut(active);
                    (&mut tail[0], &head[index])
                };
                dst.blit_rotated(src, angle);
            }
        }
    }

    /// Clear the bound target to the background color.
    pub fn clear(&mut self) {
        let background = self.background;
        self.target_mut().clear(background);
    }

    fn target_mut(&mut self) -> &mut Canvas {
        match self.active_buffer {
            Some(index) => &mut self.buffers[index],
            None => &mut self.primary,
        }
    }

    // ============ Rendering ============

    /// Render one frame onto the bound target.
    ///
    /// A pure function of the current object, light and projection state:
    /// clear, project and light every eligible polygon into a draw list,
    /// sort it far-to-near, paint it in that order.
    pub fn render(&mut self) {
        self.clear();

        let mut draw_list = self.build_draw_list();
        sorting::sort_by_depth_descending(&mut draw_list);

        let target = self.target_mut();
        for command in &draw_list {
            target.fill_polygon(&command.vertices, command.color.to_argb(command.opacity));
        }
    }

    /// Project, cull and light every enabled polygon into draw commands.
    fn build_draw_list(&self) -> Vec<DrawCommand> {
        let mut draw_list = Vec::new();
        let width = self.primary.width() as f32;
        let height = self.primary.height() as f32;

        for handle in &self.objects {
            let object = handle.borrow();
            self.project_object(&object, width, height, &mut draw_list);
        }
        draw_list
    }

    fn project_object(
        &self,
        object: &Object,
        width: f32,
        height: f32,
        draw_list: &mut Vec<DrawCommand>,
    ) {
        let origin = self.origin;
        let zoom = self.zoom;
        let translation = object.translation();
        let object_zoom = object.zoom();
        let points = object.points();

        for polygon in object.polygons() {
            if !polygon.enabled {
                continue;
            }

            // Project every vertex, flooring the depth at 1 so nothing
            // near or behind the viewer blows up the divide.
            let mut vertices = Vec::with_capacity(polygon.indices.len());
            let mut depth_sum = 0.0;
            let mut visible = false;
            for &index in &polygon.indices {
                let point = &points[index];
                let mut depth =
                    (translation.z + point.zr * object_zoom) / DEPTH_SCALE + origin.z;
                if depth < 1.0 {
                    depth = 1.0;
                }
                let screen_x = origin.x + ((translation.x + point.xr * object_zoom) * zoom) / depth;
                let screen_y = origin.y + ((translation.y + point.yr * object_zoom) * zoom) / depth;

                if !visible
                    && screen_x > 0.0
                    && screen_x < width
                    && screen_y > 0.0
                    && screen_y < height
                {
                    visible = true;
                }
                depth_sum += depth;
                vertices.push(Vec2::new(screen_x, screen_y));
            }

            // Cheap visibility test: at least one vertex inside the target.
            // Under-culls polygons that span the viewport with no vertex
            // inside it; accepted approximation.
            if !visible {
                continue;
            }

            if self.cull_back {
                let (a, b, c) = (vertices[0], vertices[1], vertices[2]);
                let winding = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
                if winding >= 0.0 {
                    continue;
                }
            }

            let avg_depth = depth_sum / polygon.indices.len() as f32;
            // Always true given the depth floor; kept for robustness.
            if avg_depth <= 0.0 {
                continue;
            }

            let color = self.light_polygon(polygon, points, translation, avg_depth, zoom);
            draw_list.push(DrawCommand {
                vertices,
                avg_depth,
                color,
                opacity: polygon.opacity,
            });
        }
    }

    /// Per-polygon flat lighting.
    ///
    /// Base color from the ambient term and reflectivity, plus one
    /// cosine-weighted, depth-faded contribution per light, all computed
    /// with the scaled-ratio conventions of [`face_normal`].
    fn light_polygon(
        &self,
        polygon: &Polygon,
        points: &[Point],
        translation: Vec3,
        avg_depth: f32,
        zoom: f32,
    ) -> Color {
        let rotated = |index: usize| {
            let p = &points[polygon.indices[index]];
            Vec3::new(p.xr, p.yr, p.zr)
        };
        let normal = face_normal(rotated(0), rotated(1), rotated(2));
        let normal_len = (normal / MAGNITUDE_SCALE).magnitude();

        let base = self.ambient + (1.0 - polygon.reflectivity) / 2.0;
        let mut color = Color::new(
            polygon.color.r * base,
            polygon.color.g * base,
            polygon.color.b * base,
        );

        // Collinear leading vertices give a zero-length normal; fall back
        // to the unlit base color.
        if normal_len > 0.0 {
            for light in &self.lights {
                let light_vec = Vec3::new(
                    translation.x * zoom - light.position.x * zoom,
                    translation.y * zoom - light.position.y * zoom,
                    translation.z - light.position.z,
                );
                let light_len = (light_vec / MAGNITUDE_SCALE).magnitude();
                if light_len == 0.0 {
                    continue;
                }
                let dot = (light_vec / MAGNITUDE_SCALE).dot(normal / MAGNITUDE_SCALE);
                let cos_angle = dot / (normal_len * light_len);
                let dist_fade = 1.0 - avg_depth / FADE_RANGE;
                let gain = cos_angle * polygon.reflectivity * dist_fade;

                color.r += light.color.r * gain;
                color.g += light.color.g * gain;
                color.b += light.color.b * gain;
            }
        }

        color.clamped()
    }
}

/// Face normal in the renderer's legacy convention.
///
/// The frame is first shifted so that any negative first-vertex coordinate
/// becomes the local origin, then the cross product is taken with this
/// renderer's historical sign layout. The lighting constants are tuned to
/// this exact formulation; a textbook unit normal is deliberately not used.
fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    let (mut p0, mut p1, mut p2) = (p0, p1, p2);
    if p0.x < 0.0 {
        p1.x -= p0.x;
        p2.x -= p0.x;
        p0.x = 0.0;
    }
    if p0.y < 0.0 {
        p1.y -= p0.y;
        p2.y -= p0.y;
        p0.y = 0.0;
    }
    if p0.z < 0.0 {
        p1.z -= p0.z;
        p2.z -= p0.z;
        p0.z = 0.0;
    }

    let v0 = p1 - p0;
    let v1 = p2 - p0;

    let i = v0.y * v1.z - v1.y * v0.z;
    let j = v0.x * v1.z - v1.x * v0.z;
    let k = v0.x * v1.y - v1.x * v0.y;
    Vec3::new(-i, j, -k)
}

//! The addressable 2D raster target.
//!
//! A [`Canvas`] owns an ARGB8888 pixel buffer and provides the two
//! primitives the renderer needs: clearing and filling a closed polygon.
//! Fills composite source-over, so a translucent polygon painted later
//! blends with whatever is already beneath it. A canvas can also be
//! composited onto another one rotated about its center, which backs the
//! scene's secondary-buffer support.

use std::path::Path;

use crate::error::SceneError;
use crate::math::vec2::Vec2;

pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas of the given pixel dimensions.
    ///
    /// Fails with [`SceneError::SurfaceUnavailable`] on zero extent.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            pixels: vec![0; (width * height) as usize],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole canvas with one packed color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Get the pixel at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Composite a pixel source-over. Fully opaque sources overwrite,
    /// fully transparent ones are dropped, anything in between blends with
    /// the existing pixel. Out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        let alpha = color >> 24;
        if alpha == 0xFF {
            self.pixels[index] = color;
        } else if alpha > 0 {
            self.pixels[index] = blend_over(color, self.pixels[index]);
        }
    }

    /// Fill the closed polygon traced through `vertices` in order.
    ///
    /// Scanline fill: each row is sampled at its pixel center, crossings
    /// with the polygon's edges are collected and sorted, and the spans
    /// between crossing pairs are painted with [`Canvas::blend_pixel`].
    /// Fewer than three vertices fills nothing.
    pub fn fill_polygon(&mut self, vertices: &[Vec2], color: u32) {
        if vertices.len() < 3 {
            return;
        }

        let min_y = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
        let max_y = vertices
            .iter()
            .map(|v| v.y)
            .fold(f32::NEG_INFINITY, f32::max);
        let y_start = (min_y.floor() as i32).max(0);
        let y_end = (max_y.ceil() as i32).min(self.height as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());
        for y in y_start..=y_end {
            let sample_y = y as f32 + 0.5;
            crossings.clear();
            for edge in 0..vertices.len() {
                let a = vertices[edge];
                let b = vertices[(edge + 1) % vertices.len()];
                // Half-open span test so a vertex exactly on a scanline is
                // counted by exactly one of its two edges.
                if (a.y <= sample_y) != (b.y <= sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_unstable_by(|p, q| p.total_cmp(q));

            for pair in crossings.chunks_exact(2) {
                let x_left = (pair[0].ceil() as i32).max(0);
                let x_right = (pair[1].floor() as i32).min(self.width as i32 - 1);
                for x in x_left..=x_right {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Composite `src` onto this canvas, rotated about its own center by
    /// `angle` radians (positive rotates clockwise in screen coordinates).
    ///
    /// Each destination pixel is inverse-mapped into the source with
    /// nearest-neighbor sampling; destination pixels that map outside the
    /// source are left untouched. Source pixels composite source-over, the
    /// same as polygon fills.
    pub fn blit_rotated(&mut self, src: &Canvas, angle: f32) {
        let center_x = self.width as f32 / 2.0;
        let center_y = self.height as f32 / 2.0;
        let (sin, cos) = angle.sin_cos();

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let dx = x as f32 + 0.5 - center_x;
                let dy = y as f32 + 0.5 - center_y;
                let src_x = (cos * dx + sin * dy + center_x).floor() as i32;
                let src_y = (-sin * dx + cos * dy + center_y).floor() as i32;
                if let Some(color) = src.pixel(src_x, src_y) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// The raw frame as bytes, for handing to an external presentation
    /// layer (ARGB8888, row-major).
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Write the frame to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (i, pixel) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            let a = (pixel >> 24) as u8;
            let r = (pixel >> 16) as u8;
            let g = (pixel >> 8) as u8;
            let b = *pixel as u8;
            img.put_pixel(x, y, image::Rgba([r, g, b, a]));
        }
        img.save(path)
    }
}

/// Source-over blend of two ARGB8888 pixels.
#[inline]
fn blend_over(src: u32, dst: u32) -> u32 {
    let src_a = src >> 24;
    let dst_a = dst >> 24;
    let inv = 255 - src_a;

    let blend_channel = |shift: u32| {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        (s * src_a + d * inv) / 255
    };

    let a = src_a + dst_a * inv / 255;
    let r = blend_channel(16);
    let g = blend_channel(8);
    let b = blend_channel(0);
    (a << 24) | (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }

    #[test]
    fn zero_extent_is_unavailable() {
        assert_eq!(
            Canvas::new(0, 100).err(),
            Some(SceneError::SurfaceUnavailable {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.clear(0xFF123456);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(0xFF123456));
            }
        }
    }

    #[test]
    fn fill_covers_interior_and_leaves_exterior() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.clear(0xFF000000);
        canvas.fill_polygon(&square(5.0, 5.0, 15.0, 15.0), 0xFFFF0000);
        assert_eq!(canvas.pixel(10, 10), Some(0xFFFF0000));
        assert_eq!(canvas.pixel(2, 2), Some(0xFF000000));
        assert_eq!(canvas.pixel(17, 10), Some(0xFF000000));
    }

    #[test]
    fn degenerate_polygon_fills_nothing() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.clear(0xFF000000);
        canvas.fill_polygon(&[Vec2::new(1.0, 1.0), Vec2::new(6.0, 6.0)], 0xFFFFFFFF);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some(0xFF000000));
            }
        }
    }

    #[test]
    fn translucent_fill_blends_with_background() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(0xFF000000);
        // 50% white over black lands mid-grey.
        canvas.fill_polygon(&square(0.0, 0.0, 10.0, 10.0), 0x80FFFFFF);
        let pixel = canvas.pixel(5, 5).unwrap();
        let r = (pixel >> 16) & 0xFF;
        assert!((r as i32 - 0x80).abs() <= 1, "got {r:#x}");
        assert_eq!(pixel >> 24, 0xFF);
    }

    #[test]
    fn opaque_fill_overwrites() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(0xFF0000FF);
        canvas.fill_polygon(&square(0.0, 0.0, 10.0, 10.0), 0xFF00FF00);
        assert_eq!(canvas.pixel(5, 5), Some(0xFF00FF00));
    }

    #[test]
    fn blit_half_turn_mirrors_through_center() {
        let mut src = Canvas::new(11, 11).unwrap();
        src.clear(0xFF000000);
        src.blend_pixel(2, 5, 0xFFFF0000);

        let mut dst = Canvas::new(11, 11).unwrap();
        dst.clear(0xFF000000);
        dst.blit_rotated(&src, std::f32::consts::PI);

        // (2, 5) reflects through the center column to (8, 5).
        assert_eq!(dst.pixel(8, 5), Some(0xFFFF0000));
        assert_eq!(dst.pixel(2, 5), Some(0xFF000000));
    }

    #[test]
    fn blit_zero_angle_copies() {
        let mut src = Canvas::new(6, 6).unwrap();
        src.clear(0xFF000000);
        src.blend_pixel(1, 2, 0xFF00FF00);

        let mut dst = Canvas::new(6, 6).unwrap();
        dst.clear(0xFF000000);
        dst.blit_rotated(&src, 0.0);
        assert_eq!(dst.pixel(1, 2), Some(0xFF00FF00));
    }
}

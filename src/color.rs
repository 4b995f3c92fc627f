//! Color handling for the renderer.
//!
//! Polygon and light colors are three floating-point channels in `[0, 1]`;
//! the raster target stores packed ARGB8888 pixels. This module holds the
//! channel type and the conversion between the two.

/// An RGB color with channels in the `[0, 1]` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Pack into an ARGB8888 pixel with the given opacity as the alpha
    /// channel. Channels are clamped before packing.
    pub fn to_argb(self, opacity: f32) -> u32 {
        let c = self.clamped();
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u32;
        let r = (c.r * 255.0).round() as u32;
        let g = (c.g * 255.0).round() as u32;
        let b = (c.b * 255.0).round() as u32;
        (a << 24) | (r << 16) | (g << 8) | b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_argb() {
        assert_eq!(Color::BLACK.to_argb(1.0), 0xFF000000);
        assert_eq!(Color::WHITE.to_argb(1.0), 0xFFFFFFFF);
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_argb(0.0), 0x00FF0000);
    }

    #[test]
    fn clamps_before_packing() {
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_argb(3.0), 0xFFFF0000);
    }
}

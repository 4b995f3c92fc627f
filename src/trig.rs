//! Precomputed trigonometry for integer-degree rotations.
//!
//! Object rotation runs per point, per frame. Looking sine and cosine up in
//! a table built once keeps transcendental calls out of that hot path.

/// Number of table entries, one per integer degree.
pub const DEGREES: usize = 360;

/// Sine/cosine lookup table for integer degrees in `[0, 360)`.
///
/// Immutable after construction, so a single table can be shared by every
/// [`Object`](crate::object::Object) in a scene (typically behind an `Rc`).
pub struct TrigTable {
    sin: [f32; DEGREES],
    cos: [f32; DEGREES],
}

impl TrigTable {
    pub fn new() -> Self {
        let mut sin = [0.0; DEGREES];
        let mut cos = [0.0; DEGREES];
        for degree in 0..DEGREES {
            let radians = (degree as f32).to_radians();
            sin[degree] = radians.sin();
            cos[degree] = radians.cos();
        }
        Self { sin, cos }
    }

    #[inline]
    pub fn sin(&self, degree: usize) -> f32 {
        self.sin[degree % DEGREES]
    }

    #[inline]
    pub fn cos(&self, degree: usize) -> f32 {
        self.cos[degree % DEGREES]
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cardinal_angles() {
        let table = TrigTable::new();
        assert_relative_eq!(table.sin(0), 0.0);
        assert_relative_eq!(table.cos(0), 1.0);
        assert_relative_eq!(table.sin(90), 1.0, epsilon = 1e-6);
        assert_relative_eq!(table.cos(180), -1.0, epsilon = 1e-6);
        assert_relative_eq!(table.sin(270), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn lookup_wraps_past_360() {
        let table = TrigTable::new();
        assert_relative_eq!(table.sin(360), table.sin(0));
        assert_relative_eq!(table.cos(450), table.cos(90));
    }
}

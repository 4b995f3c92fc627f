//! Depth ordering for the per-frame draw list.
//!
//! The painter's algorithm needs entries painted far-to-near. Order among
//! entries at equal depth is unspecified, so an unstable sort is enough.

use crate::scene::DrawCommand;

/// Sort draw commands by average depth, descending (furthest first).
///
/// Unstable by design: callers must not depend on the relative order of
/// equal-depth polygons.
pub fn sort_by_depth_descending(commands: &mut [DrawCommand]) {
    commands.sort_unstable_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(avg_depth: f32) -> DrawCommand {
        DrawCommand {
            vertices: Vec::new(),
            avg_depth,
            color: crate::color::Color::WHITE,
            opacity: 1.0,
        }
    }

    #[test]
    fn furthest_first() {
        let mut commands = vec![command(5.0), command(50.0), command(1.0)];
        sort_by_depth_descending(&mut commands);
        let depths: Vec<f32> = commands.iter().map(|c| c.avg_depth).collect();
        assert_eq!(depths, vec![50.0, 5.0, 1.0]);
    }

    #[test]
    fn empty_and_single_are_fine() {
        let mut empty: Vec<DrawCommand> = Vec::new();
        sort_by_depth_descending(&mut empty);

        let mut single = vec![command(3.0)];
        sort_by_depth_descending(&mut single);
        assert_eq!(single[0].avg_depth, 3.0);
    }
}

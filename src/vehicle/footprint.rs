//! Ground contact points of the vehicle body

use crate::core::types::{Vec2, Vec3};
use crate::terrain::TerrainBounds;

/// Midpoints of the four body edges in the ground plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub front: Vec2,
    pub rear: Vec2,
    pub right: Vec2,
    pub left: Vec2,
}

impl Footprint {
    /// Yaw 0 faces -Y; right is -X.
    pub fn new(position: Vec3, yaw: f32, length: f32, width: f32) -> Self {
        let center = position.truncate();
        let (sin, cos) = yaw.sin_cos();
        let half_length = Vec2::new(length / 2.0 * sin, -length / 2.0 * cos);
        let half_width = Vec2::new(-width / 2.0 * cos, -width / 2.0 * sin);

        Self {
            front: center + half_length,
            rear: center - half_length,
            right: center + half_width,
            left: center - half_width,
        }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [self.front, self.rear, self.right, self.left]
    }

    /// Whether every corner lies within the bounds (edges included)
    pub fn is_within(&self, bounds: &TerrainBounds) -> bool {
        self.corners().iter().all(|&c| bounds.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_facing_minus_y() {
        let fp = Footprint::new(Vec3::new(5.0, 5.0, 1.0), 0.0, 2.0, 1.0);
        assert_close(fp.front, Vec2::new(5.0, 4.0));
        assert_close(fp.rear, Vec2::new(5.0, 6.0));
        assert_close(fp.right, Vec2::new(4.5, 5.0));
        assert_close(fp.left, Vec2::new(5.5, 5.0));
    }

    #[test]
    fn test_quarter_turn() {
        let fp = Footprint::new(Vec3::ZERO, FRAC_PI_2, 2.0, 1.0);
        assert_close(fp.front, Vec2::new(1.0, 0.0));
        assert_close(fp.rear, Vec2::new(-1.0, 0.0));
        assert_close(fp.right, Vec2::new(0.0, -0.5));
        assert_close(fp.left, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_within_bounds() {
        let bounds = TerrainBounds::new(0.0, 0.0, 10.0);
        assert!(Footprint::new(Vec3::new(5.0, 5.0, 0.0), 0.3, 2.0, 1.0).is_within(&bounds));
        // Front corner lands exactly on the edge
        assert!(Footprint::new(Vec3::new(5.0, 1.0, 0.0), 0.0, 2.0, 1.0).is_within(&bounds));
        assert!(!Footprint::new(Vec3::new(5.0, 0.5, 0.0), 0.0, 2.0, 1.0).is_within(&bounds));
    }
}

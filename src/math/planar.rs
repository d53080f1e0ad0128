//! Geometry in the XY plane. Z is ignored by every function here.

use crate::core::types::Vec3;

/// Unsigned area of the XY projection of a triangle (half the cross product).
#[inline]
pub fn triangle_area_2d(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    0.5 * ((a.x - c.x) * (b.y - a.y) - (a.x - b.x) * (c.y - a.y)).abs()
}

/// Distance between the XY projections of two points.
#[inline]
pub fn distance_2d(a: Vec3, b: Vec3) -> f32 {
    a.truncate().distance(b.truncate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_ignores_z_and_winding() {
        let a = Vec3::new(0.0, 0.0, 5.0);
        let b = Vec3::new(2.0, 0.0, -1.0);
        let c = Vec3::new(0.0, 2.0, 3.0);
        assert!((triangle_area_2d(a, b, c) - 2.0).abs() < 1e-6);
        assert!((triangle_area_2d(a, c, b) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_area() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 1.0, 0.0);
        let c = Vec3::new(2.0, 2.0, 9.0);
        assert_eq!(triangle_area_2d(a, b, c), 0.0);
    }

    #[test]
    fn test_distance_2d() {
        let d = distance_2d(Vec3::new(0.0, 0.0, 100.0), Vec3::new(3.0, 4.0, -100.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}

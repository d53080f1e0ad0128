//! Axis-aligned bounding box

use crate::core::types::Vec3;

/// Axis-aligned bounding box defined by min and max corners.
///
/// Used for mesh extents and per-triangle bounds in the terrain grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// An inverted box that any call to [`expand`](Self::expand) replaces
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point; `None` for an empty iterator
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut aabb = Self::empty();
        let mut any = false;
        for p in points {
            aabb.expand(p);
            any = true;
        }
        any.then_some(aabb)
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Expand AABB to include point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box by `margin` on every side of the XY plane
    pub fn inflated_xy(&self, margin: f32) -> Aabb {
        let m = Vec3::new(margin, margin, 0.0);
        Aabb::new(self.min - m, self.max + m)
    }
}

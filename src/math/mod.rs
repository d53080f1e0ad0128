//! Mathematical utilities

pub mod aabb;
pub mod planar;

pub use aabb::Aabb;
pub use planar::{distance_2d, triangle_area_2d};

/// Linearly remap `value` from `[from_min, from_max]` to `[to_min, to_max]`.
#[inline]
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

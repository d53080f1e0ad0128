//! Camera for 3D rendering

use crate::core::types::{Vec3, Mat4};

/// Look-at camera with a Z-up world, as used by the chase view
#[derive(Clone, Debug)]
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec3, target: Vec3, fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            position,
            target,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: 0.02,
            far: 10.0,
        }
    }

    /// Get view matrix (world to camera space), Z is up
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Z)
    }

    /// Projection with a zero-to-one depth range and Y pointing down in
    /// clip space, matching Vulkan conventions
    pub fn projection_matrix(&self) -> Mat4 {
        let mut proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        proj.y_axis.y *= -1.0;
        proj
    }

    /// Get combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio (call on window resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -1.0, 1.0), Vec3::ZERO, 90.0, 16.0 / 9.0)
    }
}

//! Third-person chase camera controller

use serde::{Deserialize, Serialize};

use crate::core::camera::Camera;
use crate::core::input::{apply_dead_zone, Axis, InputSource, Signal};
use crate::core::types::{Mat3, Vec3};

/// Tunables for the chase camera.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset from the vehicle in the camera's yaw frame (x: behind, z: up).
    pub default_distance: Vec3,
    /// Manual yaw change per tick at full deflection, in degrees.
    pub yaw_step_degrees: f32,
    /// Height change per tick at full deflection.
    pub height_step: f32,
    /// Lowest allowed camera height above the vehicle.
    pub min_height: f32,
    /// Highest allowed camera height above the vehicle.
    pub max_height: f32,
    /// Distance change per tick for zoom in/out.
    pub zoom_step: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_distance: Vec3::new(0.8, 0.0, 0.4),
            yaw_step_degrees: 2.0,
            height_step: 0.01,
            min_height: 0.2,
            max_height: 1.5,
            zoom_step: 0.01,
            fov_degrees: 90.0,
            near: 0.02,
            far: 10.0,
        }
    }
}

/// Orbits behind the vehicle; the player can swing it around, raise or
/// lower it and pull it closer. Adjustments are per tick, not per second.
#[derive(Clone, Debug)]
pub struct ChaseCameraController {
    config: CameraConfig,
    /// Yaw offset added on top of the vehicle heading, in radians
    manual_yaw: f32,
    /// Current offset from the vehicle
    distance: Vec3,
}

impl ChaseCameraController {
    /// Create new controller
    pub fn new(config: CameraConfig) -> Self {
        let distance = config.default_distance;
        Self {
            config,
            manual_yaw: 0.0,
            distance,
        }
    }

    /// Apply one tick of camera input
    pub fn update(&mut self, input: &dyn InputSource) {
        let step = self.config.yaw_step_degrees.to_radians();
        let yaw_axis = stick(input, Axis::RightStickX);
        let key_left = input.is_active(Signal::CameraYawLeft);
        let key_right = input.is_active(Signal::CameraYawRight);

        if key_left || yaw_axis < 0.0 {
            self.manual_yaw -= step * if key_left { 1.0 } else { yaw_axis.abs() };
        } else if key_right || yaw_axis > 0.0 {
            self.manual_yaw += step * if key_right { 1.0 } else { yaw_axis };
        }

        let pitch_axis = stick(input, Axis::RightStickY);
        let key_up = input.is_active(Signal::CameraPitchUp);
        let key_down = input.is_active(Signal::CameraPitchDown);

        if key_up || pitch_axis > 0.0 {
            let delta = self.config.height_step * if key_up { 1.0 } else { pitch_axis };
            self.distance.z = (self.distance.z - delta).max(self.config.min_height);
        } else if key_down || pitch_axis < 0.0 {
            let delta = self.config.height_step * if key_down { 1.0 } else { pitch_axis.abs() };
            self.distance.z = (self.distance.z + delta).min(self.config.max_height);
        }

        if input.is_active(Signal::CameraZoomIn) {
            self.distance.x -= self.config.zoom_step;
        }
        if input.is_active(Signal::CameraZoomOut) {
            self.distance.x += self.config.zoom_step;
        }

        if input.is_active(Signal::CameraReset) {
            self.reset();
        }
    }

    /// Restore the default offset and drop any manual yaw
    pub fn reset(&mut self) {
        self.manual_yaw = 0.0;
        self.distance = self.config.default_distance;
    }

    /// Heading of the camera offset for a vehicle facing `vehicle_yaw`
    pub fn camera_yaw(&self, vehicle_yaw: f32) -> f32 {
        vehicle_yaw + std::f32::consts::FRAC_PI_2 + self.manual_yaw
    }

    /// World position of the camera for the given vehicle pose
    pub fn position(&self, vehicle_pos: Vec3, vehicle_yaw: f32) -> Vec3 {
        vehicle_pos + Mat3::from_rotation_z(self.camera_yaw(vehicle_yaw)) * self.distance
    }

    /// Full camera looking at the vehicle
    pub fn camera(&self, vehicle_pos: Vec3, vehicle_yaw: f32, aspect: f32) -> Camera {
        let mut camera = Camera::new(
            self.position(vehicle_pos, vehicle_yaw),
            vehicle_pos,
            self.config.fov_degrees,
            aspect,
        );
        camera.near = self.config.near;
        camera.far = self.config.far;
        camera
    }

    pub fn manual_yaw(&self) -> f32 {
        self.manual_yaw
    }

    pub fn distance(&self) -> Vec3 {
        self.distance
    }
}

impl Default for ChaseCameraController {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

fn stick(input: &dyn InputSource, axis: Axis) -> f32 {
    input.axis(axis).map(apply_dead_zone).unwrap_or(0.0)
}

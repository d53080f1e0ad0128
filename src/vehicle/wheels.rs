//! Per-wheel transforms for independently rendered wheels

use serde::Serialize;

use super::params::{VehicleParams, WheelPosition};
use crate::core::types::{Mat3, Mat4, Vec3};

/// Spin added per tick for each unit of speed
pub const DEFAULT_SPIN_FACTOR: f32 = 10.0;

/// Front wheels turn by this fraction of the rotation axis
const STEER_FACTOR: f32 = 0.5;

/// Body rotation: yaw about Z, then pitch about X, then roll about Y
pub fn body_rotation(yaw: f32, pitch: f32, roll: f32) -> Mat3 {
    Mat3::from_rotation_z(yaw) * Mat3::from_rotation_x(pitch) * Mat3::from_rotation_y(roll)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WheelTransform {
    pub wheel: WheelPosition,
    pub position: Vec3,
    /// Steering angle about the body's Z axis
    pub steer: f32,
    pub model: Mat4,
}

/// Accumulated rolling angle shared by all four wheels
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelSpin {
    angle: f32,
    factor: f32,
}

impl WheelSpin {
    pub fn new(factor: f32) -> Self {
        Self { angle: 0.0, factor }
    }

    pub fn advance(&mut self, speed: f32) {
        self.angle += speed * self.factor;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// Transforms for all four wheels in [`WheelPosition::ALL`] order
pub fn wheel_transforms(
    params: &VehicleParams,
    position: Vec3,
    rotation: Mat3,
    rotation_axis: f32,
    spin: f32,
) -> [WheelTransform; 4] {
    let body = Mat4::from_mat3(rotation);
    WheelPosition::ALL.map(|wheel| {
        let wheel_pos = position + rotation * params.wheel_offset(wheel);
        let steer = if wheel.is_front() { rotation_axis * STEER_FACTOR } else { 0.0 };
        let flip = if wheel.is_right() { std::f32::consts::PI } else { 0.0 };

        let model = Mat4::from_translation(wheel_pos)
            * body
            * Mat4::from_rotation_z(steer)
            * Mat4::from_rotation_x(spin)
            * Mat4::from_rotation_y(flip)
            * Mat4::from_scale(Vec3::splat(params.scale));

        WheelTransform {
            wheel,
            position: wheel_pos,
            steer,
            model,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::params::tests::jeep_params;

    #[test]
    fn test_identity_pose_keeps_offsets() {
        let params = jeep_params();
        let pos = Vec3::new(5.0, 5.0, 1.0);
        let wheels = wheel_transforms(&params, pos, Mat3::IDENTITY, 0.0, 0.0);
        assert_eq!(wheels[0].wheel, WheelPosition::FrontRight);
        assert_eq!(wheels[3].wheel, WheelPosition::RearLeft);
        for w in &wheels {
            assert!((w.position - (pos + params.wheel_offset(w.wheel))).length() < 1e-6);
        }
    }

    #[test]
    fn test_only_front_wheels_steer() {
        let params = jeep_params();
        let wheels = wheel_transforms(&params, Vec3::ZERO, Mat3::IDENTITY, 1.2, 0.0);
        assert!((wheels[0].steer - 0.6).abs() < 1e-6);
        assert!((wheels[1].steer - 0.6).abs() < 1e-6);
        assert_eq!(wheels[2].steer, 0.0);
        assert_eq!(wheels[3].steer, 0.0);
    }

    #[test]
    fn test_yaw_rotates_offsets() {
        let params = jeep_params();
        let rotation = body_rotation(std::f32::consts::PI, 0.0, 0.0);
        let wheels = wheel_transforms(&params, Vec3::ZERO, rotation, 0.0, 0.0);
        let offset = params.wheel_offset(WheelPosition::FrontLeft);
        assert!((wheels[1].position - Vec3::new(-offset.x, -offset.y, offset.z)).length() < 1e-6);
    }

    #[test]
    fn test_right_wheels_are_flipped() {
        let params = jeep_params();
        let wheels = wheel_transforms(&params, Vec3::ZERO, Mat3::IDENTITY, 0.0, 0.0);
        // Flipped wheels map local +X to world -X
        let right_x = wheels[0].model.transform_vector3(Vec3::X);
        let left_x = wheels[1].model.transform_vector3(Vec3::X);
        assert!(right_x.x < 0.0);
        assert!(left_x.x > 0.0);
    }

    #[test]
    fn test_spin_accumulates() {
        let mut spin = WheelSpin::new(DEFAULT_SPIN_FACTOR);
        spin.advance(0.01);
        spin.advance(0.02);
        assert!((spin.angle() - 0.3).abs() < 1e-6);
    }
}

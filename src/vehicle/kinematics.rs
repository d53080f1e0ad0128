//! Speed, heading and planar motion of the vehicle

use super::controls::DriveControls;
use super::params::VehicleParams;
use crate::core::types::Vec3;

/// Pitch magnitude (radians) from which gravity starts pushing the vehicle
pub const SLOPE_ASSIST_THRESHOLD: f32 = 0.2;

/// Gravity pull grows with slope by this factor times natural deceleration
const SLOPE_ASSIST_GAIN: f32 = 10.0;

/// Mutable pose of the vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleState {
    pub position: Vec3,
    /// Signed speed in world units per tick; negative is reverse
    pub speed: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl VehicleState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            speed: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Pitch from the last attitude update; positive means nose down
    pub fn slope(&self) -> f32 {
        self.pitch
    }
}

/// Outcome of one kinematic step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveStep {
    /// Where the vehicle would move if nothing stopped it. Z is unchanged.
    pub proposed: Vec3,
    /// Signed turn rate in radians per second, also used to steer the
    /// front wheels
    pub rotation_axis: f32,
    /// Vertical speed along the pitched heading; informational only
    pub climb_rate: f32,
    pub reverse_gear: bool,
    pub braking: bool,
}

/// Advance speed and yaw from driver input and return the proposed move.
///
/// Speed contributions apply in a fixed order: throttle, reverse, slope or
/// natural deceleration, then brake.
pub fn step(state: &mut VehicleState, params: &VehicleParams, controls: &DriveControls, dt: f32) -> DriveStep {
    let mut reverse_gear = false;
    let mut braking = false;

    if let Some(power) = controls.throttle {
        let cap = params.max_engine_speed * power;
        if state.speed < cap {
            state.speed = (state.speed + params.acceleration * power).min(cap);
        }
    }

    if let Some(power) = controls.reverse {
        let floor = -params.max_engine_speed * power;
        if state.speed > floor {
            state.speed = (state.speed - params.acceleration * power).max(floor);
        }
        if state.speed < 0.0 {
            reverse_gear = true;
        } else {
            braking = true;
        }
    }

    let slope = state.slope();
    if slope.abs() >= SLOPE_ASSIST_THRESHOLD {
        let pull = params.natural_deceleration * SLOPE_ASSIST_GAIN * slope.abs();
        state.speed = if slope > 0.0 {
            (state.speed + pull).min(params.max_speed)
        } else {
            (state.speed - pull).max(-params.max_speed)
        };
    } else {
        state.speed = approach_zero(state.speed, params.natural_deceleration);
    }

    if controls.brake {
        state.speed = approach_zero(state.speed, params.brake_deceleration);
        braking = true;
    }

    let rotation_axis = controls.steer * params.rot_speed;
    if state.speed != 0.0 {
        state.yaw += dt * rotation_axis;
    }

    let (sin_yaw, cos_yaw) = state.yaw.sin_cos();
    let proposed = state.position + Vec3::new(state.speed * sin_yaw, -state.speed * cos_yaw, 0.0);

    DriveStep {
        proposed,
        rotation_axis,
        climb_rate: -state.speed * state.pitch.sin(),
        reverse_gear,
        braking,
    }
}

/// Move `speed` toward zero by `amount` without crossing it
fn approach_zero(speed: f32, amount: f32) -> f32 {
    if speed > 0.0 {
        (speed - amount).max(0.0)
    } else {
        (speed + amount).min(0.0)
    }
}

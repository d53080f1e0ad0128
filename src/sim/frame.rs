//! Per-tick output handed to the rendering layer

use serde::Serialize;

use crate::atmosphere::{LightingUniform, SkyInfo, SkyUniform};
use crate::core::types::{Mat4, Vec3};
use crate::math::remap;
use crate::vehicle::{LightRig, WheelTransform};

/// Speedometer needle angle at rest, in degrees
pub const SPEEDOMETER_MIN_DEGREES: f32 = 45.0;
/// Speedometer needle angle at max speed, in degrees
pub const SPEEDOMETER_MAX_DEGREES: f32 = 225.0;

/// Finalized vehicle pose for the tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VehiclePose {
    pub position: Vec3,
    pub speed: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    /// `T(position) * Rz(yaw) * Rx(pitch) * Ry(roll) * S(scale)`
    pub model: Mat4,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub view: Mat4,
}

/// Rotations for the dashboard overlays, in radians
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HudAngles {
    pub speedometer: f32,
    pub clock_hand: f32,
}

impl HudAngles {
    pub fn new(speed: f32, max_speed: f32, hour: f32) -> Self {
        Self {
            speedometer: speedometer_angle(speed, max_speed),
            clock_hand: clock_hand_angle(hour),
        }
    }
}

/// Needle angle for `speed`, read to three decimals
pub fn speedometer_angle(speed: f32, max_speed: f32) -> f32 {
    let shown = (speed * 1000.0).trunc() / 1000.0;
    remap(
        shown.abs(),
        0.0,
        max_speed,
        SPEEDOMETER_MIN_DEGREES.to_radians(),
        SPEEDOMETER_MAX_DEGREES.to_radians(),
    )
}

/// Hand angle on a 12-hour dial starting from the bottom
pub fn clock_hand_angle(hour: f32) -> f32 {
    (180.0 + 30.0 * hour).to_radians()
}

/// Everything the renderer needs to draw one frame.
#[derive(Clone, Debug, Serialize)]
pub struct FrameOutput {
    pub tick: u64,
    pub pose: VehiclePose,
    pub reverse_gear: bool,
    pub braking: bool,
    /// The proposed move was rejected at the terrain edge
    pub boundary_hit: bool,
    /// Present only for vehicles with independently rendered wheels
    pub wheels: Option<[WheelTransform; 4]>,
    pub camera: CameraPose,
    pub lights: LightRig,
    pub hour: f32,
    pub sky: SkyInfo,
    pub hud: HudAngles,
    #[serde(skip)]
    pub sky_uniform: SkyUniform,
    #[serde(skip)]
    pub lighting_uniform: LightingUniform,
}

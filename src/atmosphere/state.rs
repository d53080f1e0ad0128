//! Sky and lighting GPU uniforms.

use bytemuck::{Pod, Zeroable};

use super::sky::SkyInfo;
use crate::vehicle::LightRig;

// ---------------------------------------------------------------------------
// Sky
// ---------------------------------------------------------------------------

/// GPU-ready sky uniform.
///
/// All `vec3` fields are padded to 16-byte alignment for WGSL compatibility.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SkyUniform {
    // -- 16 bytes --
    pub sky_color: [f32; 3],
    pub time_of_day: f32,

    // -- 16 bytes --
    /// (night, sunrise, day, sunset)
    pub phase_progress: [f32; 4],
}

impl SkyUniform {
    pub fn new(sky: &SkyInfo, time_of_day: f32) -> Self {
        Self {
            sky_color: sky.color.to_array(),
            time_of_day,
            phase_progress: sky.progress.to_array(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lighting
// ---------------------------------------------------------------------------

/// GPU-ready global lighting uniform: vehicle lights plus the sky tint.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LightingUniform {
    // -- Headlights (4 x 16 = 64 bytes) --
    pub left_headlight_pos: [f32; 3],
    pub _pad0: f32,
    pub right_headlight_pos: [f32; 3],
    pub _pad1: f32,
    pub headlight_dir: [f32; 3],
    pub _pad2: f32,
    pub headlight_color: [f32; 3],
    pub _pad3: f32,

    // -- Rear lights (3 x 16 = 48 bytes) --
    pub left_rear_pos: [f32; 3],
    pub _pad4: f32,
    pub right_rear_pos: [f32; 3],
    pub _pad5: f32,
    pub rear_color: [f32; 3],
    pub _pad6: f32,

    // -- Sky (16 bytes) --
    pub sky_color: [f32; 3],
    pub _pad7: f32,
}

impl LightingUniform {
    pub fn new(lights: &LightRig, sky: &SkyInfo) -> Self {
        Self {
            left_headlight_pos: lights.left_headlight.to_array(),
            right_headlight_pos: lights.right_headlight.to_array(),
            headlight_dir: lights.headlight_direction.to_array(),
            headlight_color: lights.headlight_color.to_array(),
            left_rear_pos: lights.left_rear.to_array(),
            right_rear_pos: lights.right_rear.to_array(),
            rear_color: lights.rear_color.to_array(),
            sky_color: sky.color.to_array(),
            ..Self::default()
        }
    }
}

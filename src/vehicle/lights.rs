//! Headlights and rear lights

use serde::Serialize;

use super::params::LightOffsets;
use crate::core::types::{Mat3, Vec3};

/// Headlight color at full intensity
pub const HEADLIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.7);

pub const REAR_REVERSE_COLOR: Vec3 = Vec3::new(0.2, 0.2, 0.2);
pub const REAR_BRAKING_COLOR: Vec3 = Vec3::new(0.2, 0.0, 0.0);
pub const REAR_IDLE_COLOR: Vec3 = Vec3::new(0.1, 0.0, 0.0);

/// Headlight switch with a short fade between on and off.
#[derive(Clone, Copy, Debug)]
pub struct Headlights {
    on: bool,
    intensity: f32,
    fade_step: f32,
}

impl Headlights {
    /// Lights start switched on at full intensity
    pub fn new(fade_step: f32) -> Self {
        Self {
            on: true,
            intensity: 1.0,
            fade_step,
        }
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
        log::debug!("Headlights {}", if self.on { "on" } else { "off" });
    }

    /// Move intensity one step toward the switch position. Fading out snaps
    /// to zero once below one step.
    pub fn update(&mut self) {
        if self.on && self.intensity < 1.0 {
            self.intensity = (self.intensity + self.fade_step).min(1.0);
        } else if !self.on && self.intensity > 0.0 {
            self.intensity -= self.fade_step;
            if self.intensity < self.fade_step {
                self.intensity = 0.0;
            }
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn color(&self) -> Vec3 {
        Vec3::ZERO.lerp(HEADLIGHT_COLOR, self.intensity)
    }
}

/// Rear light color for the current drive state
pub fn rear_light_color(reverse_gear: bool, braking: bool) -> Vec3 {
    if reverse_gear {
        REAR_REVERSE_COLOR
    } else if braking {
        REAR_BRAKING_COLOR
    } else {
        REAR_IDLE_COLOR
    }
}

/// World-space light placement for one tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LightRig {
    pub left_headlight: Vec3,
    pub right_headlight: Vec3,
    /// Shared by both headlights; not normalized
    pub headlight_direction: Vec3,
    pub headlight_color: Vec3,
    pub left_rear: Vec3,
    pub right_rear: Vec3,
    pub rear_color: Vec3,
}

impl LightRig {
    /// Place the lights on a vehicle at `position` rotated by `rotation`.
    /// The beam points along the heading, tilted down by `tilt` radians.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        offsets: &LightOffsets,
        position: Vec3,
        rotation: Mat3,
        yaw: f32,
        pitch: f32,
        tilt: f32,
        headlight_color: Vec3,
        rear_color: Vec3,
    ) -> Self {
        Self {
            left_headlight: position + rotation * offsets.left_headlight,
            right_headlight: position + rotation * offsets.right_headlight,
            headlight_direction: Vec3::new(yaw.sin(), -yaw.cos(), -pitch - tilt),
            headlight_color,
            left_rear: position + rotation * offsets.left_rear,
            right_rear: position + rotation * offsets.right_rear,
            rear_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_out_and_back_in() {
        let mut lights = Headlights::new(0.1);
        assert!(lights.is_on());
        assert_eq!(lights.intensity(), 1.0);

        lights.toggle();
        let mut ticks = 0;
        while lights.intensity() > 0.0 {
            lights.update();
            ticks += 1;
            assert!(ticks <= 10);
        }
        assert_eq!(lights.color(), Vec3::ZERO);

        lights.toggle();
        for _ in 0..20 {
            lights.update();
        }
        assert_eq!(lights.intensity(), 1.0);
        assert_eq!(lights.color(), HEADLIGHT_COLOR);
    }

    #[test]
    fn test_half_intensity_color() {
        let mut lights = Headlights::new(0.5);
        lights.toggle();
        lights.update();
        assert!((lights.color() - Vec3::new(0.5, 0.5, 0.35)).length() < 1e-6);
    }

    #[test]
    fn test_rear_colors() {
        assert_eq!(rear_light_color(true, true), REAR_REVERSE_COLOR);
        assert_eq!(rear_light_color(false, true), REAR_BRAKING_COLOR);
        assert_eq!(rear_light_color(false, false), REAR_IDLE_COLOR);
    }

    #[test]
    fn test_light_rig_direction() {
        let offsets = LightOffsets {
            left_headlight: Vec3::new(0.1, -0.3, 0.1),
            right_headlight: Vec3::new(-0.1, -0.3, 0.1),
            left_rear: Vec3::new(0.1, 0.3, 0.1),
            right_rear: Vec3::new(-0.1, 0.3, 0.1),
        };
        let tilt = 35.0_f32.to_radians();
        let rig = LightRig::new(
            &offsets,
            Vec3::new(1.0, 1.0, 0.0),
            Mat3::IDENTITY,
            0.0,
            0.1,
            tilt,
            HEADLIGHT_COLOR,
            REAR_IDLE_COLOR,
        );
        assert!((rig.headlight_direction - Vec3::new(0.0, -1.0, -0.1 - tilt)).length() < 1e-6);
        assert!((rig.left_rear - Vec3::new(1.1, 1.3, 0.1)).length() < 1e-6);
    }
}

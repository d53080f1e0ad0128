//! Sky color and phase progress over the 24-hour cycle.
//!
//! The day is split into four phases. Night and day hold a fixed color;
//! sunrise and sunset blend through an intermediate color in two halves,
//! using cubic easing so the light changes quickly near full night.

use serde::Serialize;

use crate::core::types::{Vec3, Vec4};
use crate::math::remap;

pub const SUNRISE_START: f32 = 4.0;
pub const SUNRISE_END: f32 = 9.0;
pub const SUNSET_START: f32 = 18.0;
pub const SUNSET_END: f32 = 23.0;

/// Value of phase slots that are not active
pub const INACTIVE_PHASE: f32 = -1.0;

pub const NIGHT_COLOR: Vec3 = Vec3::ZERO;

/// Sky blue, normalized
pub fn day_color() -> Vec3 {
    Vec3::new(135.0, 206.0, 250.0).normalize()
}

/// Orange, normalized
pub fn sunset_color() -> Vec3 {
    Vec3::new(252.0, 156.0, 84.0).normalize()
}

/// Pink, normalized
pub fn sunrise_color() -> Vec3 {
    Vec3::new(255.0, 179.0, 153.0).normalize()
}

#[inline]
pub fn ease_in_cubic(n: f32) -> f32 {
    n * n * n
}

#[inline]
pub fn ease_out_cubic(n: f32) -> f32 {
    1.0 - (1.0 - n).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DayPhase {
    Night,
    Sunrise,
    Day,
    Sunset,
}

impl DayPhase {
    pub fn at(hour: f32) -> Self {
        if hour > SUNSET_END || hour < SUNRISE_START {
            DayPhase::Night
        } else if hour <= SUNRISE_END {
            DayPhase::Sunrise
        } else if hour < SUNSET_START {
            DayPhase::Day
        } else {
            DayPhase::Sunset
        }
    }
}

/// Sky state derived from the clock
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SkyInfo {
    pub phase: DayPhase,
    pub color: Vec3,
    /// Progress per phase (night, sunrise, day, sunset). Night and day read
    /// 1 while active; sunrise and sunset carry their progress in `[0, 1]`.
    /// Inactive slots are -1.
    pub progress: Vec4,
}

impl SkyInfo {
    pub fn at(hour: f32) -> Self {
        let phase = DayPhase::at(hour);
        let mut progress = Vec4::splat(INACTIVE_PHASE);

        let color = match phase {
            DayPhase::Night => {
                progress.x = 1.0;
                NIGHT_COLOR
            }
            DayPhase::Day => {
                progress.z = 1.0;
                day_color()
            }
            DayPhase::Sunrise => {
                let p = (hour - SUNRISE_START) / (SUNRISE_END - SUNRISE_START);
                progress.y = p;
                if p < 0.5 {
                    NIGHT_COLOR.lerp(sunrise_color(), ease_in_cubic(remap(p, 0.0, 0.5, 0.0, 1.0)))
                } else {
                    sunrise_color().lerp(day_color(), ease_in_cubic(remap(p, 0.5, 1.0, 0.0, 1.0)))
                }
            }
            DayPhase::Sunset => {
                let p = (hour - SUNSET_START) / (SUNSET_END - SUNSET_START);
                progress.w = p;
                if p < 0.5 {
                    day_color().lerp(sunset_color(), ease_out_cubic(remap(p, 0.0, 0.5, 0.0, 1.0)))
                } else {
                    sunset_color().lerp(NIGHT_COLOR, ease_out_cubic(remap(p, 0.5, 1.0, 0.0, 1.0)))
                }
            }
        };

        Self {
            phase,
            color,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(DayPhase::at(0.0), DayPhase::Night);
        assert_eq!(DayPhase::at(3.99), DayPhase::Night);
        assert_eq!(DayPhase::at(4.0), DayPhase::Sunrise);
        assert_eq!(DayPhase::at(9.0), DayPhase::Sunrise);
        assert_eq!(DayPhase::at(9.01), DayPhase::Day);
        assert_eq!(DayPhase::at(17.99), DayPhase::Day);
        assert_eq!(DayPhase::at(18.0), DayPhase::Sunset);
        assert_eq!(DayPhase::at(23.0), DayPhase::Sunset);
        assert_eq!(DayPhase::at(23.01), DayPhase::Night);
        assert_eq!(DayPhase::at(24.0), DayPhase::Night);
    }

    #[test]
    fn test_midnight() {
        let sky = SkyInfo::at(0.0);
        assert_eq!(sky.color, Vec3::ZERO);
        assert_eq!(sky.progress, Vec4::new(1.0, -1.0, -1.0, -1.0));
    }

    #[test]
    fn test_noon() {
        let sky = SkyInfo::at(12.0);
        assert_vec3_close(sky.color, day_color());
        assert_eq!(sky.progress, Vec4::new(-1.0, -1.0, 1.0, -1.0));
    }

    #[test]
    fn test_sunrise_midpoint() {
        let sky = SkyInfo::at(6.5);
        assert_eq!(sky.phase, DayPhase::Sunrise);
        assert!((sky.progress.y - 0.5).abs() < 1e-6);
        assert_eq!(sky.progress.x, -1.0);
        // Second half starts at the sunrise color
        assert_vec3_close(sky.color, sunrise_color());
    }

    #[test]
    fn test_sunrise_start_is_dark_and_end_is_day() {
        assert_vec3_close(SkyInfo::at(4.0).color, NIGHT_COLOR);
        assert_vec3_close(SkyInfo::at(9.0).color, day_color());
    }

    #[test]
    fn test_sunset_curve() {
        assert_vec3_close(SkyInfo::at(18.0).color, day_color());
        assert_vec3_close(SkyInfo::at(20.5).color, sunset_color());
        assert_vec3_close(SkyInfo::at(23.0).color, NIGHT_COLOR);

        // Ease-out moves faster early in each half than ease-in would
        let quarter = SkyInfo::at(19.25);
        let t = ease_out_cubic(0.5);
        assert_vec3_close(quarter.color, day_color().lerp(sunset_color(), t));
        assert!((quarter.progress.w - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_easing() {
        assert_eq!(ease_in_cubic(0.5), 0.125);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_in_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
    }
}

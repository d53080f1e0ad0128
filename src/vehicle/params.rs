//! Vehicle geometry and tuning loaded from a key-value config file

use crate::core::config_file::ConfigFile;
use crate::core::error::Error;
use crate::core::types::{Result, Vec3};
use crate::math::Aabb;

/// Wheel slots, in the order wheel transforms are emitted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum WheelPosition {
    FrontRight,
    FrontLeft,
    RearRight,
    RearLeft,
}

impl WheelPosition {
    pub const ALL: [WheelPosition; 4] = [
        WheelPosition::FrontRight,
        WheelPosition::FrontLeft,
        WheelPosition::RearRight,
        WheelPosition::RearLeft,
    ];

    pub fn is_front(self) -> bool {
        matches!(self, WheelPosition::FrontRight | WheelPosition::FrontLeft)
    }

    pub fn is_right(self) -> bool {
        matches!(self, WheelPosition::FrontRight | WheelPosition::RearRight)
    }

    /// Config key holding this wheel's mount offset
    pub fn config_key(self) -> &'static str {
        match self {
            WheelPosition::FrontRight => "front_right_wheel_pos",
            WheelPosition::FrontLeft => "front_left_wheel_pos",
            WheelPosition::RearRight => "rear_right_wheel_pos",
            WheelPosition::RearLeft => "rear_left_wheel_pos",
        }
    }
}

/// Unscaled body extents measured from the vehicle model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleDimensions {
    /// Extent along Y
    pub length: f32,
    /// Extent along X
    pub width: f32,
    /// Distance from the model origin down to its lowest vertex
    pub ground_offset: f32,
}

impl VehicleDimensions {
    pub fn new(length: f32, width: f32, ground_offset: f32) -> Self {
        Self {
            length,
            width,
            ground_offset,
        }
    }

    /// Measure a model's vertex positions. `None` if there are none.
    pub fn from_model_vertices(vertices: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let aabb = Aabb::from_points(vertices)?;
        let size = aabb.size();
        Some(Self {
            length: size.y,
            width: size.x,
            ground_offset: aabb.min.z.abs(),
        })
    }
}

/// Where the model and its textures live. Carried through untouched for the
/// rendering layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetPaths {
    pub model: String,
    pub texture: String,
    pub wheel_model: String,
    pub wheel_texture: String,
}

/// Light mount points relative to the vehicle origin, already scaled
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightOffsets {
    pub left_headlight: Vec3,
    pub right_headlight: Vec3,
    pub left_rear: Vec3,
    pub right_rear: Vec3,
}

/// Immutable vehicle parameters.
///
/// Length, width and every mount offset are multiplied by `scale` here, so
/// nothing downstream needs to rescale them.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleParams {
    pub scale: f32,
    pub length: f32,
    pub width: f32,
    pub ground_offset: f32,
    pub acceleration: f32,
    pub max_engine_speed: f32,
    pub max_speed: f32,
    pub brake_deceleration: f32,
    pub natural_deceleration: f32,
    /// Turn rate in radians per second
    pub rot_speed: f32,
    pub lights: LightOffsets,
    /// Wheel offsets in [`WheelPosition::ALL`] order
    pub wheels: [Vec3; 4],
    pub independent_wheels: bool,
    pub assets: AssetPaths,
}

impl VehicleParams {
    /// Build from a parsed config file and the model's measured extents.
    ///
    /// Any missing or malformed numeric key is an error, as is a scale,
    /// body extent or max speed that is not positive.
    pub fn from_config(config: &ConfigFile, dims: VehicleDimensions) -> Result<Self> {
        let scale = positive("scale", config.get_f32("scale")?)?;
        positive("length", dims.length)?;
        positive("width", dims.width)?;
        let scaled = |key: &str| config.get_vec3(key).map(|v| v * scale);

        let lights = LightOffsets {
            left_headlight: scaled("left_head_light_pos")?,
            right_headlight: scaled("right_head_light_pos")?,
            left_rear: scaled("left_rear_light_pos")?,
            right_rear: scaled("right_rear_light_pos")?,
        };

        let mut wheels = [Vec3::ZERO; 4];
        for (slot, wheel) in wheels.iter_mut().zip(WheelPosition::ALL) {
            *slot = scaled(wheel.config_key())?;
        }

        let params = Self {
            scale,
            length: dims.length * scale,
            width: dims.width * scale,
            ground_offset: dims.ground_offset,
            acceleration: config.get_f32("acceleration")?,
            max_engine_speed: config.get_f32("max_engine_speed")?,
            max_speed: positive("max_speed", config.get_f32("max_speed")?)?,
            brake_deceleration: config.get_f32("break_deceleretion")?,
            natural_deceleration: config.get_f32("natural_deceleretion")?,
            rot_speed: config.get_f32("rot_speed_degree")?.to_radians(),
            lights,
            wheels,
            independent_wheels: config.get_bool("independent_wheels"),
            assets: AssetPaths {
                model: config.get("model_path").to_string(),
                texture: config.get("texture_path").to_string(),
                wheel_model: config.get("wheel_model_path").to_string(),
                wheel_texture: config.get("wheel_texture_path").to_string(),
            },
        };

        log::info!(
            "Vehicle: {:.3} x {:.3} (scale {}), max speed {}, independent wheels: {}",
            params.length,
            params.width,
            params.scale,
            params.max_speed,
            params.independent_wheels
        );

        Ok(params)
    }

    pub fn wheel_offset(&self, wheel: WheelPosition) -> Vec3 {
        self.wheels[wheel as usize]
    }
}

/// Divisors downstream: slope angles divide by length and width, the
/// speedometer by max speed.
fn positive(key: &str, value: f32) -> Result<f32> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::config(key, &value.to_string(), "must be greater than zero"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::error::Error;

    pub(crate) const JEEP: &str = "\
scale=0.1
independent_wheels=true
left_head_light_pos=0.628, -2.731, 0.881
right_head_light_pos=-0.657, -2.731, 0.881
left_rear_light_pos=0.933, 2.365, 1.326
right_rear_light_pos=-0.973, 2.365, 1.326
front_left_wheel_pos=0.8, -1.6, 0.4
front_right_wheel_pos=-0.8, -1.6, 0.4
rear_left_wheel_pos=0.8, 1.5, 0.4
rear_right_wheel_pos=-0.8, 1.5, 0.4
max_engine_speed=0.03
max_speed=0.1
acceleration=0.001
break_deceleretion=0.002
natural_deceleretion=0.0005
rot_speed_degree=90
model_path=models/jeep.obj
texture_path=textures/jeep.png
wheel_model_path=models/wheel.obj
wheel_texture_path=textures/wheel.png
";

    pub(crate) fn jeep_params() -> VehicleParams {
        VehicleParams::from_config(
            &ConfigFile::parse(JEEP),
            VehicleDimensions::new(5.0, 2.0, 0.3),
        )
        .unwrap()
    }

    #[test]
    fn test_offsets_and_dimensions_are_scaled() {
        let params = jeep_params();
        assert!((params.length - 0.5).abs() < 1e-6);
        assert!((params.width - 0.2).abs() < 1e-6);
        assert!((params.lights.left_headlight - Vec3::new(0.0628, -0.2731, 0.0881)).length() < 1e-6);
        assert!(
            (params.wheel_offset(WheelPosition::RearRight) - Vec3::new(-0.08, 0.15, 0.04)).length()
                < 1e-6
        );
        assert!((params.rot_speed - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(params.independent_wheels);
        assert_eq!(params.assets.wheel_model, "models/wheel.obj");
    }

    #[test]
    fn test_missing_numeric_key_fails() {
        let text = JEEP.replace("max_speed=0.1\n", "");
        let result = VehicleParams::from_config(
            &ConfigFile::parse(&text),
            VehicleDimensions::new(1.0, 1.0, 0.0),
        );
        match result {
            Err(Error::Config { key, .. }) => assert_eq!(key, "max_speed"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_divisors_rejected() {
        let key_of = |text: &str, dims: VehicleDimensions| {
            match VehicleParams::from_config(&ConfigFile::parse(text), dims) {
                Err(Error::Config { key, .. }) => key,
                other => panic!("expected config error, got {other:?}"),
            }
        };
        let dims = VehicleDimensions::new(5.0, 2.0, 0.3);

        assert_eq!(key_of(&JEEP.replace("scale=0.1", "scale=0"), dims), "scale");
        assert_eq!(key_of(&JEEP.replace("max_speed=0.1", "max_speed=-0.1"), dims), "max_speed");
        assert_eq!(key_of(JEEP, VehicleDimensions::new(0.0, 2.0, 0.3)), "length");
        assert_eq!(key_of(JEEP, VehicleDimensions::new(5.0, 0.0, 0.3)), "width");
    }

    #[test]
    fn test_zero_sentinel_wheel() {
        let text = JEEP.replace("rear_left_wheel_pos=0.8, 1.5, 0.4", "rear_left_wheel_pos=#");
        let params = VehicleParams::from_config(
            &ConfigFile::parse(&text),
            VehicleDimensions::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert_eq!(params.wheel_offset(WheelPosition::RearLeft), Vec3::ZERO);
    }

    #[test]
    fn test_dimensions_from_model() {
        let dims = VehicleDimensions::from_model_vertices([
            Vec3::new(-1.0, -2.5, -0.3),
            Vec3::new(1.0, 2.5, 1.5),
            Vec3::new(0.2, 0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(dims, VehicleDimensions::new(5.0, 2.0, 0.3));
        assert!(VehicleDimensions::from_model_vertices(std::iter::empty()).is_none());
    }
}

//! Simulation tunables that are not part of a vehicle definition

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atmosphere::DayCycleConfig;
use crate::core::camera_controller::CameraConfig;
use crate::core::types::Result;
use crate::vehicle::wheels::DEFAULT_SPIN_FACTOR;

/// Everything outside the vehicle file: clock, camera and presentation knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub day_cycle: DayCycleConfig,
    pub camera: CameraConfig,
    /// Z the vehicle is placed at before the first terrain sample
    pub start_elevation: f32,
    /// Headlight intensity change per tick
    pub headlight_fade_step: f32,
    /// Wheel spin per tick per unit of speed
    pub wheel_spin_factor: f32,
    /// Downward tilt of the headlight beams, in degrees
    pub headlight_tilt_degrees: f32,
    /// Build a grid index over the terrain instead of scanning every triangle
    pub terrain_grid_index: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            day_cycle: DayCycleConfig::default(),
            camera: CameraConfig::default(),
            start_elevation: 2.0,
            headlight_fade_step: 0.1,
            wheel_spin_factor: DEFAULT_SPIN_FACTOR,
            headlight_tilt_degrees: 35.0,
            terrain_grid_index: false,
        }
    }
}

impl SimConfig {
    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }
}

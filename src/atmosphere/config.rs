//! Day-night cycle configuration.

use serde::{Deserialize, Serialize};

/// Clock speeds and switches for the day-night cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DayCycleConfig {
    /// In-game hours per real second while running normally.
    pub normal_rate: f32,
    /// In-game hours per real second while fast-forward is held.
    pub fast_forward_rate: f32,
    /// Starting hour (0-24).
    pub start_hour: f32,
    /// Whether the clock starts paused.
    pub start_paused: bool,
    /// Pin the clock to [`Self::always_day_hour`] and ignore every control.
    pub always_day: bool,
    pub always_day_hour: f32,
}

impl Default for DayCycleConfig {
    fn default() -> Self {
        Self {
            normal_rate: 1.0,
            fast_forward_rate: 5.0,
            start_hour: 0.0,
            start_paused: false,
            always_day: false,
            always_day_hour: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DayCycleConfig = serde_json::from_str(r#"{ "always_day": true }"#).unwrap();
        assert!(config.always_day);
        assert_eq!(config.normal_rate, 1.0);
        assert_eq!(config.fast_forward_rate, 5.0);
        assert_eq!(config.always_day_hour, 12.0);
    }
}

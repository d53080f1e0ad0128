//! Driver intent read from an input source

use crate::core::input::{apply_dead_zone, Axis, InputSource, Signal};
use crate::math::remap;

/// One tick of driver input, resolved from keys and controller axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveControls {
    /// Engine power in `[0, 1]` while accelerating forward
    pub throttle: Option<f32>,
    /// Engine power in `[0, 1]` while accelerating backward
    pub reverse: Option<f32>,
    /// Steering magnitude in `[0, 1]`, signed: positive turns left
    pub steer: f32,
    pub brake: bool,
}

impl DriveControls {
    pub fn from_input(input: &dyn InputSource) -> Self {
        Self {
            throttle: pedal(input, Signal::Forward, Axis::RightTrigger),
            reverse: pedal(input, Signal::Backward, Axis::LeftTrigger),
            steer: steering(input),
            brake: input.is_active(Signal::Brake),
        }
    }
}

/// Full power from the key, otherwise the trigger position mapped to `[0, 1]`.
/// A trigger at rest does not count as pressed.
fn pedal(input: &dyn InputSource, signal: Signal, trigger: Axis) -> Option<f32> {
    if input.is_active(signal) {
        return Some(1.0);
    }
    input
        .axis(trigger)
        .filter(|&value| value > -1.0)
        .map(|value| remap(value, -1.0, 1.0, 0.0, 1.0))
}

fn steering(input: &dyn InputSource) -> f32 {
    let stick = input.axis(Axis::LeftStickX).map(apply_dead_zone).unwrap_or(0.0);
    let key_left = input.is_active(Signal::TurnLeft);
    let key_right = input.is_active(Signal::TurnRight);

    let left = key_left || stick < 0.0;
    let right = key_right || stick > 0.0;
    if !left && !right {
        return 0.0;
    }

    // Right wins when both are requested
    let direction = if right { -1.0 } else { 1.0 };
    let magnitude = if key_left || key_right { 1.0 } else { stick.abs() };
    direction * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{CombinedInput, ControllerState, KeyboardState};
    use winit::keyboard::KeyCode;

    #[test]
    fn test_idle() {
        let keyboard = KeyboardState::new();
        assert_eq!(DriveControls::from_input(&keyboard), DriveControls::default());

        // A connected pad with triggers at rest is also idle
        let pad = ControllerState::connected();
        assert_eq!(DriveControls::from_input(&pad), DriveControls::default());
    }

    #[test]
    fn test_keys_give_full_power() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::KeyB);
        let controls = DriveControls::from_input(&keyboard);
        assert_eq!(controls.throttle, Some(1.0));
        assert_eq!(controls.reverse, None);
        assert_eq!(controls.steer, 1.0);
        assert!(controls.brake);
    }

    #[test]
    fn test_trigger_maps_to_power() {
        let mut pad = ControllerState::connected();
        pad.set_axis(Axis::RightTrigger, 0.0);
        pad.set_axis(Axis::LeftTrigger, -0.5);
        let controls = DriveControls::from_input(&pad);
        assert_eq!(controls.throttle, Some(0.5));
        assert_eq!(controls.reverse, Some(0.25));
    }

    #[test]
    fn test_stick_steering() {
        let mut pad = ControllerState::connected();
        pad.set_axis(Axis::LeftStickX, 0.05);
        assert_eq!(DriveControls::from_input(&pad).steer, 0.0);

        pad.set_axis(Axis::LeftStickX, 0.6);
        assert!((DriveControls::from_input(&pad).steer + 0.6).abs() < 1e-6);

        pad.set_axis(Axis::LeftStickX, -0.4);
        assert!((DriveControls::from_input(&pad).steer - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_key_overrides_stick_magnitude() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyA);
        let mut pad = ControllerState::connected();
        pad.set_axis(Axis::LeftStickX, 0.3);
        let input = CombinedInput {
            keyboard: &keyboard,
            controller: &pad,
        };
        // Stick pushes right, key holds left: right direction, key magnitude
        assert_eq!(DriveControls::from_input(&input).steer, -1.0);
    }
}

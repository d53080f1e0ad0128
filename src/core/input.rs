//! Input signals and the backends that produce them
//!
//! The simulation never looks at raw keys or joystick indices. It asks an
//! [`InputSource`] for named [`Signal`]s and analog [`Axis`] values, so any
//! backend (winit keyboard, a gamepad library, a scripted replay) can drive it.

use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Stick values with a magnitude below this are treated as centered.
pub const STICK_DEAD_ZONE: f32 = 0.1;

/// Named digital inputs understood by the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Brake,
    HeadlightToggle,
    TimePauseToggle,
    TimeFastForward,
    CameraYawLeft,
    CameraYawRight,
    CameraPitchUp,
    CameraPitchDown,
    CameraZoomIn,
    CameraZoomOut,
    CameraReset,
}

impl Signal {
    pub const ALL: [Signal; 15] = [
        Signal::Forward,
        Signal::Backward,
        Signal::TurnLeft,
        Signal::TurnRight,
        Signal::Brake,
        Signal::HeadlightToggle,
        Signal::TimePauseToggle,
        Signal::TimeFastForward,
        Signal::CameraYawLeft,
        Signal::CameraYawRight,
        Signal::CameraPitchUp,
        Signal::CameraPitchDown,
        Signal::CameraZoomIn,
        Signal::CameraZoomOut,
        Signal::CameraReset,
    ];
}

/// Analog controller axes, each in `[-1, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Steering, left (-1) / right (1)
    LeftStickX,
    /// Camera yaw, left (-1) / right (1)
    RightStickX,
    /// Camera pitch, up (1) / down (-1)
    RightStickY,
    /// Reverse throttle, released at -1
    LeftTrigger,
    /// Forward throttle, released at -1
    RightTrigger,
}

impl Axis {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            Axis::LeftStickX => 0,
            Axis::RightStickX => 1,
            Axis::RightStickY => 2,
            Axis::LeftTrigger => 3,
            Axis::RightTrigger => 4,
        }
    }

    /// Whether the axis is a stick (dead zone applies) rather than a trigger
    pub fn is_stick(self) -> bool {
        matches!(self, Axis::LeftStickX | Axis::RightStickX | Axis::RightStickY)
    }

    /// Resting value of the axis when untouched
    pub fn rest_value(self) -> f32 {
        if self.is_stick() { 0.0 } else { -1.0 }
    }
}

/// Zero out stick readings inside the dead zone
#[inline]
pub fn apply_dead_zone(value: f32) -> f32 {
    if value.abs() < STICK_DEAD_ZONE { 0.0 } else { value }
}

/// Capability interface for anything that can drive the simulation.
pub trait InputSource {
    /// Whether a digital signal is held this frame
    fn is_active(&self, signal: Signal) -> bool;

    /// Analog axis value, or `None` when no analog controller is present
    fn axis(&self, _axis: Axis) -> Option<f32> {
        None
    }
}

// ---------------------------------------------------------------------------
// Edge detection
// ---------------------------------------------------------------------------

/// Press-only toggle detection with explicit per-signal history.
#[derive(Clone, Debug, Default)]
pub struct EdgeTrigger {
    previous: HashMap<Signal, bool>,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of `signal` and report whether it just
    /// went down. The first observation of a signal reports its state as is.
    pub fn rising(&mut self, signal: Signal, current: bool) -> bool {
        match self.previous.insert(signal, current) {
            Some(previous) => current && !previous,
            None => current,
        }
    }

    /// Forget all recorded states
    pub fn reset(&mut self) {
        self.previous.clear();
    }
}

// ---------------------------------------------------------------------------
// Keyboard backend
// ---------------------------------------------------------------------------

/// Mapping from simulation signals to physical keys
#[derive(Clone, Debug)]
pub struct KeyBindings {
    keys: HashMap<Signal, KeyCode>,
}

impl KeyBindings {
    /// Rebind a signal to another key
    pub fn bind(&mut self, signal: Signal, key: KeyCode) {
        self.keys.insert(signal, key);
    }

    /// Key bound to a signal, if any
    pub fn key_for(&self, signal: Signal) -> Option<KeyCode> {
        self.keys.get(&signal).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (Signal::Forward, KeyCode::KeyW),
            (Signal::Backward, KeyCode::KeyS),
            (Signal::TurnLeft, KeyCode::KeyA),
            (Signal::TurnRight, KeyCode::KeyD),
            (Signal::Brake, KeyCode::KeyB),
            (Signal::HeadlightToggle, KeyCode::KeyH),
            (Signal::TimePauseToggle, KeyCode::KeyU),
            (Signal::TimeFastForward, KeyCode::KeyY),
            (Signal::CameraYawLeft, KeyCode::ArrowLeft),
            (Signal::CameraYawRight, KeyCode::ArrowRight),
            (Signal::CameraPitchUp, KeyCode::ArrowUp),
            (Signal::CameraPitchDown, KeyCode::ArrowDown),
            (Signal::CameraZoomIn, KeyCode::KeyP),
            (Signal::CameraZoomOut, KeyCode::KeyL),
            (Signal::CameraReset, KeyCode::KeyR),
        ]);
        Self { keys }
    }
}

/// Tracks keyboard state from winit window events
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    /// Currently pressed keys
    keys_pressed: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Keys released this frame
    keys_just_released: HashSet<KeyCode>,
    bindings: KeyBindings,
}

impl KeyboardState {
    /// Create keyboard state with the default bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create keyboard state with custom bindings
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event: KeyEvent {
                physical_key: PhysicalKey::Code(key_code),
                state,
                ..
            },
            ..
        } = event
        {
            match state {
                ElementState::Pressed => self.press(*key_code),
                ElementState::Released => self.release(*key_code),
            }
        }
    }

    /// Mark a key as held
    pub fn press(&mut self, key: KeyCode) {
        if self.keys_pressed.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    /// Mark a key as released
    pub fn release(&mut self, key: KeyCode) {
        if self.keys_pressed.remove(&key) {
            self.keys_just_released.insert(key);
        }
    }

    /// Call at end of frame to reset per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
    }

    /// Check if key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if key was just pressed this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Check if key was just released this frame
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys_just_released.contains(&key)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl InputSource for KeyboardState {
    fn is_active(&self, signal: Signal) -> bool {
        self.bindings
            .key_for(signal)
            .is_some_and(|key| self.is_key_pressed(key))
    }
}

// ---------------------------------------------------------------------------
// Controller backend
// ---------------------------------------------------------------------------

/// Snapshot of an analog game controller, filled in by the host each frame.
#[derive(Clone, Debug)]
pub struct ControllerState {
    connected: bool,
    axes: [f32; Axis::COUNT],
    brake_button: bool,
}

impl ControllerState {
    /// A connected controller with every axis at rest
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Set an axis value, clamped to `[-1, 1]`
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        self.axes[axis.index()] = value.clamp(-1.0, 1.0);
    }

    pub fn set_brake_button(&mut self, pressed: bool) {
        self.brake_button = pressed;
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        let mut axes = [0.0; Axis::COUNT];
        for axis in [Axis::LeftTrigger, Axis::RightTrigger] {
            axes[axis.index()] = axis.rest_value();
        }
        Self {
            connected: false,
            axes,
            brake_button: false,
        }
    }
}

impl InputSource for ControllerState {
    fn is_active(&self, signal: Signal) -> bool {
        self.connected && signal == Signal::Brake && self.brake_button
    }

    fn axis(&self, axis: Axis) -> Option<f32> {
        self.connected.then(|| self.axes[axis.index()])
    }
}

/// Keyboard and controller read together; digital signals are OR-ed.
pub struct CombinedInput<'a> {
    pub keyboard: &'a KeyboardState,
    pub controller: &'a ControllerState,
}

impl InputSource for CombinedInput<'_> {
    fn is_active(&self, signal: Signal) -> bool {
        self.keyboard.is_active(signal) || self.controller.is_active(signal)
    }

    fn axis(&self, axis: Axis) -> Option<f32> {
        self.controller.axis(axis)
    }
}

//! Simulation loop tying the vehicle, terrain and day-night cycle together.
//!
//! [`Simulation`] owns every piece of mutable state. Drive it with
//! [`Simulation::tick`] once per frame and hand the returned
//! [`FrameOutput`] to whatever draws the scene.

pub mod config;
pub mod frame;
pub mod simulation;

pub use config::SimConfig;
pub use frame::{CameraPose, FrameOutput, HudAngles, VehiclePose};
pub use simulation::Simulation;

//! Vehicle model: parameters, driving, terrain following and presentation

pub mod attitude;
pub mod boundary;
pub mod controls;
pub mod footprint;
pub mod kinematics;
pub mod lights;
pub mod params;
pub mod wheels;

pub use attitude::{Attitude, AttitudeSolver, SurfaceHeights};
pub use boundary::{BoundaryGuard, GuardedMove};
pub use controls::DriveControls;
pub use footprint::Footprint;
pub use kinematics::{DriveStep, VehicleState};
pub use lights::{Headlights, LightRig};
pub use params::{AssetPaths, LightOffsets, VehicleDimensions, VehicleParams, WheelPosition};
pub use wheels::{body_rotation, wheel_transforms, WheelSpin, WheelTransform};

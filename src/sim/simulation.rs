//! The per-tick simulation loop

use crate::atmosphere::{DayNightCycle, LightingUniform};
use crate::core::camera::Camera;
use crate::core::camera_controller::ChaseCameraController;
use crate::core::input::{EdgeTrigger, InputSource, Signal};
use crate::core::types::{Mat4, Vec2, Vec3};
use crate::terrain::HeightField;
use crate::vehicle::kinematics;
use crate::vehicle::lights::rear_light_color;
use crate::vehicle::{
    body_rotation, wheel_transforms, AttitudeSolver, BoundaryGuard, DriveControls, Headlights,
    LightRig, VehicleParams, VehicleState, WheelSpin,
};

use super::config::SimConfig;
use super::frame::{CameraPose, FrameOutput, HudAngles, VehiclePose};

/// Owns all mutable state of a running session.
///
/// Each [`tick`](Self::tick) reads input, moves the vehicle, keeps it on the
/// terrain, advances the clock and returns what the renderer should draw.
pub struct Simulation {
    config: SimConfig,
    params: VehicleParams,
    terrain: HeightField,
    guard: BoundaryGuard,
    state: VehicleState,
    attitude: AttitudeSolver,
    camera: ChaseCameraController,
    headlights: Headlights,
    wheel_spin: WheelSpin,
    day_night: DayNightCycle,
    toggles: EdgeTrigger,
    tick: u64,
}

impl Simulation {
    /// Place the vehicle above the center of the terrain, facing -Y.
    pub fn new(terrain: HeightField, params: VehicleParams, config: SimConfig) -> Self {
        let terrain = if config.terrain_grid_index && !terrain.is_indexed() {
            terrain.with_grid_index()
        } else {
            terrain
        };
        let bounds = terrain.bounds();
        let start = bounds.center.extend(config.start_elevation);
        log::info!(
            "Terrain: {} triangles, x [{:.2}, {:.2}], y [{:.2}, {:.2}]",
            terrain.mesh().triangle_count(),
            bounds.min_x,
            bounds.max_x(),
            bounds.min_y,
            bounds.max_y()
        );
        log::info!("Vehicle starts at ({:.2}, {:.2}, {:.2})", start.x, start.y, start.z);

        Self {
            guard: BoundaryGuard::new(bounds),
            state: VehicleState::at(start),
            attitude: AttitudeSolver::new(config.start_elevation),
            camera: ChaseCameraController::new(config.camera.clone()),
            headlights: Headlights::new(config.headlight_fade_step),
            wheel_spin: WheelSpin::new(config.wheel_spin_factor),
            day_night: DayNightCycle::new(config.day_cycle.clone()),
            toggles: EdgeTrigger::new(),
            tick: 0,
            config,
            params,
            terrain,
        }
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: &dyn InputSource) -> FrameOutput {
        self.tick += 1;

        if self.toggles.rising(Signal::HeadlightToggle, input.is_active(Signal::HeadlightToggle)) {
            self.headlights.toggle();
        }
        self.headlights.update();

        let controls = DriveControls::from_input(input);
        let step = kinematics::step(&mut self.state, &self.params, &controls, dt);

        self.camera.update(input);

        let (length, width) = (self.params.length, self.params.width);
        let guarded = self
            .guard
            .check(self.state.position, step.proposed, self.state.yaw, length, width);
        self.state.position = guarded.position;

        let attitude = self
            .attitude
            .solve(&self.terrain, self.state.position, &guarded.footprint, length, width);
        self.state.position.z = attitude.elevation;
        self.state.pitch = attitude.pitch;
        self.state.roll = attitude.roll;

        if self.toggles.rising(Signal::TimePauseToggle, input.is_active(Signal::TimePauseToggle)) {
            self.day_night.toggle_pause();
        }
        self.day_night.update(dt, input.is_active(Signal::TimeFastForward));

        let state = self.state;
        let rotation = body_rotation(state.yaw, state.pitch, state.roll);
        let model = Mat4::from_translation(state.position)
            * Mat4::from_mat3(rotation)
            * Mat4::from_scale(Vec3::splat(self.params.scale));

        let lights = LightRig::new(
            &self.params.lights,
            state.position,
            rotation,
            state.yaw,
            state.pitch,
            self.config.headlight_tilt_degrees.to_radians(),
            self.headlights.color(),
            rear_light_color(step.reverse_gear, step.braking),
        );

        let wheels = self.params.independent_wheels.then(|| {
            self.wheel_spin.advance(state.speed);
            wheel_transforms(
                &self.params,
                state.position,
                rotation,
                step.rotation_axis,
                self.wheel_spin.angle(),
            )
        });

        let camera = self.camera.camera(state.position, state.yaw, 1.0);
        let sky = *self.day_night.sky();
        let hour = self.day_night.hour();

        log::trace!(
            "tick {}: pos ({:.3}, {:.3}, {:.3}) speed {:.4} yaw {:.3} pitch {:.3} roll {:.3}",
            self.tick,
            state.position.x,
            state.position.y,
            state.position.z,
            state.speed,
            state.yaw,
            state.pitch,
            state.roll
        );

        FrameOutput {
            tick: self.tick,
            pose: VehiclePose {
                position: state.position,
                speed: state.speed,
                yaw: state.yaw,
                pitch: state.pitch,
                roll: state.roll,
                model,
            },
            reverse_gear: step.reverse_gear,
            braking: step.braking,
            boundary_hit: guarded.reverted,
            wheels,
            camera: CameraPose {
                position: camera.position,
                target: camera.target,
                view: camera.view_matrix(),
            },
            lighting_uniform: LightingUniform::new(&lights, &sky),
            lights,
            hour,
            sky,
            hud: HudAngles::new(state.speed, self.params.max_speed, hour),
            sky_uniform: self.day_night.uniform(),
        }
    }

    /// Move the vehicle to `position` (ground plane) facing `yaw`, at rest.
    /// Elevation is resolved on the next tick.
    pub fn place(&mut self, position: Vec2, yaw: f32) {
        self.state.position = position.extend(self.state.position.z);
        self.state.yaw = yaw;
        self.state.speed = 0.0;
    }

    /// Chase camera for a viewport with the given aspect ratio
    pub fn camera(&self, aspect: f32) -> Camera {
        self.camera.camera(self.state.position, self.state.yaw, aspect)
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    pub fn day_night(&self) -> &DayNightCycle {
        &self.day_night
    }

    pub fn day_night_mut(&mut self) -> &mut DayNightCycle {
        &mut self.day_night
    }

    pub fn headlights(&self) -> &Headlights {
        &self.headlights
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }
}

//! Headless runner - drives a vehicle over generated terrain with scripted input.
//!
//! Usage: cargo run --release -- [VEHICLE_CONFIG] [OPTIONS]
//!
//! Options:
//!   --sim <PATH>      Simulation config JSON (default: built-in defaults)
//!   --ticks <N>       Ticks to run (default: 1800)
//!   --dt <SECONDS>    Seconds per tick (default: 1/60)
//!   --seed <SEED>     Terrain seed (default: 12345)
//!   --size <UNITS>    Terrain edge length (default: 20)
//!   --length <L>      Unscaled model length (default: 5)
//!   --width <W>       Unscaled model width (default: 2)
//!   --realtime        Sleep between ticks and use measured wall-clock deltas
//!   --json            Print every frame as a JSON line

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use winit::keyboard::KeyCode;

use trailrig::core::config_file::ConfigFile;
use trailrig::core::input::KeyboardState;
use trailrig::core::logging;
use trailrig::core::time::FrameTimer;
use trailrig::core::Result;
use trailrig::sim::{SimConfig, Simulation};
use trailrig::terrain::{HeightField, TerrainGenerator, TerrainParams};
use trailrig::vehicle::{VehicleDimensions, VehicleParams};

const DEFAULT_VEHICLE_CONFIG: &str = "assets/JeepConfig";
const DEFAULT_GROUND_OFFSET: f32 = 0.3;

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let vehicle_path = parse_positional(&args)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VEHICLE_CONFIG));
    let sim_path = parse_str_arg(&args, "--sim");
    let ticks = parse_u64_arg(&args, "--ticks").unwrap_or(1800);
    let dt = parse_f32_arg(&args, "--dt").unwrap_or(1.0 / 60.0);
    let json = args.iter().any(|a| a == "--json");
    let realtime = args.iter().any(|a| a == "--realtime");

    let defaults = TerrainParams::default();
    let terrain_params = TerrainParams {
        seed: parse_u32_arg(&args, "--seed").unwrap_or(defaults.seed),
        size: parse_f32_arg(&args, "--size").unwrap_or(defaults.size),
        ..defaults
    };
    let dims = VehicleDimensions::new(
        parse_f32_arg(&args, "--length").unwrap_or(5.0),
        parse_f32_arg(&args, "--width").unwrap_or(2.0),
        DEFAULT_GROUND_OFFSET,
    );

    log::info!("Vehicle config: {}", vehicle_path.display());
    let params = VehicleParams::from_config(&ConfigFile::load(&vehicle_path)?, dims)?;
    let config = match sim_path {
        Some(path) => SimConfig::load_sync(&PathBuf::from(path))?,
        None => SimConfig::default(),
    };

    let mesh = TerrainGenerator::new(terrain_params).build_mesh()?;
    let terrain = HeightField::new(Arc::new(mesh));
    let mut sim = Simulation::new(terrain, params, config);

    let ticks_per_second = (1.0 / dt).round().max(1.0) as u64;
    let mut keyboard = KeyboardState::new();
    let mut timer = FrameTimer::new();

    for tick in 0..ticks {
        script_input(&mut keyboard, tick, ticks_per_second);
        let step = if realtime {
            std::thread::sleep(Duration::from_secs_f32(dt));
            timer.tick()
        } else {
            dt
        };
        let frame = sim.tick(step, &keyboard);
        keyboard.end_frame();

        if json {
            println!("{}", serde_json::to_string(&frame)?);
        }
        if frame.tick % ticks_per_second == 0 {
            log::info!(
                "t={:>4}s pos ({:.2}, {:.2}, {:.2}) speed {:.4} pitch {:.3} roll {:.3} | {:.2}h {:?}",
                frame.tick / ticks_per_second,
                frame.pose.position.x,
                frame.pose.position.y,
                frame.pose.position.z,
                frame.pose.speed,
                frame.pose.pitch,
                frame.pose.roll,
                frame.hour,
                frame.sky.phase
            );
        }
    }

    log::info!(
        "Finished {} ticks, day {} at {:.2}h",
        sim.ticks(),
        sim.day_night().day_count(),
        sim.day_night().hour()
    );
    Ok(())
}

/// Repeating ten-second drive: accelerate, curve left, coast, back up while
/// curving right. Headlights flip every thirty seconds.
fn script_input(keyboard: &mut KeyboardState, tick: u64, ticks_per_second: u64) {
    let second = tick / ticks_per_second;
    let phase = second % 10;

    set_key(keyboard, KeyCode::KeyW, phase < 6);
    set_key(keyboard, KeyCode::KeyA, (3..6).contains(&phase));
    set_key(keyboard, KeyCode::KeyB, phase == 6);
    set_key(keyboard, KeyCode::KeyS, phase >= 8);
    set_key(keyboard, KeyCode::KeyD, phase >= 8);
    set_key(keyboard, KeyCode::KeyH, second % 30 == 29);
}

fn set_key(keyboard: &mut KeyboardState, key: KeyCode, held: bool) {
    if held {
        keyboard.press(key);
    } else {
        keyboard.release(key);
    }
}

/// First argument that is neither a flag nor a flag's value
fn parse_positional(args: &[String]) -> Option<String> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if arg == "--json" || arg == "--realtime" {
            continue;
        }
        if arg.starts_with("--") {
            rest.next();
            continue;
        }
        return Some(arg.clone());
    }
    None
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

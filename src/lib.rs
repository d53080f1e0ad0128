//! Trailrig - terrain-following vehicle simulation with a day-night cycle

pub mod core;
pub mod math;
pub mod terrain;
pub mod vehicle;
pub mod atmosphere;
pub mod sim;

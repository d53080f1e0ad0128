//! Core types and utilities shared by every subsystem

pub mod types;
pub mod error;
pub mod logging;
pub mod time;
pub mod input;
pub mod config_file;
pub mod camera;
pub mod camera_controller;

pub use types::*;
pub use error::Error;

//! Terrain surface and elevation queries

pub mod generator;
pub mod grid;
pub mod height_field;
pub mod mesh;

pub use generator::{grid_mesh, TerrainGenerator, TerrainParams};
pub use height_field::{BatchSample, HeightField};
pub use mesh::{TerrainBounds, TerrainMesh};

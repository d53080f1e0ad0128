//! Noise-based procedural terrain generation

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use super::mesh::TerrainMesh;
use crate::core::types::{Result, Vec3};

/// Parameters controlling terrain generation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub seed: u32,
    pub scale: f32,        // Horizontal scale (larger = smoother)
    pub height_scale: f32, // Vertical scale (max height)
    pub octaves: u32,      // FBM octaves (detail levels)
    pub persistence: f32,  // FBM persistence (0.5 typical)
    pub lacunarity: f32,   // FBM lacunarity (2.0 typical)
    pub size: f32,         // Side length of the square terrain
    pub resolution: u32,   // Grid cells per side
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale: 8.0,
            height_scale: 1.5,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            size: 20.0,
            resolution: 64,
        }
    }
}

/// Procedural terrain generator using fractal Brownian motion (FBM)
pub struct TerrainGenerator {
    params: TerrainParams,
    noise: Fbm<Perlin>,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given parameters
    pub fn new(params: TerrainParams) -> Self {
        let noise = Fbm::<Perlin>::new(params.seed)
            .set_octaves(params.octaves as usize)
            .set_persistence(params.persistence as f64)
            .set_lacunarity(params.lacunarity as f64);

        Self { params, noise }
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Get terrain height at ground position (x, y)
    pub fn height_at(&self, x: f32, y: f32) -> f32 {
        let nx = (x / self.params.scale) as f64;
        let ny = (y / self.params.scale) as f64;

        // Noise is roughly [-1, 1]; map to [0, height_scale]
        let noise_value = self.noise.get([nx, ny]);
        let normalized = ((noise_value + 1.0) / 2.0).clamp(0.0, 1.0);
        (normalized * self.params.height_scale as f64) as f32
    }

    /// Triangulate the heightmap over `[0, size]²`
    pub fn build_mesh(&self) -> Result<TerrainMesh> {
        let mesh = grid_mesh(self.params.size, self.params.resolution, |x, y| {
            self.height_at(x, y)
        })?;
        log::info!(
            "Generated terrain: seed {}, {} triangles over {:.1}x{:.1}",
            self.params.seed,
            mesh.triangle_count(),
            self.params.size,
            self.params.size
        );
        Ok(mesh)
    }
}

/// Regular grid mesh over `[0, size]²` with `resolution` cells per side.
///
/// Vertices are laid out row by row from the origin. Each cell is split
/// along its diagonal into two triangles, emitted in cell order.
pub fn grid_mesh(size: f32, resolution: u32, height: impl Fn(f32, f32) -> f32) -> Result<TerrainMesh> {
    let n = resolution.max(1);
    let stride = n + 1;
    let step = size / n as f32;

    let mut vertices = Vec::with_capacity((stride * stride) as usize);
    for j in 0..stride {
        for i in 0..stride {
            let x = i as f32 * step;
            let y = j as f32 * step;
            vertices.push(Vec3::new(x, y, height(x, y)));
        }
    }

    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for j in 0..n {
        for i in 0..n {
            let i00 = j * stride + i;
            let i10 = i00 + 1;
            let i01 = i00 + stride;
            let i11 = i01 + 1;
            indices.extend_from_slice(&[i00, i10, i11, i00, i11, i01]);
        }
    }

    TerrainMesh::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_params_default() {
        let params = TerrainParams::default();
        assert_eq!(params.seed, 12345);
        assert_eq!(params.octaves, 4);
        assert_eq!(params.persistence, 0.5);
        assert_eq!(params.lacunarity, 2.0);
        assert_eq!(params.resolution, 64);
    }

    #[test]
    fn test_height_at() {
        let generator = TerrainGenerator::new(TerrainParams::default());

        let height = generator.height_at(0.0, 0.0);
        assert!((0.0..=1.5).contains(&height));
        assert_eq!(height, generator.height_at(0.0, 0.0));

        let height2 = generator.height_at(17.3, 4.1);
        assert!((0.0..=1.5).contains(&height2));
    }

    #[test]
    fn test_different_seeds() {
        let gen1 = TerrainGenerator::new(TerrainParams { seed: 1, ..Default::default() });
        let gen2 = TerrainGenerator::new(TerrainParams { seed: 2, ..Default::default() });

        assert_ne!(gen1.height_at(5.5, 5.5), gen2.height_at(5.5, 5.5));
    }

    #[test]
    fn test_grid_mesh_layout() {
        let mesh = grid_mesh(4.0, 2, |x, y| x + y).unwrap();
        assert_eq!(mesh.vertices().len(), 9);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertices()[4], Vec3::new(2.0, 2.0, 4.0));

        let first = mesh.triangle(0);
        assert_eq!(first[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(first[2], Vec3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn test_build_mesh_bounds() {
        let params = TerrainParams {
            size: 10.0,
            resolution: 8,
            ..Default::default()
        };
        let mesh = TerrainGenerator::new(params).build_mesh().unwrap();
        let bounds = mesh.bounds();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.size, 10.0);
        assert!((bounds.center.x - 5.0).abs() < 1e-5);
    }
}

//! Elevation queries against the terrain mesh
//!
//! A point is located by testing triangles in index order; the first triangle
//! whose projected area matches the sum of the three sub-triangles formed with
//! the point wins. Elevation inside the triangle is a normalized
//! inverse-distance blend of the corner heights.

use std::sync::Arc;

use super::grid::TriangleGrid;
use super::mesh::{TerrainBounds, TerrainMesh};
use crate::core::types::{Vec2, Vec3};
use crate::math::{distance_2d, triangle_area_2d};

/// Absolute tolerance on the area-sum containment test.
pub const CONTAINMENT_TOLERANCE: f32 = 1e-5;

/// Query points closer than this to a corner take that corner's height.
pub const VERTEX_SNAP_DISTANCE: f32 = 1e-6;

/// Area-sum containment test in the XY plane. `area` is the precomputed
/// projected area of `tri`.
#[inline]
pub fn triangle_contains(tri: &[Vec3; 3], area: f32, p: Vec3) -> bool {
    let [a, b, c] = *tri;
    let sum = triangle_area_2d(p, b, c) + triangle_area_2d(a, p, c) + triangle_area_2d(a, b, p);
    sum >= area - CONTAINMENT_TOLERANCE && sum <= area + CONTAINMENT_TOLERANCE
}

/// Blend corner heights with weights `1 - d_i`, where `d` is the vector of
/// planar corner distances normalized to unit length.
///
/// This is deliberately not barycentric interpolation.
pub fn interpolate_height(tri: &[Vec3; 3], p: Vec3) -> f32 {
    let distances = Vec3::new(
        distance_2d(p, tri[0]),
        distance_2d(p, tri[1]),
        distance_2d(p, tri[2]),
    );

    // On a corner the blend would still mix in the other two corners
    if let Some(i) = distances
        .to_array()
        .iter()
        .position(|&d| d <= VERTEX_SNAP_DISTANCE)
    {
        return tri[i].z;
    }

    // Components of a unit vector sum to at most sqrt(3), so the weights
    // never cancel out
    let d = distances / distances.length();
    let w = Vec3::ONE - d;
    (tri[0].z * w.x + tri[1].z * w.y + tri[2].z * w.z) / (w.x + w.y + w.z)
}

/// Result of resolving several points in one pass over the mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchSample<const N: usize> {
    /// Elevation per query point, `None` where no triangle contained it
    pub heights: [Option<f32>; N],
    /// Triangles tested before the query finished
    pub triangles_visited: usize,
}

impl<const N: usize> BatchSample<N> {
    /// Whether every query point was resolved
    pub fn all_found(&self) -> bool {
        self.heights.iter().all(Option::is_some)
    }
}

/// Terrain elevation lookup.
///
/// The mesh is shared read-only, so a height field can be cloned cheaply or
/// handed to other threads.
#[derive(Clone, Debug)]
pub struct HeightField {
    mesh: Arc<TerrainMesh>,
    grid: Option<Arc<TriangleGrid>>,
}

impl HeightField {
    /// Height field using a linear scan over all triangles
    pub fn new(mesh: Arc<TerrainMesh>) -> Self {
        Self { mesh, grid: None }
    }

    /// Build a uniform grid so each query only tests nearby triangles.
    /// Results are identical to the linear scan.
    pub fn with_grid_index(mut self) -> Self {
        let grid = TriangleGrid::build(&self.mesh);
        log::debug!(
            "Built triangle grid: {}x{} cells for {} triangles",
            grid.cols(),
            grid.rows(),
            self.mesh.triangle_count()
        );
        self.grid = Some(Arc::new(grid));
        self
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    pub fn bounds(&self) -> TerrainBounds {
        self.mesh.bounds()
    }

    pub fn is_indexed(&self) -> bool {
        self.grid.is_some()
    }

    /// Ground elevation under `p`, or `None` if no triangle contains it
    pub fn height_at(&self, p: Vec2) -> Option<f32> {
        let p = p.extend(0.0);
        match &self.grid {
            Some(grid) => grid
                .candidates(p.truncate())
                .iter()
                .find_map(|&t| self.test_triangle(t as usize, p)),
            None => (0..self.mesh.triangle_count()).find_map(|t| self.test_triangle(t, p)),
        }
    }

    /// Resolve several points at once.
    ///
    /// Without an index this makes a single pass over the triangles and stops
    /// as soon as every point has been found.
    pub fn sample_batch<const N: usize>(&self, points: [Vec2; N]) -> BatchSample<N> {
        match &self.grid {
            Some(grid) => self.sample_batch_indexed(grid, points),
            None => self.sample_batch_linear(points),
        }
    }

    fn sample_batch_linear<const N: usize>(&self, points: [Vec2; N]) -> BatchSample<N> {
        let points = points.map(|p| p.extend(0.0));
        let mut heights = [None; N];
        let mut remaining = N;
        let mut triangles_visited = 0;

        for tri in self.mesh.triangles() {
            if remaining == 0 {
                break;
            }
            triangles_visited += 1;

            let area = triangle_area_2d(tri[0], tri[1], tri[2]);
            for (slot, &p) in heights.iter_mut().zip(points.iter()) {
                if slot.is_none() && triangle_contains(&tri, area, p) {
                    *slot = Some(interpolate_height(&tri, p));
                    remaining -= 1;
                }
            }
        }

        BatchSample { heights, triangles_visited }
    }

    fn sample_batch_indexed<const N: usize>(
        &self,
        grid: &TriangleGrid,
        points: [Vec2; N],
    ) -> BatchSample<N> {
        let mut triangles_visited = 0;
        let heights = points.map(|p| {
            let p3 = p.extend(0.0);
            grid.candidates(p).iter().find_map(|&t| {
                triangles_visited += 1;
                self.test_triangle(t as usize, p3)
            })
        });
        BatchSample { heights, triangles_visited }
    }

    fn test_triangle(&self, index: usize, p: Vec3) -> Option<f32> {
        let tri = self.mesh.triangle(index);
        let area = triangle_area_2d(tri[0], tri[1], tri[2]);
        triangle_contains(&tri, area, p).then(|| interpolate_height(&tri, p))
    }
}

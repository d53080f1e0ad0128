//! Uniform grid over the terrain triangles
//!
//! Each cell lists, in ascending order, every triangle whose inflated XY
//! bounds overlap it. Inflation covers the slack the containment tolerance
//! allows outside a triangle, so a grid lookup finds the same first triangle
//! as a full scan.

use super::height_field::CONTAINMENT_TOLERANCE;
use super::mesh::TerrainMesh;
use crate::core::types::Vec2;
use crate::math::{distance_2d, Aabb};

/// Upper bound on cells per side
const MAX_CELLS_PER_SIDE: usize = 256;

#[derive(Clone, Debug)]
pub struct TriangleGrid {
    origin: Vec2,
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<u32>>,
}

impl TriangleGrid {
    pub fn build(mesh: &TerrainMesh) -> Self {
        let triangle_count = mesh.triangle_count();
        let mesh_extent = mesh.aabb().size().truncate().max_element().max(1.0);

        let inflated: Vec<Aabb> = mesh
            .triangles()
            .map(|tri| {
                let shortest = distance_2d(tri[0], tri[1])
                    .min(distance_2d(tri[1], tri[2]))
                    .min(distance_2d(tri[2], tri[0]))
                    .max(f32::EPSILON);
                let margin = 2.0 * CONTAINMENT_TOLERANCE / shortest;
                // Slivers can produce an enormous margin
                let bounds = Aabb::from_points(tri).unwrap_or_else(Aabb::empty);
                bounds.inflated_xy(margin.min(mesh_extent))
            })
            .collect();

        let mut extent = Aabb::empty();
        for b in &inflated {
            extent.expand(b.min);
            extent.expand(b.max);
        }

        let side = ((triangle_count as f32).sqrt().ceil() as usize).clamp(1, MAX_CELLS_PER_SIDE);
        let span = extent.size().truncate();
        let cell_size = match span.max_element() / side as f32 {
            s if s > 0.0 && s.is_finite() => s,
            _ => 1.0,
        };
        let cols = ((span.x / cell_size).ceil() as usize).max(1);
        let rows = ((span.y / cell_size).ceil() as usize).max(1);

        let mut grid = Self {
            origin: extent.min.truncate(),
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
        };

        for (t, bounds) in inflated.iter().enumerate() {
            let (c0, r0) = grid.cell_coords(bounds.min.truncate());
            let (c1, r1) = grid.cell_coords(bounds.max.truncate());
            for r in r0..=r1 {
                for c in c0..=c1 {
                    grid.cells[r * cols + c].push(t as u32);
                }
            }
        }

        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Triangles that might contain `p`, in ascending index order
    pub fn candidates(&self, p: Vec2) -> &[u32] {
        let max = self.origin + Vec2::new(self.cols as f32, self.rows as f32) * self.cell_size;
        if p.x < self.origin.x || p.y < self.origin.y || p.x > max.x || p.y > max.y {
            return &[];
        }
        let (c, r) = self.cell_coords(p);
        &self.cells[r * self.cols + c]
    }

    fn cell_coords(&self, p: Vec2) -> (usize, usize) {
        let rel = (p - self.origin) / self.cell_size;
        let c = (rel.x.floor().max(0.0) as usize).min(self.cols - 1);
        let r = (rel.y.floor().max(0.0) as usize).min(self.rows - 1);
        (c, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::generator::grid_mesh;

    #[test]
    fn test_candidates_sorted_and_local() {
        let mesh = grid_mesh(10.0, 10, |x, y| x * 0.1 + y * 0.05).unwrap();
        let grid = TriangleGrid::build(&mesh);
        assert!(grid.cols() > 1 && grid.rows() > 1);

        let candidates = grid.candidates(Vec2::new(5.2, 5.3));
        assert!(!candidates.is_empty());
        assert!(candidates.len() < mesh.triangle_count());
        assert!(candidates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_outside_point_has_no_candidates() {
        let mesh = grid_mesh(10.0, 4, |_, _| 0.0).unwrap();
        let grid = TriangleGrid::build(&mesh);
        assert!(grid.candidates(Vec2::new(-5.0, 2.0)).is_empty());
        assert!(grid.candidates(Vec2::new(2.0, 50.0)).is_empty());
    }
}

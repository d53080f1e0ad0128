//! Static triangulated terrain surface

use crate::core::error::Error;
use crate::core::types::{Result, Vec2, Vec3};
use crate::math::Aabb;

/// Triangulated terrain: vertex positions plus index triples.
///
/// Immutable once built. Z is elevation; X and Y span the ground plane.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    aabb: Aabb,
}

impl TerrainMesh {
    /// Build a mesh, validating the index buffer against the vertices.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if indices.is_empty() {
            return Err(Error::InvalidMesh("mesh has no triangles".into()));
        }
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(Error::InvalidMesh(format!(
                "index {} out of range for {} vertices",
                bad,
                vertices.len()
            )));
        }

        let aabb = Aabb::from_points(vertices.iter().copied())
            .ok_or_else(|| Error::InvalidMesh("mesh has no vertices".into()))?;

        Ok(Self { vertices, indices, aabb })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corners of triangle `index`, in index-buffer order
    #[inline]
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let i = index * 3;
        [
            self.vertices[self.indices[i] as usize],
            self.vertices[self.indices[i + 1] as usize],
            self.vertices[self.indices[i + 2] as usize],
        ]
    }

    /// All triangles in index-buffer order
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Bounding box of every vertex
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Square ground-plane bounds used to keep the vehicle on the map
    pub fn bounds(&self) -> TerrainBounds {
        TerrainBounds::from_aabb(&self.aabb)
    }
}

/// Square region of the ground plane the vehicle must stay within.
///
/// The side length is taken from the X extent of the mesh; terrains are
/// expected to be square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub size: f32,
    /// Midpoint of the mesh extents in XY
    pub center: Vec2,
}

impl TerrainBounds {
    pub fn new(min_x: f32, min_y: f32, size: f32) -> Self {
        Self {
            min_x,
            min_y,
            size,
            center: Vec2::new(min_x + size * 0.5, min_y + size * 0.5),
        }
    }

    pub fn from_aabb(aabb: &Aabb) -> Self {
        let size = aabb.max.x - aabb.min.x;
        let center = Vec2::new(
            (aabb.max.x - aabb.min.x) / 2.0 + aabb.min.x,
            (aabb.max.y - aabb.min.y) / 2.0 + aabb.min.y,
        );
        Self {
            min_x: aabb.min.x,
            min_y: aabb.min.y,
            size,
            center,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.min_x + self.size
    }

    pub fn max_y(&self) -> f32 {
        self.min_y + self.size
    }

    /// Inclusive containment test in the ground plane
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x() && p.y >= self.min_y && p.y <= self.max_y()
    }
}

//! Elevation, pitch and roll from terrain samples under the footprint

use super::footprint::Footprint;
use crate::core::types::Vec3;
use crate::terrain::HeightField;

/// Terrain heights under the vehicle center and footprint corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHeights {
    pub center: f32,
    pub front: f32,
    pub rear: f32,
    pub right: f32,
    pub left: f32,
}

impl SurfaceHeights {
    pub fn splat(height: f32) -> Self {
        Self {
            center: height,
            front: height,
            rear: height,
            right: height,
            left: height,
        }
    }
}

/// Result of settling the vehicle onto the terrain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attitude {
    pub elevation: f32,
    pub pitch: f32,
    pub roll: f32,
    /// Whether the center sample hit the terrain
    pub grounded: bool,
}

/// Samples the terrain under the footprint each tick.
///
/// Corner samples that miss reuse the last height seen at that corner, so a
/// wheel hanging over a hole in the mesh does not flip the body.
#[derive(Clone, Debug)]
pub struct AttitudeSolver {
    last: SurfaceHeights,
}

impl AttitudeSolver {
    /// Every corner starts at `start_elevation` until it is first sampled
    pub fn new(start_elevation: f32) -> Self {
        Self {
            last: SurfaceHeights::splat(start_elevation),
        }
    }

    pub fn last_heights(&self) -> &SurfaceHeights {
        &self.last
    }

    pub fn solve(
        &mut self,
        terrain: &HeightField,
        position: Vec3,
        footprint: &Footprint,
        length: f32,
        width: f32,
    ) -> Attitude {
        let batch = terrain.sample_batch([
            position.truncate(),
            footprint.front,
            footprint.rear,
            footprint.right,
            footprint.left,
        ]);
        let [center, front, rear, right, left] = batch.heights;

        let grounded = center.is_some();
        let elevation = match center {
            Some(h) => h,
            None => {
                log::warn!(
                    "No terrain under ({:.3}, {:.3}), holding elevation {:.3}",
                    position.x,
                    position.y,
                    position.z
                );
                position.z
            }
        };

        let last = &mut self.last;
        last.center = elevation;
        last.front = front.unwrap_or(last.front);
        last.rear = rear.unwrap_or(last.rear);
        last.right = right.unwrap_or(last.right);
        last.left = left.unwrap_or(last.left);

        Attitude {
            elevation,
            pitch: slope_angle(last.front, last.rear, length),
            roll: slope_angle(last.left, last.right, width),
            grounded,
        }
    }
}

/// Angle of the line from `a` to `b` over `span`; negative when `a` is the
/// higher end.
fn slope_angle(a: f32, b: f32, span: f32) -> f32 {
    let angle = ((a - b).abs() / span).atan();
    if a > b { -angle } else { angle }
}

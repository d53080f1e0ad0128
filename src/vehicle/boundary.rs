//! Keeps the vehicle footprint on the terrain

use super::footprint::Footprint;
use crate::core::types::Vec3;
use crate::terrain::TerrainBounds;

/// A position the guard has accepted together with its footprint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuardedMove {
    pub position: Vec3,
    pub footprint: Footprint,
    /// Whether the proposed move was rejected
    pub reverted: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct BoundaryGuard {
    bounds: TerrainBounds,
}

impl BoundaryGuard {
    pub fn new(bounds: TerrainBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &TerrainBounds {
        &self.bounds
    }

    /// Accept `proposed` if its whole footprint stays inside the bounds,
    /// otherwise fall back to `previous`. Speed is left to the caller.
    pub fn check(&self, previous: Vec3, proposed: Vec3, yaw: f32, length: f32, width: f32) -> GuardedMove {
        let footprint = Footprint::new(proposed, yaw, length, width);
        if footprint.is_within(&self.bounds) {
            return GuardedMove {
                position: proposed,
                footprint,
                reverted: false,
            };
        }

        log::debug!(
            "Move to ({:.3}, {:.3}) leaves the terrain, staying at ({:.3}, {:.3})",
            proposed.x,
            proposed.y,
            previous.x,
            previous.y
        );
        GuardedMove {
            position: previous,
            footprint: Footprint::new(previous, yaw, length, width),
            reverted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_corner_past_edge() {
        let guard = BoundaryGuard::new(TerrainBounds::new(0.0, 0.0, 100.0));
        let previous = Vec3::new(98.9, 50.0, 3.0);
        // Facing +X: front corner at x + 1
        let yaw = std::f32::consts::FRAC_PI_2;
        let result = guard.check(previous, Vec3::new(99.5, 50.0, 3.0), yaw, 2.0, 1.0);
        assert!(result.reverted);
        assert_eq!(result.position, previous);
        assert_eq!(result.footprint, Footprint::new(previous, yaw, 2.0, 1.0));
    }

    #[test]
    fn test_accepts_move_inside() {
        let guard = BoundaryGuard::new(TerrainBounds::new(0.0, 0.0, 100.0));
        let proposed = Vec3::new(50.0, 49.0, 0.0);
        let result = guard.check(Vec3::new(50.0, 50.0, 0.0), proposed, 0.0, 2.0, 1.0);
        assert!(!result.reverted);
        assert_eq!(result.position, proposed);
    }
}

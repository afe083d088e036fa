use glam::{Vec2, Vec3};
use safari_core::BoundaryConfig;

use crate::transform::Transform;

/// Keeps a position inside a horizontal circle. Height is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryClamp {
    pub center: Vec2,
    pub radius: f32,
}

impl BoundaryClamp {
    #[must_use]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub fn from_config(config: &BoundaryConfig) -> Self {
        Self::new(config.center(), config.radius)
    }

    /// Projects `position` back onto the circle if it is outside.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let offset = Vec2::new(position.x, position.z) - self.center;
        let distance = offset.length();
        if distance <= self.radius {
            return position;
        }

        let edge = self.center + offset / distance * self.radius;
        Vec3::new(edge.x, position.y, edge.y)
    }

    /// Clamps the transform in place. Returns whether it moved.
    pub fn apply(&self, transform: &mut Transform) -> bool {
        let clamped = self.clamp(transform.position);
        if clamped == transform.position {
            return false;
        }
        log::trace!(
            "boundary: clamped {:?} -> {:?}",
            transform.position,
            clamped
        );
        transform.position = clamped;
        true
    }
}

//! Trajectory Generator
//!
//! Maps `(elapsed, params, phases)` to a pose with no hidden state:
//!
//! ```text
//! θ(t)     = t · speed + path_rotation
//! base     = (r · cos θ, 0, r · sin θ)
//! wiggle_a = A_a · sin(t · f_a + φ_a)³          for a in {x, y, z, yaw}
//! yaw      = deg(θ) + yaw_offset + model_rotation + wiggle_yaw
//! ```
//!
//! Replaying the same elapsed time always yields the same pose, bit for bit.

use glam::{EulerRot, Quat, Vec3};
use safari_core::{MotionParams, Result, WiggleConfig};

use crate::easing::eased_sine;
use crate::phase::PhaseOffsets;

/// Circular orbit in the horizontal plane, with angles pre-converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    /// Angular speed in radians per second.
    pub angular_speed: f32,
    pub radius: f32,
    /// Degrees.
    pub yaw_offset: f32,
    /// Degrees; aligns the model's forward axis with the direction of travel.
    pub model_rotation: f32,
    /// Radians.
    pub path_rotation: f32,
}

impl OrbitPath {
    /// Builds a path from validated parameters.
    pub fn from_params(params: &MotionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            angular_speed: params.speed,
            radius: params.radius,
            yaw_offset: params.yaw_offset,
            model_rotation: params.model_rotation,
            path_rotation: params.path_rotation.to_radians(),
        })
    }

    /// Orbit angle θ(t) in radians.
    #[inline]
    #[must_use]
    pub fn angle(&self, elapsed: f32) -> f32 {
        elapsed * self.angular_speed + self.path_rotation
    }
}

/// Position and yaw produced by the generator. Pitch and roll are not modelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub yaw_degrees: f32,
}

impl Pose {
    /// Pure-yaw rotation for this pose.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw_degrees.to_radians(), 0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub path: OrbitPath,
    pub wiggle: WiggleConfig,
}

impl Trajectory {
    #[must_use]
    pub const fn new(path: OrbitPath, wiggle: WiggleConfig) -> Self {
        Self { path, wiggle }
    }

    /// Evaluates the pose `elapsed` seconds after the actor was created.
    #[must_use]
    pub fn pose(&self, elapsed: f32, phases: &PhaseOffsets) -> Pose {
        let angle = self.path.angle(elapsed);
        let base = Vec3::new(
            angle.cos() * self.path.radius,
            0.0,
            angle.sin() * self.path.radius,
        );

        let w = &self.wiggle;
        let wiggle = Vec3::new(
            eased_sine(elapsed, w.position_x, phases.position.x),
            eased_sine(elapsed, w.position_y, phases.position.y),
            eased_sine(elapsed, w.position_z, phases.position.z),
        );

        let base_yaw = angle.to_degrees() + self.path.yaw_offset + self.path.model_rotation;
        let yaw_wiggle = eased_sine(elapsed, w.yaw, phases.rotation.y);

        Pose {
            position: base + wiggle,
            yaw_degrees: base_yaw + yaw_wiggle,
        }
    }
}

use safari_core::{MotionParams, Result, WiggleConfig};

use crate::phase::PhaseOffsets;
use crate::trajectory::{OrbitPath, Pose, Trajectory};
use crate::transform::Transform;

/// Drives one animated actor.
///
/// Captures its start time once, at creation. Each frame it evaluates the
/// trajectory at `now - start_time` and writes position and yaw onto the
/// actor's transform; pitch and roll are left alone. Whether the actor has a
/// mesh yet is irrelevant here: the transform is updated either way.
#[derive(Debug, Clone)]
pub struct MotionDriver {
    trajectory: Trajectory,
    phases: PhaseOffsets,
    start_time: f32,
}

impl MotionDriver {
    #[must_use]
    pub fn new(trajectory: Trajectory, phases: PhaseOffsets, start_time: f32) -> Self {
        Self {
            trajectory,
            phases,
            start_time,
        }
    }

    /// Validates `params` and builds a driver starting at `start_time`.
    pub fn from_params(
        params: &MotionParams,
        wiggle: WiggleConfig,
        phases: PhaseOffsets,
        start_time: f32,
    ) -> Result<Self> {
        let path = OrbitPath::from_params(params)?;
        Ok(Self::new(Trajectory::new(path, wiggle), phases, start_time))
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self, now: f32) -> f32 {
        now - self.start_time
    }

    #[must_use]
    pub fn pose_at(&self, now: f32) -> Pose {
        self.trajectory.pose(self.elapsed(now), &self.phases)
    }

    /// Evaluates the pose at `now` and writes it into `transform`.
    pub fn update(&self, now: f32, transform: &mut Transform) -> Pose {
        let pose = self.pose_at(now);
        transform.position = pose.position;
        transform.set_yaw_degrees(pose.yaw_degrees);
        pose
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    #[must_use]
    pub fn phases(&self) -> &PhaseOffsets {
        &self.phases
    }

    #[must_use]
    pub fn start_time(&self) -> f32 {
        self.start_time
    }
}

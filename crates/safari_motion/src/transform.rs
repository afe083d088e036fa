use glam::{Affine3A, EulerRot, Quat, Vec3};

/// Local transform of a scene actor (position, rotation, scale).
///
/// Owned by the actor; the motion drivers write into it once per frame and
/// the host reads it back to place the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Sets rotation from Euler angles in radians (XYZ order).
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    /// Yaw (rotation about +Y) in degrees.
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(EulerRot::YXZ);
        yaw.to_degrees()
    }

    /// Replaces the yaw, keeping the current pitch and roll.
    pub fn set_yaw_degrees(&mut self, degrees: f32) {
        let (_, pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        self.rotation = Quat::from_euler(EulerRot::YXZ, degrees.to_radians(), pitch, roll);
    }

    /// Local TRS matrix.
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

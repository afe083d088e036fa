use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Per-actor phase offsets, one per spatial axis for position and rotation.
///
/// Drawn once from U[0, 2π) when the actor is created and never reset, so an
/// actor's wiggle is a deterministic function of its elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseOffsets {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl PhaseOffsets {
    pub const ZERO: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    #[must_use]
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Draws six independent offsets from `rng`.
    pub fn random<R: RngExt + ?Sized>(rng: &mut R) -> Self {
        let mut draw = || rng.random_range(0.0..TAU);
        let position = Vec3::new(draw(), draw(), draw());
        let rotation = Vec3::new(draw(), draw(), draw());
        Self { position, rotation }
    }

    /// Offsets from a fixed seed, for reproducible scenes and tests.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(&mut rng)
    }
}

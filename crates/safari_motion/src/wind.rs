use glam::Vec3;
use safari_core::{Oscillator, WindConfig};

use crate::easing::sine;

/// Phase step between consecutive sub-parts.
const PART_PHASE_STEP: f32 = 0.5;

/// One swaying sub-part of a static scenery model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindPart {
    /// Rest position captured when the model finished loading.
    pub base: Vec3,
    /// Current displaced position.
    pub position: Vec3,
}

/// Ambient wind for static scenery.
///
/// Structurally the same as the animal trajectory but smaller and uncubed,
/// and phase-staggered by sub-part index instead of randomized, so
/// neighbouring parts desynchronize without any per-part random state.
/// Until [`register_parts`](Self::register_parts) is called (the model has
/// not loaded) updates do nothing.
#[derive(Debug, Clone)]
pub struct WindDriver {
    config: WindConfig,
    start_time: f32,
    parts: Vec<WindPart>,
}

impl WindDriver {
    #[must_use]
    pub fn new(config: WindConfig, start_time: f32) -> Self {
        Self {
            config,
            start_time,
            parts: Vec::new(),
        }
    }

    /// Replaces the sub-parts with the given rest positions.
    pub fn register_parts(&mut self, bases: &[Vec3]) {
        self.parts = bases
            .iter()
            .map(|&base| WindPart {
                base,
                position: base,
            })
            .collect();
        log::debug!("wind: registered {} sub-parts", self.parts.len());
    }

    /// Offset of sub-part `index` at `elapsed` seconds.
    #[must_use]
    pub fn offset(&self, index: usize, elapsed: f32) -> Vec3 {
        let c = &self.config;
        let phase = index as f32 * PART_PHASE_STEP;
        Vec3::new(
            sine(elapsed, Oscillator::new(c.strength_x, c.frequency), phase),
            sine(elapsed, Oscillator::new(c.strength_y, c.frequency * 0.8), phase + 1.0),
            sine(elapsed, Oscillator::new(c.strength_z, c.frequency * 1.2), phase - 1.0),
        )
    }

    pub fn update(&mut self, now: f32) {
        if self.parts.is_empty() {
            return;
        }
        let elapsed = now - self.start_time;
        for index in 0..self.parts.len() {
            let offset = self.offset(index, elapsed);
            let part = &mut self.parts[index];
            part.position = part.base + offset;
        }
    }

    #[must_use]
    pub fn parts(&self) -> &[WindPart] {
        &self.parts
    }

    #[must_use]
    pub fn config(&self) -> &WindConfig {
        &self.config
    }
}

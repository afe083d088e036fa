//! Visual state capability.
//!
//! The core never walks render-graph subtrees. It asks the rendering
//! collaborator to "apply visual state V to actor E" through [`VisualSink`];
//! the collaborator decides which meshes and materials that touches.

use crate::ActorKey;
use crate::errors::Result;

/// Presentation marker for a scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Unmodified materials.
    #[default]
    Normal,
    /// Terminal "discovered" glow.
    Found,
    /// Pointer/raycast hover feedback.
    Highlighted,
}

/// Emissive material override for a visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissive {
    /// 0xRRGGBB
    pub color: u32,
    pub intensity: f32,
}

impl VisualState {
    #[must_use]
    pub fn emissive(self) -> Emissive {
        match self {
            Self::Normal => Emissive {
                color: 0x00_00_00,
                intensity: 0.0,
            },
            Self::Found => Emissive {
                color: 0x00_ff_00,
                intensity: 0.8,
            },
            Self::Highlighted => Emissive {
                color: 0xff_ff_00,
                intensity: 0.3,
            },
        }
    }
}

/// Capability exposed by the rendering collaborator.
///
/// Implementations return [`SafariError::MeshNotLoaded`](crate::SafariError::MeshNotLoaded)
/// when the entity has nothing to render yet. Callers treat every visual
/// update as best-effort: a failed update is logged and dropped, never
/// allowed to affect discovery state.
pub trait VisualSink {
    fn apply(&mut self, actor: ActorKey, state: VisualState) -> Result<()>;
}

/// A sink that accepts and discards every update, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisuals;

impl VisualSink for NullVisuals {
    fn apply(&mut self, _actor: ActorKey, _state: VisualState) -> Result<()> {
        Ok(())
    }
}

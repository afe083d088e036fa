use safari_core::{ActorKey, Emissive, Result, SafariError, VisualSink, VisualState};
use slotmap::SecondaryMap;

/// In-memory rendering collaborator.
///
/// Tracks which actors have a mesh and the emissive override currently
/// applied to each. Actors without a mesh reject updates with
/// [`SafariError::MeshNotLoaded`].
#[derive(Debug, Default)]
pub struct VisualRegistry {
    meshes: SecondaryMap<ActorKey, VisualState>,
}

impl VisualRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the actor's mesh in its normal state. Returns `false` if it was already loaded.
    pub fn mark_loaded(&mut self, actor: ActorKey) -> bool {
        if self.meshes.contains_key(actor) {
            return false;
        }
        self.meshes.insert(actor, VisualState::Normal);
        true
    }

    pub fn unload(&mut self, actor: ActorKey) {
        self.meshes.remove(actor);
    }

    #[must_use]
    pub fn is_loaded(&self, actor: ActorKey) -> bool {
        self.meshes.contains_key(actor)
    }

    /// Current state, or `None` if no mesh is loaded.
    #[must_use]
    pub fn state(&self, actor: ActorKey) -> Option<VisualState> {
        self.meshes.get(actor).copied()
    }

    #[must_use]
    pub fn emissive(&self, actor: ActorKey) -> Option<Emissive> {
        self.state(actor).map(VisualState::emissive)
    }
}

impl VisualSink for VisualRegistry {
    fn apply(&mut self, actor: ActorKey, state: VisualState) -> Result<()> {
        let slot = self
            .meshes
            .get_mut(actor)
            .ok_or(SafariError::MeshNotLoaded(actor))?;
        *slot = state;
        Ok(())
    }
}

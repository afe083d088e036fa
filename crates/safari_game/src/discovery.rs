use safari_core::{ActorKey, Category, EventBus, SafariEvent, VisualSink, VisualState};

/// Discovery logic for one interactive actor.
///
/// `found` mirrors "is my category in the session's discovered set" so the
/// presentation doesn't query the controller every frame. It only changes in
/// response to broadcasts: a matching `discovery-confirmed` sets it, a
/// `session-reset` clears it. An interaction never sets it directly; it only
/// asks the controller to confirm.
#[derive(Debug, Clone)]
pub struct DiscoveryTracker {
    actor: ActorKey,
    category: Category,
    found: bool,
}

impl DiscoveryTracker {
    #[must_use]
    pub fn new(actor: ActorKey, category: Category) -> Self {
        Self {
            actor,
            category,
            found: false,
        }
    }

    /// Click/select on the actor. Publishes a `discovery-candidate` unless
    /// already found; returns whether a request was published.
    pub fn on_interact(&self, bus: &mut EventBus) -> bool {
        if self.found {
            return false;
        }

        log::debug!("clicked on {}", self.category);
        bus.publish(SafariEvent::DiscoveryCandidate {
            category: self.category,
            actor: self.actor,
        });
        true
    }

    /// Broadcast confirmation for `category`.
    pub fn on_confirmed(&mut self, category: Category, visuals: &mut dyn VisualSink) {
        if category != self.category {
            return;
        }

        self.found = true;
        self.show(VisualState::Found, visuals);
        log::debug!("{} marked as found", self.category);
    }

    pub fn on_session_reset(&mut self, visuals: &mut dyn VisualSink) {
        self.found = false;
        self.show(VisualState::Normal, visuals);
    }

    pub fn handle_event(&mut self, event: &SafariEvent, visuals: &mut dyn VisualSink) {
        match *event {
            SafariEvent::DiscoveryConfirmed { category, .. } => {
                self.on_confirmed(category, visuals);
            }
            SafariEvent::SessionReset => self.on_session_reset(visuals),
            _ => {}
        }
    }

    /// Re-applies the marker matching the current state, e.g. once the mesh
    /// finally loads after a confirmation was already received.
    pub fn refresh(&self, visuals: &mut dyn VisualSink) {
        self.show(self.visual_state(), visuals);
    }

    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        if self.found {
            VisualState::Found
        } else {
            VisualState::Normal
        }
    }

    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    #[must_use]
    pub fn actor(&self) -> ActorKey {
        self.actor
    }

    // Best-effort: a missing mesh drops the update, discovery state stays put.
    fn show(&self, state: VisualState, visuals: &mut dyn VisualSink) {
        if let Err(err) = visuals.apply(self.actor, state) {
            log::debug!("{}: visual update {state:?} dropped: {err}", self.category);
        }
    }
}

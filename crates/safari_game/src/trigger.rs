use safari_core::{ActorKey, BillboardAction, EventBus, SafariEvent, VisualSink, VisualState};

/// A selectable prop that requests game actions: the start orb or a billboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTrigger {
    action: BillboardAction,
}

impl StartTrigger {
    #[must_use]
    pub const fn new(action: BillboardAction) -> Self {
        Self { action }
    }

    /// The orb that starts the safari.
    #[must_use]
    pub const fn orb() -> Self {
        Self::new(BillboardAction::Safari)
    }

    #[must_use]
    pub fn action(&self) -> BillboardAction {
        self.action
    }

    /// Returns whether a request was published.
    pub fn on_interact(&self, bus: &mut EventBus) -> bool {
        match self.action {
            BillboardAction::Safari => {
                log::info!("starting safari from trigger");
                bus.publish(SafariEvent::SessionStartRequest);
                true
            }
            BillboardAction::Vuelo => {
                log::info!("flight game coming soon");
                false
            }
            BillboardAction::None => {
                log::debug!("billboard clicked");
                false
            }
        }
    }
}

/// Hover feedback for interactive billboards.
///
/// Entering applies [`VisualState::Highlighted`], leaving restores
/// [`VisualState::Normal`]. Repeated enters or leaves are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter {
    highlighted: bool,
}

impl Highlighter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn highlight(&mut self, actor: ActorKey, visuals: &mut dyn VisualSink) {
        if self.highlighted {
            return;
        }
        self.highlighted = true;
        Self::show(actor, VisualState::Highlighted, visuals);
    }

    pub fn unhighlight(&mut self, actor: ActorKey, visuals: &mut dyn VisualSink) {
        if !self.highlighted {
            return;
        }
        self.highlighted = false;
        Self::show(actor, VisualState::Normal, visuals);
    }

    fn show(actor: ActorKey, state: VisualState, visuals: &mut dyn VisualSink) {
        if let Err(err) = visuals.apply(actor, state) {
            log::debug!("highlight {state:?} dropped: {err}");
        }
    }
}

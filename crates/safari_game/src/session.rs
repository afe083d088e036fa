//! Session Controller
//!
//! The single source of truth for a play-through: the set of discovered
//! categories, the countdown and the active flag.
//!
//! # State machine
//!
//! ```text
//!          start()                     timeout / full discovery / reset()
//!  Idle ───────────────▶ Active ───────────────────────────────────────▶ Idle
//!   ▲  │ reset()
//!   └──┘
//! ```
//!
//! `start()` while active, and `tick()` / `report_discovery()` while idle, are
//! defined no-ops: they are expected under asynchronous input and are never
//! surfaced as errors. `end()` carries an explicit guard so a second call while
//! idle does nothing.

use rustc_hash::FxHashSet;
use safari_core::{ActorKey, Category, EventBus, GameConfig, Result, SafariEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

#[derive(Debug, Clone)]
pub struct SessionController {
    time_limit: f32,
    time_remaining: f32,
    categories: Vec<Category>,
    discovered: FxHashSet<Category>,
    active: bool,
}

impl SessionController {
    /// Creates an idle session with the full countdown.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            time_limit: config.time_limit,
            time_remaining: config.time_limit,
            categories: config.category_set(),
            discovered: FxHashSet::default(),
            active: false,
        })
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    pub fn start(&mut self, bus: &mut EventBus) {
        if self.active {
            log::debug!("session: start ignored, already active");
            return;
        }

        self.active = true;
        self.time_remaining = self.time_limit;
        self.discovered.clear();

        log::info!(
            "session started: {} categories, {:.0}s",
            self.categories.len(),
            self.time_limit
        );
        bus.publish(SafariEvent::SessionStarted);
    }

    /// Advances the countdown by `dt` seconds.
    pub fn tick(&mut self, dt: f32, bus: &mut EventBus) {
        if !self.active {
            return;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time_remaining = (self.time_remaining - dt).max(0.0);

        bus.publish(SafariEvent::TimerUpdate {
            time_remaining: self.time_remaining,
            time_limit: self.time_limit,
        });

        if self.time_remaining <= 0.0 {
            self.end(false, bus);
        }
    }

    /// Records `category` if the session is active and it is new.
    ///
    /// Returns whether the discovery was accepted.
    pub fn report_discovery(
        &mut self,
        category: Category,
        actor: ActorKey,
        bus: &mut EventBus,
    ) -> bool {
        if !self.active {
            log::debug!("session: discovery of {category} ignored, session idle");
            return false;
        }
        if !self.categories.contains(&category) {
            log::debug!("session: {category} is not part of this session");
            return false;
        }
        if !self.discovered.insert(category) {
            log::trace!("session: {category} already discovered");
            return false;
        }

        let discovered_count = self.discovered.len();
        let total = self.total_categories();
        log::info!("found {category} ({discovered_count}/{total}) via {actor:?}");

        bus.publish(SafariEvent::DiscoveryConfirmed {
            category,
            discovered_count,
            total,
        });

        if discovered_count == total {
            self.end(true, bus);
        }
        true
    }

    /// Finishes the session. Returns `false` if it was already idle.
    pub fn end(&mut self, won: bool, bus: &mut EventBus) -> bool {
        if !self.active {
            log::debug!("session: end ignored, already idle");
            return false;
        }

        self.active = false;
        let time_used = self.elapsed();
        if won {
            log::info!("session won in {time_used:.1}s");
        } else {
            log::info!(
                "session over: {}/{} found",
                self.discovered.len(),
                self.total_categories()
            );
        }

        bus.publish(SafariEvent::SessionEnded {
            won,
            score: self.discovered.len(),
            total: self.total_categories(),
            time_used,
        });
        true
    }

    /// Returns to idle with a cleared set and a full countdown. Always allowed.
    pub fn reset(&mut self, bus: &mut EventBus) {
        self.active = false;
        self.discovered.clear();
        self.time_remaining = self.time_limit;

        log::info!("session reset");
        bus.publish(SafariEvent::SessionReset);
    }

    /// Reacts to the requests that travel over the channel.
    pub fn handle_event(&mut self, event: &SafariEvent, bus: &mut EventBus) {
        match *event {
            SafariEvent::SessionStartRequest => self.start(bus),
            SafariEvent::SessionResetRequest => self.reset(bus),
            SafariEvent::DiscoveryCandidate { category, actor } => {
                self.report_discovery(category, actor, bus);
            }
            _ => {}
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.active {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    #[inline]
    #[must_use]
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    #[inline]
    #[must_use]
    pub fn time_limit(&self) -> f32 {
        self.time_limit
    }

    /// `time_limit - time_remaining`.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.time_limit - self.time_remaining
    }

    #[inline]
    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    #[inline]
    #[must_use]
    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_discovered(&self, category: Category) -> bool {
        self.discovered.contains(&category)
    }

    /// Configured categories, in configuration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn discovered(&self) -> impl Iterator<Item = Category> + '_ {
        self.discovered.iter().copied()
    }
}

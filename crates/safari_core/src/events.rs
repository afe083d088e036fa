//! Event Channel
//!
//! The scene-wide, in-process broadcast channel that decouples the discovery
//! trackers, the session controller and presentation.
//!
//! # Delivery
//!
//! [`EventBus::publish`] appends to a FIFO queue. The owner of the frame loop
//! drains the queue with [`EventBus::pop`] and hands each event to every
//! consumer before the step returns, so every event published during a step
//! is delivered, in publication order, before the next tick begins. Events
//! published while dispatching (a confirmation triggering a session end, for
//! example) join the back of the same queue and are delivered in the same
//! step.
//!
//! Read-only observers register through [`EventBus::subscribe`]. They receive
//! `&SafariEvent` and have no way to publish or to reach session state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use crate::ActorKey;
use crate::category::Category;

new_key_type! {
    pub struct ListenerId;
}

/// Every message that travels over the channel.
///
/// Serialized with a `type` tag carrying the kebab-case event name, e.g.
/// `{"type":"discovery-confirmed","category":"tatu","discovered_count":1,"total":6}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SafariEvent {
    /// External UI/input asks for a new session.
    SessionStartRequest,
    /// The session went from idle to active.
    SessionStarted,
    /// A tracker asks the controller to accept a discovery. Not an assertion of success.
    DiscoveryCandidate { category: Category, actor: ActorKey },
    /// The controller recorded a new category.
    DiscoveryConfirmed {
        category: Category,
        discovered_count: usize,
        total: usize,
    },
    /// Emitted on every tick while active.
    TimerUpdate { time_remaining: f32, time_limit: f32 },
    /// The session finished by full discovery (`won`) or timeout.
    SessionEnded {
        won: bool,
        score: usize,
        total: usize,
        time_used: f32,
    },
    /// External UI/input asks for a reset.
    SessionResetRequest,
    /// The controller cleared all state.
    SessionReset,
}

impl SafariEvent {
    /// The wire name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionStartRequest => "session-start-request",
            Self::SessionStarted => "session-started",
            Self::DiscoveryCandidate { .. } => "discovery-candidate",
            Self::DiscoveryConfirmed { .. } => "discovery-confirmed",
            Self::TimerUpdate { .. } => "timer-update",
            Self::SessionEnded { .. } => "session-ended",
            Self::SessionResetRequest => "session-reset-request",
            Self::SessionReset => "session-reset",
        }
    }

    /// Whether the event is a request coming from outside the core.
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self, Self::SessionStartRequest | Self::SessionResetRequest)
    }
}

/// A read-only observer of the channel.
pub trait EventListener {
    fn on_event(&mut self, event: &SafariEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&SafariEvent),
{
    fn on_event(&mut self, event: &SafariEvent) {
        self(event);
    }
}

/// FIFO event queue plus the registry of read-only subscribers.
#[derive(Default)]
pub struct EventBus {
    queue: VecDeque<SafariEvent>,
    listeners: SlotMap<ListenerId, Box<dyn EventListener>>,
    published: u64,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, event: SafariEvent) {
        log::trace!("publish {}", event.name());
        self.published += 1;
        self.queue.push_back(event);
    }

    /// Takes the oldest undelivered event.
    pub fn pop(&mut self) -> Option<SafariEvent> {
        self.queue.pop_front()
    }

    /// Takes every undelivered event, oldest first.
    pub fn drain(&mut self) -> Vec<SafariEvent> {
        self.queue.drain(..).collect()
    }

    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total number of events ever published on this bus.
    #[inline]
    #[must_use]
    pub fn published_count(&self) -> u64 {
        self.published
    }

    pub fn subscribe(&mut self, listener: Box<dyn EventListener>) -> ListenerId {
        self.listeners.insert(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> Option<Box<dyn EventListener>> {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers `event` to every subscriber, in subscription order.
    pub fn notify_listeners(&mut self, event: &SafariEvent) {
        for listener in self.listeners.values_mut() {
            listener.on_event(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue", &self.queue)
            .field("listeners", &self.listeners.len())
            .field("published", &self.published)
            .finish()
    }
}

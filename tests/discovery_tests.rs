//! Discovery Tracker & Presentation Tests
//!
//! Tests for:
//! - Interaction → candidate request, confirmation → marker
//! - Several trackers sharing a category
//! - Best-effort visual updates with missing meshes
//! - Progress HUD as a pure listener
//! - Start triggers and hover highlighting

use safari::app::VisualRegistry;
use safari::game::{
    DiscoveryTracker, Highlighter, ProgressHud, SessionController, StartTrigger, TimerColor,
};
use safari::shared::{
    ActorKey, BillboardAction, Category, EventBus, EventListener, GameConfig, HudConfig,
    NullVisuals, Result, SafariError, SafariEvent, VisualSink, VisualState,
};
use slotmap::SlotMap;

/// Records every update it receives; actors listed in `missing` have no mesh.
#[derive(Default)]
struct RecordingVisuals {
    applied: Vec<(ActorKey, VisualState)>,
    missing: Vec<ActorKey>,
}

impl VisualSink for RecordingVisuals {
    fn apply(&mut self, actor: ActorKey, state: VisualState) -> Result<()> {
        if self.missing.contains(&actor) {
            return Err(SafariError::MeshNotLoaded(actor));
        }
        self.applied.push((actor, state));
        Ok(())
    }
}

fn game(names: &[&str]) -> GameConfig {
    GameConfig {
        time_limit: 300.0,
        categories: names.iter().map(|name| (*name).to_string()).collect(),
    }
}

/// Distinct actor keys, the way the app hands them out.
fn actor_keys(count: usize) -> Vec<ActorKey> {
    let mut actors: SlotMap<ActorKey, ()> = SlotMap::with_key();
    (0..count).map(|_| actors.insert(())).collect()
}

/// Minimal frame-loop dispatch: controller first, then every tracker.
fn dispatch(
    bus: &mut EventBus,
    session: &mut SessionController,
    trackers: &mut [DiscoveryTracker],
    visuals: &mut dyn VisualSink,
) -> Vec<SafariEvent> {
    let mut delivered = Vec::new();
    while let Some(event) = bus.pop() {
        session.handle_event(&event, bus);
        for tracker in trackers.iter_mut() {
            tracker.handle_event(&event, visuals);
        }
        delivered.push(event);
    }
    delivered
}

// ============================================================================
// Tracker
// ============================================================================

#[test]
fn interaction_publishes_candidate_without_marking_found() {
    let actor = actor_keys(1)[0];
    let tatu = Category::new("tatu");
    let tracker = DiscoveryTracker::new(actor, tatu);
    let mut bus = EventBus::new();

    assert!(tracker.on_interact(&mut bus));

    assert!(!tracker.is_found());
    assert_eq!(
        bus.drain(),
        vec![SafariEvent::DiscoveryCandidate {
            category: tatu,
            actor,
        }]
    );
}

#[test]
fn found_tracker_stops_requesting() {
    let tatu = Category::new("tatu");
    let mut tracker = DiscoveryTracker::new(ActorKey::default(), tatu);
    let mut bus = EventBus::new();

    tracker.on_confirmed(tatu, &mut NullVisuals);

    assert!(tracker.is_found());
    assert!(!tracker.on_interact(&mut bus));
    assert!(bus.is_empty());
}

#[test]
fn confirmation_for_other_category_is_ignored() {
    let mut visuals = RecordingVisuals::default();
    let mut tracker = DiscoveryTracker::new(ActorKey::default(), Category::new("tatu"));

    tracker.on_confirmed(Category::new("nandu"), &mut visuals);

    assert!(!tracker.is_found());
    assert!(visuals.applied.is_empty());
}

#[test]
fn confirmation_applies_found_marker_and_reset_clears_it() {
    let actor = actor_keys(1)[0];
    let tatu = Category::new("tatu");
    let mut visuals = RecordingVisuals::default();
    let mut tracker = DiscoveryTracker::new(actor, tatu);

    tracker.handle_event(
        &SafariEvent::DiscoveryConfirmed {
            category: tatu,
            discovered_count: 1,
            total: 6,
        },
        &mut visuals,
    );
    tracker.handle_event(&SafariEvent::SessionReset, &mut visuals);

    assert!(!tracker.is_found());
    assert_eq!(
        visuals.applied,
        vec![(actor, VisualState::Found), (actor, VisualState::Normal)]
    );
}

#[test]
fn tracker_ignores_timer_and_lifecycle_events() {
    let mut visuals = RecordingVisuals::default();
    let mut tracker = DiscoveryTracker::new(ActorKey::default(), Category::new("tatu"));

    tracker.handle_event(&SafariEvent::SessionStarted, &mut visuals);
    tracker.handle_event(
        &SafariEvent::TimerUpdate {
            time_remaining: 1.0,
            time_limit: 300.0,
        },
        &mut visuals,
    );

    assert!(visuals.applied.is_empty());
    assert!(!tracker.is_found());
}

#[test]
fn missing_mesh_does_not_affect_discovery_state() {
    let actor = actor_keys(1)[0];
    let tatu = Category::new("tatu");
    let mut visuals = RecordingVisuals {
        missing: vec![actor],
        ..Default::default()
    };
    let mut tracker = DiscoveryTracker::new(actor, tatu);

    tracker.on_confirmed(tatu, &mut visuals);
    assert!(tracker.is_found());
    assert!(visuals.applied.is_empty());

    // The mesh arrives later; refresh re-applies the current marker.
    visuals.missing.clear();
    tracker.refresh(&mut visuals);
    assert_eq!(visuals.applied, vec![(actor, VisualState::Found)]);
}

// ============================================================================
// Shared categories
// ============================================================================

#[test]
fn two_trackers_same_category_confirm_once() {
    let keys = actor_keys(2);
    let flamingo = Category::new("flamingo");
    let mut session = SessionController::new(&game(&["flamingo", "tatu"])).unwrap();
    let mut trackers = vec![
        DiscoveryTracker::new(keys[0], flamingo),
        DiscoveryTracker::new(keys[1], flamingo),
    ];
    let mut visuals = RecordingVisuals::default();
    let mut bus = EventBus::new();

    session.start(&mut bus);
    dispatch(&mut bus, &mut session, &mut trackers, &mut visuals);

    // Both clicked in the same step, before either confirmation is delivered.
    trackers[0].on_interact(&mut bus);
    trackers[1].on_interact(&mut bus);
    let delivered = dispatch(&mut bus, &mut session, &mut trackers, &mut visuals);

    let confirmations = delivered
        .iter()
        .filter(|e| matches!(e, SafariEvent::DiscoveryConfirmed { .. }))
        .count();
    assert_eq!(confirmations, 1);
    assert_eq!(session.discovered_count(), 1);
    assert!(trackers.iter().all(DiscoveryTracker::is_found));
    assert_eq!(
        visuals.applied,
        vec![(keys[0], VisualState::Found), (keys[1], VisualState::Found)]
    );
}

#[test]
fn candidate_while_idle_leaves_trackers_unfound() {
    let keys = actor_keys(1);
    let tatu = Category::new("tatu");
    let mut session = SessionController::new(&game(&["tatu"])).unwrap();
    let mut trackers = vec![DiscoveryTracker::new(keys[0], tatu)];
    let mut bus = EventBus::new();

    trackers[0].on_interact(&mut bus);
    let delivered = dispatch(&mut bus, &mut session, &mut trackers, &mut NullVisuals);

    assert_eq!(delivered.len(), 1);
    assert!(!trackers[0].is_found());
}

// ============================================================================
// Visual registry
// ============================================================================

#[test]
fn registry_rejects_updates_until_loaded() {
    let actor = actor_keys(1)[0];
    let mut registry = VisualRegistry::new();

    let err = registry.apply(actor, VisualState::Found).unwrap_err();
    assert!(matches!(err, SafariError::MeshNotLoaded(key) if key == actor));

    assert!(registry.mark_loaded(actor));
    assert!(!registry.mark_loaded(actor));
    assert_eq!(registry.state(actor), Some(VisualState::Normal));

    registry.apply(actor, VisualState::Found).unwrap();
    let emissive = registry.emissive(actor).unwrap();
    assert_eq!(emissive.color, 0x00ff00);
    assert!((emissive.intensity - 0.8).abs() < 1e-6);
}

#[test]
fn emissive_colors_per_state() {
    assert_eq!(VisualState::Normal.emissive().intensity, 0.0);
    assert_eq!(VisualState::Highlighted.emissive().color, 0xffff00);
    assert!((VisualState::Highlighted.emissive().intensity - 0.3).abs() < 1e-6);
}

// ============================================================================
// Progress HUD
// ============================================================================

#[test]
fn hud_follows_broadcasts() {
    let tatu = Category::new("tatu");
    let mut hud = ProgressHud::new(&game(&["tatu", "nandu"]), HudConfig::default());
    assert!(!hud.is_visible());
    assert_eq!(hud.timer_text(), "5:00");

    hud.on_event(&SafariEvent::SessionStarted);
    assert!(hud.is_visible());

    hud.on_event(&SafariEvent::DiscoveryConfirmed {
        category: tatu,
        discovered_count: 1,
        total: 2,
    });
    assert!(hud.is_found(tatu));
    assert_eq!(
        hud.indicators().collect::<Vec<_>>(),
        vec![(tatu, true), (Category::new("nandu"), false)]
    );

    hud.on_event(&SafariEvent::SessionEnded {
        won: false,
        score: 1,
        total: 2,
        time_used: 300.0,
    });
    assert!(!hud.is_visible());
    assert_eq!(hud.found_count(), 1, "results stay readable after the end");

    hud.on_event(&SafariEvent::SessionReset);
    assert_eq!(hud.found_count(), 0);
    assert_eq!(hud.timer_text(), "5:00");
}

#[test]
fn hud_timer_colors() {
    let mut hud = ProgressHud::new(&game(&["tatu"]), HudConfig::default());
    let mut color_at = |seconds: f32| {
        hud.on_event(&SafariEvent::TimerUpdate {
            time_remaining: seconds,
            time_limit: 300.0,
        });
        hud.timer_color()
    };

    assert_eq!(color_at(120.0), TimerColor::White);
    assert_eq!(color_at(119.5), TimerColor::Yellow);
    assert_eq!(color_at(60.0), TimerColor::Yellow);
    assert_eq!(color_at(59.0), TimerColor::Red);
    assert_eq!(color_at(0.0), TimerColor::Red);
    assert_eq!(TimerColor::Red.hex(), "#FF0000");
}

#[test]
fn hud_timer_text_truncates() {
    let mut hud = ProgressHud::new(&game(&["tatu"]), HudConfig::default());
    hud.update_timer(125.9);
    assert_eq!(hud.timer_text(), "2:05");
    hud.update_timer(9.0);
    assert_eq!(hud.timer_text(), "0:09");
}

// ============================================================================
// Triggers & hover
// ============================================================================

#[test]
fn orb_and_safari_billboard_request_start() {
    let mut bus = EventBus::new();

    assert!(StartTrigger::orb().on_interact(&mut bus));
    assert!(StartTrigger::new(BillboardAction::Safari).on_interact(&mut bus));

    assert_eq!(
        bus.drain(),
        vec![
            SafariEvent::SessionStartRequest,
            SafariEvent::SessionStartRequest
        ]
    );
}

#[test]
fn other_billboards_publish_nothing() {
    let mut bus = EventBus::new();

    assert!(!StartTrigger::new(BillboardAction::Vuelo).on_interact(&mut bus));
    assert!(!StartTrigger::new(BillboardAction::None).on_interact(&mut bus));

    assert!(bus.is_empty());
}

#[test]
fn highlighter_is_idempotent() {
    let actor = actor_keys(1)[0];
    let mut visuals = RecordingVisuals::default();
    let mut highlighter = Highlighter::new();

    highlighter.highlight(actor, &mut visuals);
    highlighter.highlight(actor, &mut visuals);
    assert!(highlighter.is_highlighted());

    highlighter.unhighlight(actor, &mut visuals);
    highlighter.unhighlight(actor, &mut visuals);
    assert!(!highlighter.is_highlighted());

    assert_eq!(
        visuals.applied,
        vec![
            (actor, VisualState::Highlighted),
            (actor, VisualState::Normal)
        ]
    );
}

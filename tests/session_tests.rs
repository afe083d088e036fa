//! Session Controller Tests
//!
//! Tests for:
//! - Idle/Active transitions and their defined no-ops
//! - Discovery idempotence and the category bound
//! - Countdown clamping, timeout and the single `session-ended`
//! - Win on the completing discovery
//! - Reset semantics

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use safari::game::session::{SessionController, SessionState};
use safari::shared::{ActorKey, Category, EventBus, GameConfig, SafariEvent};

fn game(names: &[&str], time_limit: f32) -> GameConfig {
    GameConfig {
        time_limit,
        categories: names.iter().map(|name| (*name).to_string()).collect(),
    }
}

fn controller(names: &[&str], time_limit: f32) -> SessionController {
    SessionController::new(&game(names, time_limit)).unwrap()
}

/// Starts a session and discards the `session-started` event.
fn started(names: &[&str], time_limit: f32) -> (SessionController, EventBus) {
    let mut session = controller(names, time_limit);
    let mut bus = EventBus::new();
    session.start(&mut bus);
    bus.drain();
    (session, bus)
}

fn count_ended(events: &[SafariEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SafariEvent::SessionEnded { .. }))
        .count()
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn new_session_is_idle_with_full_time() {
    let session = controller(&["A", "B"], 300.0);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_active());
    assert_eq!(session.time_remaining(), 300.0);
    assert_eq!(session.discovered_count(), 0);
    assert_eq!(session.total_categories(), 2);
}

#[test]
fn new_session_rejects_invalid_config() {
    assert!(SessionController::new(&game(&[], 300.0)).is_err());
    assert!(SessionController::new(&game(&["A"], 0.0)).is_err());
}

#[test]
fn start_activates_and_emits_started() {
    let mut session = controller(&["A"], 300.0);
    let mut bus = EventBus::new();

    session.start(&mut bus);

    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(bus.drain(), vec![SafariEvent::SessionStarted]);
}

#[test]
fn start_while_active_keeps_time_and_discoveries() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);
    session.report_discovery(Category::new("A"), ActorKey::default(), &mut bus);
    session.tick(10.0, &mut bus);
    bus.drain();

    session.start(&mut bus);

    assert!(bus.is_empty());
    assert_eq!(session.time_remaining(), 290.0);
    assert_eq!(session.discovered_count(), 1);
}

#[test]
fn restart_after_end_clears_previous_run() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);
    session.report_discovery(Category::new("A"), ActorKey::default(), &mut bus);
    session.tick(300.0, &mut bus);
    assert!(!session.is_active());

    session.start(&mut bus);

    assert!(session.is_active());
    assert_eq!(session.discovered_count(), 0);
    assert_eq!(session.time_remaining(), 300.0);
}

#[test]
fn idle_tick_and_discovery_are_noops() {
    let mut session = controller(&["A"], 300.0);
    let mut bus = EventBus::new();

    session.tick(5.0, &mut bus);
    let accepted = session.report_discovery(Category::new("A"), ActorKey::default(), &mut bus);

    assert!(!accepted);
    assert!(bus.is_empty());
    assert_eq!(session.time_remaining(), 300.0);
    assert_eq!(session.discovered_count(), 0);
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn duplicate_discovery_is_idempotent() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);
    let a = Category::new("A");

    assert!(session.report_discovery(a, ActorKey::default(), &mut bus));
    let first = bus.drain();
    assert!(!session.report_discovery(a, ActorKey::default(), &mut bus));

    assert_eq!(first.len(), 1);
    assert!(bus.is_empty());
    assert_eq!(session.discovered_count(), 1);
    assert!(session.is_active());
}

#[test]
fn unconfigured_category_is_ignored() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);

    let accepted =
        session.report_discovery(Category::new("not-in-this-game"), ActorKey::default(), &mut bus);

    assert!(!accepted);
    assert!(bus.is_empty());
    assert_eq!(session.discovered_count(), 0);
}

#[test]
fn two_category_scenario_wins_on_completing_discovery() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);
    let a = Category::new("A");
    let b = Category::new("B");

    session.report_discovery(a, ActorKey::default(), &mut bus);
    assert_eq!(
        bus.drain(),
        vec![SafariEvent::DiscoveryConfirmed {
            category: a,
            discovered_count: 1,
            total: 2,
        }]
    );
    assert!(session.is_active());

    session.report_discovery(b, ActorKey::default(), &mut bus);
    assert_eq!(
        bus.drain(),
        vec![
            SafariEvent::DiscoveryConfirmed {
                category: b,
                discovered_count: 2,
                total: 2,
            },
            SafariEvent::SessionEnded {
                won: true,
                score: 2,
                total: 2,
                time_used: 0.0,
            },
        ]
    );
    assert!(!session.is_active());
}

#[test]
fn win_fires_once_in_any_order() {
    let names = ["A", "B", "C", "D"];
    for order in [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1]] {
        let (mut session, mut bus) = started(&names, 300.0);
        let mut ended_on = None;

        for (step, &i) in order.iter().enumerate() {
            session.report_discovery(Category::new(names[i]), ActorKey::default(), &mut bus);
            if count_ended(&bus.drain()) > 0 {
                assert!(ended_on.is_none(), "session ended twice");
                ended_on = Some(step);
            }
        }

        assert_eq!(ended_on, Some(names.len() - 1));
    }
}

#[test]
fn discovered_count_stays_bounded_under_random_input() {
    let names = ["A", "B", "C", "D", "E"];
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = controller(&names, 300.0);
    let mut bus = EventBus::new();
    let mut previous = 0;

    for _ in 0..500 {
        match rng.random_range(0..10) {
            0 => session.start(&mut bus),
            1 => session.tick(rng.random_range(0.0..30.0), &mut bus),
            9 => {
                session.reset(&mut bus);
                previous = 0;
            }
            _ => {
                let name = names[rng.random_range(0..names.len())];
                session.report_discovery(Category::new(name), ActorKey::default(), &mut bus);
            }
        }

        let count = session.discovered_count();
        assert!(count <= session.total_categories());
        // Only `start` and `reset` may clear the set.
        assert!(count >= previous || session.discovered_count() == 0);
        previous = count;

        let remaining = session.time_remaining();
        assert!((0.0..=session.time_limit()).contains(&remaining));
    }
}

// ============================================================================
// Countdown
// ============================================================================

#[test]
fn tick_emits_timer_update() {
    let (mut session, mut bus) = started(&["A"], 300.0);

    session.tick(1.5, &mut bus);

    assert_eq!(
        bus.drain(),
        vec![SafariEvent::TimerUpdate {
            time_remaining: 298.5,
            time_limit: 300.0,
        }]
    );
}

#[test]
fn single_full_tick_times_out_once() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);

    session.tick(300.0, &mut bus);

    assert_eq!(session.time_remaining(), 0.0);
    assert!(!session.is_active());
    assert_eq!(
        bus.drain(),
        vec![
            SafariEvent::TimerUpdate {
                time_remaining: 0.0,
                time_limit: 300.0,
            },
            SafariEvent::SessionEnded {
                won: false,
                score: 0,
                total: 2,
                time_used: 300.0,
            },
        ]
    );

    session.tick(1.0, &mut bus);
    assert!(bus.is_empty());
}

#[test]
fn repeated_ticks_clamp_to_exactly_zero() {
    let (mut session, mut bus) = started(&["A"], 2.0);
    let mut events = Vec::new();

    for _ in 0..200 {
        session.tick(1.0 / 60.0, &mut bus);
        events.extend(bus.drain());
    }

    assert_eq!(session.time_remaining(), 0.0);
    assert_eq!(count_ended(&events), 1);

    let ended_at = events
        .iter()
        .position(|e| matches!(e, SafariEvent::SessionEnded { won: false, .. }))
        .unwrap();
    assert_eq!(ended_at, events.len() - 1, "no timer updates after the end");
}

#[test]
fn overshooting_tick_clamps() {
    let (mut session, mut bus) = started(&["A"], 10.0);
    session.tick(25.0, &mut bus);
    assert_eq!(session.time_remaining(), 0.0);
    assert_eq!(session.elapsed(), 10.0);
}

#[test]
fn invalid_deltas_do_not_move_the_clock() {
    let (mut session, mut bus) = started(&["A"], 10.0);
    session.tick(-5.0, &mut bus);
    session.tick(f32::NAN, &mut bus);
    assert_eq!(session.time_remaining(), 10.0);
    assert!(session.is_active());
}

// ============================================================================
// End & Reset
// ============================================================================

#[test]
fn end_is_guarded_when_idle() {
    let (mut session, mut bus) = started(&["A"], 300.0);

    assert!(session.end(false, &mut bus));
    assert!(!session.end(true, &mut bus));

    assert_eq!(count_ended(&bus.drain()), 1);
}

#[test]
fn end_reports_time_used() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);
    session.tick(42.0, &mut bus);
    bus.drain();

    session.end(false, &mut bus);

    assert_eq!(
        bus.drain(),
        vec![SafariEvent::SessionEnded {
            won: false,
            score: 0,
            total: 2,
            time_used: 42.0,
        }]
    );
}

#[test]
fn reset_after_partial_discovery_restores_everything() {
    let (mut session, mut bus) = started(&["A", "B"], 300.0);
    session.report_discovery(Category::new("A"), ActorKey::default(), &mut bus);
    session.tick(100.0, &mut bus);
    bus.drain();

    session.reset(&mut bus);

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.discovered_count(), 0);
    assert!(!session.is_discovered(Category::new("A")));
    assert_eq!(session.time_remaining(), 300.0);
    assert_eq!(bus.drain(), vec![SafariEvent::SessionReset]);
}

#[test]
fn reset_while_idle_is_idempotent() {
    let mut session = controller(&["A"], 300.0);
    let mut bus = EventBus::new();

    session.reset(&mut bus);
    session.reset(&mut bus);

    assert_eq!(
        bus.drain(),
        vec![SafariEvent::SessionReset, SafariEvent::SessionReset]
    );
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.time_remaining(), 300.0);
}

// ============================================================================
// Event routing
// ============================================================================

#[test]
fn handle_event_routes_requests() {
    let mut session = controller(&["A", "B"], 300.0);
    let mut bus = EventBus::new();

    session.handle_event(&SafariEvent::SessionStartRequest, &mut bus);
    assert!(session.is_active());

    session.handle_event(
        &SafariEvent::DiscoveryCandidate {
            category: Category::new("B"),
            actor: ActorKey::default(),
        },
        &mut bus,
    );
    assert!(session.is_discovered(Category::new("B")));

    session.handle_event(&SafariEvent::SessionResetRequest, &mut bus);
    assert!(!session.is_active());
    assert_eq!(session.discovered_count(), 0);
}

#[test]
fn handle_event_ignores_outgoing_events() {
    let (mut session, mut bus) = started(&["A"], 300.0);

    session.handle_event(&SafariEvent::SessionReset, &mut bus);
    session.handle_event(
        &SafariEvent::DiscoveryConfirmed {
            category: Category::new("A"),
            discovered_count: 1,
            total: 1,
        },
        &mut bus,
    );

    assert!(session.is_active());
    assert_eq!(session.discovered_count(), 0);
    assert!(bus.is_empty());
}

//! # NES360 Safari
//!
//! A "find the animals" VR exploration game, minus the renderer: the session
//! state machine, per-actor discovery tracking, the event channel that joins
//! them, and the procedural motion that keeps the animals alive.
//!
//! This umbrella crate re-exports the workspace crates:
//!
//! - [`shared`]: configuration, categories, events, errors
//! - [`motion`]: trajectory generator, motion/wind drivers, boundary clamp
//! - [`game`]: session controller, discovery tracker, HUD, triggers
//! - [`app`]: host integration and frame loop
//!
//! ```rust,ignore
//! use safari::prelude::*;
//!
//! let mut app = SafariApp::new(SafariConfig::default())?;
//! let tatu = app.spawn_animal(&AnimalSpec::new("tatu"))?;
//! app.request_start();
//! app.interact(tatu)?;
//! app.update(FrameTime::new(1.0 / 60.0, 1.0 / 60.0));
//! ```

pub use safari_app as app;
pub use safari_core as shared;
pub use safari_game as game;
pub use safari_motion as motion;

/// Math types used throughout the public API.
pub use glam;

pub use safari_app::{InputHandle, SafariApp, init_logger};
pub use safari_core::{ActorKey, Category, Result, SafariConfig, SafariError, SafariEvent};

pub mod prelude {
    pub use safari_app::{InputCommand, InputHandle, SafariApp, VisualRegistry};
    pub use safari_core::{
        ActorKey, AnimalSpec, BillboardAction, BillboardSpec, Category, EventBus, EventListener,
        FrameTime, GameConfig, MotionParams, SafariConfig, SafariError, SafariEvent,
        SceneManifest, ScenerySpec, VisualSink, VisualState, WiggleConfig, WindConfig,
    };
    pub use safari_game::{DiscoveryTracker, ProgressHud, SessionController, SessionState};
    pub use safari_motion::{MotionDriver, PhaseOffsets, Pose, Trajectory, Transform};
}

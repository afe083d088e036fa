//! Core types shared by every safari crate.
//!
//! - [`SafariConfig`]: explicit configuration, built once and injected
//! - [`Category`]: interned identifier of a discoverable kind
//! - [`SafariEvent`] / [`EventBus`]: the synchronous broadcast channel
//! - [`VisualSink`]: the rendering collaborator's "apply visual state" capability
//! - [`SafariError`]: the error type for every fallible operation

pub mod category;
pub mod config;
pub mod errors;
pub mod events;
pub mod time;
pub mod visual;

pub use category::Category;
pub use config::{
    AnimalSpec, BillboardAction, BillboardSpec, BoundaryConfig, GameConfig, HudConfig,
    MotionParams, Oscillator, SafariConfig, SceneManifest, ScenerySpec, WiggleConfig, WindConfig,
};
pub use errors::{Result, SafariError};
pub use events::{EventBus, EventListener, ListenerId, SafariEvent};
pub use time::{FrameTime, Timer};
pub use visual::{Emissive, NullVisuals, VisualSink, VisualState};

use slotmap::new_key_type;

new_key_type! {
    /// Handle of a scene entity owned by the host integration layer.
    pub struct ActorKey;
}

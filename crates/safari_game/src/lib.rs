//! Game Logic
//!
//! - [`SessionController`]: authoritative discovered set, countdown, win/lose
//! - [`DiscoveryTracker`]: per-actor interaction → request, confirmation → marker
//! - [`ProgressHud`]: read-only presentation listener
//! - [`StartTrigger`] / [`Highlighter`]: orb and billboard interactions
//!
//! The pieces never call each other. They communicate only through
//! [`safari_core::EventBus`].

pub mod discovery;
pub mod hud;
pub mod session;
pub mod trigger;

pub use discovery::DiscoveryTracker;
pub use hud::{ProgressHud, TimerColor, format_clock};
pub use session::{SessionController, SessionState};
pub use trigger::{Highlighter, StartTrigger};

//! Procedural Motion
//!
//! Closed-form, time-parameterized motion for scene actors:
//!
//! - [`Trajectory`]: pure pose generator (circular orbit + cubic-eased wiggle)
//! - [`MotionDriver`]: per-actor driver writing the pose onto a [`Transform`]
//! - [`WindDriver`]: uncubed sway for static scenery sub-parts
//! - [`BoundaryClamp`]: keeps the player rig inside a horizontal circle
//!
//! Nothing here knows about sessions or discovery.

pub mod boundary;
pub mod driver;
pub mod easing;
pub mod phase;
pub mod trajectory;
pub mod transform;
pub mod wind;

pub use boundary::BoundaryClamp;
pub use driver::MotionDriver;
pub use phase::PhaseOffsets;
pub use trajectory::{OrbitPath, Pose, Trajectory};
pub use transform::Transform;
pub use wind::{WindDriver, WindPart};

//! Host Integration
//!
//! Ties the safari crates to a host runtime's frame loop:
//!
//! - [`SafariApp`]: owns the bus, session, actors and their components
//! - [`InputHandle`]: queue for host input arriving outside the frame loop
//! - [`VisualRegistry`]: in-memory implementation of the visual capability

pub mod app;
pub mod input;
pub mod visuals;

pub use app::{Actor, SafariApp};
pub use input::{InputCommand, InputHandle};
pub use visuals::VisualRegistry;

/// Installs an `env_logger` logger defaulting to `info`, honouring `RUST_LOG`.
///
/// Intended for binaries and tests; calling it more than once is harmless.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

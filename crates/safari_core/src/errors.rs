//! Error Types
//!
//! # Overview
//!
//! [`SafariError`] covers every failure mode the safari crates can report:
//! - Configuration parsing and validation
//! - Actor creation and lookup
//! - Best-effort presentation updates (missing meshes)
//!
//! None of these ever reach the player as a hard failure. Invalid session
//! transitions are not errors at all; they are defined no-ops.
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, SafariError>`.

use thiserror::Error;

use crate::ActorKey;

/// The main error type for the safari crates.
#[derive(Error, Debug)]
pub enum SafariError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON parsing error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// File I/O error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Actor Errors
    // ========================================================================
    /// The actor names a category that is not part of the configured set.
    #[error("Unknown category `{0}`")]
    UnknownCategory(String),

    /// A motion parameter is NaN, infinite, or a negative radius.
    #[error("Invalid motion parameter `{field}`: {value}")]
    InvalidMotionParam {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// The handle does not refer to a live actor.
    #[error("Actor not found: {0:?}")]
    ActorNotFound(ActorKey),

    // ========================================================================
    // Presentation Errors
    // ========================================================================
    /// The actor's renderable mesh has not been loaded yet.
    #[error("Mesh not loaded for actor {0:?}")]
    MeshNotLoaded(ActorKey),
}

/// Alias for `Result<T, SafariError>`.
pub type Result<T> = std::result::Result<T, SafariError>;

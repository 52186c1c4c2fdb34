//! Error types for the surface glue and configuration.
//!
//! The touch-handling core never returns errors: unmatched identities and
//! excess pointers are defined no-ops. Errors only arise around the
//! graphics context, config loading and wire decoding.

use thiserror::Error;

/// Errors raised by a map surface and its graphics context
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The context provider could not create a rendering context.
    /// Fatal for the surface: initialization stops and is not retried.
    #[error("Failed to create graphics context: {0}")]
    ContextCreation(String),

    /// A ready surface's context could not be made current for a draw or
    /// resize. The engine is not called; later frames try again.
    #[error("Graphics context lost: {0}")]
    ContextLost(String),

    /// An operation needing the context ran before initialization finished
    #[error("Surface not ready (status: {0})")]
    NotReady(&'static str),
}

/// Errors that can occur while loading a [`crate::config::SurfaceConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// An integer that does not name any [`crate::input::ActionCode`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown action code: {0}")]
pub struct UnknownActionCode(pub i32);

/// Result type alias for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

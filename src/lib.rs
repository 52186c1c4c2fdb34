//! Multi-touch input normalization for map surfaces.
//!
//! Sits between a platform's raw touch callbacks and a map-interaction
//! engine: tracks up to two pointers, keeps their primary/secondary roles
//! stable (promoting the secondary when the primary lifts) and emits one
//! action event with two physical-pixel coordinate pairs per callback.
//!
//! - [`input`] - Pointer slots, event normalization, batch dispatch
//! - [`surface`] - Two-phase surface lifecycle around the input layer
//! - [`config`] / [`logging`] - Ambient setup, run once per process
//! - [`replay`] - Headless replay of recorded touch traces

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod replay;
pub mod surface;

pub use error::{ConfigError, SurfaceError, UnknownActionCode};

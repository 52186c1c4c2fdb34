//! Crate-wide constants.
//!
//! Centralizes wire values and defaults shared between the input layer
//! and the surface glue.

// ============================================================================
// Wire Values
// ============================================================================

/// Coordinate value meaning "no pointer in this slot".
///
/// Used for both x and y of an absent pair. Touch positions may be negative
/// (a finger dragged past the top-left edge), so the value sits at the very
/// bottom of the f32 range where no scaled surface position can land. It is
/// finite so events still encode as plain JSON numbers.
pub const NO_COORDINATE: f32 = f32::MIN;

// ============================================================================
// Surface Defaults
// ============================================================================

/// DPI of a surface with a device pixel scale of 1.0
pub const BASE_DPI: f32 = 160.0;

/// Device pixel scale used until the first layout reports one
pub const DEFAULT_SCALE: f32 = 1.0;

/// Log filter used when neither config nor `RUST_LOG` provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "mapview-input";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

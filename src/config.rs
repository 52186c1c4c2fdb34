//! Surface configuration loaded from JSON.
//!
//! Every field has a default, so a missing file or a partial document still
//! produces a usable config.

use crate::constants::{BASE_DPI, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_FILTER};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// DPI reported to the engine at a device pixel scale of 1.0
    pub base_dpi: f32,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            base_dpi: BASE_DPI,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SurfaceConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// DPI for a surface with the given device pixel scale
    pub fn dpi_for_scale(&self, scale: f32) -> f32 {
        self.base_dpi * scale
    }

    fn validate(&self) -> ConfigResult<()> {
        if !(self.base_dpi.is_finite() && self.base_dpi > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_dpi must be positive, got {}",
                self.base_dpi
            )));
        }
        Ok(())
    }
}

/// `<config dir>/mapview-input/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

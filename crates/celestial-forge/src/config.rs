//! Generator configuration
//!
//! The generic fallbacks synthesis uses when a preset leaves something
//! unspecified, plus the scene constants (shell margin, per-frame spin).
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! atmosphere_margin = 2.0
//! persistence = [0.45, 0.55]
//! ```

use std::fs;
use std::path::Path;

use celestial_params::DEFAULT_ATMOSPHERE_MARGIN;
use celestial_presets::Range;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating a [`ForgeConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field}: [{lo}, {hi}] is not a closed interval")]
    InvertedRange { field: &'static str, lo: f64, hi: f64 },

    #[error("{field} must be a finite, non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },
}

/// Fallback ranges and scene constants for the synthesis engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Offset range for presets without one
    pub offset: Range,
    pub persistence: Range,
    pub lacunarity: Range,
    /// Sampled independently for planet and atmosphere when the preset has no
    /// shared rotation range
    pub rotation_speed: Range,
    /// Band thresholds, sorted after sampling
    pub transition: Range,
    pub blend: Range,
    /// Per-channel noise added to a palette anchor
    pub color_jitter: f64,
    /// Gap between planet surface and atmosphere shell
    pub atmosphere_margin: f64,
    pub atmosphere_opacity: Range,
    /// Ambient intensity for every body without a fixed curve
    pub ambient_baseline: f64,
    pub diffuse_baseline: f64,
    /// Radians added to the atmosphere rotation every frame
    pub frame_spin: f64,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            offset: Range::new(-1.0, 1.0),
            persistence: Range::new(0.4, 0.6),
            lacunarity: Range::new(1.8, 2.2),
            rotation_speed: Range::new(0.0, 0.5),
            transition: Range::new(0.0, 3.0),
            blend: Range::new(0.1, 0.3),
            color_jitter: 0.2,
            atmosphere_margin: DEFAULT_ATMOSPHERE_MARGIN,
            atmosphere_opacity: Range::new(0.3, 0.6),
            ambient_baseline: 0.062,
            diffuse_baseline: 1.0,
            frame_spin: 0.0002,
        }
    }
}

impl ForgeConfig {
    /// Parse from TOML, filling missing keys with defaults, then validate
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("offset", self.offset),
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
            ("rotation_speed", self.rotation_speed),
            ("transition", self.transition),
            ("blend", self.blend),
            ("atmosphere_opacity", self.atmosphere_opacity),
        ];
        for (field, range) in ranges {
            if !range.is_valid() {
                return Err(ConfigError::InvertedRange {
                    field,
                    lo: range.lo,
                    hi: range.hi,
                });
            }
        }

        let scalars = [
            ("color_jitter", self.color_jitter),
            ("atmosphere_margin", self.atmosphere_margin),
            ("ambient_baseline", self.ambient_baseline),
            ("diffuse_baseline", self.diffuse_baseline),
            ("frame_spin", self.frame_spin),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

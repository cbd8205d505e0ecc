//! YAML configuration: seed names and spin tunables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::wheel::SpinParams;
use crate::wheel::spin::{DEFAULT_FULL_TURNS, DEFAULT_STEP_DEGREES};

pub const DEFAULT_FRAME_MS: u64 = 16;

/// Accepted range for `spin.step_degrees`.
pub const STEP_DEGREES_RANGE: RangeInclusive<f64> = 0.1..=360.0;
/// Accepted range for `spin.full_turns`.
pub const FULL_TURNS_RANGE: RangeInclusive<u32> = 1..=100;

/// Invalid values in an otherwise well-formed config file.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("spin.step_degrees must be a number, got {0}")]
    InvalidStep(f64),
    #[error("spin.step_degrees must be between 0.1 and 360, got {0}")]
    StepOutOfRange(f64),
    #[error("spin.full_turns must be between 1 and 100, got {0}")]
    TurnsOutOfRange(u32),
    #[error("spin.frame_ms must be at least 1")]
    InvalidFrameInterval,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Names placed on the wheel at startup
    pub names: Vec<String>,
    pub spin: SpinConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinConfig {
    /// Degrees added per frame
    pub step_degrees: f64,
    /// Whole turns before the random offset
    pub full_turns: u32,
    /// Milliseconds between frames
    pub frame_ms: u64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            step_degrees: DEFAULT_STEP_DEGREES,
            full_turns: DEFAULT_FULL_TURNS,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl SpinConfig {
    pub fn params(&self) -> SpinParams {
        SpinParams {
            step_degrees: self.step_degrees,
            full_turns: self.full_turns,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl Config {
    /// Load config from `path`, or from the global config file when `None`.
    ///
    /// A missing global file yields defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match global_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("config:no global config, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), names = config.names.len(), "config:loaded");
        Ok(config)
    }

    /// Parse and validate YAML content. Empty content yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check spin settings. Every accepted combination finishes in a bounded
    /// number of frames.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spin = &self.spin;
        if !spin.step_degrees.is_finite() {
            return Err(ConfigError::InvalidStep(spin.step_degrees));
        }
        // Smaller steps get absorbed by the running angle and the spin never lands
        if !STEP_DEGREES_RANGE.contains(&spin.step_degrees) {
            return Err(ConfigError::StepOutOfRange(spin.step_degrees));
        }
        if !FULL_TURNS_RANGE.contains(&spin.full_turns) {
            return Err(ConfigError::TurnsOutOfRange(spin.full_turns));
        }
        if spin.frame_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval);
        }
        Ok(())
    }
}

/// Get the path to the global config file.
/// Prefers an existing .yml file when there is no .yaml file.
fn global_config_path() -> Option<PathBuf> {
    let home = home::home_dir()?;
    let yaml = home.join(".config/wheelpick/config.yaml");
    let yml = home.join(".config/wheelpick/config.yml");

    if yml.exists() && !yaml.exists() {
        Some(yml)
    } else {
        Some(yaml)
    }
}

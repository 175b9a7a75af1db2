//! Calculator configuration
//!
//! Loaded from YAML; every field has a default so partial files work.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::ReplayPolicy;

/// Errors while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid YAML for [`CalculatorConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How Enter replays the remembered operation
    pub replay_policy: ReplayPolicy,
    /// How long the result display keeps its `animate` class
    pub animation_ms: u64,
    /// How long an operation button keeps its `active` class
    pub highlight_ms: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            replay_policy: ReplayPolicy::default(),
            animation_ms: Self::DEFAULT_ANIMATION_MS,
            highlight_ms: Self::DEFAULT_HIGHLIGHT_MS,
        }
    }
}

impl CalculatorConfig {
    /// Default animation length in milliseconds
    pub const DEFAULT_ANIMATION_MS: u64 = 300;
    /// Default button highlight length in milliseconds
    pub const DEFAULT_HIGHLIGHT_MS: u64 = 200;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set replay policy
    #[must_use]
    pub const fn with_replay_policy(mut self, policy: ReplayPolicy) -> Self {
        self.replay_policy = policy;
        self
    }

    /// Set animation length
    #[must_use]
    pub const fn with_animation_ms(mut self, ms: u64) -> Self {
        self.animation_ms = ms;
        self
    }

    /// Set highlight length
    #[must_use]
    pub const fn with_highlight_ms(mut self, ms: u64) -> Self {
        self.highlight_ms = ms;
        self
    }

    /// Animation length as a [`Duration`]
    #[must_use]
    pub const fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Highlight length as a [`Duration`]
    #[must_use]
    pub const fn highlight_delay(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Parses a configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Loads a configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Serializes the configuration to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Board size, hill size and how long the hill must be held.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length N of the square grid (odd, at least 3).
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Side length Z of the centered hill (odd, smaller than N).
    #[serde(default = "default_zone_size")]
    zone_size: usize,

    /// Seconds of uninterrupted occupancy needed to win.
    #[serde(default = "default_win_seconds")]
    win_seconds: f64,
}

#[instrument]
fn default_grid_size() -> usize {
    11
}

#[instrument]
fn default_zone_size() -> usize {
    3
}

#[instrument]
fn default_win_seconds() -> f64 {
    5.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            zone_size: default_zone_size(),
            win_seconds: default_win_seconds(),
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(grid_size: usize, zone_size: usize, win_seconds: f64) -> Result<Self, ConfigError> {
        let config = Self {
            grid_size,
            zone_size,
            win_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            grid_size = config.grid_size,
            zone_size = config.zone_size,
            win_seconds = config.win_seconds,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        grid_size: Option<usize>,
        zone_size: Option<usize>,
        win_seconds: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(n) = grid_size {
            self.grid_size = n;
        }
        if let Some(z) = zone_size {
            self.zone_size = z;
        }
        if let Some(secs) = win_seconds {
            self.win_seconds = secs;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks the geometric and timing constraints.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 3 || self.grid_size % 2 == 0 {
            return Err(ConfigError::new(format!(
                "grid_size must be odd and at least 3, got {}",
                self.grid_size
            )));
        }
        if self.zone_size == 0 || self.zone_size % 2 == 0 {
            return Err(ConfigError::new(format!(
                "zone_size must be odd and at least 1, got {}",
                self.zone_size
            )));
        }
        if self.zone_size >= self.grid_size {
            return Err(ConfigError::new(format!(
                "zone_size ({}) must be smaller than grid_size ({})",
                self.zone_size, self.grid_size
            )));
        }
        if !self.win_seconds.is_finite() || self.win_seconds <= 0.0 {
            return Err(ConfigError::new(format!(
                "win_seconds must be a positive number, got {}",
                self.win_seconds
            )));
        }
        Ok(())
    }

    /// How long the hill must be held, as a `Duration`.
    pub fn win_duration(&self) -> Duration {
        Duration::from_secs_f64(self.win_seconds)
    }

    /// First row/column of the hill.
    pub fn zone_start(&self) -> usize {
        (self.grid_size - self.zone_size) / 2
    }

    /// One past the last row/column of the hill.
    pub fn zone_end(&self) -> usize {
        self.zone_start() + self.zone_size
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

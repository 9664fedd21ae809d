//! Game configuration.
//!
//! Read from `~/.flapper/config.json` (or a path given with `--config`).
//! Every section and field is optional; anything left out keeps its default.

use crate::constants::FRAME_INTERVAL_MS;
use crate::error::ConfigError;
use crate::game::obstacles::{OBSTACLE_GAP_OFFSET, OBSTACLE_WIDTH};
use crate::game::{
    NoObstacles, ObstacleSet, Physics, ScrollingPipePair, TerminalPolicy, Viewport,
    FLAP_IMPULSE, FRAME_PERIOD_MS, GRAVITY_INCREMENT, GROUND_HEIGHT, PLAYER_SIZE, SCROLL_SPEED,
};
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name inside ~/.flapper/.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub display: DisplayConfig,
    pub obstacles: ObstacleConfig,
    pub audio: AudioConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity added per frame
    pub gravity: f64,
    /// Velocity set on flap (negative = up)
    pub flap_impulse: f64,
    /// Ground scroll per frame
    pub scroll_speed: f64,
    /// Milliseconds per player animation frame
    pub frame_period_ms: f64,
    pub player_size: f64,
    pub ground_height: f64,
    /// What happens when the player reaches the ground
    pub terminal_policy: TerminalPolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_INCREMENT,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            frame_period_ms: FRAME_PERIOD_MS,
            player_size: PLAYER_SIZE,
            ground_height: GROUND_HEIGHT,
            terminal_policy: TerminalPolicy::EndSession,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target delay between frames
    pub frame_interval_ms: u64,
    /// Logical units covered by one terminal column
    pub units_per_col: f64,
    /// Logical units covered by one terminal row
    pub units_per_row: f64,
    /// Fixed `[width, height]` viewport; measured from the terminal when absent
    pub viewport: Option<[f64; 2]>,
    /// Directory of `<sprite>.txt` overrides
    pub asset_dir: Option<PathBuf>,
    pub show_info_panel: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            units_per_col: 8.0,
            units_per_row: 16.0,
            viewport: None,
            asset_dir: None,
            show_info_panel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub enabled: bool,
    pub width: f64,
    pub gap_offset: f64,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: OBSTACLE_WIDTH,
            gap_offset: OBSTACLE_GAP_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Ring the bell on every flap, not just on death
    pub bell_on_flap: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell_on_flap: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter used when RUST_LOG is unset (error, warn, info, debug, trace)
    pub level: String,
    /// Log file; defaults to ~/.flapper/flapper.log
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl GameConfig {
    /// Load from `path`, or from ~/.flapper/config.json when `path` is None.
    ///
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = match path {
            Some(path) => persistence::load_json(path)?,
            None => {
                let default_path = persistence::data_path(CONFIG_FILE)?;
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                persistence::load_json(&default_path)?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Write the default settings to `path` unless a file is already there.
    ///
    /// Returns true when a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        persistence::save_json(path, &Self::default())?;
        Ok(true)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.physics.frame_period_ms <= 0.0 {
            return Err(ConfigError::Invalid(
                "physics.frame_period_ms must be positive".to_string(),
            ));
        }
        // The ground only wraps back to zero while it moves left
        if self.physics.scroll_speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "physics.scroll_speed must be positive".to_string(),
            ));
        }
        if self.display.units_per_col <= 0.0 || self.display.units_per_row <= 0.0 {
            return Err(ConfigError::Invalid(
                "display.units_per_col and units_per_row must be positive".to_string(),
            ));
        }
        if self.display.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "display.frame_interval_ms must be at least 1".to_string(),
            ));
        }
        if let Some([w, h]) = self.display.viewport {
            if w <= 0.0 || h <= 0.0 {
                return Err(ConfigError::Invalid(
                    "display.viewport must have positive size".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn physics(&self) -> Physics {
        let p = &self.physics;
        Physics {
            gravity: p.gravity,
            flap_impulse: p.flap_impulse,
            scroll_speed: p.scroll_speed,
            frame_period_ms: p.frame_period_ms,
            player_size: p.player_size,
            ground_height: p.ground_height,
            terminal_policy: p.terminal_policy,
        }
    }

    /// Viewport for a play area of `cols` x `rows` cells, unless one is configured.
    pub fn viewport(&self, cols: u16, rows: u16) -> Viewport {
        match self.display.viewport {
            Some([w, h]) => Viewport::new(w, h),
            None => Viewport::new(
                cols as f64 * self.display.units_per_col,
                rows as f64 * self.display.units_per_row,
            ),
        }
    }

    pub fn obstacle_set(&self) -> Box<dyn ObstacleSet> {
        if self.obstacles.enabled {
            Box::new(ScrollingPipePair {
                width: self.obstacles.width,
                gap_offset: self.obstacles.gap_offset,
            })
        } else {
            Box::new(NoObstacles)
        }
    }
}

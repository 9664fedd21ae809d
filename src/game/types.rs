//! Flapper data structures.
//!
//! Distances are in logical units (the terminal renderer maps them to cells),
//! velocities in units per frame.

use serde::{Deserialize, Serialize};

/// Velocity added every frame while the player is airborne.
pub const GRAVITY_INCREMENT: f64 = 0.12;

/// Velocity override applied on flap (negative = upward).
pub const FLAP_IMPULSE: f64 = -5.0;

/// Ground/background scroll per frame.
pub const SCROLL_SPEED: f64 = 2.0;

/// Milliseconds each player animation frame stays on screen.
pub const FRAME_PERIOD_MS: f64 = 100.0;

/// Player sprite edge length.
pub const PLAYER_SIZE: f64 = 70.0;

/// Height of the ground strip at the bottom of the viewport.
pub const GROUND_HEIGHT: f64 = 112.0;

/// What happens when the player drops past the ground bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// Freeze the simulation, flag game over and fire the death notification once.
    #[default]
    EndSession,
    /// Leave all state untouched; a flap can lift the player back into play.
    Stall,
}

/// Tunable physics for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f64,
    pub flap_impulse: f64,
    pub scroll_speed: f64,
    pub frame_period_ms: f64,
    pub player_size: f64,
    pub ground_height: f64,
    pub terminal_policy: TerminalPolicy,
}

impl Default for Physics {
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

/// Viewport geometry, captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything that changes while a session runs. Reset on retry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Offset of the player's top edge from the top of the viewport.
    pub y_position: f64,
    /// Positive = falling.
    pub y_velocity: f64,
    /// Horizontal displacement of the tiled ground and background, in `(-width, 0]`
    /// except for the single frame where it sits at or past `-width` before wrapping.
    pub ground_offset: f64,
    pub game_over: bool,
    /// Index into the player animation frames.
    pub frame_index: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which branch a frame update took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Assets not ready; nothing happened.
    Skipped,
    /// Normal integration step.
    Advanced,
    /// Past the bound under [`TerminalPolicy::Stall`].
    Stalled,
    /// Session is over. `first` is true only on the transition frame.
    Ended { first: bool },
}

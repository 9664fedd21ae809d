//! Per-frame physics and animation for the avoider game.

use super::types::{FrameStep, Physics, SessionState, TerminalPolicy, Viewport};

/// Lowest `y_position` at which the player still counts as airborne.
///
/// The current velocity is subtracted so the bound is checked against where
/// the player is about to be, not where it is.
pub fn ground_bound(state: &SessionState, physics: &Physics, viewport: &Viewport) -> f64 {
    viewport.height - physics.player_size / 2.0 - state.y_velocity - physics.ground_height
}

/// True while the player is above [`ground_bound`].
pub fn is_airborne(state: &SessionState, physics: &Physics, viewport: &Viewport) -> bool {
    state.y_position < ground_bound(state, physics, viewport)
}

/// Animation frame for a wall-clock timestamp.
///
/// Driven by elapsed time rather than a frame counter so the cycle speed
/// does not depend on the render rate.
pub fn animation_frame(timestamp_ms: f64, frame_period_ms: f64, frame_count: usize) -> usize {
    if frame_count == 0 || frame_period_ms <= 0.0 {
        return 0;
    }
    let step = (timestamp_ms / frame_period_ms).floor() as i64;
    step.rem_euclid(frame_count as i64) as usize
}

/// Scroll the ground one frame left, wrapping to zero once a full width has passed.
pub fn scroll_ground(offset: f64, scroll_speed: f64, width: f64) -> f64 {
    if offset > -width {
        offset - scroll_speed
    } else {
        0.0
    }
}

/// Advance the session by exactly one frame.
///
/// `frame_count` is the number of player animation frames available.
pub fn process_frame(
    state: &mut SessionState,
    physics: &Physics,
    viewport: &Viewport,
    timestamp_ms: f64,
    frame_count: usize,
) -> FrameStep {
    if state.game_over {
        return FrameStep::Ended { first: false };
    }

    if !is_airborne(state, physics, viewport) {
        return match physics.terminal_policy {
            TerminalPolicy::Stall => FrameStep::Stalled,
            TerminalPolicy::EndSession => {
                state.game_over = true;
                FrameStep::Ended { first: true }
            }
        };
    }

    state.y_position += state.y_velocity;
    state.y_velocity += physics.gravity;
    state.frame_index = animation_frame(timestamp_ms, physics.frame_period_ms, frame_count);
    state.ground_offset = scroll_ground(state.ground_offset, physics.scroll_speed, viewport.width);

    FrameStep::Advanced
}

/// Apply a flap. Returns false (and changes nothing) once the session is over.
pub fn flap(state: &mut SessionState, physics: &Physics) -> bool {
    if state.game_over {
        return false;
    }
    state.y_velocity = physics.flap_impulse;
    true
}

/// Restore every session field to its starting value.
pub fn reset(state: &mut SessionState) {
    *state = SessionState::new();
}

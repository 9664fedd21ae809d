//! Integration test: frame update loop
//!
//! Checks the per-frame physics, scrolling and animation rules through the
//! public game API.

use flapper::game::{
    animation_frame, flap, ground_bound, process_frame, reset, scroll_ground, FrameStep,
};
use flapper::{Physics, SessionState, TerminalPolicy, Viewport};

const FRAME_MS: f64 = 16.0;

fn tall_viewport() -> Viewport {
    Viewport::new(400.0, 800.0)
}

/// Run frames until the player leaves the airborne region or `max` is hit.
fn run_frames(
    state: &mut SessionState,
    physics: &Physics,
    viewport: &Viewport,
    max: usize,
) -> Vec<FrameStep> {
    let mut steps = Vec::new();
    for i in 0..max {
        let step = process_frame(state, physics, viewport, i as f64 * FRAME_MS, 3);
        steps.push(step);
        if step != FrameStep::Advanced {
            break;
        }
    }
    steps
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_velocity_grows_by_gravity_every_airborne_frame() {
    let physics = Physics::default();
    let viewport = tall_viewport();
    let mut state = SessionState::new();

    for i in 0..60 {
        let before = state.y_velocity;
        let step = process_frame(&mut state, &physics, &viewport, i as f64 * FRAME_MS, 3);
        assert_eq!(step, FrameStep::Advanced);
        assert!((state.y_velocity - (before + 0.12)).abs() < 1e-9);
    }
}

#[test]
fn test_position_moves_by_previous_velocity() {
    let physics = Physics::default();
    let viewport = tall_viewport();
    let mut state = SessionState::new();
    state.y_velocity = -5.0;
    state.y_position = 300.0;

    for i in 0..40 {
        let before = state.clone();
        process_frame(&mut state, &physics, &viewport, i as f64 * FRAME_MS, 3);
        assert!((state.y_position - (before.y_position + before.y_velocity)).abs() < 1e-9);
    }
}

#[test]
fn test_free_fall_eventually_ends_session() {
    let physics = Physics::default();
    let viewport = tall_viewport();
    let mut state = SessionState::new();

    let steps = run_frames(&mut state, &physics, &viewport, 10_000);
    assert_eq!(steps.last(), Some(&FrameStep::Ended { first: true }));
    assert!(state.game_over);
    assert!(state.y_position >= ground_bound(&state, &physics, &viewport));
}

#[test]
fn test_boundary_650_for_800_high_viewport() {
    let physics = Physics::default();
    let viewport = tall_viewport();

    let mut state = SessionState::new();
    state.y_velocity = 3.0;
    state.y_position = 649.5;
    assert_eq!(
        process_frame(&mut state, &physics, &viewport, 0.0, 3),
        FrameStep::Advanced
    );

    let mut state = SessionState::new();
    state.y_velocity = 3.0;
    state.y_position = 650.0;
    assert_eq!(
        process_frame(&mut state, &physics, &viewport, 0.0, 3),
        FrameStep::Ended { first: true }
    );
}

// =============================================================================
// Scrolling and animation
// =============================================================================

#[test]
fn test_ground_scrolls_two_units_then_wraps_to_zero() {
    let physics = Physics::default();
    let viewport = Viewport::new(20.0, 100_000.0);
    let mut state = SessionState::new();

    let mut offsets = Vec::new();
    for i in 0..13 {
        process_frame(&mut state, &physics, &viewport, i as f64, 3);
        offsets.push(state.ground_offset);
    }
    assert_eq!(
        offsets,
        vec![-2.0, -4.0, -6.0, -8.0, -10.0, -12.0, -14.0, -16.0, -18.0, -20.0, 0.0, -2.0, -4.0]
    );
}

#[test]
fn test_scroll_wrap_is_not_a_clamp() {
    // Offsets already past -width snap back to 0, not to -width
    assert_eq!(scroll_ground(-25.0, 2.0, 20.0), 0.0);
}

#[test]
fn test_animation_follows_wall_clock() {
    let physics = Physics::default();
    let viewport = tall_viewport();
    let mut state = SessionState::new();

    for timestamp in [0.0, 50.0, 100.0, 199.0, 200.0, 301.0, 1_000.0, 123_456.0] {
        let mut probe = state.clone();
        process_frame(&mut probe, &physics, &viewport, timestamp, 3);
        let expected = ((timestamp / 100.0_f64).floor() as u64 % 3) as usize;
        assert_eq!(probe.frame_index, expected, "timestamp {timestamp}");
    }

    // Independent of how many frames ran before
    process_frame(&mut state, &physics, &viewport, 450.0, 3);
    assert_eq!(state.frame_index, animation_frame(450.0, 100.0, 3));
}

// =============================================================================
// Input and reset
// =============================================================================

#[test]
fn test_flap_sets_exact_impulse() {
    let physics = Physics::default();
    for prior in [-12.0, -5.0, 0.0, 0.5, 9.0] {
        let mut state = SessionState::new();
        state.y_velocity = prior;
        assert!(flap(&mut state, &physics));
        assert_eq!(state.y_velocity, -5.0);
    }
}

#[test]
fn test_flaps_after_game_over_change_nothing() {
    let physics = Physics::default();
    let viewport = tall_viewport();
    let mut state = SessionState::new();
    run_frames(&mut state, &physics, &viewport, 10_000);
    assert!(state.game_over);

    let frozen = state.clone();
    for _ in 0..25 {
        flap(&mut state, &physics);
    }
    assert_eq!(state, frozen);
}

#[test]
fn test_reset_scenario() {
    let mut state = SessionState::new();
    state.y_position = 200.0;
    state.y_velocity = 8.0;
    state.ground_offset = -500.0;
    state.game_over = true;

    reset(&mut state);

    assert_eq!(
        (state.y_position, state.y_velocity, state.ground_offset),
        (0.0, 0.0, 0.0)
    );
    assert_eq!(state.frame_index, 0);
    assert!(!state.game_over);
}

#[test]
fn test_stall_policy_keeps_session_alive() {
    let physics = Physics {
        terminal_policy: TerminalPolicy::Stall,
        ..Physics::default()
    };
    let viewport = tall_viewport();
    let mut state = SessionState::new();

    let steps = run_frames(&mut state, &physics, &viewport, 10_000);
    assert_eq!(steps.last(), Some(&FrameStep::Stalled));
    assert!(!state.game_over);

    // Further frames leave everything in place
    let stalled = state.clone();
    for i in 0..10 {
        assert_eq!(
            process_frame(&mut state, &physics, &viewport, i as f64 * FRAME_MS, 3),
            FrameStep::Stalled
        );
    }
    assert_eq!(state, stalled);

    // A flap is still accepted and lifts the player back into play
    assert!(flap(&mut state, &physics));
    assert_eq!(
        process_frame(&mut state, &physics, &viewport, 0.0, 3),
        FrameStep::Advanced
    );
}

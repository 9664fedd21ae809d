//! Obstacle sets.
//!
//! Obstacles are drawn but never collide with the player. A set decides
//! where its pipes sit each frame; the session calls [`ObstacleSet::advance`]
//! after every integrated frame and [`ObstacleSet::reset`] on retry.

use super::types::{SessionState, Viewport};
use crate::draw::Bounds;

/// Width of a pipe piece.
pub const OBSTACLE_WIDTH: f64 = 70.0;

/// Distance of the pipe gap edges from the top and bottom of the viewport.
pub const OBSTACLE_GAP_OFFSET: f64 = 300.0;

/// A top/bottom pipe pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    pub top: Bounds,
    pub bottom: Bounds,
}

pub trait ObstacleSet {
    /// Called once per integrated frame, after the session state moved.
    fn advance(&mut self, _state: &SessionState, _viewport: &Viewport) {}

    /// Pipe pairs to draw for the current state.
    fn layout(&self, state: &SessionState, viewport: &Viewport) -> Vec<ObstaclePair>;

    /// Return to the initial arrangement.
    fn reset(&mut self) {}
}

/// One pipe pair riding on the ground scroll, starting flush with the right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollingPipePair {
    pub width: f64,
    pub gap_offset: f64,
}

impl Default for ScrollingPipePair {
    fn default() -> Self {
        Self {
            width: OBSTACLE_WIDTH,
            gap_offset: OBSTACLE_GAP_OFFSET,
        }
    }
}

impl ObstacleSet for ScrollingPipePair {
    fn layout(&self, state: &SessionState, viewport: &Viewport) -> Vec<ObstaclePair> {
        let x = state.ground_offset + viewport.width - self.width;
        vec![ObstaclePair {
            top: Bounds::new(x, self.gap_offset - viewport.height, self.width, viewport.height),
            bottom: Bounds::new(x, viewport.height - self.gap_offset, self.width, viewport.height),
        }]
    }
}

/// Empty set: nothing to draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstacles;

impl ObstacleSet for NoObstacles {
    fn layout(&self, _state: &SessionState, _viewport: &Viewport) -> Vec<ObstaclePair> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_pair_tracks_ground_offset() {
        let pipes = ScrollingPipePair::default();
        let viewport = Viewport::new(400.0, 800.0);
        let mut state = SessionState::new();
        state.ground_offset = -50.0;

        let pairs = pipes.layout(&state, &viewport);
        assert_eq!(pairs.len(), 1);
        let pair = pairs[0];
        assert_eq!(pair.top, Bounds::new(280.0, -500.0, 70.0, 800.0));
        assert_eq!(pair.bottom, Bounds::new(280.0, 500.0, 70.0, 800.0));
    }

    #[test]
    fn test_gap_between_pieces() {
        let pipes = ScrollingPipePair::default();
        let viewport = Viewport::new(400.0, 800.0);
        let pair = pipes.layout(&SessionState::new(), &viewport)[0];
        // Top piece ends at 300, bottom piece starts at 500.
        assert_eq!(pair.top.bottom(), 300.0);
        assert_eq!(pair.bottom.y, 500.0);
    }

    #[test]
    fn test_no_obstacles_is_empty() {
        let viewport = Viewport::new(400.0, 800.0);
        assert!(NoObstacles.layout(&SessionState::new(), &viewport).is_empty());
    }
}

//! Side-scrolling avoider core.
//!
//! The player falls under gravity and rises on each flap while the ground
//! and background scroll past. All per-frame logic lives in [`logic`]; the
//! data it operates on lives in [`types`].

pub mod logic;
pub mod obstacles;
pub mod types;

pub use logic::*;
pub use obstacles::{NoObstacles, ObstaclePair, ObstacleSet, ScrollingPipePair};
pub use types::*;

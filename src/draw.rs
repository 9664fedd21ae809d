//! Draw list for one frame.
//!
//! Turns a read-only view of the session into rectangles in paint order.
//! The terminal renderer rasterizes these; nothing here knows about cells.

use crate::game::{ObstacleSet, Physics, SessionState, Viewport};

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Which image a draw command paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Background,
    ObstacleTop,
    ObstacleBottom,
    Ground,
    /// Player animation frame by index.
    Player(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteKind,
    pub bounds: Bounds,
}

impl DrawCommand {
    fn new(sprite: SpriteKind, bounds: Bounds) -> Self {
        Self { sprite, bounds }
    }
}

/// Build the paint-ordered draw list: background, obstacles, ground, player.
///
/// The player is left out when `player_frames` has no sprite for the current
/// animation index.
pub fn build_draw_list(
    state: &SessionState,
    physics: &Physics,
    viewport: &Viewport,
    obstacles: &dyn ObstacleSet,
    player_frames: usize,
) -> Vec<DrawCommand> {
    let Viewport { width, height } = *viewport;
    let offset = state.ground_offset;
    let mut commands = Vec::with_capacity(8);

    commands.push(DrawCommand::new(
        SpriteKind::Background,
        Bounds::new(offset, 0.0, width, height),
    ));
    commands.push(DrawCommand::new(
        SpriteKind::Background,
        Bounds::new(offset + width, 0.0, width, height),
    ));

    for pair in obstacles.layout(state, viewport) {
        commands.push(DrawCommand::new(SpriteKind::ObstacleTop, pair.top));
        commands.push(DrawCommand::new(SpriteKind::ObstacleBottom, pair.bottom));
    }

    let ground_y = height - physics.ground_height;
    commands.push(DrawCommand::new(
        SpriteKind::Ground,
        Bounds::new(offset, ground_y, width, physics.ground_height),
    ));
    commands.push(DrawCommand::new(
        SpriteKind::Ground,
        Bounds::new(offset + width, ground_y, width, physics.ground_height),
    ));

    if state.frame_index < player_frames {
        let size = physics.player_size;
        commands.push(DrawCommand::new(
            SpriteKind::Player(state.frame_index),
            Bounds::new(width / 2.0 - size / 2.0, state.y_position, size, size),
        ));
    }

    commands
}

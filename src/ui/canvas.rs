//! Rasterizes a draw list into terminal cells.
//!
//! A cell belongs to a rectangle when the cell's center, mapped back into
//! logical units, lies inside it. Sprites are stretched to fill their
//! rectangle, then clipped to the play area.

use crate::assets::{AssetPack, Sprite};
use crate::draw::{DrawCommand, SpriteKind};
use crate::game::Viewport;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Grid of cells, row-major.
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    fn get_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    /// Paint one sprite into the logical rectangle of `command`.
    fn paint(&mut self, command: &DrawCommand, sprite: &Sprite, viewport: &Viewport) {
        let b = command.bounds;
        if self.cols == 0 || self.rows == 0 || b.width <= 0.0 || b.height <= 0.0 {
            return;
        }
        let units_per_col = viewport.width / self.cols as f64;
        let units_per_row = viewport.height / self.rows as f64;

        let first_col = (b.x / units_per_col - 0.5).ceil().max(0.0) as usize;
        let last_col = ((b.right() / units_per_col - 0.5).ceil().max(0.0) as usize).min(self.cols);
        let first_row = (b.y / units_per_row - 0.5).ceil().max(0.0) as usize;
        let last_row =
            ((b.bottom() / units_per_row - 0.5).ceil().max(0.0) as usize).min(self.rows);

        for row in first_row..last_row {
            let y = (row as f64 + 0.5) * units_per_row;
            let v = (y - b.y) / b.height;
            for col in first_col..last_col {
                let x = (col as f64 + 0.5) * units_per_col;
                let u = (x - b.x) / b.width;
                let ch = sprite.sample(u, v);
                let cell = self.get_mut(col, row);
                if ch == ' ' {
                    if let Some(bg) = sprite.bg {
                        *cell = Cell {
                            ch: ' ',
                            fg: sprite.fg,
                            bg,
                        };
                    }
                } else {
                    cell.ch = ch;
                    cell.fg = sprite.fg;
                    if let Some(bg) = sprite.bg {
                        cell.bg = bg;
                    }
                }
            }
        }
    }

    /// Convert to styled lines for a `Paragraph`, merging runs of equal style.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let mut spans = Vec::new();
                let mut run = String::new();
                let mut run_style: Option<Style> = None;
                for col in 0..self.cols {
                    let cell = self.cells[row * self.cols + col];
                    let style = Style::default().fg(cell.fg).bg(cell.bg);
                    if run_style != Some(style) {
                        if let Some(prev) = run_style {
                            spans.push(Span::styled(std::mem::take(&mut run), prev));
                        }
                        run_style = Some(style);
                    }
                    run.push(cell.ch);
                }
                if let Some(style) = run_style {
                    spans.push(Span::styled(run, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn sprite_for<'a>(assets: &'a AssetPack, kind: SpriteKind) -> Option<&'a Sprite> {
    match kind {
        SpriteKind::Background => Some(&assets.background),
        SpriteKind::ObstacleTop => Some(&assets.obstacle_top),
        SpriteKind::ObstacleBottom => Some(&assets.obstacle_bottom),
        SpriteKind::Ground => Some(&assets.ground),
        SpriteKind::Player(index) => assets.player_frames.get(index),
    }
}

/// Paint a whole draw list, in order, onto a fresh canvas.
pub fn rasterize(
    commands: &[DrawCommand],
    assets: &AssetPack,
    viewport: &Viewport,
    cols: usize,
    rows: usize,
) -> Canvas {
    let mut canvas = Canvas::new(cols, rows);
    for command in commands {
        if let Some(sprite) = sprite_for(assets, command.sprite) {
            canvas.paint(command, sprite, viewport);
        }
    }
    canvas
}

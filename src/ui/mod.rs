pub mod canvas;
pub mod game_common;
pub mod game_scene;

pub use game_common::{game_layout, GameLayout};
pub use game_scene::render_game;

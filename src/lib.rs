//! Flapper - terminal side-scrolling avoider.
//!
//! The library exposes the frame loop, session and rendering pieces so the
//! binary and the integration tests share the same code.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod observer;
pub mod session;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use game::{FrameStep, Physics, SessionState, TerminalPolicy, Viewport};
pub use session::{InputResult, Session};

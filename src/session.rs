//! A running game session: state plus the collaborators around it.
//!
//! The session owns the single [`SessionState`] record. The frame step and
//! the input handlers take it by `&mut self`; drawing only ever sees `&self`.

use crate::assets::AssetPack;
use crate::audio::{play_best_effort, SoundCue, SoundPlayer};
use crate::draw::{build_draw_list, DrawCommand};
use crate::game::{self, FrameStep, ObstacleSet, Physics, SessionState, Viewport};
use crate::input::GameInput;
use crate::observer::{FrameObserver, FrameStats};

/// Result of handling one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub struct Session<O: FrameObserver = FrameStats> {
    state: SessionState,
    pub physics: Physics,
    pub viewport: Viewport,
    obstacles: Box<dyn ObstacleSet>,
    sound: Box<dyn SoundPlayer>,
    observer: O,
    retry_prompt: bool,
}

impl<O: FrameObserver> Session<O> {
    pub fn new(
        physics: Physics,
        viewport: Viewport,
        obstacles: Box<dyn ObstacleSet>,
        sound: Box<dyn SoundPlayer>,
        observer: O,
    ) -> Self {
        Self {
            state: SessionState::new(),
            physics,
            viewport,
            obstacles,
            sound,
            observer,
            retry_prompt: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access for callers that need to place the player directly.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// True while the "Game Over / Retry" prompt is up.
    pub fn retry_prompt_visible(&self) -> bool {
        self.retry_prompt
    }

    /// Run one frame. Does nothing until `assets` is available.
    pub fn frame(&mut self, assets: Option<&AssetPack>, timestamp_ms: f64) -> FrameStep {
        let Some(assets) = assets else {
            return FrameStep::Skipped;
        };

        let step = game::process_frame(
            &mut self.state,
            &self.physics,
            &self.viewport,
            timestamp_ms,
            assets.frame_count(),
        );

        match step {
            FrameStep::Advanced => self.obstacles.advance(&self.state, &self.viewport),
            FrameStep::Ended { first: true } => {
                log::info!(
                    "Session over at y={:.1} (velocity {:.2})",
                    self.state.y_position,
                    self.state.y_velocity
                );
                self.retry_prompt = true;
                play_best_effort(self.sound.as_mut(), SoundCue::Death);
            }
            FrameStep::Stalled | FrameStep::Ended { first: false } | FrameStep::Skipped => {}
        }

        self.observer.on_frame(timestamp_ms);
        step
    }

    /// Player activation. Ignored once the session is over.
    pub fn flap(&mut self) -> bool {
        let flapped = game::flap(&mut self.state, &self.physics);
        if flapped {
            play_best_effort(self.sound.as_mut(), SoundCue::Flap);
        }
        flapped
    }

    /// Restore the initial state and dismiss the prompt.
    pub fn retry(&mut self) {
        game::reset(&mut self.state);
        self.obstacles.reset();
        self.retry_prompt = false;
        log::info!("Session reset");
    }

    /// Dispatch a mapped key press.
    pub fn handle_input(&mut self, input: GameInput) -> InputResult {
        match input {
            GameInput::Quit => return InputResult::Quit,
            GameInput::Flap => {
                self.flap();
            }
            GameInput::Retry => {
                if self.retry_prompt {
                    self.retry();
                } else {
                    self.flap();
                }
            }
            GameInput::Other => {}
        }
        InputResult::Continue
    }

    pub fn draw_list(&self, assets: &AssetPack) -> Vec<DrawCommand> {
        build_draw_list(
            &self.state,
            &self.physics,
            &self.viewport,
            self.obstacles.as_ref(),
            assets.frame_count(),
        )
    }
}

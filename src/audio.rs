//! Sound cues.
//!
//! Playback is fire-and-forget: a failed cue is logged and otherwise ignored.

use crate::error::AudioError;
use std::io::{self, Write};

/// The two sounds the game makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Flap,
    Death,
}

pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Play a cue, swallowing any failure.
pub fn play_best_effort(player: &mut dyn SoundPlayer, cue: SoundCue) {
    if let Err(e) = player.play(cue) {
        log::debug!("Skipped {:?} sound: {}", cue, e);
    }
}

/// Rings the terminal bell for the death cue. Flaps stay silent unless enabled,
/// since a bell per flap is unbearable in most terminals.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
    pub bell_on_flap: bool,
}

impl TerminalBell {
    pub fn stdout(bell_on_flap: bool) -> Self {
        Self {
            out: io::stdout(),
            bell_on_flap,
        }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, bell_on_flap: bool) -> Self {
        Self { out, bell_on_flap }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        if cue == SoundCue::Flap && !self.bell_on_flap {
            return Ok(());
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Player used when sound is disabled.
#[derive(Debug, Default)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Err(AudioError::Muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bell_on_death_only_by_default() {
        let mut bell = TerminalBell::new(Vec::new(), false);
        bell.play(SoundCue::Flap).unwrap();
        bell.play(SoundCue::Death).unwrap();
        assert_eq!(bell.into_inner(), b"\x07".to_vec());
    }

    #[test]
    fn test_bell_on_flap_when_enabled() {
        let mut bell = TerminalBell::new(Vec::new(), true);
        bell.play(SoundCue::Flap).unwrap();
        bell.play(SoundCue::Flap).unwrap();
        assert_eq!(bell.into_inner().len(), 2);
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut bell = TerminalBell::new(BrokenPipe, true);
        assert!(bell.play(SoundCue::Death).is_err());
        play_best_effort(&mut bell, SoundCue::Death);
        play_best_effort(&mut Muted, SoundCue::Flap);
    }
}

//! Sound cues for answer feedback
//!
//! Cues are fire-and-forget: a missing file or a busy mixer is logged and
//! otherwise ignored so the frame loop never fails on audio.

use crate::config::GameConfig;
use sdl2::mixer::{Channel, Chunk};

/// Feedback cue triggered by an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Wrong,
}

impl Cue {
    /// File stem under `sounds/`
    pub fn file_stem(&self) -> &'static str {
        match self {
            Cue::Correct => "correct",
            Cue::Wrong => "wrong",
        }
    }
}

/// Anything that can play a [`Cue`]
pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

/// Used when the audio device could not be opened
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&self, _cue: Cue) {}
}

/// SDL2_mixer backed cue player
///
/// Requires `sdl2::mixer::open_audio` to have succeeded before [`SoundBoard::load`].
pub struct SoundBoard {
    correct: Option<Chunk>,
    wrong: Option<Chunk>,
}

impl SoundBoard {
    pub fn load(config: &GameConfig) -> Self {
        SoundBoard {
            correct: Self::load_chunk(config, Cue::Correct),
            wrong: Self::load_chunk(config, Cue::Wrong),
        }
    }

    fn load_chunk(config: &GameConfig, cue: Cue) -> Option<Chunk> {
        let path = config.sound_path(cue.file_stem());
        match Chunk::from_file(&path) {
            Ok(mut chunk) => {
                chunk.set_volume(config.sound_volume);
                Some(chunk)
            }
            Err(e) => {
                log::warn!("Failed to load {}: {} (cue will be silent)", path.display(), e);
                None
            }
        }
    }
}

impl CuePlayer for SoundBoard {
    fn play(&self, cue: Cue) {
        let chunk = match cue {
            Cue::Correct => self.correct.as_ref(),
            Cue::Wrong => self.wrong.as_ref(),
        };

        if let Some(chunk) = chunk {
            if let Err(e) = Channel::all().play(chunk, 0) {
                log::debug!("Could not play {:?} cue: {}", cue, e);
            }
        }
    }
}

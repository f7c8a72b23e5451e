// Game module - dice rules and answer feedback
//
// - logic.rs: GameLogic (dice, scoring, streaks)
// - audio.rs: Cue playback for correct/wrong answers

pub mod audio;
pub mod logic;

pub use audio::{Cue, CuePlayer, SilentCues, SoundBoard};
pub use logic::GameLogic;

//! Dice Scoring and Streak Tracking
//!
//! Petals around the rose: only the dice with a center pip count, and each
//! of them contributes the pips surrounding that center.
//!
//! | Face | Petals |
//! |------|--------|
//! | 3    | 2      |
//! | 5    | 4      |
//! | other| 0      |

use super::audio::{Cue, CuePlayer};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Number of dice in every roll
pub const DICE_COUNT: usize = 6;

/// One roll, each face in 1..=6
pub type Dice = [u8; DICE_COUNT];

/// Petals contributed by a single face
pub fn petals(face: u8) -> u32 {
    match face {
        3 => 2,
        5 => 4,
        _ => 0,
    }
}

/// Total petals for a roll
pub fn score_dice(dice: &[u8]) -> u32 {
    dice.iter().map(|&face| petals(face)).sum()
}

/// Owns the current roll, its answer and the player's streak
pub struct GameLogic {
    dice: Dice,
    correct_answer: u32,
    current_streak: u32,
    best_streak: u32,
    rng: Pcg32,
    cues: Box<dyn CuePlayer>,
}

impl GameLogic {
    /// Creates a game with no dice rolled yet
    ///
    /// Call [`GameLogic::roll_dice`] before the first guess.
    pub fn new(seed: u64, cues: Box<dyn CuePlayer>) -> Self {
        GameLogic {
            dice: [1; DICE_COUNT],
            correct_answer: 0,
            current_streak: 0,
            best_streak: 0,
            rng: Pcg32::seed_from_u64(seed),
            cues,
        }
    }

    /// Rolls six fresh dice and recomputes the answer
    pub fn roll_dice(&mut self) -> Dice {
        let mut dice = [0; DICE_COUNT];
        for die in dice.iter_mut() {
            *die = self.rng.random_range(1..=6);
        }
        self.set_dice(dice);
        self.dice
    }

    fn set_dice(&mut self, dice: Dice) {
        self.dice = dice;
        self.correct_answer = score_dice(&self.dice);
    }

    /// Checks a guess against the current roll
    ///
    /// Does not reroll. Plays the matching cue either way.
    pub fn check_answer(&mut self, candidate: u32) -> bool {
        if candidate == self.correct_answer {
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
            self.cues.play(Cue::Correct);
            true
        } else {
            self.current_streak = 0;
            self.cues.play(Cue::Wrong);
            false
        }
    }

    pub fn reset_streak(&mut self) {
        self.current_streak = 0;
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Longest streak this session, survives misses
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[cfg(test)]
    pub(crate) fn force_dice(&mut self, dice: Dice) {
        self.set_dice(dice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingCues;

    fn game_with_cues(seed: u64) -> (GameLogic, RecordingCues) {
        let cues = RecordingCues::new();
        let game = GameLogic::new(seed, Box::new(cues.clone()));
        (game, cues)
    }

    #[test]
    fn test_score_rule() {
        assert_eq!(score_dice(&[6, 6, 6, 6, 6, 6]), 0);
        assert_eq!(score_dice(&[3, 3, 3, 3, 3, 3]), 12);
        assert_eq!(score_dice(&[5, 5, 5, 5, 5, 5]), 24);
        assert_eq!(score_dice(&[3, 5, 1, 1, 1, 1]), 6);
        assert_eq!(score_dice(&[1, 2, 4, 6, 2, 4]), 0);
    }

    #[test]
    fn test_score_matches_counts_for_every_pair() {
        // Every (threes, fives) split of six dice, padded with non-scoring faces
        for threes in 0..=DICE_COUNT {
            for fives in 0..=(DICE_COUNT - threes) {
                let mut dice = vec![3; threes];
                dice.extend(std::iter::repeat(5).take(fives));
                dice.resize(DICE_COUNT, 2);
                assert_eq!(score_dice(&dice), 2 * threes as u32 + 4 * fives as u32);
            }
        }
    }

    #[test]
    fn test_roll_dice_range_and_answer() {
        let (mut game, _) = game_with_cues(7);
        for _ in 0..500 {
            let dice = game.roll_dice();
            assert_eq!(dice.len(), DICE_COUNT);
            assert!(dice.iter().all(|d| (1..=6).contains(d)));
            assert_eq!(game.dice(), &dice);
            assert_eq!(game.correct_answer(), score_dice(&dice));
            assert!(game.correct_answer() <= 24);
        }
    }

    #[test]
    fn test_roll_dice_does_not_leak_previous_answer() {
        let (mut game, _) = game_with_cues(1);
        game.force_dice([5; DICE_COUNT]);
        assert_eq!(game.correct_answer(), 24);
        game.force_dice([6; DICE_COUNT]);
        assert_eq!(game.correct_answer(), 0);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let (mut a, _) = game_with_cues(99);
        let (mut b, _) = game_with_cues(99);
        for _ in 0..20 {
            assert_eq!(a.roll_dice(), b.roll_dice());
        }
    }

    #[test]
    fn test_correct_answer_increments_streak() {
        let (mut game, cues) = game_with_cues(3);
        game.force_dice([3, 5, 1, 1, 1, 1]);
        assert_eq!(game.correct_answer(), 6);

        assert!(game.check_answer(6));
        assert_eq!(game.current_streak(), 1);
        assert!(game.check_answer(6));
        assert_eq!(game.current_streak(), 2);
        assert_eq!(cues.played(), vec![Cue::Correct, Cue::Correct]);
    }

    #[test]
    fn test_check_answer_does_not_reroll() {
        let (mut game, _) = game_with_cues(3);
        let dice = game.roll_dice();
        game.check_answer(game.correct_answer());
        game.check_answer(99);
        assert_eq!(game.dice(), &dice);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let (mut game, cues) = game_with_cues(3);
        game.force_dice([3; DICE_COUNT]);
        for _ in 0..4 {
            assert!(game.check_answer(12));
        }
        assert_eq!(game.current_streak(), 4);

        assert!(!game.check_answer(5));
        assert_eq!(game.current_streak(), 0);
        assert_eq!(cues.played().last(), Some(&Cue::Wrong));
    }

    #[test]
    fn test_wrong_answer_from_zero_streak() {
        let (mut game, _) = game_with_cues(3);
        game.force_dice([6; DICE_COUNT]);
        assert!(!game.check_answer(1));
        assert_eq!(game.current_streak(), 0);
    }

    #[test]
    fn test_best_streak_survives_miss() {
        let (mut game, _) = game_with_cues(3);
        game.force_dice([3, 3, 1, 1, 1, 1]);
        game.check_answer(4);
        game.check_answer(4);
        game.check_answer(0);
        game.check_answer(4);
        assert_eq!(game.current_streak(), 1);
        assert_eq!(game.best_streak(), 2);
    }

    #[test]
    fn test_reset_streak() {
        let (mut game, _) = game_with_cues(3);
        game.force_dice([6; DICE_COUNT]);
        game.check_answer(0);
        game.reset_streak();
        assert_eq!(game.current_streak(), 0);
        game.reset_streak();
        assert_eq!(game.current_streak(), 0);
    }
}

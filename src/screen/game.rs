//! Game Screen
//!
//! Shows the current roll and collects the player's guess.
//!
//! # Controls
//!
//! - `0`-`9` type the guess
//! - Backspace deletes the last digit
//! - Enter submits; every submission rolls new dice

use super::{Screen, ScreenAction};
use crate::config::GameConfig;
use crate::game::GameLogic;
use crate::input::Key;
use crate::render::{centered_x, Surface, TextStyle};
use crate::text::text_width;

pub const INSTRUCTIONS: &str = "Enter your answer using your keyboard. Press enter to submit.";

/// Digits accepted before further input is dropped; keeps the guess within `u32`
pub const MAX_INPUT_DIGITS: usize = 9;

const MARGIN: i32 = 25;
const DICE_X: i32 = 181;
const DICE_Y: i32 = 250;
const DICE_SPACING: i32 = 75;
const INSTRUCTIONS_Y: i32 = 320;
const INPUT_Y: i32 = 350;

/// Digits typed for the current guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an ASCII digit; anything else, or a full buffer, is ignored
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.text.len() >= MAX_INPUT_DIGITS {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parses the buffer as a guess, `None` when empty or unparsable
    pub fn value(&self) -> Option<u32> {
        self.text.parse().ok()
    }
}

pub struct GameScreen {
    logic: GameLogic,
    input: InputBuffer,
    text_style: TextStyle,
    input_style: TextStyle,
}

impl GameScreen {
    /// Takes ownership of `logic` and rolls the first set of dice
    pub fn new(mut logic: GameLogic, config: &GameConfig) -> Self {
        logic.roll_dice();
        GameScreen {
            logic,
            input: InputBuffer::new(),
            text_style: TextStyle::new(config.text_color.into(), 2),
            input_style: TextStyle::new(config.input_color.into(), 3),
        }
    }

    #[cfg(test)]
    pub fn logic(&self) -> &GameLogic {
        &self.logic
    }

    #[cfg(test)]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    fn submit(&mut self) {
        if self.input.is_empty() {
            return;
        }

        match self.input.value() {
            Some(guess) => {
                let answer = self.logic.correct_answer();
                if self.logic.check_answer(guess) {
                    log::info!("Correct! {} petals, streak {}", answer, self.logic.current_streak());
                } else {
                    log::info!("Wrong: guessed {}, answer was {}", guess, answer);
                    self.logic.reset_streak();
                }
                self.logic.roll_dice();
            }
            None => log::warn!("Discarding unparsable guess {:?}", self.input.as_str()),
        }

        self.input.clear();
    }
}

impl Screen for GameScreen {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        let width = surface.width() as i32;
        let scale = self.text_style.scale;

        // Streak counters, right-aligned
        let streak_text = format!("Streak: {}", self.logic.current_streak());
        let streak_x = width - text_width(&streak_text, scale) as i32 - MARGIN;
        surface.draw_text(&streak_text, streak_x, MARGIN, self.text_style)?;

        let best_text = format!("Best: {}", self.logic.best_streak());
        let best_x = width - text_width(&best_text, scale) as i32 - MARGIN;
        surface.draw_text(&best_text, best_x, MARGIN + 20, self.text_style)?;

        for (i, &face) in self.logic.dice().iter().enumerate() {
            surface.draw_die(face, DICE_X + i as i32 * DICE_SPACING, DICE_Y)?;
        }

        let x = centered_x(surface, INSTRUCTIONS, scale);
        surface.draw_text(INSTRUCTIONS, x, INSTRUCTIONS_Y, self.text_style)?;

        if !self.input.is_empty() {
            let text = self.input.as_str();
            let x = centered_x(surface, text, self.input_style.scale);
            surface.draw_text(text, x, INPUT_Y, self.input_style)?;
        }

        Ok(())
    }

    fn handle_key(&mut self, key: Key) -> ScreenAction {
        match key {
            Key::Backspace => self.input.pop(),
            Key::Submit => self.submit(),
            Key::Digit(c) => {
                if !self.input.push(c) {
                    log::debug!("Input full, dropping {:?}", c);
                }
            }
            Key::Space | Key::Other => {}
        }
        ScreenAction::Stay
    }
}

//! Welcome Screen
//!
//! Title card shown at startup. Space starts the game.

use super::{Screen, ScreenAction, ScreenId};
use crate::config::GameConfig;
use crate::input::Key;
use crate::render::{centered_x, Surface, TextStyle};

pub const TITLE: &str = "Petals Around the Rose";
pub const SUBTITLE: &str = "the worst thing i have ever played";
pub const PROMPT: &str = "Press space to play.";

pub struct WelcomeScreen {
    title_style: TextStyle,
    body_style: TextStyle,
}

impl WelcomeScreen {
    pub fn new(config: &GameConfig) -> Self {
        WelcomeScreen {
            title_style: TextStyle::new(config.text_color.into(), 4),
            body_style: TextStyle::new(config.text_color.into(), 2),
        }
    }
}

impl Screen for WelcomeScreen {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        let lines = [
            (TITLE, self.title_style, 200),
            (SUBTITLE, self.body_style, 250),
            (PROMPT, self.body_style, 300),
        ];

        for (text, style, y) in lines {
            let x = centered_x(surface, text, style.scale);
            surface.draw_text(text, x, y, style)?;
        }

        Ok(())
    }

    fn handle_key(&mut self, key: Key) -> ScreenAction {
        match key {
            Key::Space => ScreenAction::Navigate(ScreenId::Game),
            _ => ScreenAction::Stay,
        }
    }
}

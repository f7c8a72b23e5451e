//! Screen System
//!
//! The game is a stack-free set of full-window screens. Exactly one is
//! active at a time; it receives key input and is drawn every frame.
//!
//! # Available Screens
//!
//! - [`WelcomeScreen`] - Title card, space starts the game
//! - [`GameScreen`] - Dice, answer input and streak counter
//! - [`GameOverScreen`] - Placeholder, nothing navigates here yet
//!
//! # Example Usage
//!
//! ```rust
//! let mut screens = ScreenManager::new();
//! screens.register_screen(ScreenId::Welcome, Box::new(WelcomeScreen::new(&config)));
//! screens.register_screen(ScreenId::Game, Box::new(GameScreen::new(logic, &config)));
//!
//! // Input
//! screens.handle_key(Key::Space)?;
//!
//! // Render
//! screens.draw(&mut surface)?;
//! ```

pub mod error;
pub mod game;
pub mod game_over;
pub mod manager;
pub mod welcome;

pub use error::ScreenError;
pub use game::GameScreen;
pub use game_over::GameOverScreen;
pub use manager::ScreenManager;
pub use welcome::WelcomeScreen;

use crate::input::Key;
use crate::render::Surface;
use std::fmt;

/// Identity of a registered screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Welcome,
    Game,
    GameOver,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ScreenId::Welcome => "Welcome",
            ScreenId::Game => "Game",
            ScreenId::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// What a screen wants the manager to do after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Stay,
    Navigate(ScreenId),
}

pub trait Screen {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String>;

    /// Screens without input ignore every key
    fn handle_key(&mut self, _key: Key) -> ScreenAction {
        ScreenAction::Stay
    }
}

use super::Screen;
use crate::render::Surface;

/// Placeholder for an end-of-run screen
///
/// Registered so the id is valid, but no transition leads here yet.
#[derive(Debug, Default)]
pub struct GameOverScreen;

impl Screen for GameOverScreen {
    fn draw(&self, _surface: &mut dyn Surface) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::screen::ScreenAction;
    use crate::testing::RecordingSurface;

    #[test]
    fn test_stub_draws_nothing_and_ignores_keys() {
        let mut screen = GameOverScreen;
        let mut surface = RecordingSurface::new(800, 600);
        screen.draw(&mut surface).unwrap();
        assert!(surface.calls.is_empty());
        assert_eq!(screen.handle_key(Key::Space), ScreenAction::Stay);
    }
}

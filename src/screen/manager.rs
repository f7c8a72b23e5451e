use super::{Screen, ScreenAction, ScreenError, ScreenId};
use crate::input::Key;
use crate::render::Surface;

/// Owns every screen and tracks which one is active
///
/// Screens are kept in registration order. Until something navigates, the
/// first registered screen is treated as active.
pub struct ScreenManager {
    screens: Vec<(ScreenId, Box<dyn Screen>)>,
    active: Option<ScreenId>,
}

impl ScreenManager {
    pub fn new() -> Self {
        ScreenManager {
            screens: Vec::new(),
            active: None,
        }
    }

    /// Registers a screen, replacing any screen already under `id`
    pub fn register_screen(&mut self, id: ScreenId, screen: Box<dyn Screen>) {
        match self.screens.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = screen,
            None => self.screens.push((id, screen)),
        }
    }

    /// Makes `id` the active screen
    ///
    /// Fails without touching the active screen if `id` was never registered.
    pub fn navigate(&mut self, id: ScreenId) -> Result<(), ScreenError> {
        if !self.contains(id) {
            return Err(ScreenError::UnknownScreen(id));
        }
        if self.active != Some(id) {
            log::info!("Screen: {:?} -> {}", self.active, id);
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn active(&self) -> Option<ScreenId> {
        self.active
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.screens.iter().any(|(existing, _)| *existing == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Draws the active screen; does nothing when no screen is registered
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), String> {
        match self.active_index() {
            Some(index) => self.screens[index].1.draw(surface),
            None => Ok(()),
        }
    }

    /// Forwards a key to the active screen and follows any navigation it asks for
    pub fn handle_key(&mut self, key: Key) -> Result<(), ScreenError> {
        let Some(index) = self.active_index() else {
            return Ok(());
        };

        match self.screens[index].1.handle_key(key) {
            ScreenAction::Stay => Ok(()),
            ScreenAction::Navigate(id) => self.navigate(id),
        }
    }

    /// Index of the active screen, falling back to the first registered one
    fn active_index(&mut self) -> Option<usize> {
        let (first, _) = self.screens.first()?;
        let id = *self.active.get_or_insert(*first);
        self.screens.iter().position(|(existing, _)| *existing == id)
    }
}

impl Default for ScreenManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextStyle;
    use crate::testing::RecordingSurface;
    use sdl2::pixels::Color;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Draws its label, records keys, optionally navigates on any key
    struct LabelScreen {
        label: &'static str,
        next: Option<ScreenId>,
        keys: Rc<RefCell<Vec<Key>>>,
    }

    impl LabelScreen {
        fn boxed(label: &'static str) -> Box<dyn Screen> {
            Box::new(LabelScreen { label, next: None, keys: Rc::default() })
        }
    }

    impl Screen for LabelScreen {
        fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
            surface.draw_text(self.label, 0, 0, TextStyle::new(Color::RGB(0, 0, 0), 1))
        }

        fn handle_key(&mut self, key: Key) -> ScreenAction {
            self.keys.borrow_mut().push(key);
            match self.next {
                Some(id) => ScreenAction::Navigate(id),
                None => ScreenAction::Stay,
            }
        }
    }

    fn drawn(manager: &mut ScreenManager) -> Vec<String> {
        let mut surface = RecordingSurface::new(800, 600);
        manager.draw(&mut surface).unwrap();
        surface.texts().into_iter().map(String::from).collect()
    }

    #[test]
    fn test_draw_empty_registry_is_noop() {
        let mut manager = ScreenManager::new();
        let mut surface = RecordingSurface::new(800, 600);
        assert!(manager.draw(&mut surface).is_ok());
        assert!(surface.calls.is_empty());
        assert_eq!(manager.active(), None);
    }

    #[test]
    fn test_draw_defaults_to_first_registered() {
        let mut manager = ScreenManager::new();
        manager.register_screen(ScreenId::Game, LabelScreen::boxed("game"));
        manager.register_screen(ScreenId::Welcome, LabelScreen::boxed("welcome"));

        assert_eq!(drawn(&mut manager), vec!["game"]);
        assert_eq!(manager.active(), Some(ScreenId::Game));
    }

    #[test]
    fn test_navigate_switches_drawn_screen() {
        let mut manager = ScreenManager::new();
        manager.register_screen(ScreenId::Welcome, LabelScreen::boxed("welcome"));
        manager.register_screen(ScreenId::Game, LabelScreen::boxed("game"));

        manager.navigate(ScreenId::Game).unwrap();
        assert_eq!(manager.active(), Some(ScreenId::Game));
        assert_eq!(drawn(&mut manager), vec!["game"]);
    }

    #[test]
    fn test_navigate_unknown_screen_fails() {
        let mut manager = ScreenManager::new();
        manager.register_screen(ScreenId::Welcome, LabelScreen::boxed("welcome"));
        manager.navigate(ScreenId::Welcome).unwrap();

        let result = manager.navigate(ScreenId::GameOver);
        assert_eq!(result, Err(ScreenError::UnknownScreen(ScreenId::GameOver)));
        assert_eq!(manager.active(), Some(ScreenId::Welcome));
    }

    #[test]
    fn test_navigate_unknown_before_any_active() {
        let mut manager = ScreenManager::new();
        assert!(manager.navigate(ScreenId::Game).is_err());
        assert_eq!(manager.active(), None);
    }

    #[test]
    fn test_register_overwrites_in_place() {
        let mut manager = ScreenManager::new();
        manager.register_screen(ScreenId::Welcome, LabelScreen::boxed("old"));
        manager.register_screen(ScreenId::Game, LabelScreen::boxed("game"));
        manager.register_screen(ScreenId::Welcome, LabelScreen::boxed("new"));

        assert_eq!(manager.len(), 2);
        // Still first in order, so still the default
        assert_eq!(drawn(&mut manager), vec!["new"]);
    }

    #[test]
    fn test_handle_key_reaches_active_screen() {
        let keys = Rc::new(RefCell::new(Vec::new()));
        let mut manager = ScreenManager::new();
        manager.register_screen(ScreenId::Welcome, LabelScreen::boxed("welcome"));
        manager.register_screen(
            ScreenId::Game,
            Box::new(LabelScreen { label: "game", next: None, keys: keys.clone() }),
        );
        manager.navigate(ScreenId::Game).unwrap();

        manager.handle_key(Key::Digit('4')).unwrap();
        assert_eq!(*keys.borrow(), vec![Key::Digit('4')]);
    }

    #[test]
    fn test_handle_key_follows_navigation() {
        let mut manager = ScreenManager::new();
        manager.register_screen(
            ScreenId::Welcome,
            Box::new(LabelScreen { label: "welcome", next: Some(ScreenId::Game), keys: Rc::default() }),
        );
        manager.register_screen(ScreenId::Game, LabelScreen::boxed("game"));

        manager.handle_key(Key::Space).unwrap();
        assert_eq!(manager.active(), Some(ScreenId::Game));
    }

    #[test]
    fn test_handle_key_bad_navigation_reports_error() {
        let mut manager = ScreenManager::new();
        manager.register_screen(
            ScreenId::Welcome,
            Box::new(LabelScreen { label: "welcome", next: Some(ScreenId::GameOver), keys: Rc::default() }),
        );

        assert!(manager.handle_key(Key::Space).is_err());
        assert_eq!(manager.active(), Some(ScreenId::Welcome));
    }

    #[test]
    fn test_handle_key_empty_registry() {
        let mut manager = ScreenManager::new();
        assert!(manager.handle_key(Key::Submit).is_ok());
    }
}

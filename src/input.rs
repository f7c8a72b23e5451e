use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::EventPump;

/// Keys the screens care about
///
/// Raw SDL2 keycodes are folded into this small set so screens can be
/// driven from tests without an SDL2 event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    /// Return or keypad Enter
    Submit,
    Space,
    /// '0'..='9' as printed by the number row or keypad
    Digit(char),
    Other,
}

/// One frame-loop input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Key(Key),
}

impl Key {
    /// Folds a key press into a [`Key`], honoring the modifiers that change
    /// what the key prints
    ///
    /// Shifted number keys print symbols, and keypad digits only print with
    /// NumLock on; both come back as [`Key::Other`].
    pub fn from_keydown(keycode: Keycode, keymod: Mod) -> Self {
        match keycode {
            Keycode::Backspace => Key::Backspace,
            Keycode::Return | Keycode::Return2 | Keycode::KpEnter => Key::Submit,
            Keycode::Space => Key::Space,
            _ => match digit_of(keycode) {
                Some((c, keypad)) if prints_digit(keypad, keymod) => Key::Digit(c),
                _ => Key::Other,
            },
        }
    }
}

/// Digit on a number key, and whether the key is on the keypad
fn digit_of(keycode: Keycode) -> Option<(char, bool)> {
    let digit = match keycode {
        Keycode::Num0 => ('0', false),
        Keycode::Num1 => ('1', false),
        Keycode::Num2 => ('2', false),
        Keycode::Num3 => ('3', false),
        Keycode::Num4 => ('4', false),
        Keycode::Num5 => ('5', false),
        Keycode::Num6 => ('6', false),
        Keycode::Num7 => ('7', false),
        Keycode::Num8 => ('8', false),
        Keycode::Num9 => ('9', false),
        Keycode::Kp0 => ('0', true),
        Keycode::Kp1 => ('1', true),
        Keycode::Kp2 => ('2', true),
        Keycode::Kp3 => ('3', true),
        Keycode::Kp4 => ('4', true),
        Keycode::Kp5 => ('5', true),
        Keycode::Kp6 => ('6', true),
        Keycode::Kp7 => ('7', true),
        Keycode::Kp8 => ('8', true),
        Keycode::Kp9 => ('9', true),
        _ => return None,
    };
    Some(digit)
}

fn prints_digit(keypad: bool, keymod: Mod) -> bool {
    if keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD) {
        return false;
    }
    !keypad || keymod.contains(Mod::NUMMOD)
}

/// Translates a single SDL2 event, `None` for events the game ignores
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown { keycode: Some(Keycode::Escape), .. } => Some(InputEvent::Quit),
        // Held keys would otherwise spam digits into the answer
        Event::KeyDown { repeat: true, .. } => None,
        Event::KeyDown { keycode: Some(keycode), keymod, .. } => {
            Some(InputEvent::Key(Key::from_keydown(*keycode, *keymod)))
        }
        _ => None,
    }
}

/// Drains every pending SDL2 event for this frame
pub fn poll_events(event_pump: &mut EventPump) -> Vec<InputEvent> {
    event_pump.poll_iter().filter_map(|event| translate_event(&event)).collect()
}

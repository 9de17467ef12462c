//! Translation of crossterm key events into controller keys.

use crate::app::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a terminal key event to a [`Key`].
///
/// Only presses are reported. Ctrl-H is an alias for Backspace; every other
/// control or alt chord is ignored.
#[must_use]
pub fn decode(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let chord = event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    let key = match event.code {
        KeyCode::Char('h') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Backspace,
        KeyCode::Char(_) if chord => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_and_shifted_characters() {
        assert_eq!(decode(press(KeyCode::Char('j'), KeyModifiers::NONE)), Some(Key::Char('j')));
        assert_eq!(decode(press(KeyCode::Char('C'), KeyModifiers::SHIFT)), Some(Key::Char('C')));
    }

    #[test]
    fn ctrl_h_is_backspace() {
        assert_eq!(decode(press(KeyCode::Char('h'), KeyModifiers::CONTROL)), Some(Key::Backspace));
        assert_eq!(decode(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(decode(event), None);
    }

    #[test]
    fn special_keys() {
        assert_eq!(decode(press(KeyCode::PageDown, KeyModifiers::NONE)), Some(Key::PageDown));
        assert_eq!(decode(press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }
}

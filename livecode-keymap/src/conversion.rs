use std::collections::VecDeque;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::key::{Key, KeyCode, KeyModifier};

/// Splits a binding like `<C-r>x` into keys. Unparsable segments are dropped.
pub fn from_keycode_string(keycodes: &str) -> VecDeque<Key> {
    let regex = regex::Regex::new(r"<[^>]*>|.").expect("Failed to compile regex");
    regex
        .find_iter(keycodes)
        .filter_map(|segment| Key::from_keycode_string(segment.as_str()))
        .collect()
}

/// Converts a crossterm key press. Releases and repeats resolve to `None`.
pub fn to_key(event: &KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let mut modifiers: Vec<_> = event
        .modifiers
        .iter_names()
        .filter_map(|(name, _)| to_modifier(name))
        .collect();

    let code = match event.code {
        event::KeyCode::BackTab => {
            push_shift(&mut modifiers);
            KeyCode::Tab
        }
        event::KeyCode::Char(c) => {
            // NOTE: some terminals report uppercase chars without shift
            if c.is_ascii_uppercase() {
                push_shift(&mut modifiers);
            }
            KeyCode::from_char(c)
        }
        code => to_keycode(code)?,
    };

    Some(Key::new(code, modifiers))
}

fn to_keycode(code: event::KeyCode) -> Option<KeyCode> {
    let code = match code {
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::Up => KeyCode::Up,
        _ => return None,
    };

    Some(code)
}

fn push_shift(modifiers: &mut Vec<KeyModifier>) {
    if !modifiers.contains(&KeyModifier::Shift) {
        modifiers.push(KeyModifier::Shift);
    }
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" | "META" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "HYPER" | "SUPER" => Some(KeyModifier::Command),
        "SHIFT" => Some(KeyModifier::Shift),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn from_keycode_string_empty() {
        assert!(from_keycode_string("").is_empty());
    }

    #[test]
    fn from_keycode_string_binding() {
        let keys = from_keycode_string("<C-r>X<F5>");

        assert_eq!(
            VecDeque::from(vec![
                Key::new(KeyCode::from_char('r'), vec![KeyModifier::Ctrl]),
                Key::new(KeyCode::from_char('x'), vec![KeyModifier::Shift]),
                Key::new(KeyCode::F(5), vec![]),
            ]),
            keys
        );
    }

    #[test]
    fn from_keycode_string_drops_unknown_segments() {
        let keys = from_keycode_string("<Invalid><cr>");

        assert_eq!(VecDeque::from(vec![Key::new(KeyCode::Enter, vec![])]), keys);
    }

    #[test]
    fn to_key_uppercase_char_gets_shift() {
        let event = KeyEvent::new(event::KeyCode::Char('A'), KeyModifiers::NONE);
        let key = to_key(&event).expect("key expected");

        assert_eq!(KeyCode::Char('a'), key.code);
        assert_eq!(vec![KeyModifier::Shift], key.modifiers);
        assert_eq!(Some('A'), key.to_char());
    }

    #[test]
    fn to_key_backtab_is_shift_tab() {
        let event = KeyEvent::new(event::KeyCode::BackTab, KeyModifiers::SHIFT);
        let key = to_key(&event).expect("key expected");

        assert_eq!(Key::new(KeyCode::Tab, vec![KeyModifier::Shift]), key);
    }

    #[test]
    fn to_key_ctrl_home() {
        let event = KeyEvent::new(event::KeyCode::Home, KeyModifiers::CONTROL);

        assert_eq!(
            Some(Key::new(KeyCode::Home, vec![KeyModifier::Ctrl])),
            to_key(&event)
        );
    }

    #[test]
    fn to_key_ignores_release() {
        let event = KeyEvent::new_with_kind(
            event::KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        assert_eq!(None, to_key(&event));
    }

    #[test]
    fn to_key_ignores_unsupported_codes() {
        let event = KeyEvent::new(event::KeyCode::Insert, KeyModifiers::NONE);

        assert_eq!(None, to_key(&event));
    }
}

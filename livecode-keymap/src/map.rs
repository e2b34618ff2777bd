use std::collections::HashMap;

use livecode_buffer::message::{BufferMessage, CursorDirection, TextModification};

use crate::{
    conversion,
    key::{Key, KeyCode, KeyModifier},
    message::{modification, motion, KeymapMessage},
    KeyMapError,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, KeymapMessage>,
}

impl KeyMap {
    pub fn add_mapping(&mut self, keycodes: &str, command: &str) -> Result<(), KeyMapError> {
        let mut keys = conversion::from_keycode_string(keycodes);
        let key = match (keys.pop_front(), keys.is_empty()) {
            (Some(key), true) => key,
            _ => return Err(KeyMapError::InvalidKeySequence(keycodes.to_string())),
        };

        let message: KeymapMessage = command.parse()?;

        tracing::debug!("mapping {} to {:?}", key, message);
        self.mappings.insert(key, message);

        Ok(())
    }

    pub fn get(&self, key: &Key) -> Option<&KeymapMessage> {
        self.mappings.get(key)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        add_mapping(
            &mut mappings,
            vec![
                (
                    Key::new(KeyCode::Enter, vec![]),
                    modification(TextModification::InsertLineBreak),
                ),
                (
                    Key::new(KeyCode::Enter, vec![KeyModifier::Shift]),
                    KeymapMessage::ExecuteBuffer,
                ),
                (Key::new(KeyCode::F(5), vec![]), KeymapMessage::ExecuteBuffer),
                (Key::new(KeyCode::Left, vec![]), motion(CursorDirection::Left)),
                (Key::new(KeyCode::Right, vec![]), motion(CursorDirection::Right)),
                (Key::new(KeyCode::Up, vec![]), motion(CursorDirection::Up)),
                (Key::new(KeyCode::Down, vec![]), motion(CursorDirection::Down)),
                (
                    Key::new(KeyCode::Tab, vec![]),
                    modification(TextModification::Indent),
                ),
                (
                    Key::new(KeyCode::Tab, vec![KeyModifier::Shift]),
                    modification(TextModification::Outdent),
                ),
                (
                    Key::new(KeyCode::Tab, vec![KeyModifier::Ctrl]),
                    KeymapMessage::Buffer(BufferMessage::ToggleHidden),
                ),
                (
                    Key::new(KeyCode::from_char('t'), vec![KeyModifier::Ctrl]),
                    KeymapMessage::Buffer(BufferMessage::ToggleHidden),
                ),
                (
                    Key::new(KeyCode::Backspace, vec![]),
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    Key::new(KeyCode::Delete, vec![]),
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (Key::new(KeyCode::End, vec![]), motion(CursorDirection::LineEnd)),
                (
                    Key::new(KeyCode::Home, vec![]),
                    motion(CursorDirection::LineStart),
                ),
                (
                    Key::new(KeyCode::End, vec![KeyModifier::Ctrl]),
                    motion(CursorDirection::Bottom),
                ),
                (
                    Key::new(KeyCode::Home, vec![KeyModifier::Ctrl]),
                    motion(CursorDirection::Top),
                ),
                (
                    Key::new(KeyCode::PageDown, vec![]),
                    motion(CursorDirection::PageDown),
                ),
                (
                    Key::new(KeyCode::PageUp, vec![]),
                    motion(CursorDirection::PageUp),
                ),
                (
                    Key::new(KeyCode::from_char('n'), vec![KeyModifier::Ctrl]),
                    KeymapMessage::NewFile,
                ),
                (
                    Key::new(KeyCode::from_char('s'), vec![KeyModifier::Ctrl]),
                    KeymapMessage::SaveFile,
                ),
                (
                    Key::new(KeyCode::from_char('o'), vec![KeyModifier::Ctrl]),
                    KeymapMessage::LoadFile,
                ),
                (
                    Key::new(KeyCode::from_char('q'), vec![KeyModifier::Ctrl]),
                    KeymapMessage::Quit,
                ),
            ],
        );

        Self { mappings }
    }
}

fn add_mapping(mappings: &mut HashMap<Key, KeymapMessage>, keys: Vec<(Key, KeymapMessage)>) {
    for (key, message) in keys {
        mappings.insert(key, message);
    }
}

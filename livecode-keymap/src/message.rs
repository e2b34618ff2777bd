use std::str::FromStr;

use livecode_buffer::message::{BufferMessage, CursorDirection, TextModification};

use crate::KeyMapError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    Buffer(BufferMessage),
    ExecuteBuffer,
    LoadFile,
    NewFile,
    Quit,
    SaveFile,
}

impl FromStr for KeymapMessage {
    type Err = KeyMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let message = match s.trim().to_ascii_lowercase().as_str() {
            "backspace" => modification(TextModification::DeleteCharBeforeCursor),
            "bottom" => motion(CursorDirection::Bottom),
            "delete" => modification(TextModification::DeleteCharOnCursor),
            "down" => motion(CursorDirection::Down),
            "end" => motion(CursorDirection::LineEnd),
            "execute" => KeymapMessage::ExecuteBuffer,
            "hide" => KeymapMessage::Buffer(BufferMessage::ToggleHidden),
            "home" => motion(CursorDirection::LineStart),
            "indent" => modification(TextModification::Indent),
            "left" => motion(CursorDirection::Left),
            "load" => KeymapMessage::LoadFile,
            "new" => KeymapMessage::NewFile,
            "newline" => modification(TextModification::InsertLineBreak),
            "outdent" => modification(TextModification::Outdent),
            "pagedown" => motion(CursorDirection::PageDown),
            "pageup" => motion(CursorDirection::PageUp),
            "quit" => KeymapMessage::Quit,
            "right" => motion(CursorDirection::Right),
            "save" => KeymapMessage::SaveFile,
            "top" => motion(CursorDirection::Top),
            "up" => motion(CursorDirection::Up),
            _ => return Err(KeyMapError::UnknownCommand(s.to_string())),
        };

        Ok(message)
    }
}

pub(crate) fn modification(modification: TextModification) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::Modification(modification))
}

pub(crate) fn motion(direction: CursorDirection) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::MoveCursor(1, direction))
}

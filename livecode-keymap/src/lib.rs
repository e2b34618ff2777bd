use key::Key;
use livecode_buffer::message::{BufferMessage, TextModification};
use map::KeyMap;
use message::KeymapMessage;

pub mod conversion;
pub mod key;
mod map;
pub mod message;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Key sequence {0} must resolve to exactly one key.")]
    InvalidKeySequence(String),
    #[error("Command {0} is unknown.")]
    UnknownCommand(String),
}

#[derive(Debug, Default)]
pub struct MessageResolver {
    map: KeyMap,
}

impl MessageResolver {
    pub fn add_mapping(&mut self, keycodes: &str, command: &str) -> Result<(), KeyMapError> {
        self.map.add_mapping(keycodes, command)
    }

    /// Resolves a key into messages. Mapped keys win, unmapped keys typing a
    /// char pass through as insert. Whether the char is legal for the buffer
    /// is decided by the buffer.
    pub fn add_key(&mut self, key: Key) -> Vec<KeymapMessage> {
        if let Some(message) = self.map.get(&key) {
            return vec![message.clone()];
        }

        match key.to_char() {
            Some(c) => vec![KeymapMessage::Buffer(BufferMessage::Modification(
                TextModification::Insert(c),
            ))],
            None => {
                tracing::trace!("no binding found for key: {}", key);
                Vec::new()
            }
        }
    }
}

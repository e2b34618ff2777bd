use message::BufferMessage;
use model::{viewport::ViewPort, Buffer, BufferResult};

pub use engine::TextBufferEngine;

pub mod ansi;
mod engine;
pub mod hook;
pub mod message;
pub mod model;
mod update;
mod view;

pub fn update(
    viewport: &mut ViewPort,
    buffer: &mut Buffer,
    messages: &[BufferMessage],
) -> Vec<BufferResult> {
    messages
        .iter()
        .flat_map(|message| update::update_buffer(viewport, buffer, message))
        .collect()
}

pub fn view(viewport: &ViewPort, buffer: &Buffer) -> String {
    view::view(viewport, buffer)
}

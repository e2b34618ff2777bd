use crate::{
    message::BufferMessage,
    model::{viewport::ViewPort, Buffer, BufferResult},
};

mod cursor;
mod modification;

pub fn update_buffer(
    viewport: &mut ViewPort,
    buffer: &mut Buffer,
    message: &BufferMessage,
) -> Vec<BufferResult> {
    tracing::debug!("handling buffer message: {:?}", message);

    match message {
        BufferMessage::Modification(modification) => modification::update(buffer, modification),
        BufferMessage::MoveCursor(count, direction) => {
            cursor::update_by_direction(viewport, buffer, count, direction);
            Vec::new()
        }
        BufferMessage::ResetContent => {
            buffer.set_content(Vec::new());
            Vec::new()
        }
        BufferMessage::SetContent(content) => {
            buffer.set_content(content.to_vec());
            Vec::new()
        }
        BufferMessage::ToggleHidden => {
            viewport.hidden = !viewport.hidden;
            Vec::new()
        }
    }
}

use std::path::PathBuf;

use livecode_keymap::message::KeymapMessage;

use crate::{
    action::Action,
    error::AppError,
    event::{Envelope, Message},
    model::{Model, PrintContent},
};

pub fn update_model(model: &mut Model, envelope: Envelope) -> Vec<Action> {
    envelope
        .messages
        .into_iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

fn update_with_message(model: &mut Model, message: Message) -> Vec<Action> {
    match message {
        Message::Keymap(message) => update_with_keymap_message(model, message),
        Message::Error(error) => {
            model.status = Some(PrintContent::Error(error));
            Vec::new()
        }
        Message::Executed(output) => {
            model.output = output;
            Vec::new()
        }
        Message::Resize(_, _) => Vec::new(),
    }
}

fn update_with_keymap_message(model: &mut Model, message: KeymapMessage) -> Vec<Action> {
    match message {
        KeymapMessage::Buffer(message) => {
            model.engine.update(&message);
            Vec::new()
        }
        KeymapMessage::ExecuteBuffer => {
            model.engine.execute();
            Vec::new()
        }
        KeymapMessage::LoadFile => match get_path(model) {
            Ok(path) => vec![Action::Load(path)],
            Err(error) => print_error(model, error),
        },
        KeymapMessage::NewFile => {
            model.engine.reset();
            model.output.clear();
            Vec::new()
        }
        KeymapMessage::Quit => vec![Action::Quit],
        KeymapMessage::SaveFile => match get_path(model) {
            Ok(path) => vec![Action::Save(path, model.engine.lines())],
            Err(error) => print_error(model, error),
        },
    }
}

fn get_path(model: &Model) -> Result<PathBuf, AppError> {
    model.path.clone().ok_or(AppError::MissingPath)
}

fn print_error(model: &mut Model, error: AppError) -> Vec<Action> {
    tracing::warn!("file operation rejected: {}", error);
    model.status = Some(PrintContent::Error(error.to_string()));
    Vec::new()
}

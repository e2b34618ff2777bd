use std::path::PathBuf;

use livecode_buffer::TextBufferEngine;

#[derive(Debug, Default)]
pub struct Model {
    pub engine: TextBufferEngine,
    pub output: Vec<String>,
    pub path: Option<PathBuf>,
    pub status: Option<PrintContent>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrintContent {
    Error(String),
    Information(String),
}

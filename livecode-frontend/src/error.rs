use livecode_keymap::KeyMapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Command execution failed: {0}")]
    ExecutionFailed(String),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Key binding invalid")]
    KeyMapInvalid(#[from] KeyMapError),
    #[error("No file name set")]
    MissingPath,
    #[error("Terminal operation failed")]
    TerminalOperationFailed(#[source] std::io::Error),
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),
}

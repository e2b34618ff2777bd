use std::path::PathBuf;

use livecode_buffer::model::viewport::ViewPort;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutorSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["-".to_string()],
        }
    }
}

#[derive(Debug)]
pub struct Settings {
    pub bindings: Vec<(String, String)>,
    pub executor: Option<ExecutorSettings>,
    pub startup_path: Option<PathBuf>,
    pub syntax: Option<String>,
    pub theme: String,
    pub viewport: ViewPort,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            executor: Some(ExecutorSettings::default()),
            startup_path: None,
            syntax: None,
            theme: "base16-ocean.dark".to_string(),
            viewport: ViewPort::default(),
        }
    }
}

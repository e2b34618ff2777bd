use crate::{
    ansi,
    hook::{Executor, Highlighter},
    message::{BufferMessage, CursorDirection, TextModification},
    model::{viewport::ViewPort, Buffer, BufferResult, Cursor},
};

/// Owns the buffer and its viewport configuration. Every message is applied
/// to completion and followed by a refresh of the display text, which is
/// never stale after a call returns.
pub struct TextBufferEngine {
    buffer: Buffer,
    display: String,
    executor: Option<Box<dyn Executor>>,
    highlighter: Option<Box<dyn Highlighter>>,
    viewport: ViewPort,
}

impl Default for TextBufferEngine {
    fn default() -> Self {
        Self::new(ViewPort::default())
    }
}

impl std::fmt::Debug for TextBufferEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBufferEngine")
            .field("buffer", &self.buffer)
            .field("executor", &self.executor.is_some())
            .field("highlighter", &self.highlighter.is_some())
            .field("viewport", &self.viewport)
            .finish()
    }
}

impl TextBufferEngine {
    pub fn new(viewport: ViewPort) -> Self {
        let mut engine = Self {
            buffer: Buffer::default(),
            display: String::new(),
            executor: None,
            highlighter: None,
            viewport,
        };

        engine.refresh();
        engine
    }

    pub fn register_executor(&mut self, executor: impl Executor + 'static) {
        self.executor = Some(Box::new(executor));
    }

    pub fn register_highlighter(&mut self, highlighter: impl Highlighter + 'static) {
        self.highlighter = Some(Box::new(highlighter));
        self.refresh();
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        self.buffer.cursor()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.to_snapshot()
    }

    pub fn viewport(&self) -> &ViewPort {
        &self.viewport
    }

    pub fn update(&mut self, message: &BufferMessage) {
        let results = crate::update(
            &mut self.viewport,
            &mut self.buffer,
            std::slice::from_ref(message),
        );

        self.refresh();

        for result in results {
            match result {
                BufferResult::Execute(lines) => self.run(lines),
            }
        }
    }

    pub fn execute(&mut self) {
        let lines = self.buffer.to_snapshot();
        self.run(lines);
    }

    pub fn load(&mut self, lines: Vec<String>) {
        self.update(&BufferMessage::SetContent(lines));
    }

    pub fn reset(&mut self) {
        self.update(&BufferMessage::ResetContent);
    }

    pub fn toggle_hidden(&mut self) {
        self.update(&BufferMessage::ToggleHidden);
    }

    pub fn insert_char(&mut self, c: char) {
        self.modify(TextModification::Insert(c));
    }

    pub fn delete(&mut self, backwards: bool) {
        if backwards {
            self.modify(TextModification::DeleteCharBeforeCursor);
        } else {
            self.modify(TextModification::DeleteCharOnCursor);
        }
    }

    pub fn newline(&mut self) {
        self.modify(TextModification::InsertLineBreak);
    }

    pub fn indent(&mut self, backwards: bool) {
        if backwards {
            self.modify(TextModification::Outdent);
        } else {
            self.modify(TextModification::Indent);
        }
    }

    pub fn move_char(&mut self, delta: isize) {
        let direction = if delta < 0 {
            CursorDirection::Left
        } else {
            CursorDirection::Right
        };

        self.move_cursor(delta.unsigned_abs(), direction);
    }

    pub fn move_line(&mut self, delta: isize) {
        let direction = if delta < 0 {
            CursorDirection::Up
        } else {
            CursorDirection::Down
        };

        self.move_cursor(delta.unsigned_abs(), direction);
    }

    pub fn scroll(&mut self, amount: isize) {
        let direction = if amount < 0 {
            CursorDirection::PageUp
        } else {
            CursorDirection::PageDown
        };

        self.move_cursor(amount.unsigned_abs(), direction);
    }

    pub fn scroll_max(&mut self, line: bool, end: bool) {
        let direction = match (line, end) {
            (true, true) => CursorDirection::LineEnd,
            (true, false) => CursorDirection::LineStart,
            (false, true) => CursorDirection::Bottom,
            (false, false) => CursorDirection::Top,
        };

        self.move_cursor(1, direction);
    }

    pub fn refresh(&mut self) {
        let text = crate::view(&self.viewport, &self.buffer);
        self.display = match &self.highlighter {
            Some(highlighter) => decorate(highlighter.as_ref(), text),
            None => text,
        };
    }

    fn modify(&mut self, modification: TextModification) {
        self.update(&BufferMessage::Modification(modification));
    }

    fn move_cursor(&mut self, count: usize, direction: CursorDirection) {
        self.update(&BufferMessage::MoveCursor(count, direction));
    }

    fn run(&mut self, lines: Vec<String>) {
        match &mut self.executor {
            Some(executor) => executor.run(lines),
            None => tracing::trace!("no executor registered, skipping run"),
        }
    }
}

fn decorate(highlighter: &dyn Highlighter, text: String) -> String {
    let decorated = highlighter.decorate(&text);
    if ansi::strip(&decorated) == text {
        decorated
    } else {
        tracing::warn!("highlighter changed display content, falling back to plain text");
        text
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::TextBufferEngine;
    use crate::model::viewport::ViewPort;

    fn get_engine_with_runs() -> (TextBufferEngine, Rc<RefCell<Vec<Vec<String>>>>) {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let captured = runs.clone();

        let mut engine = TextBufferEngine::new(ViewPort {
            show_line_numbers: false,
            ..Default::default()
        });
        engine.register_executor(move |lines: Vec<String>| captured.borrow_mut().push(lines));

        (engine, runs)
    }

    #[test]
    fn new_engine_displays_empty_line_with_cursor() {
        let engine = TextBufferEngine::default();

        assert_eq!("0   |\n", engine.display());
        assert_eq!(vec![String::new()], engine.lines());
    }

    #[test]
    fn display_refreshes_on_every_edit() {
        let (mut engine, _) = get_engine_with_runs();

        engine.insert_char('a');
        assert_eq!("a|\n", engine.display());

        engine.move_char(-1);
        assert_eq!("|a\n", engine.display());

        engine.toggle_hidden();
        assert_eq!("", engine.display());

        engine.insert_char('b');
        assert_eq!("", engine.display());
        assert_eq!(vec!["ba".to_string()], engine.lines());

        engine.toggle_hidden();
        assert_eq!("b|a\n", engine.display());
    }

    #[test]
    fn newline_runs_executor_with_snapshot() {
        let (mut engine, runs) = get_engine_with_runs();

        engine.insert_char('x');
        engine.newline();
        engine.insert_char('y');

        assert_eq!(
            vec![vec!["x".to_string(), String::new()]],
            runs.borrow().clone()
        );
        assert_eq!(vec!["x".to_string(), "y".to_string()], engine.lines());
    }

    #[test]
    fn execute_runs_executor_without_mutation() {
        let (mut engine, runs) = get_engine_with_runs();
        engine.load(vec!["a".to_string(), "b".to_string()]);

        engine.execute();

        assert_eq!(vec![vec!["a".to_string(), "b".to_string()]], *runs.borrow());
        assert_eq!(0, engine.cursor().vertical_index());
    }

    #[test]
    fn highlighter_decorates_display() {
        let mut engine = TextBufferEngine::new(ViewPort {
            show_line_numbers: false,
            ..Default::default()
        });
        engine.register_highlighter(|text: &str| format!("\x1b[1m{}\x1b[0m", text));

        engine.insert_char('a');

        assert_eq!("\x1b[1ma|\n\x1b[0m", engine.display());
    }

    #[test]
    fn highlighter_changing_content_is_ignored() {
        let mut engine = TextBufferEngine::new(ViewPort {
            show_line_numbers: false,
            ..Default::default()
        });
        engine.register_highlighter(|text: &str| text.replace('|', "#"));

        engine.insert_char('a');

        assert_eq!("a|\n", engine.display());
    }

    #[test]
    fn scroll_max_bottom_keeps_cursor_in_bounds() {
        let (mut engine, _) = get_engine_with_runs();
        engine.load(vec!["abc".to_string(), "d".to_string()]);
        engine.scroll_max(true, true);

        engine.scroll_max(false, true);

        assert_eq!(1, engine.cursor().vertical_index());
        assert_eq!(1, engine.cursor().horizontal_index());
        assert_eq!("abc\nd|\n", engine.display());
    }

    #[test]
    fn load_replaces_content_and_reset_clears_it() {
        let (mut engine, _) = get_engine_with_runs();
        engine.insert_char('z');

        engine.load(vec!["a".to_string(), "b".to_string()]);
        assert_eq!("|a\nb\n", engine.display());

        engine.reset();
        assert_eq!(vec![String::new()], engine.lines());
        assert_eq!("|\n", engine.display());
    }
}

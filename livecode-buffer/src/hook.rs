/// Decorates the display text, e.g. with ANSI escape sequences. Implementors
/// must only add markup: the text with all escape sequences removed has to
/// equal the input.
pub trait Highlighter {
    fn decorate(&self, text: &str) -> String;
}

impl<F> Highlighter for F
where
    F: Fn(&str) -> String,
{
    fn decorate(&self, text: &str) -> String {
        self(text)
    }
}

/// Post edit callback receiving an owned snapshot of all lines. Results are
/// not consumed by the engine.
pub trait Executor {
    fn run(&mut self, lines: Vec<String>);
}

impl<F> Executor for F
where
    F: FnMut(Vec<String>),
{
    fn run(&mut self, lines: Vec<String>) {
        self(lines)
    }
}

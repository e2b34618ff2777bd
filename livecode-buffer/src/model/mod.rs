use std::collections::BTreeSet;

pub mod viewport;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Buffer {
    cursor: Cursor,
    pub(crate) lines: Vec<BufferLine>,
    selection: Selection,
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            lines: vec![BufferLine::default()],
            selection: Selection::default(),
        }
    }
}

impl Buffer {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self::default();
        buffer.set_content(lines.into_iter().map(Into::into).collect());
        buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn lines(&self) -> &[BufferLine] {
        &self.lines
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_line(&self) -> &BufferLine {
        &self.lines[self.cursor.vertical_index]
    }

    pub fn current_length(&self) -> usize {
        self.current_line().len()
    }

    /// Moves the cursor to the given position. Both indices are clamped, the
    /// row into the existing lines and the column into the row's length, thus
    /// the cursor can never address a position outside of the buffer.
    pub fn set_cursor(&mut self, vertical_index: usize, horizontal_index: usize) {
        let max_index = self.lines.len() - 1;
        let vertical_index = vertical_index.min(max_index);
        let horizontal_index = horizontal_index.min(self.lines[vertical_index].len());

        self.cursor = Cursor {
            vertical_index,
            horizontal_index,
        };
    }

    pub fn to_snapshot(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.content.clone()).collect()
    }

    pub(crate) fn current_line_mut(&mut self) -> &mut BufferLine {
        &mut self.lines[self.cursor.vertical_index]
    }

    pub(crate) fn set_content(&mut self, content: Vec<String>) {
        self.lines = content.into_iter().map(BufferLine::new).collect();
        if self.lines.is_empty() {
            self.lines.push(BufferLine::default());
        }

        self.cursor = Cursor::default();
        self.selection = Selection::default();
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cursor {
    horizontal_index: usize,
    vertical_index: usize,
}

impl Cursor {
    pub fn horizontal_index(&self) -> usize {
        self.horizontal_index
    }

    pub fn vertical_index(&self) -> usize {
        self.vertical_index
    }
}

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BufferLine {
    pub content: String,
}

impl BufferLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Splits the line at the char index. Indices past the end split behind
    /// the last char.
    pub fn split(&self, index: usize) -> (&str, &str) {
        self.content.split_at(self.get_byte_index(index))
    }

    pub(crate) fn insert(&mut self, index: usize, c: char) {
        let byte_index = self.get_byte_index(index);
        self.content.insert(byte_index, c);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<char> {
        if index >= self.len() {
            return None;
        }

        let byte_index = self.get_byte_index(index);
        Some(self.content.remove(byte_index))
    }

    fn get_byte_index(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

impl From<&str> for BufferLine {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// TODO: wire up line selection once a selection command exists in the keymap
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub point: (usize, usize),
    pub lines: BTreeSet<usize>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferResult {
    Execute(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::{Buffer, BufferLine};

    #[test]
    fn default_contains_single_empty_line() {
        let buffer = Buffer::default();

        assert_eq!(1, buffer.lines().len());
        assert!(buffer.current_line().is_empty());
        assert_eq!(0, buffer.cursor().vertical_index());
        assert_eq!(0, buffer.cursor().horizontal_index());
    }

    #[test]
    fn from_lines_without_content_keeps_one_line() {
        let buffer = Buffer::from_lines(Vec::<String>::new());

        assert_eq!(vec![String::new()], buffer.to_snapshot());
    }

    #[test]
    fn set_cursor_clamps_into_buffer() {
        let mut buffer = Buffer::from_lines(["abc", "de"]);

        buffer.set_cursor(10, 10);

        assert_eq!(1, buffer.cursor().vertical_index());
        assert_eq!(2, buffer.cursor().horizontal_index());
    }

    #[test]
    fn split_counts_chars_not_bytes() {
        let line = BufferLine::new("äöü");

        assert_eq!(("ä", "öü"), line.split(1));
        assert_eq!(("äöü", ""), line.split(7));
        assert_eq!(3, line.len());
    }

    #[test]
    fn remove_out_of_range_returns_none() {
        let mut line = BufferLine::new("ab");

        assert_eq!(None, line.remove(2));
        assert_eq!(Some('b'), line.remove(1));
        assert_eq!("a", line.content);
    }
}

use crate::model::{BufferLine, Cursor};

pub const CURSOR_MARKER: char = '|';

pub fn add_cursor_marker(cursor: &Cursor, index: usize, line: &BufferLine) -> String {
    if cursor.vertical_index() != index {
        return line.content.clone();
    }

    let (head, tail) = line.split(cursor.horizontal_index());
    format!("{}{}{}", head, CURSOR_MARKER, tail)
}

#[cfg(test)]
mod tests {
    use super::add_cursor_marker;
    use crate::model::{Buffer, BufferLine};

    #[test]
    fn add_cursor_marker_on_other_line_keeps_content() {
        let buffer = Buffer::from_lines(["abc", "def"]);

        let line = BufferLine::new("def");
        assert_eq!("def", add_cursor_marker(buffer.cursor(), 1, &line));
    }

    #[test]
    fn add_cursor_marker_at_line_end() {
        let mut buffer = Buffer::from_lines(["abc"]);
        buffer.set_cursor(0, 3);

        assert_eq!("abc|", add_cursor_marker(buffer.cursor(), 0, buffer.current_line()));
    }
}

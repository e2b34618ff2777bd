use crate::{
    message::TextModification,
    model::{Buffer, BufferLine, BufferResult},
};

use super::cursor;

const INDENT: &str = "    ";
const LEGAL_SYMBOLS: &str = " `~!@#$%^&*()_+|-=\\[];,./{}:\"<>?'";

pub fn update(buffer: &mut Buffer, modification: &TextModification) -> Vec<BufferResult> {
    match modification {
        TextModification::DeleteCharBeforeCursor => delete(buffer, true),
        TextModification::DeleteCharOnCursor => delete(buffer, false),
        TextModification::Indent => indent(buffer, false),
        TextModification::Insert(c) => insert_char(buffer, *c),
        TextModification::InsertLineBreak => {
            newline(buffer);
            return vec![BufferResult::Execute(buffer.to_snapshot())];
        }
        TextModification::Outdent => indent(buffer, true),
    }

    Vec::new()
}

pub fn is_legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LEGAL_SYMBOLS.contains(c)
}

pub fn insert_char(buffer: &mut Buffer, c: char) {
    if !is_legal_char(c) {
        tracing::trace!("ignoring illegal char: {:?}", c);
        return;
    }

    let cursor = *buffer.cursor();
    buffer
        .current_line_mut()
        .insert(cursor.horizontal_index(), c);

    buffer.set_cursor(cursor.vertical_index(), cursor.horizontal_index() + 1);
}

/// Removes the char in front of the cursor. A forward delete steps right
/// first. At column zero the current line gets joined into the previous one.
pub fn delete(buffer: &mut Buffer, backwards: bool) {
    if !backwards {
        cursor::move_char(buffer, 1);
    }

    let cursor = *buffer.cursor();
    if cursor.horizontal_index() == 0 {
        if buffer.lines.len() == 1 || cursor.vertical_index() == 0 {
            return;
        }

        let removed = buffer.lines.remove(cursor.vertical_index());

        let vertical_index = cursor.vertical_index() - 1;
        let line = &mut buffer.lines[vertical_index];
        let horizontal_index = line.len();
        line.content.push_str(&removed.content);

        buffer.set_cursor(vertical_index, horizontal_index);
    } else {
        let horizontal_index = cursor.horizontal_index() - 1;
        buffer.current_line_mut().remove(horizontal_index);
        buffer.set_cursor(cursor.vertical_index(), horizontal_index);
    }
}

pub fn newline(buffer: &mut Buffer) {
    let cursor = *buffer.cursor();
    let (head, tail) = buffer.current_line().split(cursor.horizontal_index());
    let (head, tail) = (BufferLine::new(head), BufferLine::new(tail));

    let vertical_index = cursor.vertical_index();
    buffer.lines[vertical_index] = head;
    buffer.lines.insert(vertical_index + 1, tail);

    buffer.set_cursor(vertical_index + 1, 0);
}

/// Indents by inserting four spaces at the cursor. Outdenting only strips a
/// four space prefix of the line, independent of the cursor column.
pub fn indent(buffer: &mut Buffer, backwards: bool) {
    if backwards {
        let cursor = *buffer.cursor();
        let line = buffer.current_line_mut();
        if !line.content.starts_with(INDENT) {
            return;
        }

        line.content.replace_range(..INDENT.len(), "");
        buffer.set_cursor(
            cursor.vertical_index(),
            cursor.horizontal_index().saturating_sub(INDENT.len()),
        );
    } else {
        for c in INDENT.chars() {
            insert_char(buffer, c);
        }
    }
}

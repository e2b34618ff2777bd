use crate::{
    message::CursorDirection,
    model::{viewport::ViewPort, Buffer},
};

pub fn update_by_direction(
    viewport: &ViewPort,
    buffer: &mut Buffer,
    count: &usize,
    direction: &CursorDirection,
) {
    let amount = isize::try_from(*count).unwrap_or(isize::MAX);
    match direction {
        CursorDirection::Bottom => scroll_max(buffer, false, true),
        CursorDirection::Down => move_line(buffer, amount),
        CursorDirection::Left => move_char(buffer, -amount),
        CursorDirection::LineEnd => scroll_max(buffer, true, true),
        CursorDirection::LineStart => scroll_max(buffer, true, false),
        CursorDirection::PageDown => scroll(viewport, buffer, amount),
        CursorDirection::PageUp => scroll(viewport, buffer, -amount),
        CursorDirection::Right => move_char(buffer, amount),
        CursorDirection::Top => scroll_max(buffer, false, false),
        CursorDirection::Up => move_line(buffer, -amount),
    }
}

/// Moves the cursor horizontally. Leaving the line wraps exactly once, to the
/// end of the previous or the start of the next line, regardless of how far
/// `delta` reaches past the line boundary.
pub fn move_char(buffer: &mut Buffer, delta: isize) {
    let cursor = *buffer.cursor();
    let line_length = to_signed(buffer.current_length());
    let index = to_signed(cursor.horizontal_index()).saturating_add(delta);

    if index < 0 {
        move_line(buffer, -1);

        let vertical_index = buffer.cursor().vertical_index();
        buffer.set_cursor(vertical_index, buffer.current_length());
    } else if index > line_length {
        move_line(buffer, 1);

        let vertical_index = buffer.cursor().vertical_index();
        buffer.set_cursor(vertical_index, 0);
    } else {
        buffer.set_cursor(cursor.vertical_index(), index.unsigned_abs());
    }
}

pub fn move_line(buffer: &mut Buffer, delta: isize) {
    let cursor = *buffer.cursor();
    let vertical_index = if delta < 0 {
        cursor.vertical_index().saturating_sub(delta.unsigned_abs())
    } else {
        cursor.vertical_index().saturating_add(delta.unsigned_abs())
    };

    buffer.set_cursor(vertical_index, cursor.horizontal_index());
}

/// Moves a page by stepping line by line, thus the column shrinks to the
/// shortest line passed on the way.
pub fn scroll(viewport: &ViewPort, buffer: &mut Buffer, amount: isize) {
    for _ in 0..viewport.max_lines.saturating_sub(1) {
        move_line(buffer, amount);
    }
}

pub fn scroll_max(buffer: &mut Buffer, line: bool, end: bool) {
    let cursor = *buffer.cursor();
    if line {
        let horizontal_index = if end { buffer.current_length() } else { 0 };
        buffer.set_cursor(cursor.vertical_index(), horizontal_index);
    } else {
        // NOTE: end lands on the last row, the row behind it is not addressable
        let vertical_index = if end { buffer.lines().len() - 1 } else { 0 };
        buffer.set_cursor(vertical_index, cursor.horizontal_index());
    }
}

fn to_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use crate::model::{viewport::ViewPort, Buffer};

    fn assert_cursor(buffer: &Buffer, vertical_index: usize, horizontal_index: usize) {
        assert_eq!(
            (vertical_index, horizontal_index),
            (
                buffer.cursor().vertical_index(),
                buffer.cursor().horizontal_index()
            )
        );
    }

    #[test]
    fn move_char_within_line() {
        let mut buffer = Buffer::from_lines(["abc"]);

        super::move_char(&mut buffer, 2);
        assert_cursor(&buffer, 0, 2);

        super::move_char(&mut buffer, -1);
        assert_cursor(&buffer, 0, 1);
    }

    #[test]
    fn move_char_left_at_line_start_wraps_to_previous_line_end() {
        let mut buffer = Buffer::from_lines(["abc", "de"]);
        buffer.set_cursor(1, 0);

        super::move_char(&mut buffer, -1);

        assert_cursor(&buffer, 0, 3);
    }

    #[test]
    fn move_char_right_at_line_end_wraps_to_next_line_start() {
        let mut buffer = Buffer::from_lines(["abc", "de"]);
        buffer.set_cursor(0, 3);

        super::move_char(&mut buffer, 1);

        assert_cursor(&buffer, 1, 0);
    }

    #[test]
    fn move_char_left_on_first_line_start_jumps_to_its_end() {
        let mut buffer = Buffer::from_lines(["abc", "de"]);

        super::move_char(&mut buffer, -1);

        assert_cursor(&buffer, 0, 3);
    }

    #[test]
    fn move_char_right_on_last_line_end_jumps_to_its_start() {
        let mut buffer = Buffer::from_lines(["abc", "de"]);
        buffer.set_cursor(1, 2);

        super::move_char(&mut buffer, 1);

        assert_cursor(&buffer, 1, 0);
    }

    #[test]
    fn move_char_wraps_a_single_line_only() {
        let mut buffer = Buffer::from_lines(["ab", "c", "defgh"]);

        super::move_char(&mut buffer, 10);

        assert_cursor(&buffer, 1, 0);
    }

    #[test]
    fn move_line_up_on_first_line_stays() {
        let mut buffer = Buffer::from_lines(["a", "b", "c"]);

        super::move_line(&mut buffer, -1);

        assert_cursor(&buffer, 0, 0);
    }

    #[test]
    fn move_line_down_on_last_line_stays() {
        let mut buffer = Buffer::from_lines(["a", "b", "c"]);
        buffer.set_cursor(2, 1);

        super::move_line(&mut buffer, 1);

        assert_cursor(&buffer, 2, 1);
    }

    #[test]
    fn move_line_clamps_column_to_shorter_line() {
        let mut buffer = Buffer::from_lines(["abcdef", "ab"]);
        buffer.set_cursor(0, 5);

        super::move_line(&mut buffer, 1);

        assert_cursor(&buffer, 1, 2);
    }

    #[test]
    fn scroll_moves_max_lines_minus_one() {
        let lines: Vec<_> = (0..10).map(|i| format!("line {}", i)).collect();
        let mut buffer = Buffer::from_lines(lines);
        let viewport = ViewPort {
            max_lines: 4,
            ..Default::default()
        };

        super::scroll(&viewport, &mut buffer, 1);
        assert_cursor(&buffer, 3, 0);

        super::scroll(&viewport, &mut buffer, 1);
        super::scroll(&viewport, &mut buffer, 1);
        super::scroll(&viewport, &mut buffer, 1);
        assert_cursor(&buffer, 9, 0);

        super::scroll(&viewport, &mut buffer, -1);
        assert_cursor(&buffer, 6, 0);
    }

    #[test]
    fn scroll_keeps_column_clamped_by_passed_lines() {
        let mut buffer = Buffer::from_lines(["abcdef", "a", "abcdef"]);
        buffer.set_cursor(0, 5);
        let viewport = ViewPort {
            max_lines: 3,
            ..Default::default()
        };

        super::scroll(&viewport, &mut buffer, 1);

        assert_cursor(&buffer, 2, 1);
    }

    #[test]
    fn scroll_max_line_end_and_start() {
        let mut buffer = Buffer::from_lines(["abcdef"]);
        buffer.set_cursor(0, 2);

        super::scroll_max(&mut buffer, true, true);
        assert_cursor(&buffer, 0, 6);

        super::scroll_max(&mut buffer, true, false);
        assert_cursor(&buffer, 0, 0);
    }

    #[test]
    fn scroll_max_buffer_end_lands_on_last_row() {
        let mut buffer = Buffer::from_lines(["abcdef", "ab", "a"]);
        buffer.set_cursor(0, 4);

        super::scroll_max(&mut buffer, false, true);
        assert_cursor(&buffer, 2, 1);

        super::scroll_max(&mut buffer, false, false);
        assert_cursor(&buffer, 0, 1);
    }
}

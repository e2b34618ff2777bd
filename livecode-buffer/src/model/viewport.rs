use std::ops::Range;

use super::Cursor;

pub const LINE_NUMBER_WIDTH: usize = 3;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViewPort {
    pub hidden: bool,
    pub max_lines: usize,
    pub scroll_start: usize,
    pub show_line_numbers: bool,
}

impl Default for ViewPort {
    fn default() -> Self {
        Self {
            hidden: false,
            max_lines: 30,
            scroll_start: 15,
            show_line_numbers: true,
        }
    }
}

impl ViewPort {
    /// Returns the line indices eligible for display. The window starts
    /// `scroll_start` rows above the cursor and spans at most `max_lines`.
    pub fn get_window(&self, cursor: &Cursor, line_count: usize) -> Range<usize> {
        let offset = cursor.vertical_index().saturating_sub(self.scroll_start);
        let end = offset.saturating_add(self.max_lines).min(line_count);

        offset.min(end)..end
    }
}

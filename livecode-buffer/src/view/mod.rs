use crate::model::{viewport::ViewPort, Buffer};

mod line;
mod prefix;

pub fn view(viewport: &ViewPort, buffer: &Buffer) -> String {
    if viewport.hidden {
        return String::new();
    }

    let cursor = buffer.cursor();
    let window = viewport.get_window(cursor, buffer.lines().len());

    buffer
        .lines()
        .iter()
        .enumerate()
        .skip(window.start)
        .take(window.len())
        .map(|(index, bl)| {
            let mut content = prefix::get_line_number(viewport, index);
            content.push_str(&line::add_cursor_marker(cursor, index, bl));
            content.push('\n');
            content
        })
        .collect()
}

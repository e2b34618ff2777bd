use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub editor: Rect,
    pub output: Rect,
    pub statusline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect, output_height: u16) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(output_height),
                Constraint::Length(1),
            ])
            .split(rect);

        Self {
            editor: main[0],
            output: main[1],
            statusline: main[2],
        }
    }
}

/// Height of the output pane including its top border. Empty output hides the
/// pane, otherwise it takes at most a third of the available rows.
pub fn get_output_height(output_lines: usize, rect: Rect) -> u16 {
    if output_lines == 0 {
        return 0;
    }

    let max = rect.height / 3;
    let lines = u16::try_from(output_lines).unwrap_or(u16::MAX);

    lines.saturating_add(1).min(max)
}

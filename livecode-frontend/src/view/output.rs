use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    if rect.height == 0 {
        return;
    }

    let visible = usize::from(rect.height.saturating_sub(1));
    let skip = model.output.len().saturating_sub(visible);
    let lines: Vec<Line> = model
        .output
        .iter()
        .skip(skip)
        .map(|line| Line::raw(line.as_str()))
        .collect();

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("output");

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), rect);
}

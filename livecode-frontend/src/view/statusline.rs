use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::{Model, PrintContent};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let path = get_path_content(model);
    let status = get_status_content(model);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(path.width() as u16),
            Constraint::Length(3),
            Constraint::Min(status.width() as u16),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(path), layout[0]);
    frame.render_widget(Paragraph::new(status), layout[2]);
    frame.render_widget(Paragraph::new(position), layout[3]);
}

fn get_path_content(model: &Model) -> Line {
    let content = match &model.path {
        Some(path) => path.to_string_lossy().to_string(),
        None => "[No Name]".to_string(),
    };

    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
}

fn get_status_content(model: &Model) -> Line {
    match &model.status {
        Some(PrintContent::Error(content)) => Line::from(Span::styled(
            content.as_str(),
            Style::default().fg(Color::Red),
        )),
        Some(PrintContent::Information(content)) => Line::from(Span::styled(
            content.as_str(),
            Style::default().fg(Color::Gray),
        )),
        None => Line::default(),
    }
}

fn get_position_content(model: &Model) -> Line {
    let mut content = Vec::new();
    if model.engine.viewport().hidden {
        content.push(Span::styled("hidden ", Style::default().fg(Color::Yellow)));
    }

    content.push(Span::styled(
        get_position_text(model),
        Style::default().fg(Color::Gray),
    ));

    Line::from(content)
}

/// Zero-based `row:column` like the line number gutter, followed by the line
/// count.
fn get_position_text(model: &Model) -> String {
    let cursor = model.engine.cursor();
    format!(
        "{}:{} {}",
        cursor.vertical_index(),
        cursor.horizontal_index(),
        model.engine.buffer().lines().len()
    )
}

use ansi_to_tui::IntoText;
use ratatui::{layout::Rect, text::Text, widgets::Paragraph, Frame};

use crate::{
    error::AppError,
    layout::{self, AppLayout},
    model::Model,
    terminal::TerminalWrapper,
};

mod output;
mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let area = frame.area();
        let layout = AppLayout::new(area, layout::get_output_height(model.output.len(), area));

        editor(model, frame, layout.editor);
        output::view(model, frame, layout.output);
        statusline::view(model, frame, layout.statusline);
    })
}

fn editor(model: &Model, frame: &mut Frame, rect: Rect) {
    let display = model.engine.display();
    let text = match display.into_text() {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("converting ansi display failed: {:?}", err);
            Text::raw(display)
        }
    };

    frame.render_widget(Paragraph::new(text), rect);
}

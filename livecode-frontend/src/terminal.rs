use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::AppError;

pub struct TerminalWrapper {
    inner: Option<Terminal<CrosstermBackend<BufWriter<Stderr>>>>,
}

impl TerminalWrapper {
    pub fn start() -> Result<Self, AppError> {
        stderr()
            .execute(EnterAlternateScreen)
            .map_err(AppError::TerminalOperationFailed)?;
        terminal::enable_raw_mode().map_err(AppError::TerminalOperationFailed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))
            .map_err(AppError::TerminalOperationFailed)?;
        terminal.clear().map_err(AppError::TerminalOperationFailed)?;

        Ok(Self {
            inner: Some(terminal),
        })
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if self.inner.take().is_some() {
            stop()
        } else {
            Ok(())
        }
    }

    pub fn draw(&mut self, layout: impl FnOnce(&mut Frame<'_>)) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            term.draw(layout)
                .map_err(AppError::TerminalOperationFailed)?;
        }

        Ok(())
    }
}

impl Drop for TerminalWrapper {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            tracing::error!("restoring terminal failed: {:?}", err);
        }
    }
}

fn stop() -> Result<(), AppError> {
    terminal::disable_raw_mode().map_err(AppError::TerminalOperationFailed)?;
    stderr()
        .execute(LeaveAlternateScreen)
        .map_err(AppError::TerminalOperationFailed)?;

    Ok(())
}

use action::{Action, ActionResult};
use error::AppError;
use event::Emitter;
use executor::CommandExecutor;
use highlight::SyntectHighlighter;
use livecode_buffer::TextBufferEngine;
use livecode_keymap::MessageResolver;
use model::Model;
use settings::Settings;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
mod executor;
mod highlight;
mod io;
mod layout;
mod model;
pub mod settings;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut resolver = MessageResolver::default();
    for (keys, command) in &settings.bindings {
        resolver.add_mapping(keys, command)?;
    }

    let mut model = Model {
        engine: TextBufferEngine::new(settings.viewport.clone()),
        ..Default::default()
    };

    model.engine.register_highlighter(SyntectHighlighter::new(
        settings.syntax.as_deref(),
        settings.startup_path.as_deref(),
        &settings.theme,
    )?);

    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start(resolver);

    if let Some(executor) = settings.executor.clone() {
        model
            .engine
            .register_executor(CommandExecutor::new(executor, emitter.sender()));
    }

    if let Some(path) = settings.startup_path.clone() {
        if path.exists() {
            action::exec(&mut model, vec![Action::Load(path)]).await;
        } else {
            tracing::info!("starting with new file: {:?}", path);
            model.path = Some(path);
        }
    }

    tracing::debug!("starting with model state: {:?}", model);

    render_model(&mut terminal, &model)?;
    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::debug!("received messages: {:?}", envelope.messages);

        let actions = update_model(&mut model, envelope);
        if action::exec(&mut model, actions).await == ActionResult::Quit {
            break;
        }

        render_model(&mut terminal, &model)?;
    }

    emitter.shutdown().await;
    terminal.shutdown()
}

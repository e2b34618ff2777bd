use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use livecode_frontend::settings::{ExecutorSettings, Settings};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Binding {0} is invalid, expected KEYS=COMMAND")]
    InvalidBinding(String),
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    if let Err(err) = map_args_to_settings(&cli().get_matches(), &mut settings) {
        error!("parsing arguments failed: {:?}", err);
        eprintln!("{}", err);
        return;
    }

    match livecode_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("{}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("livecode")
        .about("livecode - edit code and watch it run on every new line")
        .args([
            // NOTE: arguments
            Arg::new("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("file to open on startup, created on first save if missing"),
            // NOTE: options
            Arg::new("executor")
                .long("executor")
                .action(ArgAction::Set)
                .help("program the buffer is piped into on execution, empty disables execution"),
            Arg::new("executor-arg")
                .long("executor-arg")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("argument passed to the executor program, repeatable"),
            Arg::new("scroll-start")
                .long("scroll-start")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("rows the cursor may move down before the view scrolls"),
            Arg::new("max-lines")
                .long("max-lines")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("maximum number of rows rendered"),
            Arg::new("hide-line-numbers")
                .long("hide-line-numbers")
                .action(ArgAction::SetTrue)
                .help("render rows without line number prefix"),
            Arg::new("hidden")
                .long("hidden")
                .action(ArgAction::SetTrue)
                .help("start with the buffer hidden"),
            Arg::new("syntax")
                .long("syntax")
                .action(ArgAction::Set)
                .help("syntax used for highlighting, by extension or name"),
            Arg::new("theme")
                .long("theme")
                .action(ArgAction::Set)
                .help("highlighting theme"),
            Arg::new("bind")
                .long("bind")
                .action(ArgAction::Append)
                .help("bind a key to a command as KEYS=COMMAND, e.g. <C-r>=execute"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) -> Result<(), Error> {
    settings.startup_path = args.get_one("path").cloned();

    if let Some(program) = args.get_one::<String>("executor") {
        settings.executor = if program.is_empty() {
            None
        } else {
            Some(ExecutorSettings {
                program: program.to_string(),
                args: args
                    .get_many::<String>("executor-arg")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
            })
        };
    } else if let (Some(executor), Some(values)) = (
        settings.executor.as_mut(),
        args.get_many::<String>("executor-arg"),
    ) {
        executor.args = values.cloned().collect();
    }

    if let Some(scroll_start) = args.get_one::<usize>("scroll-start") {
        settings.viewport.scroll_start = *scroll_start;
    }

    if let Some(max_lines) = args.get_one::<usize>("max-lines") {
        settings.viewport.max_lines = *max_lines;
    }

    settings.viewport.show_line_numbers = !args.get_flag("hide-line-numbers");
    settings.viewport.hidden = args.get_flag("hidden");
    settings.syntax = args.get_one::<String>("syntax").cloned();

    if let Some(theme) = args.get_one::<String>("theme") {
        settings.theme = theme.to_string();
    }

    if let Some(bindings) = args.get_many::<String>("bind") {
        for binding in bindings {
            match binding.rsplit_once('=') {
                Some((keys, command)) if !keys.is_empty() && !command.is_empty() => {
                    settings
                        .bindings
                        .push((keys.to_string(), command.to_string()));
                }
                _ => return Err(Error::InvalidBinding(binding.to_string())),
            }
        }
    }

    Ok(())
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/livecode/logs"))
}

mod app;
mod command;
mod config;
mod consts;
mod event;
mod game;
mod logging;
mod menu;
mod options;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::event::TerminalEvents;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run { config })
    }
}

static USAGE: &str = "\
Usage: gridsnake [-c|--config <PATH>]

Steer the snake with the arrow keys, h j k l, or w a s d.  Press Esc to quit.

Options:
  -c, --config <PATH>  Read configuration from the given file
  -h, --help           Display this help message and exit
  -V, --version        Show the program version and exit
";

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env()) {
        Ok(Invocation::Run { config }) => match run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(p) => Config::load(&p, false),
        None => Config::default_path().and_then(|p| Config::load(&p, true)),
    }
    .context("failed to load configuration")?;
    logging::init(&config.log)?;
    tracing::info!(options = ?config.options, "Starting up");
    let mut events = TerminalEvents::new(config.options.tick_period);
    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let r = App::new(config.options, rand::rng()).run(&mut terminal, &mut events);
    ratatui::restore();
    if let Err(ref e) = r {
        tracing::error!("{e}");
    }
    r.map_err(Into::into)
}

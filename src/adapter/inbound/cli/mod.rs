//! CLI module graph and command dispatch.

pub mod board;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod payout;
pub mod race;
pub mod wager;

use std::fs;

use command::{Cli, Commands, ConfigCommand};
use diagnostic::ConfigDiagnostic;

use crate::application::Event;
use crate::error::{ConfigError, Error, EventError, Result};
use crate::infrastructure::bootstrap::open_event;
use crate::infrastructure::config::settings::Config;
use crate::port::LedgerStore;

/// Run the parsed command line.
///
/// `config` commands work on the file itself; every other command loads the
/// configuration, initializes logging and opens the event's ledger.
pub fn run(cli: &Cli) -> Result<()> {
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Init(args) => config::execute_init(&cli.config, args.force),
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let settings = Config::load(&cli.config)?;
    settings.init_logging();
    let event = open_event(&settings)?;
    dispatch(&event, &cli.command)
}

/// Route an event command to its handler.
pub fn dispatch<S: LedgerStore>(event: &Event<S>, command: &Commands) -> Result<()> {
    match command {
        Commands::Bet(args) => wager::place(event, args),
        Commands::Remove(args) => wager::remove(event, &args.ids),
        Commands::Bets => wager::list(event),
        Commands::Board => board::show(event),
        Commands::Order(command) => race::order(event, command),
        Commands::Wagering(command) => race::wagering(event, command),
        Commands::Payouts => payout::show(event),
        Commands::Config(_) => Ok(()),
    }
}

/// Print `error` for the user.
///
/// TOML errors are rendered with the offending snippet of the configuration
/// file; everything else is a single error line plus an optional hint.
pub fn report(cli: &Cli, error: &Error) {
    if !output::is_json() {
        if let Error::Config(ConfigError::Parse(parse)) = error {
            if let Some(diagnostic) = fs::read_to_string(&cli.config)
                .ok()
                .and_then(|src| ConfigDiagnostic::from_toml(parse, &src))
            {
                eprintln!("{:?}", miette::Report::new(diagnostic));
                return;
            }
        }
    }

    output::error(&error.to_string());
    if let Some(hint) = hint(error) {
        output::error_hint(hint);
    }
}

fn hint(error: &Error) -> Option<&'static str> {
    match error {
        Error::Config(ConfigError::ReadFile(_)) => {
            Some("create one with `parimutuel config init` or pass --config")
        }
        Error::Event(EventError::WageringClosed) => {
            Some("run `parimutuel wagering open` unless results are locked")
        }
        Error::Event(EventError::OrderNotSet) | Error::InvalidOrder(_) => {
            Some("record the result with `parimutuel order set <first> <second> <third>`")
        }
        _ => None,
    }
}

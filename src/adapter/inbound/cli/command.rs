//! Command-line interface definitions.
//!
//! Defines the CLI structure for the parimutuel application using `clap`.
//! Every subcommand operates on the event described by the configuration
//! file and its JSON ledger.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::WagerId;

/// Default configuration file location.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Win/Place/Show pari-mutuel wagering CLI
#[derive(Parser, Debug)]
#[command(name = "parimutuel")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the parimutuel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a wager
    Bet(BetArgs),

    /// Remove wagers by id
    Remove(RemoveArgs),

    /// List all wagers
    Bets,

    /// Show pool totals and hypothetical ratios
    Board,

    /// Record, inspect or lock the finishing order
    #[command(subcommand)]
    Order(OrderCommand),

    /// Open or close wagering
    #[command(subcommand)]
    Wagering(WageringCommand),

    /// Compute payouts for the recorded finishing order
    Payouts,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `parimutuel bet`.
#[derive(Parser, Debug)]
pub struct BetArgs {
    /// Name of the bettor placing the wager
    #[arg(long)]
    pub bettor: String,

    /// Contestant being backed
    #[arg(long = "on")]
    pub contestant: String,

    /// Bet type: win, place or show
    #[arg(long = "type")]
    pub bet_type: String,

    /// Amount wagered
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Decimal,
}

/// Arguments for `parimutuel remove`.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Wager ids (`7` or `#7`)
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<WagerId>,
}

/// Subcommands for `parimutuel order`.
#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Record the first three finishers
    Set {
        /// Winner
        first: String,
        /// Runner-up
        second: String,
        /// Third place
        third: String,
    },
    /// Display the recorded order and race state
    Show,
    /// Forget the recorded order
    Clear,
    /// Freeze the order and the ledger
    Lock,
}

/// Subcommands for `parimutuel wagering`.
#[derive(Subcommand, Debug)]
pub enum WageringCommand {
    /// Start accepting wagers
    Open,
    /// Stop accepting wagers
    Close,
}

/// Subcommands for `parimutuel config`.
///
/// Configuration management utilities: generation, display and
/// validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `parimutuel config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

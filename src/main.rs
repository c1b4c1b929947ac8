use clap::Parser;

use parimutuel::adapter::inbound::cli::command::Cli;
use parimutuel::adapter::inbound::cli::output::{self, OutputConfig};
use parimutuel::adapter::inbound::cli::{report, run};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), cli.color);

    if let Err(e) = run(&cli) {
        report(&cli, &e);
        std::process::exit(1);
    }
}

//! Handler for `board`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::{ContestantOdds, Event};
use crate::domain::{Amount, Ratio};
use crate::error::Result;
use crate::port::LedgerStore;

#[derive(Tabled)]
struct OddsRow {
    #[tabled(rename = "Contestant")]
    contestant: String,
    #[tabled(rename = "Win $")]
    win: String,
    #[tabled(rename = "Win x")]
    win_ratio: String,
    #[tabled(rename = "Place $")]
    place: String,
    #[tabled(rename = "Place x")]
    place_ratio: String,
    #[tabled(rename = "Show $")]
    show: String,
    #[tabled(rename = "Show x")]
    show_ratio: String,
}

impl From<&ContestantOdds> for OddsRow {
    fn from(row: &ContestantOdds) -> Self {
        Self {
            contestant: row.contestant.to_string(),
            win: money(row.staked.win),
            win_ratio: ratio(row.ratios.win),
            place: money(row.staked.place),
            place_ratio: ratio(row.ratios.place),
            show: money(row.staked.show),
            show_ratio: ratio(row.ratios.show),
        }
    }
}

fn money(amount: Amount) -> String {
    format!("{amount:.2}")
}

fn ratio(ratio: Option<Ratio>) -> String {
    ratio.map_or_else(|| "-".to_string(), |r| format!("{r:.2}"))
}

/// Execute `board`.
pub fn show<S: LedgerStore>(event: &Event<S>) -> Result<()> {
    let board = event.odds_board()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "board",
            "event": event.name(),
            "board": board,
        }));
        return Ok(());
    }

    output::header(event.name());
    output::section("Pools");
    output::field("Win", money(board.pools.win));
    output::field("Place", money(board.pools.place));
    output::field("Show", money(board.pools.show));
    output::field("Total", money(board.total));
    output::field("Wagers", board.wagers);

    output::section("Odds");
    let rows: Vec<OddsRow> = board.contestants.iter().map(OddsRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::hint("ratios assume the contestant finishes in the paying position");
    Ok(())
}

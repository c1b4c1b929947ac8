//! Handlers for `bet`, `remove` and `bets`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::BetArgs;
use crate::adapter::inbound::cli::output;
use crate::application::Event;
use crate::domain::{Wager, WagerId};
use crate::error::Result;
use crate::port::LedgerStore;

#[derive(Tabled)]
struct WagerRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Bettor")]
    bettor: String,
    #[tabled(rename = "Betting On")]
    contestant: String,
    #[tabled(rename = "Type")]
    bet_type: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Placed")]
    placed_at: String,
}

impl From<&Wager> for WagerRow {
    fn from(wager: &Wager) -> Self {
        Self {
            id: wager.id.to_string(),
            bettor: wager.bettor.to_string(),
            contestant: wager.contestant.to_string(),
            bet_type: wager.bet_type.to_string(),
            amount: format!("{:.2}", wager.amount),
            placed_at: wager.placed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute `bet`.
pub fn place<S: LedgerStore>(event: &Event<S>, args: &BetArgs) -> Result<()> {
    let wager = event.place_wager(
        args.bettor.as_str(),
        args.contestant.as_str(),
        &args.bet_type,
        args.amount,
    )?;

    if output::is_json() {
        output::json_output(json!({
            "command": "bet",
            "wager": wager,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Recorded {} {} on {} for {:.2}",
        wager.id, wager.bet_type, wager.contestant, wager.amount
    ));
    output::field("Bettor", &wager.bettor);
    Ok(())
}

/// Execute `remove`.
pub fn remove<S: LedgerStore>(event: &Event<S>, ids: &[WagerId]) -> Result<()> {
    let removed = event.remove_wagers(ids)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "remove",
            "requested": ids.len(),
            "removed": removed,
        }));
        return Ok(());
    }

    if removed == 0 {
        output::warning("No matching wagers");
    } else {
        output::success(&format!("Removed {removed} of {} wager(s)", ids.len()));
    }
    Ok(())
}

/// Execute `bets`.
pub fn list<S: LedgerStore>(event: &Event<S>) -> Result<()> {
    let wagers = event.wagers()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "bets",
            "event": event.name(),
            "wagers": wagers,
        }));
        return Ok(());
    }

    output::header(event.name());
    output::section("Wagers");
    if wagers.is_empty() {
        output::note("(no wagers yet)");
        return Ok(());
    }

    let rows: Vec<WagerRow> = wagers.iter().map(WagerRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}

//! Handler for `payouts`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::Event;
use crate::domain::{Amount, BettorSummary, PayoutLine, PoolSummary, Resolution};
use crate::error::Result;
use crate::port::LedgerStore;

#[derive(Tabled)]
struct LineRow {
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
    #[tabled(rename = "Win")]
    win: String,
    #[tabled(rename = "Place")]
    place: String,
    #[tabled(rename = "Show")]
    show: String,
    #[tabled(rename = "Refund")]
    refund: String,
    #[tabled(rename = "Payout")]
    total: String,
}

impl From<&PayoutLine> for LineRow {
    fn from(line: &PayoutLine) -> Self {
        Self {
            id: line.wager_id.to_string(),
            bettor: line.bettor.to_string(),
            contestant: line.contestant.to_string(),
            bet_type: line.bet_type.to_string(),
            amount: money(line.amount),
            win: money(line.win),
            place: money(line.place),
            show: money(line.show),
            refund: money(line.refund),
            total: money(line.total),
        }
    }
}

#[derive(Tabled)]
struct PoolRow {
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Eligible")]
    eligible: String,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "Effective")]
    effective: String,
    #[tabled(rename = "Ratio")]
    ratio: String,
}

impl From<&PoolSummary> for PoolRow {
    fn from(summary: &PoolSummary) -> Self {
        let pool = if summary.degenerate {
            format!("{} (no claims)", summary.pool)
        } else {
            summary.pool.to_string()
        };
        Self {
            pool,
            stake: money(summary.stake),
            eligible: money(summary.eligible),
            received: money(summary.received),
            effective: money(summary.effective),
            ratio: format!("{:.4}", summary.ratio),
        }
    }
}

#[derive(Tabled)]
struct BettorRow {
    #[tabled(rename = "Bettor")]
    bettor: String,
    #[tabled(rename = "Wagers")]
    wagers: usize,
    #[tabled(rename = "Wagered")]
    wagered: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl From<&BettorSummary> for BettorRow {
    fn from(summary: &BettorSummary) -> Self {
        Self {
            bettor: summary.bettor.to_string(),
            wagers: summary.wagers,
            wagered: money(summary.wagered),
            paid: money(summary.paid),
            net: money(summary.net),
        }
    }
}

fn money(amount: Amount) -> String {
    format!("{amount:.2}")
}

/// Execute `payouts`.
pub fn show<S: LedgerStore>(event: &Event<S>) -> Result<()> {
    let report = event.payouts()?;
    let bettors = report.bettor_summaries();

    if output::is_json() {
        output::json_output(json!({
            "command": "payouts",
            "event": event.name(),
            "report": report,
            "bettors": bettors,
        }));
        return Ok(());
    }

    output::header(event.name());
    match report.resolution {
        Resolution::Empty => {
            output::note("(no wagers to settle)");
            return Ok(());
        }
        Resolution::FullRefund => {
            output::warning("No wager is eligible for any pool; every stake is refunded");
        }
        Resolution::Settled => {}
    }

    output::section("Payouts");
    let rows: Vec<LineRow> = report.lines.iter().map(LineRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Pools");
    let rows: Vec<PoolRow> = report.pools.iter().map(PoolRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Bettors");
    let rows: Vec<BettorRow> = bettors.iter().map(BettorRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Totals");
    output::field("Wagered", money(report.totals.wagered));
    output::field("Paid", money(report.totals.paid));
    if let Some(factor) = report.normalization {
        output::field("Normalized", format!("x{factor:.6}"));
    }
    Ok(())
}

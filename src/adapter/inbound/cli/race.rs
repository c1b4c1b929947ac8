//! Handlers for the `order` and `wagering` command groups.

use serde_json::json;

use crate::adapter::inbound::cli::command::{OrderCommand, WageringCommand};
use crate::adapter::inbound::cli::output;
use crate::application::Event;
use crate::error::Result;
use crate::port::LedgerStore;

/// Execute an `order` subcommand.
pub fn order<S: LedgerStore>(event: &Event<S>, command: &OrderCommand) -> Result<()> {
    match command {
        OrderCommand::Set {
            first,
            second,
            third,
        } => {
            let order = event.set_order(first.as_str(), second.as_str(), third.as_str())?;
            if output::is_json() {
                output::json_output(json!({ "command": "order.set", "order": order }));
            } else {
                output::success(&format!("Finishing order set: {order}"));
            }
        }
        OrderCommand::Show => show(event)?,
        OrderCommand::Clear => {
            event.clear_order()?;
            if output::is_json() {
                output::json_output(json!({ "command": "order.clear" }));
            } else {
                output::success("Finishing order cleared");
            }
        }
        OrderCommand::Lock => {
            let order = event.lock_results()?;
            if output::is_json() {
                output::json_output(json!({ "command": "order.lock", "order": order }));
            } else {
                output::success(&format!("Results locked: {order}"));
                output::note("wagering is closed and the ledger is frozen");
            }
        }
    }
    Ok(())
}

fn show<S: LedgerStore>(event: &Event<S>) -> Result<()> {
    let state = event.state()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "order.show",
            "event": event.name(),
            "state": state,
        }));
        return Ok(());
    }

    output::header(event.name());
    output::section("Race");
    match &state.order {
        Some(order) => {
            output::field("1st", order.first());
            output::field("2nd", order.second());
            output::field("3rd", order.third());
        }
        None => output::field("Order", "not set"),
    }
    output::field("Wagering", if state.wagering_open { "open" } else { "closed" });
    output::field("Locked", if state.locked { "yes" } else { "no" });
    Ok(())
}

/// Execute a `wagering` subcommand.
pub fn wagering<S: LedgerStore>(event: &Event<S>, command: &WageringCommand) -> Result<()> {
    let (open, label) = match command {
        WageringCommand::Open => {
            event.open_wagering()?;
            (true, "Wagering opened")
        }
        WageringCommand::Close => {
            event.close_wagering()?;
            (false, "Wagering closed")
        }
    };

    if output::is_json() {
        output::json_output(json!({ "command": "wagering", "open": open }));
    } else {
        output::success(label);
    }
    Ok(())
}

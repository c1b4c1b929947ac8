//! Composition root: build a ready event from configuration.

use tracing::debug;

use crate::adapter::store::JsonFileLedger;
use crate::application::Event;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Open the configured ledger and wrap it in an [`Event`].
pub fn open_event(config: &Config) -> Result<Event<JsonFileLedger>> {
    let store = JsonFileLedger::open(config.ledger.path.clone())?;
    debug!(
        event = %config.event.name,
        ledger = %config.ledger.path.display(),
        bettors = config.roster.bettors.len(),
        contestants = config.roster.contestants().len(),
        "Event opened"
    );
    Ok(Event::new(config.event.name.clone(), config.engine(), store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn opened_event_persists_to_configured_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = dir.path().join("ledger.json");
        let mut config = Config::parse_toml(
            r#"
[event]
name = "Bootstrap Stakes"

[roster]
bettors = ["A", "B", "C"]
"#,
        )
        .unwrap();
        config.ledger.path = ledger.clone();

        let event = open_event(&config).unwrap();
        assert_eq!(event.name(), "Bootstrap Stakes");
        event.place_wager("A", "B", "place", dec!(4)).unwrap();
        assert!(ledger.exists());

        let reopened = open_event(&config).unwrap();
        assert_eq!(reopened.wagers().unwrap().len(), 1);
    }
}

//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your roster", path.display()));
    output::note(&format!(
        "2. Run: parimutuel -c {} config validate",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": config,
        }));
        return Ok(());
    }

    output::section("Event");
    output::field("Name", &config.event.name);

    output::section("Roster");
    output::field("Bettors", config.roster.bettors.len());
    output::field("Contestants", config.roster.contestants().len());
    if config.roster.contestants.is_none() {
        output::note("contestants default to the bettor list");
    }

    output::section("Payout");
    output::field("Degenerate", config.payout.degenerate_pool.as_str());
    output::field("Normalize", if config.payout.normalize { "yes" } else { "no" });
    output::field("Epsilon", config.payout.epsilon);

    output::section("Ledger");
    output::field("Path", config.ledger.path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let warnings = warnings(&config);

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "warnings": warnings,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");

    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::hint(&format!(
        "run {} to see effective settings",
        output::highlight(format!("parimutuel -c {} config show", path.display()))
    ));

    Ok(())
}

/// Settings that are valid but likely unintended.
fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config.payout.normalize {
        warnings.push("normalize is off; total paid may drift from total wagered".to_string());
    }
    if !config.ledger.path.exists() {
        warnings.push(format!(
            "ledger {} does not exist yet; it is created on the first wager",
            config.ledger.path.display()
        ));
    }
    warnings
}

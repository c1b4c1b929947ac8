use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Config with a four-name roster and a ledger inside `dir`.
pub fn event_toml(dir: &Path) -> String {
    format!(
        r#"
[event]
name = "Test Classic"

[roster]
bettors = ["A", "B", "C", "D"]

[ledger]
path = "{}"

[logging]
level = "warn"
"#,
        dir.join("ledger.json").display()
    )
}

/// Temp directory holding `config.toml` with [`event_toml`] contents.
pub fn event_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, &event_toml(dir.path()));
    (dir, path)
}

pub fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

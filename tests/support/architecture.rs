//! Source scanning for the layer contract tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A source line that mentions a forbidden pattern.
#[derive(Debug)]
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

/// Every `.rs` file under `layer` (relative to the crate root), sorted.
fn sources(layer: &str) -> Vec<PathBuf> {
    let mut pending = vec![crate_root().join(layer)];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        let entries =
            fs::read_dir(&dir).unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
        for entry in entries.map(|entry| entry.expect("directory entry")) {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn display_path(path: &Path) -> String {
    let relative = path.strip_prefix(crate_root()).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

/// Lines in `layer` mentioning any of `patterns`.
pub fn forbidden_lines(layer: &str, patterns: &[&str]) -> Vec<Hit> {
    forbidden_lines_except(layer, patterns, &[])
}

/// Like [`forbidden_lines`], skipping the files listed in `allowed`.
pub fn forbidden_lines_except(layer: &str, patterns: &[&str], allowed: &[&str]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for path in sources(layer) {
        let file = display_path(&path);
        if allowed.contains(&file.as_str()) {
            continue;
        }
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
        hits.extend(
            source
                .lines()
                .enumerate()
                .filter(|(_, text)| patterns.iter().any(|pattern| text.contains(pattern)))
                .map(|(index, text)| Hit {
                    file: file.clone(),
                    line: index + 1,
                    text: text.trim().to_string(),
                }),
        );
    }
    hits
}

//! Miette-based diagnostics for configuration errors.
//!
//! Renders TOML syntax and schema errors with the offending snippet of the
//! configuration file and a help line.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(parimutuel::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a new configuration diagnostic with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse error, if it carries a span.
    #[must_use]
    pub fn from_toml(error: &toml::de::Error, src: &str) -> Option<Self> {
        let span = error.span()?;
        Some(
            Self::new(
                error.message().trim(),
                src,
                span.start,
                span.end.saturating_sub(span.start),
            )
            .with_help("run `parimutuel config init` for an annotated template"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_points_at_the_bad_value() {
        let src = "[payout]\nnormalize = maybe\n";
        let error = toml::from_str::<toml::Value>(src).unwrap_err();
        let diagnostic = ConfigDiagnostic::from_toml(&error, src).unwrap();

        assert!(!diagnostic.message.is_empty());
        assert!(diagnostic.span.offset() >= "[payout]\n".len());
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn with_help_sets_help() {
        let diagnostic = ConfigDiagnostic::new("bad", "x = 1", 0, 1).with_help("fix it");
        assert_eq!(diagnostic.help.as_deref(), Some("fix it"));
        assert_eq!(diagnostic.span.len(), 1);
    }
}

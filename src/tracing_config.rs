//! Diagnostic logging for ormcheck runs.
//!
//! Logging is off unless `ORMCHECK_LOG` (or, failing that, `RUST_LOG`) holds
//! an `EnvFilter` directive. Everything is written to stderr; stdout carries
//! only the report.
//!
//! What a run emits:
//!
//! | filter                     | output                                             |
//! |----------------------------|----------------------------------------------------|
//! | `ormcheck_metadata=debug`  | `load_object_manager` span, resolver choice, skips  |
//! | `ormcheck_checker=debug`   | one `check_class` span per entity class             |
//! | `ormcheck_checker=trace`   | both direction results for every association       |
//! | `ormcheck::relation=trace` | every subtype query, with `from`/`to` type ids     |
//! | `warn`                     | bootstrap failures, unparsable types, cycles       |
//!
//! `ORMCHECK_LOG_FORMAT` picks the layout: `text` (default), `tree` to nest
//! events under their `check_class` span, or `json` for one object per line.
//!
//! ```bash
//! ORMCHECK_LOG=ormcheck_checker=trace ORMCHECK_LOG_FORMAT=tree ormcheck analysis.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "ORMCHECK_LOG";
const FORMAT_VAR: &str = "ORMCHECK_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Indented per-class tree via `tracing-tree`.
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unknown is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging requested by the environment of one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when neither log variable is set.
    pub fn from_vars(own: Option<String>, rust: Option<String>, format: Option<String>) -> Option<Self> {
        let directives = own.or(rust)?;
        Some(Self {
            directives,
            format: format.as_deref().map_or(LogFormat::Text, LogFormat::parse),
        })
    }

    fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(LOG_VAR).ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var(FORMAT_VAR).ok(),
        )
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Install the global subscriber if logging was requested.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = settings.filter();

    match settings.format {
        LogFormat::Tree => {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree).init();
        }
        LogFormat::Json => {
            let json = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(json).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
    }

    #[test]
    fn test_own_variable_wins_over_rust_log() {
        let settings = LogSettings::from_vars(
            Some("ormcheck::relation=trace".to_string()),
            Some("info".to_string()),
            Some("tree".to_string()),
        );
        assert_eq!(
            settings,
            Some(LogSettings {
                directives: "ormcheck::relation=trace".to_string(),
                format: LogFormat::Tree,
            })
        );
    }

    #[test]
    fn test_logging_off_without_directives() {
        assert_eq!(LogSettings::from_vars(None, None, Some("json".to_string())), None);
        let settings = LogSettings::from_vars(None, Some("warn".to_string()), None);
        assert_eq!(settings.map(|s| s.format), Some(LogFormat::Text));
    }
}

//! Error type shared by the fallible edges of the crate
//!
//! Annotation itself never fails. Errors only come from building a catalogue
//! out of user settings, loading those settings, or reading fragments from disk.

use crate::refmark::rules::RuleId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("Rule '{rule}' has an invalid pattern: {source}")]
    InvalidPattern {
        rule: RuleId,
        #[source]
        source: regex::Error,
    },

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown document kind '{0}'")]
    UnknownKind(String),
}

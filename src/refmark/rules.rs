//! The rule catalogue
//!
//! Each submodule builds the rules for one concern. Rules are identified by
//! [`RuleId`]; which rules run, and in what order, is decided per
//! [`DocumentKind`](crate::refmark::pipeline::DocumentKind), not here.

pub mod literals;
pub mod markup;
pub mod mentions;
pub mod params;
pub mod typography;
pub mod versions;
pub mod vocabulary;

use serde::Serialize;
use std::fmt;

/// Identifies one logical concern of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// `-py3.4` to a "deprecated in" badge
    VersionRemoved,
    /// `+py3.4` to an "available since" badge
    VersionAdded,
    /// `'text'` to highlighted strong text
    Literal,
    /// `__name__` to italics
    UnderscoreIdentifier,
    /// Built-in type names to inline code
    BaseTypeName,
    /// Built-in exception names to a warning badge
    ExceptionName,
    /// ` - ` to an em dash
    EmDash,
    /// `name=default --` to a bold parameter name
    ParamNameSeparator,
    /// Remaining `--` to `:`
    DashToColon,
    /// `[u:42:name]` to a profile link
    UserReference,
}

impl RuleId {
    pub const ALL: [RuleId; 10] = [
        RuleId::VersionRemoved,
        RuleId::VersionAdded,
        RuleId::Literal,
        RuleId::UnderscoreIdentifier,
        RuleId::BaseTypeName,
        RuleId::ExceptionName,
        RuleId::EmDash,
        RuleId::ParamNameSeparator,
        RuleId::DashToColon,
        RuleId::UserReference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::VersionRemoved => "version-removed",
            RuleId::VersionAdded => "version-added",
            RuleId::Literal => "literal",
            RuleId::UnderscoreIdentifier => "underscore-identifier",
            RuleId::BaseTypeName => "base-type-name",
            RuleId::ExceptionName => "exception-name",
            RuleId::EmDash => "em-dash",
            RuleId::ParamNameSeparator => "param-name-separator",
            RuleId::DashToColon => "dash-to-colon",
            RuleId::UserReference => "user-reference",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

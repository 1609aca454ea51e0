//! Document kinds and the rule order each one runs
//!
//! A [`DocumentKind`] is the role of a page region. It decides which subset of
//! the catalogue applies and in which order:
//!
//! 1. Version markers run before the vocabulary rules, so a version token is
//!    never read as a type name, and removed runs before added.
//! 2. Vocabulary rules run after everything that emits markup around words,
//!    and skip text that is already inside that markup.
//! 3. The em dash runs last, after every rule that emits hyphens.
//! 4. For parameters, the name separator runs first because it consumes the
//!    `--` that the colon rule would otherwise rewrite.

use crate::refmark::error::AnnotateError;
use crate::refmark::rules::RuleId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Free-form description text of a reference entry
    Description,
    /// Return-value text of a function entry
    FunctionResult,
    /// Parameter list of a function entry
    FunctionParameters,
    /// User-authored text carrying `[u:id:name]` mentions
    UserMarkup,
}

const DESCRIPTION: &[RuleId] = &[
    RuleId::Literal,
    RuleId::UnderscoreIdentifier,
    RuleId::VersionRemoved,
    RuleId::VersionAdded,
    RuleId::BaseTypeName,
    RuleId::ExceptionName,
    RuleId::EmDash,
];

const FUNCTION_RESULT: &[RuleId] = &[
    RuleId::VersionRemoved,
    RuleId::VersionAdded,
    RuleId::BaseTypeName,
    RuleId::EmDash,
];

const FUNCTION_PARAMETERS: &[RuleId] = &[
    RuleId::ParamNameSeparator,
    RuleId::DashToColon,
    RuleId::Literal,
    RuleId::UnderscoreIdentifier,
    RuleId::VersionRemoved,
    RuleId::VersionAdded,
    RuleId::BaseTypeName,
    RuleId::ExceptionName,
    RuleId::EmDash,
];

const USER_MARKUP: &[RuleId] = &[RuleId::UserReference];

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Description,
        DocumentKind::FunctionResult,
        DocumentKind::FunctionParameters,
        DocumentKind::UserMarkup,
    ];

    /// Rules applied to this kind, in application order
    pub fn rule_order(&self) -> &'static [RuleId] {
        match self {
            DocumentKind::Description => DESCRIPTION,
            DocumentKind::FunctionResult => FUNCTION_RESULT,
            DocumentKind::FunctionParameters => FUNCTION_PARAMETERS,
            DocumentKind::UserMarkup => USER_MARKUP,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Description => "description",
            DocumentKind::FunctionResult => "function-result",
            DocumentKind::FunctionParameters => "function-parameters",
            DocumentKind::UserMarkup => "user-markup",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentKind::Description => "Reference entry description",
            DocumentKind::FunctionResult => "Function return value",
            DocumentKind::FunctionParameters => "Function parameter list",
            DocumentKind::UserMarkup => "User-authored text with mentions",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = AnnotateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AnnotateError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[RuleId], id: RuleId) -> usize {
        order
            .iter()
            .position(|r| *r == id)
            .unwrap_or_else(|| panic!("{id} missing"))
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.as_str().parse::<DocumentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        match "summary".parse::<DocumentKind>() {
            Err(AnnotateError::UnknownKind(name)) => assert_eq!(name, "summary"),
            other => panic!("Expected UnknownKind, got {other:?}"),
        }
    }

    #[test]
    fn test_em_dash_runs_last_wherever_present() {
        for kind in DocumentKind::ALL {
            let order = kind.rule_order();
            if order.contains(&RuleId::EmDash) {
                assert_eq!(order.last(), Some(&RuleId::EmDash), "{kind}");
            }
        }
    }

    #[test]
    fn test_versions_precede_vocabulary() {
        for kind in DocumentKind::ALL {
            let order = kind.rule_order();
            if !order.contains(&RuleId::BaseTypeName) {
                continue;
            }
            let removed = position(order, RuleId::VersionRemoved);
            let added = position(order, RuleId::VersionAdded);
            assert!(removed < added, "{kind}");
            assert!(added < position(order, RuleId::BaseTypeName), "{kind}");
        }
    }

    #[test]
    fn test_parameter_structure_runs_first() {
        let order = DocumentKind::FunctionParameters.rule_order();
        assert_eq!(&order[..2], &[RuleId::ParamNameSeparator, RuleId::DashToColon]);
    }

    #[test]
    fn test_function_result_excludes_exceptions_and_literals() {
        let order = DocumentKind::FunctionResult.rule_order();
        assert!(!order.contains(&RuleId::ExceptionName));
        assert!(!order.contains(&RuleId::Literal));
    }

    #[test]
    fn test_no_kind_repeats_a_rule() {
        for kind in DocumentKind::ALL {
            let order = kind.rule_order();
            for (i, id) in order.iter().enumerate() {
                assert!(!order[i + 1..].contains(id), "{kind} repeats {id}");
            }
        }
    }
}

//! Annotation rules and the global substitution they perform
//!
//! An [`AnnotationRule`] pairs a compiled pattern with a [`Replacer`]. Applying a
//! rule rewrites every non-overlapping match of the pattern, left to right, in a
//! single pass over the text.
//!
//! # Design
//!
//! Replacers are data, not closures: a [`Replacer::Template`] expands capture
//! references (`${1}`) and a [`Replacer::Function`] is a plain `fn` pointer over
//! the match captures. Neither can hold mutable state, so a rule is a pure
//! function of its input text.
//!
//! The `regex` crate has no look-around, so rules that need context around a
//! match (word boundaries next to markup, for instance) carry an optional
//! [`Boundary`] predicate that sees the whole haystack and can veto a match.
//!
//! # Examples
//!
//! ```ignore
//! let rule = AnnotationRule::new(
//!     RuleId::EmDash,
//!     Regex::new(r"[ \t]+-[ \t]+")?,
//!     Replacer::Template(" \u{2014} ".into()),
//! );
//! assert_eq!(rule.apply("a - b"), "a \u{2014} b");
//! ```

use crate::refmark::error::AnnotateError;
use crate::refmark::rules::RuleId;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Decides whether a match at `range` inside `haystack` may be replaced.
pub type Boundary = fn(haystack: &str, range: Range<usize>) -> bool;

/// How a match is turned into replacement text.
#[derive(Clone)]
pub enum Replacer {
    /// Expanded with [`Captures::expand`]; `${0}` is the whole match.
    Template(String),
    /// Receives the full match and its groups.
    Function(fn(&Captures<'_>) -> String),
}

impl Replacer {
    fn replace_into(&self, caps: &Captures<'_>, dst: &mut String) {
        match self {
            Replacer::Template(template) => caps.expand(template, dst),
            Replacer::Function(f) => dst.push_str(&f(caps)),
        }
    }
}

impl fmt::Debug for Replacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacer::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replacer::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// One (matcher, replacer) pair of the catalogue.
#[derive(Clone)]
pub struct AnnotationRule {
    id: RuleId,
    matcher: Regex,
    replacer: Replacer,
    boundary: Option<Boundary>,
}

impl fmt::Debug for AnnotationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationRule")
            .field("id", &self.id)
            .field("pattern", &self.matcher.as_str())
            .field("replacer", &self.replacer)
            .field("bounded", &self.boundary.is_some())
            .finish()
    }
}

impl AnnotationRule {
    pub fn new(id: RuleId, matcher: Regex, replacer: Replacer) -> Self {
        Self {
            id,
            matcher,
            replacer,
            boundary: None,
        }
    }

    /// Compile `pattern` and build a rule, attributing failures to `id`.
    pub fn compile(id: RuleId, pattern: &str, replacer: Replacer) -> Result<Self, AnnotateError> {
        let matcher =
            Regex::new(pattern).map_err(|source| AnnotateError::InvalidPattern { rule: id, source })?;
        Ok(Self::new(id, matcher, replacer))
    }

    /// Only replace matches the predicate accepts.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// Replace every accepted match in `text`.
    ///
    /// Returns the input borrowed when nothing was replaced.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut output = String::new();
        let mut last = 0;
        let mut replaced = 0usize;

        for caps in self.matcher.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if let Some(accept) = self.boundary {
                if !accept(text, whole.range()) {
                    continue;
                }
            }
            if replaced == 0 {
                output.reserve(text.len() + text.len() / 4);
            }
            output.push_str(&text[last..whole.start()]);
            self.replacer.replace_into(&caps, &mut output);
            last = whole.end();
            replaced += 1;
        }

        tracing::trace!(rule = %self.id, replaced, "rule applied");

        if replaced == 0 {
            return Cow::Borrowed(text);
        }
        output.push_str(&text[last..]);
        Cow::Owned(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(caps: &Captures<'_>) -> String {
        caps[1].to_uppercase()
    }

    #[test]
    fn test_template_expands_groups() {
        let rule =
            AnnotationRule::compile(RuleId::Literal, r"'([^']+)'", Replacer::Template("<q>${1}</q>".into()))
                .unwrap();
        assert_eq!(rule.apply("say 'hi' and 'bye'"), "say <q>hi</q> and <q>bye</q>");
    }

    #[test]
    fn test_function_receives_captures() {
        let rule = AnnotationRule::compile(RuleId::Literal, r"<(\w+)>", Replacer::Function(shout)).unwrap();
        assert_eq!(rule.apply("<a> then <bc>"), "A then BC");
    }

    #[test]
    fn test_no_match_borrows_input() {
        let rule = AnnotationRule::compile(RuleId::DashToColon, "--", Replacer::Template(":".into()))
            .unwrap();
        let out = rule.apply("nothing here");
        assert!(matches!(out, Cow::Borrowed("nothing here")));
    }

    #[test]
    fn test_empty_input() {
        let rule = AnnotationRule::compile(RuleId::DashToColon, "--", Replacer::Template(":".into()))
            .unwrap();
        assert_eq!(rule.apply(""), "");
    }

    #[test]
    fn test_boundary_vetoes_individual_matches() {
        fn not_first(_: &str, range: Range<usize>) -> bool {
            range.start > 0
        }
        let rule = AnnotationRule::compile(RuleId::DashToColon, "x", Replacer::Template("y".into()))
            .unwrap()
            .with_boundary(not_first);
        assert_eq!(rule.apply("xax"), "xay");
    }

    #[test]
    fn test_invalid_pattern_reports_rule() {
        let err = AnnotationRule::compile(RuleId::EmDash, "(", Replacer::Template(String::new()))
            .unwrap_err();
        match err {
            AnnotateError::InvalidPattern { rule, .. } => assert_eq!(rule, RuleId::EmDash),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_replacer_debug_hides_fn_pointer() {
        assert_eq!(format!("{:?}", Replacer::Function(shout)), "Function(..)");
    }
}

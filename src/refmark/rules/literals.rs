//! Quoted literals and dunder names

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::rule::{AnnotationRule, Replacer};
use crate::refmark::rules::markup::{is_inside_tag, outside_tag};
use crate::refmark::rules::RuleId;
use std::ops::Range;

/// `'text'` becomes highlighted strong text. Emitted attributes use double
/// quotes, so later rules never produce a single-quoted span.
///
/// The opening quote must not follow a word character and the closing quote
/// must not precede one, so apostrophes in prose (`it's`, `object's`) never
/// pair up.
pub fn literal() -> Result<AnnotationRule, AnnotateError> {
    Ok(AnnotationRule::compile(
        RuleId::Literal,
        r"(^|[^\w'])'([^'\n]+)'",
        Replacer::Template(r#"${1}<strong class="cl__green">${2}</strong>"#.into()),
    )?
    .with_boundary(quoted_outside_tag))
}

/// `__name__` becomes italic. The shortest match wins so `__a__.__b__` yields
/// two names, and angle brackets stop a match from running into markup.
pub fn underscore_identifier() -> Result<AnnotationRule, AnnotateError> {
    Ok(AnnotationRule::compile(
        RuleId::UnderscoreIdentifier,
        r"(__[^\s<>]+?__)",
        Replacer::Template("<i>${1}</i>".into()),
    )?
    .with_boundary(outside_tag))
}

fn quoted_outside_tag(haystack: &str, range: Range<usize>) -> bool {
    let after = haystack[range.end..].chars().next();
    if after.is_some_and(|ch| ch.is_alphanumeric() || ch == '_') {
        return false;
    }
    let quote = haystack[range.clone()]
        .find('\'')
        .map_or(range.start, |at| range.start + at);
    !is_inside_tag(haystack, quote)
}

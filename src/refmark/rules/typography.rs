//! Typographic clean-up

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::rule::{AnnotationRule, Replacer};
use crate::refmark::rules::markup::outside_tag;
use crate::refmark::rules::RuleId;

/// A hyphen with spaces or tabs on both sides becomes an em dash. Newlines do
/// not count, so a `- item` at the start of a line is left alone. Attribute
/// values are never touched.
pub fn em_dash() -> Result<AnnotationRule, AnnotateError> {
    Ok(AnnotationRule::compile(
        RuleId::EmDash,
        r"[ \t]+-[ \t]+",
        Replacer::Template(" \u{2014} ".into()),
    )?
    .with_boundary(outside_tag))
}

//! User mentions in user-authored text
//!
//! `[u:42:Jane Doe]` becomes a link to the user's profile.

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::rule::{AnnotationRule, Replacer};
use crate::refmark::rules::markup::{escape_attr, template_literal};
use crate::refmark::rules::RuleId;
use crate::refmark::settings::UserSettings;

pub fn user_reference(settings: &UserSettings) -> Result<AnnotationRule, AnnotateError> {
    let profile_base = template_literal(&escape_attr(&settings.profile_base));
    let title = template_literal(&escape_attr(&settings.link_title));
    AnnotationRule::compile(
        RuleId::UserReference,
        r"\[u:(\d+):\s*([^\]]*[^\]\s])\s*\]",
        Replacer::Template(format!(
            r#"<a href="{profile_base}${{1}}" title="{title}">${{2}}</a>"#
        )),
    )
}

//! Version availability badges
//!
//! `+py3.5` marks something available since a version, `-py2.7` marks it as
//! deprecated in one. Both become a small badge linking to the version page.
//! The version token is word characters separated by single dots, so a
//! sentence-ending period is not swallowed into the link.

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::rule::{AnnotationRule, Replacer};
use crate::refmark::rules::markup::{escape_attr, template_literal};
use crate::refmark::rules::RuleId;
use crate::refmark::settings::VersionSettings;

const VERSION_TOKEN: &str = r"(\w+(?:\.\w+)*)";

pub fn version_removed(settings: &VersionSettings) -> Result<AnnotationRule, AnnotateError> {
    AnnotationRule::compile(
        RuleId::VersionRemoved,
        &format!(r"-py{VERSION_TOKEN}"),
        Replacer::Template(badge("badge-danger", &settings.removed_title, &settings.link_base)),
    )
}

pub fn version_added(settings: &VersionSettings) -> Result<AnnotationRule, AnnotateError> {
    AnnotationRule::compile(
        RuleId::VersionAdded,
        &format!(r"\+py{VERSION_TOKEN}"),
        Replacer::Template(badge("badge-info", &settings.added_title, &settings.link_base)),
    )
}

fn badge(class: &str, title: &str, link_base: &str) -> String {
    let title = template_literal(&escape_attr(title));
    let link_base = template_literal(&escape_attr(link_base));
    format!(
        r#"<small><div class="badge {class}" title="{title}"><a href="{link_base}${{1}}/">${{1}}</a></div></small>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refmark::settings::load_defaults;

    fn settings() -> VersionSettings {
        load_defaults().unwrap().versions
    }

    #[test]
    fn test_added_badge() {
        let rule = version_added(&settings()).unwrap();
        assert_eq!(
            rule.apply("+py3.5"),
            r#"<small><div class="badge badge-info" title="Available since version"><a href="/versions/named/3.5/">3.5</a></div></small>"#
        );
    }

    #[test]
    fn test_removed_badge() {
        let rule = version_removed(&settings()).unwrap();
        assert_eq!(
            rule.apply("-py2.7"),
            r#"<small><div class="badge badge-danger" title="Deprecated in version"><a href="/versions/named/2.7/">2.7</a></div></small>"#
        );
    }

    #[test]
    fn test_trailing_period_stays_outside() {
        let rule = version_added(&settings()).unwrap();
        let out = rule.apply("Since +py3.10.");
        assert!(out.ends_with("3.10</a></div></small>."), "{out}");
    }

    #[test]
    fn test_sign_selects_rule() {
        let removed = version_removed(&settings()).unwrap();
        assert_eq!(removed.apply("+py3.5"), "+py3.5");
        let added = version_added(&settings()).unwrap();
        assert_eq!(added.apply("-py3.5"), "-py3.5");
    }

    #[test]
    fn test_settings_are_escaped() {
        let custom = VersionSettings {
            link_base: "/v/$1/".into(),
            added_title: r#"New "feature""#.into(),
            removed_title: String::new(),
        };
        let rule = version_added(&custom).unwrap();
        assert_eq!(
            rule.apply("+py3"),
            r#"<small><div class="badge badge-info" title="New &quot;feature&quot;"><a href="/v/$1/3/">3</a></div></small>"#
        );
    }
}

//! Parameter list structure
//!
//! Parameter text comes as one entry per line (or per `<br>`), each written as
//! `name -- description` or `name=default -- description`. The separator rule
//! bolds the name and dims its default; the colon rule then turns every
//! remaining `--` into `:`.

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::rule::{AnnotationRule, Replacer};
use crate::refmark::rules::RuleId;
use regex::Captures;

const MARKER: &str = r#"<span class="fa fa-certificate text-muted"></span>"#;

/// A name at the start of the fragment, of a line, or right after a `<br>` or
/// `<p>` tag, followed by whitespace and `--`. Inline tags do not start an entry.
pub fn param_name_separator() -> Result<AnnotationRule, AnnotateError> {
    AnnotationRule::compile(
        RuleId::ParamNameSeparator,
        r"(^|\n|(?i:<br\s*/?>|<p(?:\s[^<>]*)?>))([ \t]*)([^\s<>][^<>\n]*?)(\s--)",
        Replacer::Function(decorate_param),
    )
}

pub fn dash_to_colon() -> Result<AnnotationRule, AnnotateError> {
    AnnotationRule::compile(RuleId::DashToColon, "--", Replacer::Template(":".into()))
}

fn decorate_param(caps: &Captures<'_>) -> String {
    let name = &caps[3];
    let trimmed = name.trim_end();
    let trailing = &name[trimmed.len()..];
    format!(
        "{}{}{MARKER} <b>{}</b>{trailing}{}",
        &caps[1],
        &caps[2],
        dim_suffix(trimmed),
        &caps[4]
    )
}

/// Everything from the first `=` or whitespace on is dimmed.
fn dim_suffix(name: &str) -> String {
    match name.find(|ch: char| ch == '=' || ch.is_whitespace()) {
        Some(at) if at > 0 => format!(
            r#"{}<span class="text-muted">{}</span>"#,
            &name[..at],
            &name[at..]
        ),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "name -- description",
        r#"<span class="fa fa-certificate text-muted"></span> <b>name</b> -- description"#
    )]
    #[case(
        "name=1 -- description",
        r#"<span class="fa fa-certificate text-muted"></span> <b>name<span class="text-muted">=1</span></b> -- description"#
    )]
    #[case(
        "sep=' ' -- separator",
        r#"<span class="fa fa-certificate text-muted"></span> <b>sep<span class="text-muted">=' '</span></b> -- separator"#
    )]
    #[case(
        "count=-1 -- limit",
        r#"<span class="fa fa-certificate text-muted"></span> <b>count<span class="text-muted">=-1</span></b> -- limit"#
    )]
    #[case(
        "name  -- wide gap",
        r#"<span class="fa fa-certificate text-muted"></span> <b>name</b>  -- wide gap"#
    )]
    #[case("no separator here", "no separator here")]
    #[case("a--b", "a--b")]
    fn test_param_name_separator(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(param_name_separator().unwrap().apply(input), expected);
    }

    #[test]
    fn test_each_line_gets_its_own_name() {
        let rule = param_name_separator().unwrap();
        let out = rule.apply("a -- first<br>b=2 -- second\n  c -- third");
        assert_eq!(
            out,
            concat!(
                r#"<span class="fa fa-certificate text-muted"></span> <b>a</b> -- first<br>"#,
                r#"<span class="fa fa-certificate text-muted"></span> <b>b<span class="text-muted">=2</span></b> -- second"#,
                "\n  ",
                r#"<span class="fa fa-certificate text-muted"></span> <b>c</b> -- third"#,
            )
        );
    }

    #[test]
    fn test_only_first_separator_on_a_line_is_structural() {
        let rule = param_name_separator().unwrap();
        let out = rule.apply("mode -- either -- or");
        assert_eq!(
            out,
            r#"<span class="fa fa-certificate text-muted"></span> <b>mode</b> -- either -- or"#
        );
    }

    #[rstest]
    #[case("a -- x<BR/>b -- y")]
    #[case("a -- x<br />b -- y")]
    #[case("<p class=\"arg\">a -- x</p><p>b -- y")]
    fn test_line_break_tags_start_an_entry(#[case] input: &str) {
        let out = param_name_separator().unwrap().apply(input);
        assert_eq!(out.matches(MARKER).count(), 2, "{out}");
        assert!(out.contains("<b>a</b>") && out.contains("<b>b</b>"), "{out}");
    }

    #[test]
    fn test_inline_tags_do_not_start_an_entry() {
        let rule = param_name_separator().unwrap();
        let out = rule.apply("mode -- see <code>x</code> then -- or");
        assert_eq!(
            out,
            r#"<span class="fa fa-certificate text-muted"></span> <b>mode</b> -- see <code>x</code> then -- or"#
        );
    }

    #[test]
    fn test_dash_to_colon() {
        let rule = dash_to_colon().unwrap();
        assert_eq!(rule.apply("<b>x</b> -- y -- z"), "<b>x</b> : y : z");
    }
}

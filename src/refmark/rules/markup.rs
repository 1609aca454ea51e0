//! Helpers shared by rules that emit or inspect markup

use std::ops::Range;

/// Inline elements the catalogue wraps tokens in. Text directly inside one of
/// these has already been decorated.
const EMITTED_INLINE: &[&str] = &["a", "b", "code", "i", "span", "strong"];

/// Escape a value for use inside a double-quoted attribute or as element text.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Make a value safe to splice into a replacement template (no capture references).
pub fn template_literal(value: &str) -> String {
    value.replace('$', "$$")
}

/// True when byte offset `start` sits between a tag's `<` and its `>`.
pub fn is_inside_tag(haystack: &str, start: usize) -> bool {
    let before = &haystack[..start];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Boundary for rules that must never rewrite tag names or attribute values.
pub fn outside_tag(haystack: &str, range: Range<usize>) -> bool {
    !is_inside_tag(haystack, range.start)
}

/// True when byte offset `start` sits inside a tag, or in the first text run of
/// an inline element the catalogue emits.
pub fn is_inside_markup(haystack: &str, start: usize) -> bool {
    if is_inside_tag(haystack, start) {
        return true;
    }
    let before = &haystack[..start];
    let Some(last_close) = before.rfind('>') else {
        return false;
    };

    let Some(open) = before[..last_close].rfind('<') else {
        return false;
    };
    let tag = &before[open + 1..last_close];
    if tag.starts_with('/') || tag.ends_with('/') {
        return false;
    }
    let name = tag.split(char::is_whitespace).next().unwrap_or_default();
    EMITTED_INLINE
        .iter()
        .any(|inline| inline.eq_ignore_ascii_case(name))
}

//! Closed vocabularies: built-in type names and exception names
//!
//! Both rules only fire on standalone words. A word is standalone when the
//! regex word boundary holds, it is not part of a dotted path, a hyphenated
//! compound or a URL, and it is not already inside markup emitted by an earlier
//! rule (a version badge link, a highlighted literal).

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::rule::{AnnotationRule, Replacer};
use crate::refmark::rules::markup::is_inside_markup;
use crate::refmark::rules::RuleId;
use crate::refmark::settings::VocabularySettings;
use std::ops::Range;

pub const BASE_TYPE_NAMES: &[&str] = &[
    "bool",
    "bytearray",
    "bytes",
    "callable",
    "complex",
    "dict",
    "False",
    "float",
    "frozenset",
    "int",
    "iterable",
    "iterator",
    "list",
    "memoryview",
    "None",
    "object",
    "set",
    "str",
    "True",
    "tuple",
    "unicode",
    "Callable",
    "Iterable",
    "Iterator",
    "Mapping",
    "Sequence",
];

pub const EXCEPTION_NAMES: &[&str] = &[
    "ArithmeticError",
    "AssertionError",
    "AttributeError",
    "BufferError",
    "EOFError",
    "Exception",
    "FileExistsError",
    "FileNotFoundError",
    "ImportError",
    "IndexError",
    "KeyError",
    "LookupError",
    "MemoryError",
    "ModuleNotFoundError",
    "NameError",
    "NotImplementedError",
    "OSError",
    "OverflowError",
    "PermissionError",
    "RecursionError",
    "RuntimeError",
    "StopIteration",
    "SyntaxError",
    "SystemError",
    "TimeoutError",
    "TypeError",
    "UnboundLocalError",
    "UnicodeDecodeError",
    "UnicodeEncodeError",
    "UnicodeError",
    "ValueError",
    "ZeroDivisionError",
];

pub fn base_type_name(settings: &VocabularySettings) -> Result<AnnotationRule, AnnotateError> {
    let pattern = alternation(BASE_TYPE_NAMES, &settings.extra_base_types);
    Ok(AnnotationRule::compile(
        RuleId::BaseTypeName,
        &pattern,
        Replacer::Template("<code>${0}</code>".into()),
    )?
    .with_boundary(standalone_word))
}

pub fn exception_name(settings: &VocabularySettings) -> Result<AnnotationRule, AnnotateError> {
    let pattern = alternation(EXCEPTION_NAMES, &settings.extra_exceptions);
    Ok(AnnotationRule::compile(
        RuleId::ExceptionName,
        &pattern,
        Replacer::Template(r#"<span class="badge badge-warning">${0}</span>"#.into()),
    )?
    .with_boundary(standalone_word))
}

/// `\b(?:a|b|...)\b`, longest names first so a prefix never shadows a longer word.
fn alternation(builtin: &[&str], extra: &[String]) -> String {
    let mut words: Vec<&str> = builtin
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .filter(|word| !word.trim().is_empty())
        .collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();

    let escaped: Vec<String> = words.iter().map(|word| regex::escape(word.trim())).collect();
    format!(r"\b(?:{})\b", escaped.join("|"))
}

fn standalone_word(haystack: &str, range: Range<usize>) -> bool {
    let before = haystack[..range.start].chars().next_back();
    let after = haystack[range.end..].chars().next();
    if matches!(before, Some('.' | '-' | '/')) || matches!(after, Some('-' | '/')) {
        return false;
    }
    !is_inside_markup(haystack, range.start)
}

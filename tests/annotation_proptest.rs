//! Property-based tests for the annotation pipeline
//!
//! Text without any recognised vocabulary must come back unchanged, and no
//! input may make the pipeline panic or behave non-deterministically.

use proptest::prelude::*;
use refmark::refmark::pipeline::{AnnotationPipeline, DocumentKind};

fn any_kind() -> impl Strategy<Value = DocumentKind> {
    prop::sample::select(DocumentKind::ALL.to_vec())
}

/// Lowercase prose without `c`, `i`, `o` or `t` cannot spell any built-in
/// type name, and without quotes, underscores, brackets or hyphens it cannot
/// trigger any other rule.
fn inert_text() -> impl Strategy<Value = String> {
    "[abdefghjklmnpqrsuvwxyz ,.;:!?()]{0,80}"
}

proptest! {
    #[test]
    fn inert_text_round_trips(text in inert_text(), kind in any_kind()) {
        let pipeline = AnnotationPipeline::new();
        prop_assert_eq!(pipeline.annotate(&text, kind), text);
    }

    #[test]
    fn annotation_is_deterministic(text in ".{0,120}", kind in any_kind()) {
        let pipeline = AnnotationPipeline::new();
        let first = pipeline.annotate(&text, kind);
        let second = pipeline.annotate(&text, kind);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn markup_heavy_input_never_panics(
        text in r"[a-zA-Z0-9 <>/='_+\-\[\]:.\n]{0,160}",
        kind in any_kind(),
    ) {
        let _ = AnnotationPipeline::new().annotate(&text, kind);
    }

    #[test]
    fn em_dash_is_the_only_change_between_inert_words(
        left in "[abdefghjklmnpqrsuvwxyz]{1,12}",
        right in "[abdefghjklmnpqrsuvwxyz]{1,12}",
    ) {
        let input = format!("{left} - {right}");
        let out = AnnotationPipeline::new().annotate(&input, DocumentKind::Description);
        prop_assert_eq!(out, format!("{left} \u{2014} {right}"));
    }
}

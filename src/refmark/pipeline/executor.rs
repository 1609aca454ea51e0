//! Pipeline executor that runs a document kind's rules over a fragment

use crate::refmark::pipeline::catalogue::RuleCatalogue;
use crate::refmark::pipeline::config::DocumentKind;
use std::borrow::Cow;
use std::sync::Arc;

/// Applies the ordered rules of a [`DocumentKind`] to text.
///
/// Each rule rewrites the output of the previous one; there is no backtracking
/// across rules and no state kept between calls. Cloning is cheap and clones
/// share one catalogue, so a pipeline can be handed to several threads.
#[derive(Debug, Clone)]
pub struct AnnotationPipeline {
    catalogue: Arc<RuleCatalogue>,
}

impl AnnotationPipeline {
    /// Create a pipeline over the built-in catalogue
    pub fn new() -> Self {
        Self {
            catalogue: RuleCatalogue::builtin(),
        }
    }

    /// Create a pipeline over a custom catalogue
    pub fn with_catalogue(catalogue: Arc<RuleCatalogue>) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &RuleCatalogue {
        &self.catalogue
    }

    /// Annotate `text` with the rules of `kind`.
    pub fn annotate(&self, text: &str, kind: DocumentKind) -> String {
        let rule_set = self.catalogue.rule_set(kind);
        tracing::debug!(kind = %kind, rules = rule_set.len(), bytes = text.len(), "annotating fragment");

        let mut html: Cow<'_, str> = Cow::Borrowed(text);
        for rule in rule_set.iter() {
            let next = match rule.apply(&html) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = next {
                html = Cow::Owned(rewritten);
            }
        }
        html.into_owned()
    }

    /// Annotate a region that may be absent from the page. Absence is a no-op.
    pub fn annotate_region(&self, text: Option<&str>, kind: DocumentKind) -> Option<String> {
        text.map(|text| self.annotate(text, kind))
    }
}

impl Default for AnnotationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

//! The compiled rule catalogue
//!
//! Holds exactly one compiled rule per [`RuleId`]. The built-in catalogue is
//! compiled from the embedded default settings the first time it is needed and
//! is shared read-only from then on. Callers with site-specific settings build
//! their own with [`RuleCatalogue::from_settings`].

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::config::DocumentKind;
use crate::refmark::pipeline::rule::AnnotationRule;
use crate::refmark::rules::{literals, mentions, params, typography, versions, vocabulary, RuleId};
use crate::refmark::settings::{self, Settings};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<RuleCatalogue>> = Lazy::new(|| {
    let settings = settings::load_defaults().expect("embedded default settings are valid");
    Arc::new(RuleCatalogue::from_settings(&settings).expect("built-in rules compile"))
});

#[derive(Debug)]
pub struct RuleCatalogue {
    rules: HashMap<RuleId, AnnotationRule>,
}

impl RuleCatalogue {
    /// The process-wide catalogue built from the default settings
    pub fn builtin() -> Arc<RuleCatalogue> {
        Arc::clone(&BUILTIN)
    }

    /// Compile every rule of the catalogue with the given settings
    pub fn from_settings(settings: &Settings) -> Result<Self, AnnotateError> {
        let compiled = [
            versions::version_removed(&settings.versions)?,
            versions::version_added(&settings.versions)?,
            literals::literal()?,
            literals::underscore_identifier()?,
            vocabulary::base_type_name(&settings.vocabulary)?,
            vocabulary::exception_name(&settings.vocabulary)?,
            typography::em_dash()?,
            params::param_name_separator()?,
            params::dash_to_colon()?,
            mentions::user_reference(&settings.users)?,
        ];

        let rules: HashMap<_, _> = compiled.into_iter().map(|rule| (rule.id(), rule)).collect();
        tracing::debug!(rules = rules.len(), "rule catalogue compiled");
        Ok(Self { rules })
    }

    /// Look up a rule. Every [`RuleId`] is present in a catalogue.
    pub fn rule(&self, id: RuleId) -> &AnnotationRule {
        &self.rules[&id]
    }

    /// The ordered rules for `kind`
    pub fn rule_set(&self, kind: DocumentKind) -> RuleSet<'_> {
        RuleSet {
            kind,
            rules: kind.rule_order().iter().map(|id| self.rule(*id)).collect(),
        }
    }
}

/// Ordered rules for one document kind, borrowed from a catalogue.
#[derive(Debug)]
pub struct RuleSet<'c> {
    kind: DocumentKind,
    rules: Vec<&'c AnnotationRule>,
}

impl<'c> RuleSet<'c> {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'c AnnotationRule> + '_ {
        self.rules.iter().copied()
    }
}

//! Ordered annotation pipeline
//!
//! This module provides:
//! - Rule infrastructure (`AnnotationRule`, `Replacer`) - one global substitution each
//! - The compiled catalogue (`RuleCatalogue`, `RuleSet`) - one rule per concern
//! - Kind-based processing (`AnnotationPipeline`) - runs a kind's rules in order
//! - A string/file front end (`FragmentLoader`)

pub mod catalogue;
pub mod config;
pub mod executor;
pub mod loader;
pub mod rule;

pub use catalogue::{RuleCatalogue, RuleSet};
pub use config::DocumentKind;
pub use executor::AnnotationPipeline;
pub use loader::FragmentLoader;
pub use rule::{AnnotationRule, Boundary, Replacer};

pub use crate::refmark::rules::RuleId;

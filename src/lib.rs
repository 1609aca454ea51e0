//! # refmark
//!
//! Decorates API reference HTML fragments (signatures, type names, version
//! markers, literals) by running an ordered set of substitution rules over them.
//!
//! The entry point is [`refmark::pipeline::AnnotationPipeline`]; the rule order for
//! each region role lives in [`refmark::pipeline::DocumentKind`].

pub mod refmark;

//! Main module for refmark library functionality

pub mod error;
pub mod pipeline;
pub mod rules;
pub mod settings;

pub use error::AnnotateError;
pub use pipeline::{AnnotationPipeline, DocumentKind};

/// Annotate `text` with the built-in catalogue.
pub fn annotate(text: &str, kind: DocumentKind) -> String {
    AnnotationPipeline::new().annotate(text, kind)
}

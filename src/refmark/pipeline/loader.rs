//! Fragment loading and annotation API
//!
//! `FragmentLoader` is the front door for callers holding fragments as strings,
//! as optional page regions, or as files on disk.
//!
//! # Architecture
//!
//! - String-based methods are the core functionality
//! - File-based methods are thin wrappers (read file, then call string method)
//! - All operations delegate to [`AnnotationPipeline`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use refmark::refmark::pipeline::{DocumentKind, FragmentLoader};
//!
//! let loader = FragmentLoader::new();
//! let html = loader.annotate("name -- the name", DocumentKind::FunctionParameters);
//! let html = loader.load_and_annotate("fragments/params.html", DocumentKind::FunctionParameters)?;
//! ```

use crate::refmark::error::AnnotateError;
use crate::refmark::pipeline::catalogue::RuleCatalogue;
use crate::refmark::pipeline::config::DocumentKind;
use crate::refmark::pipeline::executor::AnnotationPipeline;
use crate::refmark::settings::Settings;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FragmentLoader {
    pipeline: AnnotationPipeline,
}

impl FragmentLoader {
    /// Create a loader over the built-in catalogue
    pub fn new() -> Self {
        Self {
            pipeline: AnnotationPipeline::new(),
        }
    }

    /// Create a loader over a catalogue compiled from `settings`
    pub fn with_settings(settings: &Settings) -> Result<Self, AnnotateError> {
        let catalogue = RuleCatalogue::from_settings(settings)?;
        Ok(Self::with_pipeline(AnnotationPipeline::with_catalogue(
            Arc::new(catalogue),
        )))
    }

    pub fn with_pipeline(pipeline: AnnotationPipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &AnnotationPipeline {
        &self.pipeline
    }

    // ===== STRING-BASED PROCESSING (core methods) =====

    pub fn annotate(&self, source: &str, kind: DocumentKind) -> String {
        self.pipeline.annotate(source, kind)
    }

    pub fn annotate_region(&self, source: Option<&str>, kind: DocumentKind) -> Option<String> {
        self.pipeline.annotate_region(source, kind)
    }

    // ===== FILE-BASED PROCESSING (convenience wrappers) =====

    /// Read a UTF-8 fragment from `path` and annotate it
    pub fn load_and_annotate<P: AsRef<Path>>(
        &self,
        path: P,
        kind: DocumentKind,
    ) -> Result<String, AnnotateError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| AnnotateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), kind = %kind, "loaded fragment");
        Ok(self.annotate(&source, kind))
    }
}

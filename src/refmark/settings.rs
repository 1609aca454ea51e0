//! Settings loader for refmark.
//!
//! `defaults/refmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Callers layer site-specific files and
//! `REFMARK_*` environment variables on top of those defaults via [`Loader`]
//! before deserializing into [`Settings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/refmark.default.toml");
const ENV_PREFIX: &str = "REFMARK";

/// Top-level settings consumed by the rule catalogue.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub versions: VersionSettings,
    pub users: UserSettings,
    pub vocabulary: VocabularySettings,
}

/// Strings spliced into the version badges.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionSettings {
    pub link_base: String,
    pub added_title: String,
    pub removed_title: String,
}

/// Strings spliced into user profile links.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    pub profile_base: String,
    pub link_title: String,
}

/// Site-specific additions to the closed vocabularies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularySettings {
    #[serde(default)]
    pub extra_base_types: Vec<String>,
    #[serde(default)]
    pub extra_exceptions: Vec<String>,
}

/// Builds [`Settings`] from the embedded defaults plus site layers.
///
/// Layers apply in call order; later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a site settings file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a site settings file if it exists (the CLI's `./refmark.toml`).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Layer `REFMARK_<SECTION>__<KEY>` variables from the process environment,
    /// e.g. `REFMARK_VERSIONS__LINK_BASE`.
    pub fn with_env(self) -> Self {
        self.with_env_source(None)
    }

    /// Layer `REFMARK_*` variables from `vars` instead of the process environment.
    pub fn with_env_vars(self, vars: HashMap<String, String>) -> Self {
        self.with_env_source(Some(vars))
    }

    /// Set one dotted key, e.g. `versions.added_title`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn with_env_source(mut self, vars: Option<HashMap<String, String>>) -> Self {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(vars);
        self.builder = self.builder.add_source(environment);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}

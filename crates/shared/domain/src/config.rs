use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the registry crates and hosts.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfigInner {
    pub validation: ValidationConfig,
    pub presentation: PresentationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into class definitions and hosts.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    #[serde(flatten, default)]
    inner: Arc<RegistryConfigInner>,
}

impl Deref for RegistryConfig {
    type Target = RegistryConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RegistryConfig {
    fn deref_mut(&mut self) -> &mut RegistryConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// How strictly payloads are checked before the host commits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject references whose class is outside the field's permitted targets.
    /// When off, every payload is accepted and the editor's candidate filtering is trusted.
    pub enforce_reference_targets: bool,
}

/// Knobs for detail and edit presentations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Shown for absent or unresolvable values.
    pub placeholder: String,
    /// How many levels of related-item previews are expanded.
    pub max_preview_depth: u8,
}

/// Logging setup for hosts that own the process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub env_filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { enforce_reference_targets: true }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self { placeholder: "—".to_owned(), max_preview_depth: 2 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), env_filter: None, directory: None, json: false, max_files: 10 }
    }
}

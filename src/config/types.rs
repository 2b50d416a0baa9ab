//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::value_objects::FailurePolicy;
use crate::error::SweepResult;

use super::builtin::builtin_manifest;
use super::loader::{self, ConfigWarning};

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunConfig {
    /// Working root; relative values are resolved against the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub on_failure: FailurePolicy,
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Entries to delete; the built-in manifest is used when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manifest: Vec<ManifestEntry>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SweepResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and return non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// The validated manifest for this configuration
    pub fn manifest(&self) -> SweepResult<Manifest> {
        if self.manifest.is_empty() {
            return Ok(builtin_manifest());
        }
        Manifest::new(self.manifest.clone())
    }

    /// True when the manifest comes from configuration rather than the built-in list
    pub fn has_custom_manifest(&self) -> bool {
        !self.manifest.is_empty()
    }

    /// Serialize to TOML (used by `sweep init`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

//! Configuration file handling
//!
//! Looked up in order:
//! 1. `--config PATH` (or `VALSCHEMA_CONFIG`)
//! 2. `.valschema.yaml` in the working directory
//! 3. `~/.config/valschema/config.yaml`
//!
//! Relative paths inside a config file are resolved against the directory
//! holding that file. Command-line flags and environment variables always
//! win over the file.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use valschema_core::{AllNonEmptyPolicy, ComponentPolicy, NoRequiredPolicy, RequiredPolicy};

use crate::error::{CliError, Result};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".valschema.yaml";

/// How `required` lists are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredMode {
    /// Non-empty values are required; disabled components only require `enabled`
    #[default]
    Component,
    /// Every non-empty value is required
    NonEmpty,
    /// Never emit required properties
    #[value(name = "none")]
    #[serde(rename = "none")]
    Never,
}

impl RequiredMode {
    pub fn policy(self) -> Box<dyn RequiredPolicy> {
        match self {
            RequiredMode::Component => Box::new(ComponentPolicy),
            RequiredMode::NonEmpty => Box::new(AllNonEmptyPolicy),
            RequiredMode::Never => Box::new(NoRequiredPolicy),
        }
    }
}

/// Settings read from a config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    /// Values file, chart directory or packaged chart
    #[serde(default)]
    pub values: Option<PathBuf>,

    /// Overrides files, merged in order
    #[serde(default)]
    pub overrides: Vec<PathBuf>,

    /// Where the schema is written
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub required: Option<RequiredMode>,

    /// `$schema` URI for the generated document
    #[serde(default)]
    pub schema_uri: Option<String>,
}

impl FileConfig {
    /// Load the first config file found, or defaults if there is none
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from(&local);
        }

        if let Some(path) = Self::user_config_path().filter(|p| p.is_file()) {
            return Self::load_from(&path);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::parse(&content).map_err(|e| {
            CliError::config_with_help(
                format!("Failed to parse {}: {}", path.display(), e),
                "Supported keys: values, overrides, output, required, schemaUri",
            )
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve relative paths against `base`
    fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.values = self.values.map(resolve);
        self.overrides = self.overrides.into_iter().map(resolve).collect();
        self.output = self.output.map(resolve);
        self
    }

    /// Get the per-user config path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("valschema").join("config.yaml"))
    }
}

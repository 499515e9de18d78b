//! CLI commands

pub mod generate;
pub mod show;

use clap::Args;
use std::path::PathBuf;

use crate::config::FileConfig;

/// Default values file when nothing else is configured
pub const DEFAULT_VALUES: &str = "values.yaml";

/// Where the values come from, shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Values file, chart directory or packaged chart (.tgz) [default: values.yaml]
    #[arg(env = "VALSCHEMA_VALUES")]
    pub values: Option<PathBuf>,

    /// Overrides file(s) deep-merged on top of the values, in order
    #[arg(
        short = 'f',
        long = "overrides",
        env = "VALSCHEMA_OVERRIDES",
        value_delimiter = ','
    )]
    pub overrides: Vec<PathBuf>,
}

impl SourceArgs {
    /// Values path: argument, then config file, then `values.yaml`
    pub fn values_path(&self, config: &FileConfig) -> PathBuf {
        self.values
            .clone()
            .or_else(|| config.values.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VALUES))
    }

    /// Overrides from the command line, or the config file's when none given
    pub fn overrides_paths(&self, config: &FileConfig) -> Vec<PathBuf> {
        if self.overrides.is_empty() {
            config.overrides.clone()
        } else {
            self.overrides.clone()
        }
    }
}

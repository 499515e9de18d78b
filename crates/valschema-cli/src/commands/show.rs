//! Show command - print the merged values inference will see

use clap::Args;
use miette::{IntoDiagnostic, WrapErr};
use std::io::Write;
use valschema_core::{FsLoader, Value, load_merged};

use super::SourceArgs;
use crate::config::FileConfig;
use crate::error::Result;

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &ShowArgs, config: &FileConfig) -> Result<()> {
    let values = args.source.values_path(config);
    let overrides = args.source.overrides_paths(config);

    let merged = load_merged(&FsLoader, &values, &overrides)?;

    let yaml = serde_yaml::to_string(&Value::Mapping(merged))
        .into_diagnostic()
        .wrap_err("Failed to render merged values")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(yaml.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

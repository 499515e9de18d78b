//! Generate command - infer a JSON Schema from values

use clap::Args;
use console::style;
use std::path::PathBuf;
use valschema_core::{
    DEFAULT_SCHEMA_URI, FileWriter, FsLoader, Generator, SchemaWriter, StdoutWriter,
};

use super::SourceArgs;
use crate::config::{FileConfig, RequiredMode};
use crate::error::Result;

/// Default output file when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "values.schema.json";

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file [default: values.schema.json], ignored with --stdout
    #[arg(short, long, env = "VALSCHEMA_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the schema to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// How required properties are chosen [default: component]
    #[arg(long, value_enum, env = "VALSCHEMA_REQUIRED")]
    pub required: Option<RequiredMode>,

    /// `$schema` URI written at the top of the document
    #[arg(long, env = "VALSCHEMA_SCHEMA_URI")]
    pub schema_uri: Option<String>,
}

/// Fully resolved generate options
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSettings {
    pub values: PathBuf,
    pub overrides: Vec<PathBuf>,
    pub output: PathBuf,
    pub required: RequiredMode,
    pub schema_uri: String,
}

impl GenerateSettings {
    /// Flags and env first, then the config file, then built-in defaults
    pub fn resolve(args: &GenerateArgs, config: &FileConfig) -> Self {
        Self {
            values: args.source.values_path(config),
            overrides: args.source.overrides_paths(config),
            output: args
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            required: args.required.or(config.required).unwrap_or_default(),
            schema_uri: args
                .schema_uri
                .clone()
                .or_else(|| config.schema_uri.clone())
                .unwrap_or_else(|| DEFAULT_SCHEMA_URI.to_string()),
        }
    }
}

pub fn run(args: &GenerateArgs, config: &FileConfig) -> Result<()> {
    let settings = GenerateSettings::resolve(args, config);
    // Status lines would corrupt the document on stdout
    let quiet = args.stdout;

    if !quiet {
        println!(
            "{} Generating schema from {}",
            style("→").blue(),
            settings.values.display()
        );
        for path in &settings.overrides {
            println!("  {} Merging overrides from {}", style("→").blue(), path.display());
        }
    }

    let generator = Generator::new(FsLoader, settings.required.policy())
        .with_schema_uri(&settings.schema_uri);
    let doc = generator.generate(&settings.values, &settings.overrides)?;

    if args.stdout {
        return Ok(StdoutWriter.write(&doc)?);
    }

    FileWriter::new(&settings.output).write(&doc)?;

    let property_count = doc.root.properties.as_ref().map_or(0, |p| p.len());
    println!(
        "{} Schema written to {} ({} properties, {} required)",
        style("✓").green(),
        settings.output.display(),
        property_count,
        doc.required().len()
    );

    Ok(())
}

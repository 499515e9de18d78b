//! valschema CLI - Generate a JSON Schema from a Helm-style values.yaml

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod exit_codes;
mod logging;

use commands::generate::GenerateArgs;
use commands::show::ShowArgs;
use config::FileConfig;
use error::Result;

#[derive(Parser)]
#[command(name = "valschema")]
#[command(version)]
#[command(about = "Generate a JSON Schema from a Helm-style values.yaml", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: .valschema.yaml, then ~/.config/valschema/config.yaml)
    #[arg(long, global = true, env = "VALSCHEMA_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate values.schema.json from values and overrides
    Generate(GenerateArgs),

    /// Print the merged values as YAML
    Show(ShowArgs),
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();
    logging::initialize_logging(cli.debug);

    let code = match run(cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let config = FileConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => commands::generate::run(&args, &config),
        Commands::Show(args) => commands::show::run(&args, &config),
    }
}

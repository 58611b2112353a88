//! graphdoc - GraphQL schema documentation in the terminal.
//!
//! This is the entry point for the `graphdoc` binary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use graphdoc_cli::{format_violations, CliResult, Explorer, ExplorerConfig, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphdoc")]
#[command(about = "Browse GraphQL schema documentation, including argument constraints")]
struct Cli {
    /// Introspection JSON to load (default: the built-in example schema)
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, default_value = "graphdoc.toml")]
    config: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the schema overview
    Schema,

    /// Show the page of a named type
    Type {
        /// Type name, e.g. Business
        name: String,
    },

    /// Show the page of a field
    Field {
        /// Field coordinate, e.g. MutationType.create_business
        path: String,
    },

    /// Check that constraints only reference declared arguments
    Check,

    /// Print the schema as introspection JSON
    Export,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let mut config = ExplorerConfig::load(&cli.config)?;
    if let Some(schema) = cli.schema {
        config.schema = Some(schema);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let explorer = Explorer::from_config(config)?;

    let output = match cli.command {
        Command::Schema => explorer.schema_doc()?,
        Command::Type { name } => explorer.type_doc(&name)?,
        Command::Field { path } => explorer.field_doc(&path)?,
        Command::Export => explorer.export()?,
        Command::Check => {
            let violations = explorer.check();
            println!("{}", format_violations(&violations));
            return Ok(if violations.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

//! astarte-gen CLI - Astarte interface table generator
//!
//! Commands:
//! - `astarte-gen generate` - Write the generated header and source
//! - `astarte-gen check` - Verify generated files are up to date

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod args;
mod logging;

use args::PathArgs;

#[derive(Parser)]
#[command(name = "astarte-gen")]
#[command(author, version, about = "Generate C interface tables from Astarte interface schemas", long_about = None)]
struct Cli {
    /// TOML configuration file; explicit flags override its values
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the interface header and source files
    Generate {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Fail if the generated files differ from what the schemas produce
    Check {
        #[command(flatten)]
        paths: PathArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate { paths } => {
            let config = paths.resolve(cli.config.as_deref())?;
            astarte_gen_core::generate(&config).with_context(|| {
                format!(
                    "Failed to generate interfaces from {}",
                    config.interfaces_dir.display()
                )
            })?;
        }
        Commands::Check { paths } => {
            let config = paths.resolve(cli.config.as_deref())?;
            astarte_gen_core::check(&config).context("Generated interfaces are not up to date")?;
        }
    }

    Ok(())
}

//! qgen Command-Line Interface
//!
//! Renders quantum programs stored as JSON or YAML into Quil, OpenQASM 2.0
//! or Q#.
//!
//! ```text
//! qgen render -i bell.json -d qasm
//! qgen gates
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{gates, render, version};
use config::CliConfig;

/// qgen - render quantum programs into Quil, OpenQASM 2.0 and Q#
#[derive(Parser)]
#[command(name = "qgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.qgen/config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a program file in a target dialect
    Render {
        /// Input file (JSON or YAML)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Target dialect (quil, qasm, q#)
        #[arg(short, long, env = "QGEN_DIALECT")]
        dialect: Option<String>,
    },

    /// List extended gates and the dialects that support them
    Gates,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Render {
            input,
            output,
            dialect,
        } => render::execute(&input, output.as_deref(), dialect.as_deref(), &config),

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

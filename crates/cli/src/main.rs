mod commands;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CountryCommand, GenerateCommand, ParseCommand};

/// Datecode CLI - generate and decode manufacturing date codes
#[derive(Debug, Parser)]
#[command(
    name = "datecode",
    version,
    about = "Generate and decode manufacturing date codes"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a date code from manufacturing fields
    Generate(GenerateCommand),
    /// Decode a date code with a chosen era's rules
    Parse(ParseCommand),
    /// Resolve a factory location code to its countries
    Country(CountryCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let exit_code = match cli.command {
        Commands::Generate(cmd) => cmd.execute()?,
        Commands::Parse(cmd) => cmd.execute()?,
        Commands::Country(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}

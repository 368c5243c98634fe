//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::demo;
use super::output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(author, version, about = "In-memory task tracking: users, projects, and tasks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the sample data set and print its reports
    Demo,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Demo => {
            output.verbose_ctx("demo", "Seeding the sample data set");
            demo::run(&output)?;
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

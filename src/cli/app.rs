//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::report::{self, ReportPass};

#[derive(Parser)]
#[command(name = "shapes")]
#[command(author, version, about = "Area and perimeter report for a catalog of shapes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text", env = "SHAPES_FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(
        long,
        short = 'v',
        global = true,
        env = "SHAPES_VERBOSE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Disable terminal colors
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sample catalog report (default)
    Report {
        /// Report pass to print
        #[arg(long, short, value_enum, default_value_t = ReportPass::All)]
        pass: ReportPass,
    },

    /// Run the self-check battery only
    Check,

    /// List shape kinds and their display labels
    Kinds,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose, cli.no_color);

    output.verbose("Shapes starting");

    match cli.command.unwrap_or(Commands::Report { pass: ReportPass::All }) {
        Commands::Report { pass } => {
            output.verbose_ctx("report", &format!("Printing report, pass: {:?}", pass));
            report::run(&output, pass)?
        }
        Commands::Check => report::check(&output)?,
        Commands::Kinds => report::kinds(&output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

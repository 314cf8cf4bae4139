mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "agecalc",
    version,
    about = "Structured date parsing and age arithmetic"
)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/agecalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a structured date such as 2024年1月1日 or 2024年1月1日9時30分0秒
    Parse(ParseArgs),

    /// Compute an age in whole years between two dates
    Age(AgeArgs),

    /// Print the record whose numeric fields sum highest
    Best(BestArgs),

    /// Validate configuration and print the resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Structured date text
    pub text: String,

    /// Print the parsed date as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Earlier date (structured or free-form, e.g. 2000年1月1日 or 2000-01-01)
    pub from: String,

    /// Later date; defaults to today
    pub to: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct BestArgs {
    /// JSON file holding an array of objects ("-" reads stdin)
    pub file: PathBuf,

    /// Print the winning record as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Parse(args) => cmd::parse::run(config, &args),
        Commands::Age(args) => cmd::age::run(config, &args),
        Commands::Best(args) => cmd::best::run(config, &args),
        Commands::Doctor => cmd::doctor::run(config),
    }
}

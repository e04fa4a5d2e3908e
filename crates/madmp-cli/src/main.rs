use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use madmp_core::config::ExportSettings;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "madmp",
    version,
    about = "Export project answers as machine-actionable data management plans"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file with vocabulary overrides (JSON)
    #[arg(long, global = true, env = "MADMP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<ExportSettings> {
    match path {
        Some(path) => ExportSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(ExportSettings::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_ref())?;
    let vocabulary = settings.vocabulary();

    match &cli.command {
        commands::Commands::Export(args) => commands::export::run(args, &vocabulary),
        commands::Commands::Datasets(args) => commands::datasets::run(args),
        commands::Commands::Vocabulary(args) => commands::vocabulary::run(args, &vocabulary),
        commands::Commands::Schema => commands::schema::run(),
    }
}

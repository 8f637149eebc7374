mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{scale, styles};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Styles(args) => styles::run(&cli, args),
        Commands::Scale(args) => scale::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }

// kwdensity - count keywords in PDF documents from the command line
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        // warnings and failures are printed by the CLI itself
        0 => "kwdensity=off",
        1 => "kwdensity=info",
        _ => "kwdensity=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stderr only, stdout carries the table/CSV/JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

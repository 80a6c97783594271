use clap::Parser;
use subalign_cli::commands::Commands;

/// Align two time-coded subtitle tracks into matched pairs
#[derive(Debug, Parser)]
#[command(name = "subalign", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

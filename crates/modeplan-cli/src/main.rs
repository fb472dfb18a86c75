use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod problem;
mod prompt;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the mode-schedule space for the Pareto front.
    Search(cmd::search::SearchArgs),
    /// Trace a single mode from the initial state.
    Simulate(cmd::simulate::SimulateArgs),
    /// Search, then refine every front with the particle swarm.
    Refine(cmd::refine::RefineArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Simulate(args) => cmd::simulate::run(args),
        Commands::Refine(args) => cmd::refine::run(args),
    };

    if let Err(err) = outcome {
        error!("{err}");
        process::exit(1);
    }
}

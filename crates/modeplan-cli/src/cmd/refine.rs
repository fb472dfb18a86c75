use crate::problem::{demo_modes, total_cost, CartManager};
use crate::prompt::{stdin_is_tty, TerminalPrompt};
use crate::reports;
use clap::Args;
use modeplan_core::pso::optimize_result;
use modeplan_core::search::perform_search_with_prompt;
use modeplan_core::{SearchAlgorithm, SearchParams, SolverParameters};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RefineArgs {
    #[command(flatten)]
    pub params: SearchParams,

    #[command(flatten)]
    pub solver: SolverParameters,

    #[arg(long, value_enum, default_value = "exhaustive")]
    pub algorithm: SearchAlgorithm,

    #[arg(long, default_value_t = 0.0, help = "Starting position of the cart")]
    pub initial: f64,

    #[arg(long, default_value_t = 1.0, help = "Target position of the cart")]
    pub target: f64,

    #[arg(short = 'S', long, help = "Seed for the swarm's random jitter")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Write the refined result as JSON to this path")]
    pub output: Option<PathBuf>,
}

pub fn run(args: RefineArgs) -> anyhow::Result<()> {
    let mut params = args.params;
    if params.interactive && !stdin_is_tty() {
        warn!("stdin is not a terminal, disabling interactive mode");
        params.interactive = false;
    }

    let manager = CartManager::new(params, args.initial, args.target);
    let modes = demo_modes();

    info!(algorithm = ?args.algorithm, levels = params.iterations, "starting search");
    let result = perform_search_with_prompt(
        &manager,
        &modes,
        args.algorithm,
        params.iterations,
        &mut TerminalPrompt,
    )?;

    info!(
        particles = args.solver.num_particles,
        iterations = args.solver.max_iterations,
        "refining with the particle swarm"
    );
    let refined = optimize_result(
        &manager,
        &args.solver,
        &modes,
        &result,
        &total_cost,
        args.seed,
    )?;

    reports::print_comparison(&result, &refined);
    if let Some(path) = &args.output {
        reports::write_json(path, &refined)?;
    }
    Ok(())
}

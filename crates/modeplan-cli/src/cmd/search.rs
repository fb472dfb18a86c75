use crate::problem::{demo_modes, CartManager};
use crate::prompt::{stdin_is_tty, TerminalPrompt};
use crate::reports;
use clap::Args;
use modeplan_core::search::perform_search_with_prompt;
use modeplan_core::{SearchAlgorithm, SearchParams};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    #[arg(long, value_enum, default_value = "exhaustive")]
    pub algorithm: SearchAlgorithm,

    #[arg(long, default_value_t = 0.0, help = "Starting position of the cart")]
    pub initial: f64,

    #[arg(long, default_value_t = 1.0, help = "Target position of the cart")]
    pub target: f64,

    #[arg(short, long, help = "Write the result as JSON to this path")]
    pub output: Option<PathBuf>,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
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

    reports::print_result(&result);
    if let Some(path) = &args.output {
        reports::write_json(path, &result)?;
    }
    Ok(())
}

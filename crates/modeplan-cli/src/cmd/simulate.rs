use crate::problem::{demo_modes, CartManager};
use crate::reports;
use anyhow::bail;
use clap::Args;
use modeplan_core::simulation::simulate_single_mode;
use modeplan_core::{ModeId, SearchParams};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub params: SearchParams,

    #[arg(long, help = "Drive setting to trace")]
    pub mode: ModeId,

    #[arg(long, default_value_t = 50, help = "Number of steps to trace")]
    pub steps: u32,

    #[arg(long, default_value_t = 0.0, help = "Starting position of the cart")]
    pub initial: f64,

    #[arg(long, default_value_t = 1.0, help = "Target position of the cart")]
    pub target: f64,

    #[arg(short, long, help = "Write the trace as JSON to this path")]
    pub output: Option<PathBuf>,
}

pub fn run(args: SimulateArgs) -> anyhow::Result<()> {
    let manager = CartManager::new(args.params, args.initial, args.target);
    let modes = demo_modes();
    let Some(mode) = modes.get(args.mode) else {
        bail!("mode id {} is out of range (have {})", args.mode, modes.len());
    };

    info!(mode = args.mode, steps = args.steps, "tracing single mode");
    let simulation = simulate_single_mode(&manager, mode, args.steps)?;

    reports::print_simulation(&simulation);
    if let Some(path) = &args.output {
        reports::write_json(path, &simulation)?;
    }
    Ok(())
}

use crate::error::{ModePlanError, MpResult};
use crate::manager::{ManagedMode, ManagedSolution, Manager};
use crate::mode::{push_mode_execution, ModeExecution};
use crate::search::primitives::refine_completion;
use crate::solution::Solution;
use serde::{Deserialize, Serialize};

/// Evolution trace of a single-mode run: one solution snapshot per step,
/// bracketed by the endpoints of the underlying problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation<State, Resources> {
    pub evolution: Vec<Solution<State, Resources>>,
    pub initial_state: State,
    pub target_state: State,
}

/// Runs `mode` for up to `steps` steps starting from `seed`.
///
/// Each step snapshots the current solution, advances it, and appends the
/// mode to its sequence. On the first step that completes, the crossing is
/// located by interpolating between the snapshot and the advanced solution,
/// so the returned resources never account for overshoot past the target.
pub fn simulate_mode<M: Manager>(
    manager: &M,
    mode: &ManagedMode<M>,
    steps: u32,
    seed: &ManagedSolution<M>,
) -> MpResult<ManagedSolution<M>> {
    if steps == 0 {
        return Err(ModePlanError::InvalidArgument(
            "steps must be greater than 0".into(),
        ));
    }

    let mut solution = seed.clone();
    for _ in 0..steps {
        let previous = solution.clone();
        manager.advance(&mut solution, mode);
        push_mode_execution(&mut solution.sequence, mode.id);
        if manager.is_complete(&solution) {
            return Ok(refine_completion(manager, &previous, &solution));
        }
    }
    Ok(solution)
}

/// Traces `mode` from the initial state for up to `steps` steps, stopping
/// early once the target is reached. The trace keeps a copy of the solution
/// after every step; sequences are not tracked here, only state and
/// resource evolution.
pub fn simulate_single_mode<M: Manager>(
    manager: &M,
    mode: &ManagedMode<M>,
    steps: u32,
) -> MpResult<Simulation<M::State, M::Resources>> {
    if steps == 0 {
        return Err(ModePlanError::InvalidArgument(
            "steps must be greater than 0".into(),
        ));
    }

    let mut simulation = Simulation {
        evolution: Vec::new(),
        initial_state: manager.initial_state(),
        target_state: manager.target_state(),
    };

    let mut solution: ManagedSolution<M> = Solution::initial(manager.initial_state());
    for _ in 0..steps {
        if manager.is_complete(&solution) {
            break;
        }
        manager.advance(&mut solution, mode);
        simulation.evolution.push(solution.clone());
    }
    Ok(simulation)
}

/// Replays a full run-length sequence from the initial state and returns the
/// resulting solution. Replay stops at the first completed step, after
/// locating the exact crossing; trailing executions are ignored.
pub fn generate_solution<M: Manager>(
    manager: &M,
    modes: &[ManagedMode<M>],
    sequence: &[ModeExecution],
) -> MpResult<ManagedSolution<M>> {
    if modes.is_empty() {
        return Err(ModePlanError::InvalidArgument("modes is empty".into()));
    }

    let mut solution: ManagedSolution<M> = Solution::initial(manager.initial_state());
    'replay: for exec in sequence {
        let mode = modes.get(exec.mode).ok_or_else(|| {
            ModePlanError::InvalidArgument(format!("mode id {} is out of range", exec.mode))
        })?;
        for _ in 0..exec.times {
            let previous = solution.clone();
            manager.advance(&mut solution, mode);
            push_mode_execution(&mut solution.sequence, mode.id);
            if manager.is_complete(&solution) {
                solution = refine_completion(manager, &previous, &solution);
                break 'replay;
            }
        }
    }
    Ok(solution)
}

use crate::error::{ModePlanError, MpResult};
use crate::interact::{KeyPrompt, NoPrompt};
use crate::manager::{ManagedMode, ManagedSolution, Manager};
use crate::pareto::{ParetoFront, SearchResult};
use crate::search::primitives::{
    extend_solutions, prune_against, prune_self, remove_duplicates, split_complete_partial,
};
use crate::search::{SearchAlgorithm, SwitchingMode};
use crate::solution::Solution;
use crate::timer::DeadlineTimer;
use tracing::{debug, info, warn};

/// One iteration of the search: extend, prune, partition, accumulate.
///
/// Extended solutions are always pruned against the accepted front under
/// strict dominance, even in heuristic mode; the relaxed predicate is only
/// ever applied to thin the partial branches against each other.
pub fn search_iteration<M: Manager>(
    manager: &M,
    modes: &[ManagedMode<M>],
    algorithm: SearchAlgorithm,
    steps_per_iteration: u32,
    partials: &mut Vec<ManagedSolution<M>>,
    accepted: &mut Vec<ManagedSolution<M>>,
    timer: &DeadlineTimer,
) -> MpResult<()> {
    let switching = match algorithm {
        SearchAlgorithm::SingleMachine => SwitchingMode::None,
        _ => SwitchingMode::Free,
    };
    let mut extended = extend_solutions(
        manager,
        modes,
        switching,
        steps_per_iteration,
        partials,
        timer,
    )?;

    prune_against(manager, SearchAlgorithm::Exhaustive, &mut extended, accepted);

    let (complete, partial) = split_complete_partial(manager, extended);

    if !complete.is_empty() {
        accepted.extend(complete);
        prune_self(manager, SearchAlgorithm::Exhaustive, accepted);
        remove_duplicates(manager, accepted);
    }

    if algorithm == SearchAlgorithm::Heuristic {
        // Weak branches are thinned against the full partial set; a branch
        // never dominates its own copy because the sequences are identical.
        *partials = partial.clone();
        prune_against(manager, SearchAlgorithm::Heuristic, partials, &partial);
    } else {
        *partials = partial;
    }
    Ok(())
}

/// Runs the bounded iteration loop at one stride resolution and returns the
/// front it settles on.
///
/// Partial branches are seeded one per mode with a zero-times tail record;
/// the accepted set starts from the previous (coarser) front, which is what
/// makes earlier resolutions act as a pruning prior for later ones. The
/// loop runs for at most `floor(time_max / (time_delta * stride))`
/// iterations, stopping earlier when the branches die out or the deadline
/// expires.
pub fn search_with_stride<M: Manager>(
    manager: &M,
    modes: &[ManagedMode<M>],
    algorithm: SearchAlgorithm,
    steps_per_iteration: u32,
    previous_front: &ParetoFront<M::State, M::Resources>,
    timer: &DeadlineTimer,
) -> MpResult<ParetoFront<M::State, M::Resources>> {
    if steps_per_iteration == 0 {
        return Err(ModePlanError::InvalidArgument(
            "steps_per_iteration must be greater than 0".into(),
        ));
    }
    if modes.is_empty() {
        return Err(ModePlanError::InvalidArgument("modes is empty".into()));
    }

    let mut partials: Vec<ManagedSolution<M>> = modes
        .iter()
        .map(|mode| Solution::seeded(mode.id, manager.initial_state()))
        .collect();
    let mut accepted = previous_front.solutions.clone();

    let mut stride_timer = DeadlineTimer::new();
    stride_timer.start();

    let time_per_iteration = manager.time_delta() * f64::from(steps_per_iteration);
    let max_iterations = (manager.time_max() / time_per_iteration) as u32;
    info!(
        max_iterations,
        steps_per_iteration, time_per_iteration, "running stride level"
    );

    let mut iteration = 0;
    while iteration < max_iterations && !partials.is_empty() {
        search_iteration(
            manager,
            modes,
            algorithm,
            steps_per_iteration,
            &mut partials,
            &mut accepted,
            timer,
        )?;
        iteration += 1;

        info!(
            iteration,
            max_iterations,
            partial = partials.len(),
            accepted = accepted.len(),
            elapsed_s = timer.elapsed().as_secs_f64(),
            "search round"
        );
        debug!(?partials, ?accepted, "round detail");

        if timer.has_timeout() {
            warn!(
                iteration,
                steps_per_iteration, "deadline expired during stride level"
            );
            break;
        }
    }

    Ok(ParetoFront {
        solutions: accepted,
        step_length: time_per_iteration,
        steps_per_iteration,
        iteration,
        runtime: stride_timer.elapsed().as_secs_f64(),
    })
}

/// Runs the full multi-resolution search with interaction disabled. See
/// [`perform_search_with_prompt`] for the interactive variant.
pub fn perform_search<M: Manager>(
    manager: &M,
    modes: &[ManagedMode<M>],
    algorithm: SearchAlgorithm,
    iterations: u32,
) -> MpResult<SearchResult<M::State, M::Resources>> {
    perform_search_with_prompt(manager, modes, algorithm, iterations, &mut NoPrompt)
}

/// Runs the outer stride-halving loop: strides `2^(iterations-1), …, 2, 1`
/// (a single stride of 1 for [`SearchAlgorithm::SingleMachine`]), feeding
/// each front back as the seed of the next, finer level.
///
/// Every non-empty front is stamped with the global elapsed time and
/// appended to the result, coarsest first. Between levels the search may
/// pause on `prompt` when the manager asks for interaction: `c` continues,
/// `r` continues and disables further pauses, `q` stops the search at the
/// current level. A deadline expiry likewise stops between levels; the
/// fronts built so far are returned either way.
pub fn perform_search_with_prompt<M: Manager>(
    manager: &M,
    modes: &[ManagedMode<M>],
    algorithm: SearchAlgorithm,
    iterations: u32,
    prompt: &mut dyn KeyPrompt,
) -> MpResult<SearchResult<M::State, M::Resources>> {
    if iterations == 0 {
        return Err(ModePlanError::InvalidArgument(
            "iterations must be greater than 0".into(),
        ));
    }
    if iterations > 31 {
        return Err(ModePlanError::InvalidArgument(
            "iterations must be at most 31".into(),
        ));
    }
    if modes.is_empty() {
        return Err(ModePlanError::InvalidArgument("modes is empty".into()));
    }

    let mut result = SearchResult::default();
    let mut front = ParetoFront::default();

    let mut timer = DeadlineTimer::new();
    if let Some(timeout) = manager.timeout() {
        timer.set_timeout(timeout);
    }
    timer.start();

    let initial_stride = match algorithm {
        SearchAlgorithm::SingleMachine => 1,
        _ => 1u32 << (iterations - 1),
    };

    let mut interactive = manager.interactive();
    let mut stride = initial_stride;
    while stride >= 1 {
        front = search_with_stride(manager, modes, algorithm, stride, &front, &timer)?;

        if !front.solutions.is_empty() {
            front.runtime = timer.elapsed().as_secs_f64();
            result.pareto_fronts.push(front.clone());
        }

        if interactive {
            timer.pause();
            warn!("press 'c' to continue, 'r' to continue without pausing, 'q' to stop");
            loop {
                match prompt.wait_for_key() {
                    Some('c') => break,
                    Some('r') => {
                        interactive = false;
                        break;
                    }
                    Some('q') => {
                        stride = 0;
                        break;
                    }
                    Some(_) => continue,
                    None => {
                        // No key source; behave as headless from here on.
                        interactive = false;
                        break;
                    }
                }
            }
            timer.resume();
        }

        if timer.has_timeout() {
            warn!(stride, "stopping the search on deadline expiry");
            break;
        }
        if stride == 0 {
            break;
        }
        stride /= 2;
    }

    Ok(result)
}

use crate::error::{ModePlanError, MpResult};
use crate::manager::{ManagedMode, ManagedSolution, Manager};
use crate::search::{SearchAlgorithm, SwitchingMode};
use crate::simulation::simulate_mode;
use crate::timer::DeadlineTimer;
use tracing::{debug, warn};

/// Locates the completion crossing between two adjacent simulation
/// snapshots, `previous` (not complete) and `current` (complete).
///
/// The segment is scanned with a step that shrinks with the remaining
/// distance, `time_delta / (10 * max(1, |previous.distance| / threshold))`,
/// interpolating state and resources linearly. The first complete candidate
/// is returned; when none is found, or the remaining distance gives a
/// degenerate scan step, `current` is returned unchanged.
pub fn refine_completion<M: Manager>(
    manager: &M,
    previous: &ManagedSolution<M>,
    current: &ManagedSolution<M>,
) -> ManagedSolution<M> {
    let step_factor = (previous.distance.abs() / manager.threshold()).max(1.0);
    let step_size = manager.time_delta() / (10.0 * step_factor);
    if !step_size.is_normal() {
        // A seed's infinite distance collapses the step to zero; the
        // overshooting snapshot is the best answer available.
        return current.clone();
    }

    // The candidate keeps the crossing step in its sequence; replaying that
    // sequence re-enters this interpolation and lands on the same point.
    let mut candidate = current.clone();
    let mut t = 0.0;
    while t <= manager.time_delta() {
        let rel = t / manager.time_delta();
        candidate.resources =
            manager.interpolate_resources(&previous.resources, &current.resources, rel);
        candidate.state = manager.interpolate_state(&previous.state, &current.state, rel);
        candidate.distance = manager.distance(&candidate);
        if manager.is_complete(&candidate) {
            return candidate;
        }
        t += step_size;
    }
    current.clone()
}

/// Extends every partial solution by one macro-step of `steps_per_iteration`
/// simulation steps, branching according to the switching policy.
///
/// The deadline is polled between partials; on expiry the children collected
/// so far are returned.
pub fn extend_solutions<M: Manager>(
    manager: &M,
    modes: &[ManagedMode<M>],
    switching: SwitchingMode,
    steps_per_iteration: u32,
    partials: &[ManagedSolution<M>],
    timer: &DeadlineTimer,
) -> MpResult<Vec<ManagedSolution<M>>> {
    if steps_per_iteration == 0 {
        return Err(ModePlanError::InvalidArgument(
            "steps_per_iteration must be greater than 0".into(),
        ));
    }
    if modes.is_empty() {
        return Err(ModePlanError::InvalidArgument("modes is empty".into()));
    }

    let mut extended = Vec::new();
    debug!(partials = partials.len(), "extending partial solutions");

    for partial in partials {
        let tail = partial.tail_mode().ok_or_else(|| {
            ModePlanError::InvalidArgument("partial solution has an empty sequence".into())
        })?;
        match switching {
            SwitchingMode::Free => {
                for mode in modes {
                    extended.push(simulate_mode(manager, mode, steps_per_iteration, partial)?);
                }
            }
            SwitchingMode::Increasing => {
                for mode in modes.iter().filter(|mode| mode.id >= tail) {
                    extended.push(simulate_mode(manager, mode, steps_per_iteration, partial)?);
                }
            }
            SwitchingMode::None => {
                let mode = modes.get(tail).ok_or_else(|| {
                    ModePlanError::InvalidArgument(format!("mode id {tail} is out of range"))
                })?;
                extended.push(simulate_mode(manager, mode, steps_per_iteration, partial)?);
            }
        }
        if timer.has_timeout() {
            warn!("deadline expired while extending solutions");
            break;
        }
    }

    debug!(extended = extended.len(), "extended partial solutions");
    Ok(extended)
}

fn dominates<M: Manager>(
    manager: &M,
    algorithm: SearchAlgorithm,
    first: &ManagedSolution<M>,
    second: &ManagedSolution<M>,
) -> bool {
    match algorithm {
        SearchAlgorithm::Heuristic => manager.is_probably_better_than(first, second),
        _ => manager.is_strictly_better_than(first, second),
    }
}

/// Drops every candidate dominated by some member of `reference`. Strict
/// dominance for the exhaustive variants, relaxed for the heuristic one.
pub fn prune_against<M: Manager>(
    manager: &M,
    algorithm: SearchAlgorithm,
    candidates: &mut Vec<ManagedSolution<M>>,
    reference: &[ManagedSolution<M>],
) {
    if reference.is_empty() {
        return;
    }
    let before = candidates.len();
    candidates.retain(|candidate| {
        !reference
            .iter()
            .any(|other| dominates(manager, algorithm, other, candidate))
    });
    debug!(before, after = candidates.len(), "pruned against reference");
}

/// Drops every solution dominated by another member of the same set. A
/// solution never dominates itself, so comparisons are index-disjoint.
pub fn prune_self<M: Manager>(
    manager: &M,
    algorithm: SearchAlgorithm,
    solutions: &mut Vec<ManagedSolution<M>>,
) {
    let before = solutions.len();
    let keep: Vec<bool> = (0..solutions.len())
        .map(|i| {
            !solutions
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && dominates(manager, algorithm, other, &solutions[i]))
        })
        .collect();
    let mut index = 0;
    solutions.retain(|_| {
        let kept = keep[index];
        index += 1;
        kept
    });
    debug!(before, after = solutions.len(), "pruned set against itself");
}

/// Partitions a set into complete and partial solutions.
pub fn split_complete_partial<M: Manager>(
    manager: &M,
    solutions: Vec<ManagedSolution<M>>,
) -> (Vec<ManagedSolution<M>>, Vec<ManagedSolution<M>>) {
    solutions
        .into_iter()
        .partition(|solution| manager.is_complete(solution))
}

/// Canonicalizes a set so that no two members compare equal under the
/// manager's lossy equality, keeping first occurrences.
///
/// The sequence-or-resources relation is not transitive, so sorting is not
/// an option; fronts are small enough that the pairwise scan is fine.
pub fn remove_duplicates<M: Manager>(manager: &M, solutions: &mut Vec<ManagedSolution<M>>) {
    let before = solutions.len();
    let mut unique: Vec<ManagedSolution<M>> = Vec::with_capacity(solutions.len());
    for solution in solutions.drain(..) {
        if !unique.iter().any(|kept| manager.is_equal(kept, &solution)) {
            unique.push(solution);
        }
    }
    *solutions = unique;
    debug!(before, after = solutions.len(), "removed duplicates");
}

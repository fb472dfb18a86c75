use crate::mode::Mode;
use crate::solution::Solution;
use std::fmt::Debug;
use std::time::Duration;

/// Mode descriptor type of a manager.
pub type ManagedMode<M> = Mode<<M as Manager>::System, <M as Manager>::Input>;

/// Solution type of a manager.
pub type ManagedSolution<M> = Solution<<M as Manager>::State, <M as Manager>::Resources>;

/// Problem binding for the search engine.
///
/// The engine is agnostic to the dynamics, the resource metric, and the
/// geometry of the problem; everything problem-specific flows through this
/// trait. Implementations are expected to keep all floating-point relations
/// (`is_equal`, the componentwise orderings behind the dominance predicates)
/// tolerance-based rather than bitwise, and to keep them mutually consistent.
pub trait Manager {
    type State: Clone + Debug;
    type Resources: Clone + Default + Debug;
    /// Dynamics descriptor carried by each mode.
    type System;
    /// Fixed input applied while a mode is active.
    type Input;

    fn initial_state(&self) -> Self::State;
    fn target_state(&self) -> Self::State;
    /// Duration of one simulation step, in seconds. Must be positive.
    fn time_delta(&self) -> f64;
    /// Maximum simulated horizon, in seconds. Must be positive.
    fn time_max(&self) -> f64;
    /// Distance below which a solution counts as complete.
    fn threshold(&self) -> f64;
    /// Wall-clock budget for the whole search, if any.
    fn timeout(&self) -> Option<Duration> {
        None
    }
    /// Whether the outer search loop pauses after each stride level.
    fn interactive(&self) -> bool {
        false
    }

    /// Advances `solution` by one simulation step under `mode`: updates the
    /// state, accumulates into the resources (componentwise non-decreasing),
    /// and refreshes `solution.distance`.
    fn advance(&self, solution: &mut ManagedSolution<Self>, mode: &ManagedMode<Self>);

    /// Signed scalar distance to the target; positive while the target has
    /// not been reached.
    fn distance(&self, solution: &ManagedSolution<Self>) -> f64;

    fn is_complete(&self, solution: &ManagedSolution<Self>) -> bool {
        self.distance(solution) < self.threshold()
    }

    /// Pareto dominance used by exhaustive pruning: false when the sequences
    /// are identical, otherwise true iff `first` is complete, its resources
    /// are componentwise `<=` those of `second`, and the two resource
    /// vectors differ.
    fn is_strictly_better_than(
        &self,
        first: &ManagedSolution<Self>,
        second: &ManagedSolution<Self>,
    ) -> bool;

    /// Relaxed dominance used only by the heuristic variant: false when the
    /// sequences are identical, otherwise true iff `first` is at least as
    /// close to the target and at least as cheap, with one of the two
    /// comparisons strict.
    fn is_probably_better_than(
        &self,
        first: &ManagedSolution<Self>,
        second: &ManagedSolution<Self>,
    ) -> bool;

    /// True iff the sequences are identical or the resources are equal.
    /// Deliberately lossy: two unrelated trajectories with equal cost
    /// compare equal, which is what duplicate removal relies on.
    fn is_equal(&self, first: &ManagedSolution<Self>, second: &ManagedSolution<Self>) -> bool;

    /// Linear interpolation between two states, `rel` in `[0, 1]`.
    fn interpolate_state(&self, s0: &Self::State, s1: &Self::State, rel: f64) -> Self::State;

    /// Linear interpolation between two resource vectors, `rel` in `[0, 1]`.
    fn interpolate_resources(
        &self,
        r0: &Self::Resources,
        r1: &Self::Resources,
        rel: f64,
    ) -> Self::Resources;
}

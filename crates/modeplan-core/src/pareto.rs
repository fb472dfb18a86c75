use crate::solution::Solution;
use serde::{Deserialize, Serialize};

/// The non-dominated set accumulated at one stride resolution, together with
/// the bookkeeping the outer loop reports on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoFront<State, Resources> {
    pub solutions: Vec<Solution<State, Resources>>,
    /// Simulated seconds covered by one iteration at this resolution,
    /// `time_delta * steps_per_iteration`.
    pub step_length: f64,
    pub steps_per_iteration: u32,
    /// Iterations actually executed to build this front.
    pub iteration: u32,
    /// Wall-clock seconds spent.
    pub runtime: f64,
}

impl<State, Resources> Default for ParetoFront<State, Resources> {
    fn default() -> Self {
        Self {
            solutions: Vec::new(),
            step_length: 0.0,
            steps_per_iteration: 0,
            iteration: 0,
            runtime: 0.0,
        }
    }
}

/// Outcome of a full search: one front per stride level, coarsest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<State, Resources> {
    pub pareto_fronts: Vec<ParetoFront<State, Resources>>,
}

impl<State, Resources> SearchResult<State, Resources> {
    pub fn total_runtime(&self) -> f64 {
        self.pareto_fronts.iter().map(|front| front.runtime).sum()
    }
}

impl<State, Resources> Default for SearchResult<State, Resources> {
    fn default() -> Self {
        Self {
            pareto_fronts: Vec::new(),
        }
    }
}

use crate::mode::{ModeExecution, ModeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trajectory prefix: the run-length sequence of mode executions that
/// produced it, the state it reached, the resources it consumed, and its
/// scalar distance to the target.
///
/// `distance` starts at `+inf` and is refreshed by
/// [`Manager::advance`](crate::Manager::advance). Two solutions are compared
/// only through the manager's dominance and equality predicates; the derived
/// `PartialEq` is plain structural equality (used by serialization tests),
/// not the lossy sequence-or-resources relation the search uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<State, Resources> {
    pub sequence: Vec<ModeExecution>,
    pub state: State,
    pub resources: Resources,
    pub distance: f64,
}

impl<State, Resources: Default> Solution<State, Resources> {
    /// A solution with an empty sequence, used as the starting point of
    /// simulations and sequence replays.
    pub fn initial(state: State) -> Self {
        Self {
            sequence: Vec::new(),
            state,
            resources: Resources::default(),
            distance: f64::INFINITY,
        }
    }

    /// A search seed: a zero-times record pins the tail mode so that
    /// tail-aware switching policies know where the branch started.
    pub fn seeded(mode: ModeId, state: State) -> Self {
        Self {
            sequence: vec![ModeExecution::new(mode, 0)],
            state,
            resources: Resources::default(),
            distance: f64::INFINITY,
        }
    }
}

impl<State, Resources> Solution<State, Resources> {
    /// Total number of simulation steps encoded in the sequence.
    pub fn total_steps(&self) -> u64 {
        self.sequence.iter().map(|exec| exec.times).sum()
    }

    /// Mode of the last run-length record, if any.
    pub fn tail_mode(&self) -> Option<ModeId> {
        self.sequence.last().map(|exec| exec.mode)
    }
}

impl<State, Resources: fmt::Debug> fmt::Display for Solution<State, Resources> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution{{distance: {:7.3}, resources: {:?}, sequence: [",
            self.distance, self.resources
        )?;
        for exec in &self.sequence {
            write!(f, " {exec}")?;
        }
        write!(f, " ]}}")
    }
}

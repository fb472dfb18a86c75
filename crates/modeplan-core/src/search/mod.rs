pub mod driver;
pub mod primitives;

pub use driver::{perform_search, perform_search_with_prompt, search_with_stride};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Search variants of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Full exploration pruned only by strict Pareto dominance.
    Exhaustive,
    /// Additionally thins partial branches by relaxed dominance, trading
    /// completeness for speed.
    Heuristic,
    /// One branch per mode, no switching within a sequence.
    SingleMachine,
}

/// How the set of modes may change along a sequence during extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchingMode {
    /// Stay on the tail mode of each branch.
    None,
    /// Only switch to modes with an id at least the tail mode's.
    Increasing,
    /// Switch to any mode.
    Free,
}

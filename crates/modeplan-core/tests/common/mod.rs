#![allow(dead_code)]

use modeplan_core::{ManagedSolution, Manager, Mode, SearchParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

pub fn approx_le(a: f64, b: f64) -> bool {
    a <= b || approx_eq(a, b)
}

/// Per-step displacement of a drive mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub rate: f64,
}

/// Per-step cost of a drive mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCost {
    pub energy: f64,
    pub time: f64,
}

/// Accumulated cost of a trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub energy: f64,
    pub time: f64,
}

impl Usage {
    pub fn le(&self, other: &Usage) -> bool {
        approx_le(self.energy, other.energy) && approx_le(self.time, other.time)
    }

    pub fn eq_approx(&self, other: &Usage) -> bool {
        approx_eq(self.energy, other.energy) && approx_eq(self.time, other.time)
    }
}

pub type PointMode = Mode<Drive, StepCost>;
pub type PointSolution = ManagedSolution<PointManager>;

/// One-dimensional tracking problem: the state is a position advanced by a
/// fixed amount per step, the target is a position to reach.
pub struct PointManager {
    pub params: SearchParams,
    pub initial: f64,
    pub target: f64,
}

impl PointManager {
    pub fn new() -> Self {
        Self {
            params: SearchParams {
                time_delta: 0.1,
                time_max: 5.0,
                threshold: 0.01,
                iterations: 4,
                timeout_ms: None,
                interactive: false,
            },
            initial: 0.0,
            target: 1.0,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let mut manager = Self::new();
        manager.params.timeout_ms = Some(timeout.as_millis() as u64);
        manager
    }
}

impl Manager for PointManager {
    type State = f64;
    type Resources = Usage;
    type System = Drive;
    type Input = StepCost;

    fn initial_state(&self) -> f64 {
        self.initial
    }

    fn target_state(&self) -> f64 {
        self.target
    }

    fn time_delta(&self) -> f64 {
        self.params.time_delta
    }

    fn time_max(&self) -> f64 {
        self.params.time_max
    }

    fn threshold(&self) -> f64 {
        self.params.threshold
    }

    fn timeout(&self) -> Option<Duration> {
        self.params.timeout_ms.map(Duration::from_millis)
    }

    fn interactive(&self) -> bool {
        self.params.interactive
    }

    fn advance(&self, solution: &mut PointSolution, mode: &PointMode) {
        solution.state += mode.system.rate;
        solution.resources.energy += mode.input.energy;
        solution.resources.time += mode.input.time;
        solution.distance = self.distance(solution);
    }

    fn distance(&self, solution: &PointSolution) -> f64 {
        self.target - solution.state
    }

    fn is_strictly_better_than(&self, first: &PointSolution, second: &PointSolution) -> bool {
        if first.sequence == second.sequence {
            return false;
        }
        self.is_complete(first)
            && first.resources.le(&second.resources)
            && !first.resources.eq_approx(&second.resources)
    }

    fn is_probably_better_than(&self, first: &PointSolution, second: &PointSolution) -> bool {
        if first.sequence == second.sequence {
            return false;
        }
        let first_distance = self.distance(first);
        let second_distance = self.distance(second);
        approx_le(first_distance, second_distance)
            && first.resources.le(&second.resources)
            && (first_distance < second_distance || !first.resources.eq_approx(&second.resources))
    }

    fn is_equal(&self, first: &PointSolution, second: &PointSolution) -> bool {
        first.sequence == second.sequence || first.resources.eq_approx(&second.resources)
    }

    fn interpolate_state(&self, s0: &f64, s1: &f64, rel: f64) -> f64 {
        *s0 + rel * (*s1 - *s0)
    }

    fn interpolate_resources(&self, r0: &Usage, r1: &Usage, rel: f64) -> Usage {
        Usage {
            energy: r0.energy + rel * (r1.energy - r0.energy),
            time: r0.time + rel * (r1.time - r0.time),
        }
    }
}

/// The three drive modes used across the test suite: a slow cheap one, a
/// medium one, and a fast expensive one.
pub fn default_modes() -> Vec<PointMode> {
    vec![
        Mode {
            id: 0,
            system: Drive { rate: 0.2 },
            input: StepCost {
                energy: 0.2,
                time: 0.1,
            },
        },
        Mode {
            id: 1,
            system: Drive { rate: 0.5 },
            input: StepCost {
                energy: 1.0,
                time: 0.1,
            },
        },
        Mode {
            id: 2,
            system: Drive { rate: 1.0 },
            input: StepCost {
                energy: 4.0,
                time: 0.1,
            },
        },
    ]
}

pub fn energy_plus_time(usage: &Usage) -> f64 {
    usage.energy + usage.time
}

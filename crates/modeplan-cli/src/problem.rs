use modeplan_core::{ManagedSolution, Manager, Mode, SearchParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const EPS: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

fn approx_le(a: f64, b: f64) -> bool {
    a <= b || approx_eq(a, b)
}

/// Per-step displacement of a drive setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub rate: f64,
}

/// Per-step cost of a drive setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCost {
    pub energy: f64,
    pub time: f64,
}

/// Accumulated cost of a cart trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartUsage {
    pub energy: f64,
    pub time: f64,
}

impl CartUsage {
    fn le(&self, other: &CartUsage) -> bool {
        approx_le(self.energy, other.energy) && approx_le(self.time, other.time)
    }

    fn eq_approx(&self, other: &CartUsage) -> bool {
        approx_eq(self.energy, other.energy) && approx_eq(self.time, other.time)
    }
}

/// Energy plus time, the scalarization handed to the swarm refiner.
pub fn total_cost(usage: &CartUsage) -> f64 {
    usage.energy + usage.time
}

pub type CartMode = Mode<Drive, StepCost>;
pub type CartSolution = ManagedSolution<CartManager>;

/// Built-in demo problem: a cart on a rail, moved by a handful of drive
/// settings that trade energy for speed. The state is the cart's position;
/// the search looks for mode schedules reaching the target position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartManager {
    pub params: SearchParams,
    pub initial: f64,
    pub target: f64,
}

impl CartManager {
    pub fn new(params: SearchParams, initial: f64, target: f64) -> Self {
        Self {
            params,
            initial,
            target,
        }
    }
}

impl Manager for CartManager {
    type State = f64;
    type Resources = CartUsage;
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

    fn advance(&self, solution: &mut CartSolution, mode: &CartMode) {
        solution.state += mode.system.rate;
        solution.resources.energy += mode.input.energy;
        solution.resources.time += mode.input.time;
        solution.distance = self.distance(solution);
    }

    fn distance(&self, solution: &CartSolution) -> f64 {
        self.target - solution.state
    }

    fn is_strictly_better_than(&self, first: &CartSolution, second: &CartSolution) -> bool {
        if first.sequence == second.sequence {
            return false;
        }
        self.is_complete(first)
            && first.resources.le(&second.resources)
            && !first.resources.eq_approx(&second.resources)
    }

    fn is_probably_better_than(&self, first: &CartSolution, second: &CartSolution) -> bool {
        if first.sequence == second.sequence {
            return false;
        }
        let first_distance = self.distance(first);
        let second_distance = self.distance(second);
        approx_le(first_distance, second_distance)
            && first.resources.le(&second.resources)
            && (first_distance < second_distance
                || !first.resources.eq_approx(&second.resources))
    }

    fn is_equal(&self, first: &CartSolution, second: &CartSolution) -> bool {
        first.sequence == second.sequence || first.resources.eq_approx(&second.resources)
    }

    fn interpolate_state(&self, s0: &f64, s1: &f64, rel: f64) -> f64 {
        *s0 + rel * (*s1 - *s0)
    }

    fn interpolate_resources(&self, r0: &CartUsage, r1: &CartUsage, rel: f64) -> CartUsage {
        CartUsage {
            energy: r0.energy + rel * (r1.energy - r0.energy),
            time: r0.time + rel * (r1.time - r0.time),
        }
    }
}

/// The demo drive settings: eco, cruise, and boost.
pub fn demo_modes() -> Vec<CartMode> {
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

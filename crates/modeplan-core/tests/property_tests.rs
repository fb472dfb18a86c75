mod common;

use common::{PointManager, PointSolution};
use modeplan_core::search::primitives::{prune_self, remove_duplicates};
use modeplan_core::search::SearchAlgorithm;
use modeplan_core::{push_mode_execution, Manager, ModeExecution, Solution};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sequences_stay_run_length_canonical(pushes in proptest::collection::vec(0usize..4, 0..200)) {
        let mut sequence = Vec::new();
        for mode in &pushes {
            push_mode_execution(&mut sequence, *mode);
        }

        for window in sequence.windows(2) {
            prop_assert_ne!(window[0].mode, window[1].mode);
        }
        let total: u64 = sequence.iter().map(|exec| exec.times).sum();
        prop_assert_eq!(total, pushes.len() as u64);
    }

    #[test]
    fn self_pruning_leaves_no_dominated_pair(
        costs in proptest::collection::vec((0.1f64..10.0, 0.1f64..10.0), 1..20)
    ) {
        let manager = PointManager::new();

        // Distinct complete trajectories with arbitrary costs.
        let mut set: Vec<PointSolution> = costs
            .iter()
            .enumerate()
            .map(|(i, (energy, time))| {
                let mut solution: PointSolution = Solution::initial(1.0);
                solution.sequence = vec![ModeExecution::new(0, i as u64 + 1)];
                solution.resources.energy = *energy;
                solution.resources.time = *time;
                solution.distance = 0.0;
                solution
            })
            .collect();

        prune_self(&manager, SearchAlgorithm::Exhaustive, &mut set);

        for (i, solution) in set.iter().enumerate() {
            for (j, other) in set.iter().enumerate() {
                if i != j {
                    prop_assert!(!manager.is_strictly_better_than(other, solution));
                }
            }
        }
    }

    #[test]
    fn deduplication_leaves_no_equal_pair(
        costs in proptest::collection::vec((0.1f64..4.0, 0.1f64..4.0), 1..20)
    ) {
        let manager = PointManager::new();

        let mut set: Vec<PointSolution> = costs
            .iter()
            .enumerate()
            .map(|(i, (energy, time))| {
                let mut solution: PointSolution = Solution::initial(1.0);
                solution.sequence = vec![ModeExecution::new(0, i as u64 + 1)];
                // Coarse grid so that collisions actually happen.
                solution.resources.energy = (energy * 2.0).round() / 2.0;
                solution.resources.time = (time * 2.0).round() / 2.0;
                solution.distance = 0.0;
                solution
            })
            .collect();

        remove_duplicates(&manager, &mut set);

        for (i, solution) in set.iter().enumerate() {
            for (j, other) in set.iter().enumerate() {
                if i != j {
                    prop_assert!(!manager.is_equal(solution, other));
                }
            }
        }
    }

    #[test]
    fn resources_grow_monotonically_under_advance(steps in 1u32..50) {
        let manager = PointManager::new();
        let modes = common::default_modes();

        let mut solution: PointSolution = Solution::initial(0.0);
        for step in 0..steps {
            let mode = &modes[(step as usize) % modes.len()];
            let before = solution.resources;
            manager.advance(&mut solution, mode);
            prop_assert!(solution.resources.energy >= before.energy);
            prop_assert!(solution.resources.time >= before.time);
        }
    }
}

mod common;

use common::{default_modes, PointManager, PointMode};
use modeplan_core::search::{perform_search, SearchAlgorithm};
use modeplan_core::{ParetoFront, SearchParams, SearchResult, Simulation, SolverParameters};

#[test]
fn search_results_round_trip_through_json() {
    let manager = PointManager::new();
    let modes = default_modes();

    let result = perform_search(&manager, &modes, SearchAlgorithm::Exhaustive, 3).unwrap();

    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: SearchResult<f64, common::Usage> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, result);
}

#[test]
fn modes_round_trip_through_json() {
    let modes = default_modes();
    let encoded = serde_json::to_string(&modes).unwrap();
    let decoded: Vec<PointMode> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, modes);
}

#[test]
fn simulations_round_trip_through_json() {
    let manager = PointManager::new();
    let modes = default_modes();

    let simulation =
        modeplan_core::simulation::simulate_single_mode(&manager, &modes[1], 5).unwrap();

    let encoded = serde_json::to_string(&simulation).unwrap();
    let decoded: Simulation<f64, common::Usage> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, simulation);
}

#[test]
fn an_empty_front_serializes_its_metadata() {
    let front: ParetoFront<f64, common::Usage> = ParetoFront {
        step_length: 0.8,
        steps_per_iteration: 8,
        iteration: 6,
        runtime: 0.25,
        ..ParetoFront::default()
    };
    let encoded = serde_json::to_string(&front).unwrap();
    let decoded: ParetoFront<f64, common::Usage> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, front);
}

#[test]
fn configs_round_trip_through_json() {
    let params = SearchParams::default();
    let encoded = serde_json::to_string(&params).unwrap();
    let decoded: SearchParams = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.time_delta, params.time_delta);
    assert_eq!(decoded.iterations, params.iterations);

    let solver = SolverParameters::default();
    let encoded = serde_json::to_string(&solver).unwrap();
    let decoded: SolverParameters = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.num_particles, solver.num_particles);
    assert_eq!(decoded.inertia, solver.inertia);
}

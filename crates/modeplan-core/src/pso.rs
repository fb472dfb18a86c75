use crate::error::{ModePlanError, MpResult};
use crate::manager::{ManagedMode, ManagedSolution, Manager};
use crate::mode::ModeExecution;
use crate::pareto::{ParetoFront, SearchResult};
use crate::simulation::generate_solution;
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Particle swarm parameters for the execution-count refiner.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverParameters {
    #[arg(long, default_value_t = 100, help = "Number of particles in the swarm")]
    pub num_particles: usize,

    #[arg(
        long = "pso-iterations",
        default_value_t = 50,
        help = "Number of swarm iterations"
    )]
    pub max_iterations: usize,

    #[arg(
        long,
        default_value_t = 0.2,
        help = "Weight for retaining previous velocity"
    )]
    pub inertia: f64,

    #[arg(
        long,
        default_value_t = 0.4,
        help = "Weight for personal best influence"
    )]
    pub cognitive: f64,

    #[arg(long, default_value_t = 0.4, help = "Weight for global best influence")]
    pub social: f64,
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            num_particles: 100,
            max_iterations: 50,
            inertia: 0.2,
            cognitive: 0.4,
            social: 0.4,
        }
    }
}

/// Updates one velocity/position slot. The execution count is clamped to
/// `[1, ∞)`: a record can shrink to a single step but never vanish.
fn update_particle_slot(
    parameters: &SolverParameters,
    personal_best: &ModeExecution,
    global_best: &ModeExecution,
    velocity: &mut f64,
    slot: &mut ModeExecution,
) {
    let inertia = parameters.inertia * *velocity;
    let cognitive = parameters.cognitive * (personal_best.times as f64 - slot.times as f64);
    let social = parameters.social * (global_best.times as f64 - slot.times as f64);
    *velocity = inertia + cognitive + social;
    slot.times = (slot.times as f64 + *velocity).round().max(1.0) as u64;
}

/// Refines one solution by perturbing the execution counts of its sequence.
///
/// Particles start from the seed sequence with jittered counts and move
/// toward their personal and the global best under the usual PSO velocity
/// rule. Fitness is the caller's scalarization of the replayed resources;
/// particles whose replay does not reach the target are penalized with
/// `+inf` and simply never become bests. The swarm is deterministic under a
/// fixed `seed`.
pub fn optimize_solution<M, F>(
    manager: &M,
    parameters: &SolverParameters,
    modes: &[ManagedMode<M>],
    solution: &ManagedSolution<M>,
    scalarize: &F,
    seed: Option<u64>,
) -> MpResult<ManagedSolution<M>>
where
    M: Manager,
    F: Fn(&M::Resources) -> f64,
{
    if parameters.num_particles == 0 {
        return Err(ModePlanError::InvalidArgument(
            "num_particles must be greater than 0".into(),
        ));
    }
    if modes.is_empty() {
        return Err(ModePlanError::InvalidArgument("modes is empty".into()));
    }

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let mut particles: Vec<Vec<ModeExecution>> = Vec::with_capacity(parameters.num_particles);
    let mut personal_best: Vec<Vec<ModeExecution>> = Vec::with_capacity(parameters.num_particles);
    let mut velocities: Vec<Vec<f64>> = Vec::with_capacity(parameters.num_particles);
    let mut personal_best_fitness = vec![f64::INFINITY; parameters.num_particles];

    for _ in 0..parameters.num_particles {
        let mut particle = solution.sequence.clone();
        personal_best.push(particle.clone());
        velocities.push(vec![0.0; particle.len()]);
        // Jitter the counts while keeping the mode structure intact.
        for slot in &mut particle {
            let jitter = 1.0 + rng.f64() * 9.0;
            slot.times = (slot.times as f64 + jitter - 5.0).max(1.0) as u64;
        }
        particles.push(particle);
    }

    let mut global_best = personal_best[0].clone();
    let mut global_best_fitness = scalarize(&solution.resources);

    for iteration in 0..parameters.max_iterations {
        let mut valid_count = 0usize;
        for i in 0..particles.len() {
            let candidate = generate_solution(manager, modes, &particles[i])?;
            let valid = manager.is_complete(&candidate);
            let fitness = if valid {
                valid_count += 1;
                scalarize(&candidate.resources)
            } else {
                f64::INFINITY
            };
            if fitness < personal_best_fitness[i] {
                personal_best[i] = particles[i].clone();
                personal_best_fitness[i] = fitness;
            }
            if fitness < global_best_fitness {
                global_best = particles[i].clone();
                global_best_fitness = fitness;
            }
        }

        for i in 0..particles.len() {
            for j in 0..particles[i].len() {
                update_particle_slot(
                    parameters,
                    &personal_best[i][j],
                    &global_best[j],
                    &mut velocities[i][j],
                    &mut particles[i][j],
                );
            }
        }

        info!(
            iteration = iteration + 1,
            max_iterations = parameters.max_iterations,
            best_fitness = global_best_fitness,
            valid = valid_count,
            particles = parameters.num_particles,
            "swarm iteration"
        );
    }

    generate_solution(manager, modes, &global_best)
}

/// Refines every solution of a front, preserving the front's metadata.
pub fn optimize_pareto_front<M, F>(
    manager: &M,
    parameters: &SolverParameters,
    modes: &[ManagedMode<M>],
    front: &ParetoFront<M::State, M::Resources>,
    scalarize: &F,
    seed: Option<u64>,
) -> MpResult<ParetoFront<M::State, M::Resources>>
where
    M: Manager,
    F: Fn(&M::Resources) -> f64,
{
    let mut optimized = ParetoFront {
        solutions: Vec::with_capacity(front.solutions.len()),
        step_length: front.step_length,
        steps_per_iteration: front.steps_per_iteration,
        iteration: front.iteration,
        runtime: front.runtime,
    };
    let total = front.solutions.len();
    for (index, solution) in front.solutions.iter().enumerate() {
        info!(current = index + 1, total, "refining solution");
        optimized.solutions.push(optimize_solution(
            manager,
            parameters,
            modes,
            solution,
            scalarize,
            seed.map(|seed| seed + index as u64),
        )?);
    }
    Ok(optimized)
}

/// Refines every front of a search result.
pub fn optimize_result<M, F>(
    manager: &M,
    parameters: &SolverParameters,
    modes: &[ManagedMode<M>],
    result: &SearchResult<M::State, M::Resources>,
    scalarize: &F,
    seed: Option<u64>,
) -> MpResult<SearchResult<M::State, M::Resources>>
where
    M: Manager,
    F: Fn(&M::Resources) -> f64,
{
    let mut optimized = SearchResult::default();
    let total = result.pareto_fronts.len();
    for (index, front) in result.pareto_fronts.iter().enumerate() {
        info!(
            current = index + 1,
            total,
            step_length = front.step_length,
            "refining front"
        );
        optimized.pareto_fronts.push(optimize_pareto_front(
            manager,
            parameters,
            modes,
            front,
            scalarize,
            seed.map(|seed| seed + 1000 * index as u64),
        )?);
    }
    Ok(optimized)
}

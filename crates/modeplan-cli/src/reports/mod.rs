use crate::problem::{CartSolution, CartUsage};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use modeplan_core::{ModeExecution, ParetoFront, SearchResult, Simulation};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::info;

fn format_sequence(sequence: &[ModeExecution]) -> String {
    sequence
        .iter()
        .map(|exec| format!("{}*{}", exec.mode, exec.times))
        .collect::<Vec<String>>()
        .join(" ")
}

fn front_table(front: &ParetoFront<f64, CartUsage>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Schedule").add_attribute(Attribute::Bold),
        Cell::new("Position"),
        Cell::new("Energy"),
        Cell::new("Time"),
        Cell::new("Distance"),
    ]);
    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for solution in &front.solutions {
        table.add_row(vec![
            Cell::new(format_sequence(&solution.sequence)),
            Cell::new(format!("{:.3}", solution.state)),
            Cell::new(format!("{:.3}", solution.resources.energy)),
            Cell::new(format!("{:.3}", solution.resources.time)),
            Cell::new(format!("{:.4}", solution.distance)),
        ]);
    }
    table
}

pub fn print_result(result: &SearchResult<f64, CartUsage>) {
    for front in &result.pareto_fronts {
        println!(
            "stride {} (step {:.3}s, {} iterations, {:.3}s wall clock)",
            front.steps_per_iteration, front.step_length, front.iteration, front.runtime
        );
        println!("{}", front_table(front));
    }
    println!(
        "{} front(s), {:.3}s total",
        result.pareto_fronts.len(),
        result.total_runtime()
    );
}

pub fn print_comparison(
    before: &SearchResult<f64, CartUsage>,
    after: &SearchResult<f64, CartUsage>,
) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Stride").add_attribute(Attribute::Bold),
        Cell::new("Schedule"),
        Cell::new("Cost before"),
        Cell::new("Cost after"),
        Cell::new("Refined schedule"),
    ]);

    for (old_front, new_front) in before.pareto_fronts.iter().zip(&after.pareto_fronts) {
        for (old, new) in old_front.solutions.iter().zip(&new_front.solutions) {
            table.add_row(vec![
                Cell::new(old_front.steps_per_iteration.to_string()),
                Cell::new(format_sequence(&old.sequence)),
                Cell::new(format!("{:.3}", cost(old))),
                Cell::new(format!("{:.3}", cost(new))),
                Cell::new(format_sequence(&new.sequence)),
            ]);
        }
    }
    println!("{table}");
}

fn cost(solution: &CartSolution) -> f64 {
    solution.resources.energy + solution.resources.time
}

pub fn print_simulation(simulation: &Simulation<f64, CartUsage>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Position"),
        Cell::new("Energy"),
        Cell::new("Time"),
        Cell::new("Distance"),
    ]);

    for (step, snapshot) in simulation.evolution.iter().enumerate() {
        table.add_row(vec![
            Cell::new((step + 1).to_string()),
            Cell::new(format!("{:.3}", snapshot.state)),
            Cell::new(format!("{:.3}", snapshot.resources.energy)),
            Cell::new(format!("{:.3}", snapshot.resources.time)),
            Cell::new(format!("{:.4}", snapshot.distance)),
        ]);
    }
    println!(
        "from {:.3} toward {:.3}:",
        simulation.initial_state, simulation.target_state
    );
    println!("{table}");
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use modeplan_core::Solution;

    fn sample_result() -> SearchResult<f64, CartUsage> {
        let mut solution: CartSolution = Solution::initial(1.0);
        solution.sequence = vec![ModeExecution::new(0, 5)];
        solution.resources = CartUsage {
            energy: 1.0,
            time: 0.5,
        };
        solution.distance = 0.0;
        SearchResult {
            pareto_fronts: vec![ParetoFront {
                solutions: vec![solution],
                step_length: 0.1,
                steps_per_iteration: 1,
                iteration: 5,
                runtime: 0.01,
            }],
        }
    }

    #[test]
    fn sequences_render_as_mode_times_pairs() {
        let sequence = vec![ModeExecution::new(0, 3), ModeExecution::new(2, 1)];
        assert_eq!(format_sequence(&sequence), "0*3 2*1");
    }

    #[test]
    fn exported_results_parse_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let result = sample_result();

        write_json(&path, &result).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let decoded: SearchResult<f64, CartUsage> = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn front_tables_list_every_solution() {
        let result = sample_result();
        let table = front_table(&result.pareto_fronts[0]);
        // Header plus one row per solution.
        assert_eq!(table.row_iter().count(), 2);
    }
}

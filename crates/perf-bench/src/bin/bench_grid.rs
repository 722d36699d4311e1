use std::hint::black_box;
use std::time::Instant;

use common::transform::{neg_ln, recover_probability};
use perf_bench::*;
use safest_path_core::{DijkstraSolver, PathSolver};

fn main() {
    let graph = generate_grid_graph(GRID_SIDE)
        .expect("benchmark weights are valid probabilities");
    let target = GRID_SIDE * GRID_SIDE - 1;

    let start_time = Instant::now();

    // Wide frontier full of equal distances: exercises the sequence tie-break.
    let solution = DijkstraSolver
        .solve(&graph, &0, neg_ln)
        .expect("node 0 is in the grid");

    let elapsed_time = start_time.elapsed();

    let probability = black_box(recover_probability(
        solution.distance(&target).unwrap_or(f64::INFINITY),
    ));

    println!(
        "--- Grid Benchmark Results ({}x{} Nodes) ---",
        GRID_SIDE, GRID_SIDE
    );
    println!("Reached: {}", solution.reachable_count());
    println!("Probability to far corner: {:.10}", probability);
    println!("Elapsed Time: {:?}", elapsed_time);
}

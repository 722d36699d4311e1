use std::hint::black_box;
use std::time::Instant;

use common::transform::{neg_ln, recover_probability};
use perf_bench::*;
use safest_path_core::{DijkstraSolver, PathSolver};

fn main() {
    let graph = generate_chain_graph(CHAIN_NODES)
        .expect("benchmark weights are valid probabilities");
    let target = CHAIN_NODES - 1;

    let start_time = Instant::now();

    // Deep predecessor chains: one frontier entry live at a time, plus shortcut re-pushes.
    let solution = DijkstraSolver
        .solve(&graph, &0, neg_ln)
        .expect("node 0 is in the chain");

    let elapsed_time = start_time.elapsed();

    let probability = black_box(recover_probability(
        solution.distance(&target).unwrap_or(f64::INFINITY),
    ));
    let hops = solution.path_to(&target).map(|p| p.hops()).unwrap_or(0);

    println!("--- Chain Benchmark Results ({} Nodes) ---", CHAIN_NODES);
    println!("Reached: {}", solution.reachable_count());
    println!("Probability to tail: {:.10} over {} hops", probability, hops);
    println!("Elapsed Time: {:?}", elapsed_time);
}

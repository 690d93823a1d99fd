use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_cycle_core::{CycleCandidate, CycleFinder, DenseDijkstra, ShortestPaths};

fn main() {
    let graph = generate_benchmark_graph();
    let finder = CycleFinder::new(DenseDijkstra);

    let start_time = Instant::now();
    let mut best: Option<CycleCandidate> = None;

    // A new distance/visited/predecessor buffer is allocated for every source.
    for source in 0..graph.num_nodes() {
        let mut paths = ShortestPaths::new();
        let candidate = finder
            .candidate_through(&graph, source, &mut paths)
            .unwrap_or_else(|e| panic!("search from {} failed: {}", source, e));
        best = CycleCandidate::pick(best, candidate);
    }

    let elapsed_time = start_time.elapsed();

    let best = black_box(best);

    println!(
        "--- Fresh Buffers Benchmark Results ({} Vertices, {} Edges) ---",
        graph.num_nodes(),
        graph.edge_count()
    );
    println!("Shortest cycle: {:?}", best.map(|c| c.length));
    println!("Elapsed Time: {:?}", elapsed_time);
}

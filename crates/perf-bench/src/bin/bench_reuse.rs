use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_cycle_core::{CycleFinder, DenseDijkstra};

fn main() {
    let graph = generate_benchmark_graph();
    let finder = CycleFinder::new(DenseDijkstra);

    let start_time = Instant::now();

    // One buffer is reset and reused across all sources.
    let outcome = finder
        .search(&graph, 0..graph.num_nodes(), || false)
        .unwrap_or_else(|e| panic!("search failed: {}", e));

    let elapsed_time = start_time.elapsed();

    let best = black_box(outcome.best);

    println!(
        "--- Reused Buffer Benchmark Results ({} Vertices, {} Edges) ---",
        graph.num_nodes(),
        graph.edge_count()
    );
    println!("Shortest cycle: {:?}", best.map(|c| c.length));
    println!("Elapsed Time: {:?}", elapsed_time);
}

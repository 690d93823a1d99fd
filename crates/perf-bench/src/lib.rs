// ----------------------------
// Benchmark inputs: random dense graphs
// ----------------------------

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use common::types::Edge;
use shortest_cycle_core::GraphMatrix;

pub const NUM_NODES: usize = 400;
pub const EDGE_DENSITY: f64 = 0.05;
pub const SEED: u64 = 0x5eed_cafe;

/// Generates a reproducible random edge list.
///
/// Each ordered pair (self-loops included) gets an edge with probability
/// `density`; weights fall in `[1.0, 100.0)` so no edge collapses to "absent".
pub fn generate_benchmark_edges(num_nodes: usize, density: f64, seed: u64) -> Vec<Edge> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for u in 0..num_nodes {
        for v in 0..num_nodes {
            if rng.random_bool(density) {
                edges.push((u, v, rng.random_range(1.0..100.0)));
            }
        }
    }

    edges
}

pub fn generate_benchmark_graph() -> GraphMatrix {
    let edges = generate_benchmark_edges(NUM_NODES, EDGE_DENSITY, SEED);
    GraphMatrix::from_edges(NUM_NODES, &edges)
}

use super::matrix::GraphMatrix;
use super::traits::ShortestPathEngine;
use common::error::Error;
use common::numeric::{UNREACHABLE, is_edge, is_reachable, relax};

/// Distances (and the predecessor tree behind them) from a single source vertex.
///
/// The buffers are sized to the graph on every run and can be reused across
/// sources without reallocating.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    source: usize,
    distance: Vec<f64>,
    settled: Vec<bool>,
    predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            source: 0,
            distance: Vec::with_capacity(num_nodes),
            settled: Vec::with_capacity(num_nodes),
            predecessor: Vec::with_capacity(num_nodes),
        }
    }

    fn reset(&mut self, num_nodes: usize, source: usize) {
        self.source = source;

        self.distance.clear();
        self.distance.resize(num_nodes, UNREACHABLE);
        self.settled.clear();
        self.settled.resize(num_nodes, false);
        self.predecessor.clear();
        self.predecessor.resize(num_nodes, None);

        self.distance[source] = 0.0;
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Raw distance vector; unreachable vertices hold [`UNREACHABLE`].
    pub fn distances(&self) -> &[f64] {
        &self.distance
    }

    /// Shortest distance to `v`, or `None` if `v` is unreachable or not a vertex.
    pub fn distance(&self, v: usize) -> Option<f64> {
        self.distance.get(v).copied().filter(|&d| is_reachable(d))
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices of a shortest path from the source to `target`, both included.
    ///
    /// Returns `Ok(None)` if `target` is unreachable.
    ///
    /// # Errors
    /// `Error::NodeIndexOutOfBounds` if `target` is not a vertex, or
    /// `Error::CycleReconstructionFailed` if the predecessor chain does not lead
    /// back to the source within V steps.
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>, Error> {
        let num_nodes = self.distance.len();
        if target >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(target));
        }
        if !self.is_reachable(target) {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor[current].ok_or(Error::CycleReconstructionFailed)?;
            path.push(current);

            if path.len() > num_nodes {
                return Err(Error::CycleReconstructionFailed);
            }
        }

        path.reverse();
        Ok(Some(path))
    }
}

/// Dijkstra's algorithm over a dense adjacency matrix, O(V²) per source.
///
/// Vertex selection is a linear scan for the unsettled vertex with the smallest
/// tentative distance; among equal distances the lowest index wins. Relaxation
/// only replaces a distance that gets strictly shorter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseDijkstra;

impl DenseDijkstra {
    /// Lowest-index unsettled vertex with minimum tentative distance.
    ///
    /// When every remaining vertex is unreachable this still returns the first
    /// unsettled one; relaxing from it is a no-op.
    fn select_min(distance: &[f64], settled: &[bool]) -> Option<usize> {
        let mut best: Option<usize> = None;

        for (v, &done) in settled.iter().enumerate() {
            if done {
                continue;
            }
            match best {
                Some(b) if distance[v] >= distance[b] => {}
                _ => best = Some(v),
            }
        }

        best
    }
}

impl ShortestPathEngine for DenseDijkstra {
    fn shortest_paths_into(
        &self,
        graph: &GraphMatrix,
        source: usize,
        paths: &mut ShortestPaths,
    ) -> Result<(), Error> {
        let num_nodes = graph.num_nodes();
        if source >= num_nodes {
            return Err(Error::NodeIndexOutOfBounds(source));
        }

        paths.reset(num_nodes, source);

        // The last remaining vertex has nothing left to relax, so V - 1 rounds suffice.
        for _ in 0..num_nodes - 1 {
            let Some(u) = Self::select_min(&paths.distance, &paths.settled) else {
                break;
            };
            paths.settled[u] = true;

            let base = paths.distance[u];
            let row = graph.row(u)?;

            for (v, &weight) in row.iter().enumerate() {
                if paths.settled[v] || !is_edge(weight) {
                    continue;
                }
                if let Some(shorter) = relax(paths.distance[v], base, weight) {
                    paths.distance[v] = shorter;
                    paths.predecessor[v] = Some(u);
                }
            }
        }

        Ok(())
    }
}

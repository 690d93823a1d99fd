/// Type alias for a single directed edge: (from, to, weight)
pub type Edge = (usize, usize, f64);

/// Result reported when the graph contains no cycle.
pub const NO_CYCLE: f64 = 0.0;

/// A directed cycle recovered from the graph.
///
/// `path` lists the edges in traversal order; the target of the last edge is
/// the source of the first one. `total_weight` is the sum of the edge weights
/// accumulated in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedCycle {
    pub path: Vec<Edge>,
    pub total_weight: f64,
}

impl WeightedCycle {
    /// Number of edges in the cycle.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Vertices visited, starting and ending at the same vertex.
    ///
    /// Example:
    /// ```text
    /// path [(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)] -> [0, 1, 2, 0]
    /// ```
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = self.path.iter().map(|&(u, _, _)| u).collect();
        if let Some(&(_, v, _)) = self.path.last() {
            vertices.push(v);
        }
        vertices
    }

    /// Returns true if the cycle is a single self-loop edge.
    pub fn is_self_loop(&self) -> bool {
        matches!(self.path.as_slice(), [(u, v, _)] if u == v)
    }
}

use common::error::Error;
use common::numeric::is_edge;
use common::types::Edge;

/// Graph stored as a dense, row-major adjacency matrix.
///
/// - `weights[u * num_nodes + v]` -> weight of the directed edge `u -> v`
/// - a weight of `0.0` means "no edge" (a zero-weight edge is indistinguishable from an absent one)
///
/// The matrix is sized once for `num_nodes` vertices and never grows. Lookups
/// and insertions are O(1); memory is O(V²), which limits the store to graphs of
/// a few thousand vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMatrix {
    num_nodes: usize,
    weights: Vec<f64>,
}

impl GraphMatrix {
    /// Creates a graph with `num_nodes` vertices and no edges.
    ///
    /// # Panics
    /// Panics if `num_nodes²` overflows `usize`. Storage is `num_nodes²` weights,
    /// so callers reading untrusted input should cap the vertex count first.
    pub fn new(num_nodes: usize) -> Self {
        let cells = num_nodes
            .checked_mul(num_nodes)
            .unwrap_or_else(|| panic!("{} vertices overflow the adjacency matrix size", num_nodes));

        Self {
            num_nodes,
            weights: vec![0.0; cells],
        }
    }

    /// Creates a graph from a vertex count and a list of edges `(src, dst, weight)`.
    ///
    /// Edges are inserted in order with [`GraphMatrix::add_edge`] semantics:
    /// out-of-range endpoints are skipped and a later edge for the same ordered
    /// pair overwrites an earlier one.
    pub fn from_edges(num_nodes: usize, edges: &[Edge]) -> Self {
        let mut graph = Self::new(num_nodes);
        for &(u, v, weight) in edges {
            graph.add_edge(u, v, weight);
        }
        graph
    }

    /// Number of vertices needed to hold every endpoint in `edges`.
    ///
    /// This is one more than the highest referenced index, or 0 for no edges.
    pub fn node_count(edges: &[Edge]) -> usize {
        edges
            .iter()
            .flat_map(|&(u, v, _)| [u, v])
            .max()
            .map_or(0, |max_id| max_id + 1)
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    fn index(&self, u: usize, v: usize) -> Option<usize> {
        (u < self.num_nodes && v < self.num_nodes).then(|| u * self.num_nodes + v)
    }

    /// Sets the weight of `u -> v`, overwriting any previous value.
    ///
    /// Returns `false` and leaves the graph untouched if either endpoint is
    /// outside `[0, V)`. The weight is stored as given; callers are expected to
    /// pass non-negative values.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> bool {
        match self.index(u, v) {
            Some(idx) => {
                self.weights[idx] = weight;
                true
            }
            None => false,
        }
    }

    /// Strict variant of [`GraphMatrix::add_edge`].
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` for the first endpoint outside `[0, V)`,
    /// or `Error::InvalidWeight` if `weight` is negative or not finite.
    pub fn try_add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), Error> {
        if u >= self.num_nodes {
            return Err(Error::NodeIndexOutOfBounds(u));
        }
        if v >= self.num_nodes {
            return Err(Error::NodeIndexOutOfBounds(v));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        self.add_edge(u, v, weight);
        Ok(())
    }

    /// Stored weight of `u -> v`, or `0.0` if no edge was set or the pair is out of range.
    #[inline]
    pub fn weight(&self, u: usize, v: usize) -> f64 {
        self.index(u, v).map_or(0.0, |idx| self.weights[idx])
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        is_edge(self.weight(u, v))
    }

    /// Outgoing weights of `u`, indexed by target vertex.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if `u` is outside `[0, V)`.
    pub fn row(&self, u: usize) -> Result<&[f64], Error> {
        if u >= self.num_nodes {
            return Err(Error::NodeIndexOutOfBounds(u));
        }
        let start = u * self.num_nodes;
        Ok(&self.weights[start..start + self.num_nodes])
    }

    /// Every `(u, weight)` with an edge `u -> v`, in ascending order of `u`.
    pub fn incoming(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.num_nodes)
            .map(move |u| (u, self.weight(u, v)))
            .filter(|&(_, weight)| is_edge(weight))
    }

    /// All present edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.num_nodes;
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| is_edge(weight))
            .map(move |(idx, &weight)| (idx / n, idx % n, weight))
    }

    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&weight| is_edge(weight)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_has_no_edges() {
        let graph = GraphMatrix::new(3);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.edge_count(), 0);
        for u in 0..3 {
            for v in 0..3 {
                assert_eq!(graph.weight(u, v), 0.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "overflow the adjacency matrix size")]
    fn matrix_size_overflow_panics() {
        GraphMatrix::new(usize::MAX);
    }

    #[test]
    fn empty_graph() {
        let graph = GraphMatrix::new(0);

        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.weight(0, 0), 0.0);
    }

    #[test]
    fn edges_are_directed() {
        let graph = GraphMatrix::from_edges(2, &[(0, 1, 5.0)]);

        assert_eq!(graph.weight(0, 1), 5.0);
        assert_eq!(graph.weight(1, 0), 0.0);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn last_write_wins() {
        let graph = GraphMatrix::from_edges(2, &[(0, 1, 1.0), (0, 1, 4.0)]);

        assert_eq!(graph.weight(0, 1), 4.0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn out_of_range_edges_are_ignored() {
        let mut graph = GraphMatrix::new(2);

        assert!(!graph.add_edge(2, 0, 1.0));
        assert!(!graph.add_edge(0, 5, 1.0));
        assert!(graph.add_edge(1, 1, 1.0));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(2, 0), 0.0);
    }

    #[test]
    fn zero_weight_edge_behaves_as_absent() {
        let graph = GraphMatrix::from_edges(2, &[(0, 1, 0.0)]);

        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.incoming(1).count(), 0);
    }

    #[test]
    fn try_add_edge_reports_contract_violations() {
        let mut graph = GraphMatrix::new(2);

        assert_eq!(graph.try_add_edge(3, 0, 1.0), Err(Error::NodeIndexOutOfBounds(3)));
        assert_eq!(graph.try_add_edge(0, 2, 1.0), Err(Error::NodeIndexOutOfBounds(2)));
        assert_eq!(graph.try_add_edge(0, 1, -1.0), Err(Error::InvalidWeight(-1.0)));
        assert!(matches!(
            graph.try_add_edge(0, 1, f64::NAN),
            Err(Error::InvalidWeight(_))
        ));
        assert_eq!(graph.edge_count(), 0);

        assert_eq!(graph.try_add_edge(0, 1, 2.0), Ok(()));
        assert_eq!(graph.weight(0, 1), 2.0);
    }

    #[test]
    fn node_count_from_edges() {
        assert_eq!(GraphMatrix::node_count(&[]), 0);
        assert_eq!(GraphMatrix::node_count(&[(0, 0, 1.0)]), 1);
        assert_eq!(GraphMatrix::node_count(&[(0, 4, 1.0), (2, 1, 1.0)]), 5);
    }

    #[test]
    fn incoming_lists_sources_in_ascending_order() {
        let graph = GraphMatrix::from_edges(4, &[(3, 1, 1.0), (0, 1, 2.0), (1, 1, 3.0), (1, 2, 9.0)]);

        let incoming: Vec<_> = graph.incoming(1).collect();
        assert_eq!(incoming, vec![(0, 2.0), (1, 3.0), (3, 1.0)]);
    }

    #[test]
    fn row_exposes_outgoing_weights() {
        let graph = GraphMatrix::from_edges(3, &[(1, 0, 2.0), (1, 2, 3.0)]);

        assert_eq!(graph.row(1).unwrap(), &[2.0, 0.0, 3.0]);
        assert_eq!(graph.row(3), Err(Error::NodeIndexOutOfBounds(3)));
    }

    #[test]
    fn edges_iterates_row_major() {
        let graph = GraphMatrix::from_edges(3, &[(2, 0, 1.0), (0, 2, 2.0), (0, 1, 3.0)]);

        let edges: Vec<Edge> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, 3.0), (0, 2, 2.0), (2, 0, 1.0)]);
    }

    #[test]
    fn large_graph() {
        let edges: Vec<Edge> = (0..1000).map(|i| (i, (i + 1) % 1000, 1.1)).collect();
        let graph = GraphMatrix::from_edges(1000, &edges);

        assert_eq!(graph.num_nodes(), 1000);
        assert_eq!(graph.edge_count(), 1000);
        assert_eq!(graph.weight(999, 0), 1.1);
    }
}

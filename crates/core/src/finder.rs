use super::dijkstra::ShortestPaths;
use super::matrix::GraphMatrix;
use super::traits::ShortestPathEngine;
use common::{
    error::Error,
    numeric::is_reachable,
    types::{Edge, NO_CYCLE, WeightedCycle},
};

/// A cycle `source -> ... -> closing -> source` found by closing a shortest
/// path with the direct edge `closing -> source`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleCandidate {
    pub source: usize,
    pub closing: usize,
    pub length: f64,
}

impl CycleCandidate {
    /// True if `self` should replace `other` as the best cycle.
    ///
    /// Shorter wins; equal lengths fall back to the lower `(source, closing)`
    /// pair, which is the candidate a sequential scan meets first.
    pub fn beats(&self, other: &CycleCandidate) -> bool {
        self.length < other.length
            || (self.length == other.length
                && (self.source, self.closing) < (other.source, other.closing))
    }

    /// Merges two partial results, keeping the winner.
    pub fn pick(a: Option<CycleCandidate>, b: Option<CycleCandidate>) -> Option<CycleCandidate> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.beats(&a) { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Result of scanning a set of source vertices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchOutcome {
    pub best: Option<CycleCandidate>,
    pub sources_searched: usize,
    /// Set when the stop predicate ended the scan before all sources were searched.
    pub interrupted: bool,
}

/// Finds the minimum-weight directed cycle by running a shortest-path engine
/// from every vertex and closing each path with a returning edge.
///
/// The finder holds no graph state: every call takes the graph by reference,
/// so one immutable graph can be searched from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct CycleFinder<E> {
    engine: E,
}

impl<E> CycleFinder<E>
where
    E: ShortestPathEngine,
{
    pub fn new(engine: E) -> Self {
        CycleFinder { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Length of the minimum-weight cycle, or [`NO_CYCLE`] (0) if there is none.
    pub fn smallest_cycle(&self, graph: &GraphMatrix) -> Result<f64, Error> {
        Ok(self
            .best_candidate(graph)?
            .map_or(NO_CYCLE, |candidate| candidate.length))
    }

    /// The winning candidate over all sources, or `None` for an acyclic or empty graph.
    pub fn best_candidate(&self, graph: &GraphMatrix) -> Result<Option<CycleCandidate>, Error> {
        let outcome = self.search(graph, 0..graph.num_nodes(), || false)?;
        Ok(outcome.best)
    }

    /// Shortest cycle through `source`, using `paths` as scratch space.
    ///
    /// For every `j` with an edge `j -> source` and a finite distance from
    /// `source`, `distance(j) + weight(j, source)` is a candidate. A positive
    /// self-loop on `source` yields a one-edge cycle since `distance(source) = 0`.
    pub fn candidate_through(
        &self,
        graph: &GraphMatrix,
        source: usize,
        paths: &mut ShortestPaths,
    ) -> Result<Option<CycleCandidate>, Error> {
        self.engine.shortest_paths_into(graph, source, paths)?;

        let mut best: Option<CycleCandidate> = None;
        for (closing, weight) in graph.incoming(source) {
            let Some(distance) = paths.distance(closing) else {
                continue;
            };

            let length = distance + weight;
            if !is_reachable(length) {
                continue;
            }
            if best.is_none_or(|b| length < b.length) {
                best = Some(CycleCandidate {
                    source,
                    closing,
                    length,
                });
            }
        }

        Ok(best)
    }

    /// Scans `sources` in order and keeps the best candidate.
    ///
    /// `should_stop` is consulted before each source, never in the middle of a
    /// shortest-path run. One scratch buffer is reused for the whole scan.
    pub fn search<I, F>(
        &self,
        graph: &GraphMatrix,
        sources: I,
        mut should_stop: F,
    ) -> Result<SearchOutcome, Error>
    where
        I: IntoIterator<Item = usize>,
        F: FnMut() -> bool,
    {
        let mut paths = ShortestPaths::with_capacity(graph.num_nodes());
        let mut outcome = SearchOutcome::default();

        for source in sources {
            if should_stop() {
                outcome.interrupted = true;
                break;
            }

            let candidate = self.candidate_through(graph, source, &mut paths)?;
            outcome.best = CycleCandidate::pick(outcome.best, candidate);
            outcome.sources_searched += 1;
        }

        Ok(outcome)
    }

    /// The minimum-weight cycle with its edges, or `None` if the graph is acyclic.
    pub fn shortest_cycle(&self, graph: &GraphMatrix) -> Result<Option<WeightedCycle>, Error> {
        match self.best_candidate(graph)? {
            Some(candidate) => self.reconstruct(graph, &candidate).map(Some),
            None => Ok(None),
        }
    }

    /// Rebuilds the edges of `candidate`: the shortest path from its source to
    /// its closing vertex, followed by the closing edge back to the source.
    ///
    /// # Errors
    /// `Error::CycleReconstructionFailed` if the candidate does not describe a
    /// cycle of `graph`.
    pub fn reconstruct(
        &self,
        graph: &GraphMatrix,
        candidate: &CycleCandidate,
    ) -> Result<WeightedCycle, Error> {
        if !graph.has_edge(candidate.closing, candidate.source) {
            return Err(Error::CycleReconstructionFailed);
        }

        let paths = self.engine.shortest_paths(graph, candidate.source)?;
        let mut vertices = paths
            .path_to(candidate.closing)?
            .ok_or(Error::CycleReconstructionFailed)?;
        vertices.push(candidate.source);

        let path: Vec<Edge> = vertices
            .windows(2)
            .map(|pair| (pair[0], pair[1], graph.weight(pair[0], pair[1])))
            .collect();
        let total_weight = path.iter().map(|&(_, _, weight)| weight).sum();

        Ok(WeightedCycle { path, total_weight })
    }
}

#[cfg(test)]
mod finder_tests {
    use super::*;
    use crate::dijkstra::DenseDijkstra;

    fn finder() -> CycleFinder<DenseDijkstra> {
        CycleFinder::new(DenseDijkstra)
    }

    #[test]
    fn triangle_cycle() {
        let graph = GraphMatrix::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), 3.0);
    }

    #[test]
    fn no_return_edge_means_no_cycle() {
        let graph = GraphMatrix::from_edges(2, &[(0, 1, 5.0)]);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), NO_CYCLE);
        assert_eq!(finder().shortest_cycle(&graph).unwrap(), None);
    }

    #[test]
    fn directed_path_is_acyclic() {
        let graph = GraphMatrix::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0)]);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), 0.0);
    }

    #[test]
    fn self_loop_cycle() {
        let graph = GraphMatrix::from_edges(1, &[(0, 0, 2.5)]);
        let finder = finder();

        assert_eq!(finder.smallest_cycle(&graph).unwrap(), 2.5);

        let cycle = finder.shortest_cycle(&graph).unwrap().unwrap();
        assert!(cycle.is_self_loop());
        assert_eq!(cycle.path, vec![(0, 0, 2.5)]);
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        let graph = GraphMatrix::new(0);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), NO_CYCLE);
    }

    #[test]
    fn edgeless_graph_has_no_cycle() {
        let graph = GraphMatrix::new(5);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), NO_CYCLE);
    }

    #[test]
    fn minimum_of_two_disjoint_cycles() {
        let graph = GraphMatrix::from_edges(
            5,
            &[
                // 0 -> 1 -> 0, weight 10
                (0, 1, 4.0),
                (1, 0, 6.0),
                // 2 -> 3 -> 4 -> 2, weight 6
                (2, 3, 2.0),
                (3, 4, 2.0),
                (4, 2, 2.0),
            ],
        );
        let finder = finder();

        assert_eq!(finder.smallest_cycle(&graph).unwrap(), 6.0);

        let cycle = finder.shortest_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle.vertices(), vec![2, 3, 4, 2]);
        assert_eq!(cycle.total_weight, 6.0);
    }

    #[test]
    fn weight_beats_edge_count() {
        // A heavy two-edge cycle and a light three-edge cycle through vertex 0.
        let graph = GraphMatrix::from_edges(
            4,
            &[(0, 1, 5.0), (1, 0, 5.0), (0, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
        );

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), 3.0);
    }

    #[test]
    fn shortcut_edge_shortens_the_cycle() {
        let graph = GraphMatrix::from_edges(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0), (0, 2, 0.5)],
        );

        // 0 -> 2 -> 3 -> 0
        assert_eq!(finder().smallest_cycle(&graph).unwrap(), 2.5);
    }

    #[test]
    fn self_loop_is_ignored_when_a_shorter_cycle_exists() {
        let graph = GraphMatrix::from_edges(2, &[(0, 0, 9.0), (0, 1, 1.0), (1, 0, 1.0)]);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), 2.0);
    }

    #[test]
    fn smallest_cycle_is_idempotent() {
        let graph = GraphMatrix::from_edges(3, &[(0, 1, 1.5), (1, 2, 2.5), (2, 0, 0.5), (1, 0, 7.0)]);
        let snapshot = graph.clone();
        let finder = finder();

        let first = finder.smallest_cycle(&graph).unwrap();
        let second = finder.smallest_cycle(&graph).unwrap();

        assert_eq!(first, second);
        assert_eq!(graph, snapshot);
    }

    #[test]
    fn equal_cycles_resolve_to_the_lowest_source() {
        // Two disjoint cycles of weight 2. The one through vertex 1 wins.
        let graph = GraphMatrix::from_edges(4, &[(3, 2, 1.0), (2, 3, 1.0), (1, 1, 2.0)]);

        let best = finder().best_candidate(&graph).unwrap().unwrap();
        assert_eq!(
            best,
            CycleCandidate {
                source: 1,
                closing: 1,
                length: 2.0
            }
        );
    }

    #[test]
    fn candidate_through_ignores_unreachable_closers() {
        // 2 -> 0 exists but 2 is unreachable from 0.
        let graph = GraphMatrix::from_edges(3, &[(2, 0, 1.0), (0, 1, 1.0)]);
        let mut paths = ShortestPaths::new();

        let candidate = finder().candidate_through(&graph, 0, &mut paths).unwrap();
        assert_eq!(candidate, None);
    }

    #[test]
    fn infinite_closing_edge_is_not_a_cycle() {
        let graph = GraphMatrix::from_edges(2, &[(0, 1, 1.0), (1, 0, f64::INFINITY)]);

        assert_eq!(finder().smallest_cycle(&graph).unwrap(), NO_CYCLE);
        assert_eq!(finder().best_candidate(&graph).unwrap(), None);
    }

    #[test]
    fn search_stops_between_sources() {
        let graph = GraphMatrix::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        let mut calls = 0;

        let outcome = finder()
            .search(&graph, 0..3, || {
                calls += 1;
                calls > 2
            })
            .unwrap();

        assert!(outcome.interrupted);
        assert_eq!(outcome.sources_searched, 2);
        assert_eq!(outcome.best.map(|c| c.length), Some(3.0));
    }

    #[test]
    fn search_over_a_subset_of_sources() {
        let graph = GraphMatrix::from_edges(4, &[(0, 1, 1.0), (1, 0, 1.0), (2, 3, 5.0), (3, 2, 5.0)]);

        let outcome = finder().search(&graph, 2..4, || false).unwrap();

        assert!(!outcome.interrupted);
        assert_eq!(outcome.sources_searched, 2);
        assert_eq!(outcome.best.map(|c| c.length), Some(10.0));
    }

    #[test]
    fn search_rejects_unknown_source() {
        let graph = GraphMatrix::new(2);

        let result = finder().search(&graph, [0, 5], || false);
        assert_eq!(result, Err(Error::NodeIndexOutOfBounds(5)));
    }

    #[test]
    fn pick_is_order_independent() {
        let a = Some(CycleCandidate {
            source: 0,
            closing: 2,
            length: 4.0,
        });
        let b = Some(CycleCandidate {
            source: 3,
            closing: 1,
            length: 4.0,
        });
        let c = Some(CycleCandidate {
            source: 5,
            closing: 5,
            length: 1.0,
        });

        assert_eq!(CycleCandidate::pick(a, b), a);
        assert_eq!(CycleCandidate::pick(b, a), a);
        assert_eq!(CycleCandidate::pick(a, c), c);
        assert_eq!(CycleCandidate::pick(None, b), b);
        assert_eq!(CycleCandidate::pick(b, None), b);
        assert_eq!(CycleCandidate::pick(None, None), None);
    }

    #[test]
    fn reconstruct_rejects_missing_closing_edge() {
        let graph = GraphMatrix::from_edges(2, &[(0, 1, 1.0)]);
        let bogus = CycleCandidate {
            source: 0,
            closing: 1,
            length: 2.0,
        };

        assert_eq!(
            finder().reconstruct(&graph, &bogus),
            Err(Error::CycleReconstructionFailed)
        );
    }

    #[test]
    fn reconstructed_cycle_matches_reported_length() {
        let graph = GraphMatrix::from_edges(
            5,
            &[(0, 1, 0.5), (1, 2, 0.25), (2, 3, 1.0), (3, 0, 0.75), (1, 4, 3.0), (4, 1, 3.0)],
        );
        let finder = finder();

        let length = finder.smallest_cycle(&graph).unwrap();
        let cycle = finder.shortest_cycle(&graph).unwrap().unwrap();

        assert_eq!(length, 2.5);
        assert_eq!(cycle.total_weight, length);
        assert_eq!(cycle.vertices(), vec![0, 1, 2, 3, 0]);
    }
}

use super::dijkstra::ShortestPaths;
use super::matrix::GraphMatrix;
use common::error::Error;

/// Trait for single-source shortest-path engines over non-negative weights.
pub trait ShortestPathEngine {
    /// Computes distances from `source` to every vertex, writing them into `paths`.
    ///
    /// `paths` is reset first, so one buffer can be reused across sources.
    ///
    /// Returns `Err(Error::NodeIndexOutOfBounds)` if `source` is not a vertex of `graph`.
    fn shortest_paths_into(
        &self,
        graph: &GraphMatrix,
        source: usize,
        paths: &mut ShortestPaths,
    ) -> Result<(), Error>;

    /// Same as [`ShortestPathEngine::shortest_paths_into`] with a freshly allocated buffer.
    fn shortest_paths(&self, graph: &GraphMatrix, source: usize) -> Result<ShortestPaths, Error> {
        let mut paths = ShortestPaths::with_capacity(graph.num_nodes());
        self.shortest_paths_into(graph, source, &mut paths)?;
        Ok(paths)
    }
}

use std::ops::Range;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use super::{error::Error, types::SharedGraph};
use shortest_cycle_core::{CycleCandidate, CycleFinder, SearchOutcome, traits::ShortestPathEngine};

/// Splits the cycle search across blocking worker tasks.
///
/// Each worker owns a contiguous range of source vertices, a read-only handle
/// to the graph and its own scratch buffers. Partial results are merged with
/// [`CycleCandidate::pick`], so the answer is identical to a sequential scan.
pub struct CycleSearcher<E> {
    engine: E,
    workers: usize,
    deadline: Option<Duration>,
}

impl<E> CycleSearcher<E>
where
    E: ShortestPathEngine + Clone + Send + Sync + 'static,
{
    pub fn new(engine: E, workers: usize, deadline: Option<Duration>) -> Self {
        CycleSearcher {
            engine,
            workers: workers.max(1),
            deadline,
        }
    }

    /// Finds the minimum-weight cycle of `graph`, or `None` if it is acyclic.
    ///
    /// # Errors
    /// `Error::DeadlineExceeded` if the deadline passed before every source was
    /// searched, `Error::WorkerFailed` if a worker panicked or was cancelled.
    pub async fn search(&self, graph: SharedGraph) -> Result<Option<CycleCandidate>, Error> {
        let total = graph.num_nodes();
        if total == 0 {
            tracing::info!("Graph has no vertices. Skipping search.");
            return Ok(None);
        }

        let deadline_at = self.deadline.map(|d| Instant::now() + d);
        let ranges = partition(total, self.workers);
        tracing::info!(vertices = total, workers = ranges.len(), "Starting cycle search");

        let handles: Vec<JoinHandle<Result<SearchOutcome, Error>>> = ranges
            .into_iter()
            .map(|sources| {
                let graph = graph.clone();
                let finder = CycleFinder::new(self.engine.clone());

                tokio::task::spawn_blocking(move || {
                    tracing::debug!(start = sources.start, end = sources.end, "Worker started");

                    let outcome = finder.search(&graph, sources, || {
                        deadline_at.is_some_and(|at| Instant::now() >= at)
                    })?;
                    Ok(outcome)
                })
            })
            .collect();

        let mut best: Option<CycleCandidate> = None;
        let mut searched = 0;
        let mut interrupted = false;

        for handle in handles {
            let outcome = handle
                .await
                .map_err(|e| Error::WorkerFailed(e.to_string()))??;

            best = CycleCandidate::pick(best, outcome.best);
            searched += outcome.sources_searched;
            interrupted |= outcome.interrupted;
        }

        if interrupted {
            tracing::warn!(searched, total, "Deadline reached before the search completed");
            return Err(Error::DeadlineExceeded { searched, total });
        }

        match &best {
            Some(candidate) => tracing::info!(
                length = candidate.length,
                source = candidate.source,
                "Search complete: cycle found"
            ),
            None => tracing::info!("Search complete: graph is acyclic"),
        }

        Ok(best)
    }
}

/// Cuts `0..total` into at most `workers` contiguous, non-empty ranges of near-equal size.
fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, total.max(1));
    let chunk = total.div_ceil(workers);

    (0..total)
        .step_by(chunk.max(1))
        .map(|start| start..(start + chunk).min(total))
        .collect()
}

//! Minimum-weight directed cycle search over a dense, non-negatively weighted graph.
//!
//! ```
//! use shortest_cycle_core::{CycleFinder, DenseDijkstra, GraphMatrix};
//!
//! let graph = GraphMatrix::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
//! let finder = CycleFinder::new(DenseDijkstra);
//!
//! assert_eq!(finder.smallest_cycle(&graph).unwrap(), 3.0);
//! ```

pub mod dijkstra;
pub mod finder;
pub mod matrix;
pub mod traits;

pub use dijkstra::{DenseDijkstra, ShortestPaths};
pub use finder::{CycleCandidate, CycleFinder, SearchOutcome};
pub use matrix::GraphMatrix;
pub use traits::ShortestPathEngine;

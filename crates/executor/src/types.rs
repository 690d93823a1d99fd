use clap::ValueEnum;
use std::path::Path;
use std::sync::Arc;

use super::error::Error;
use common::types::Edge;
use shortest_cycle_core::GraphMatrix;

/// The graph is built once and only read afterwards, so workers share it without a lock.
pub type SharedGraph = Arc<GraphMatrix>;

/// On-disk layout of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `u: v w v w ...`, one line per source vertex.
    Adjacency,
    /// `from,to,weight` rows with a header.
    Csv,
}

impl InputFormat {
    /// Guesses the format from the file extension; anything but `.csv` is adjacency.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Adjacency,
        }
    }
}

/// A validated vertex count plus the edges to insert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedGraph {
    pub num_nodes: usize,
    pub edges: Vec<Edge>,
}

impl ParsedGraph {
    /// Rejects vertex counts above `limit`; storage grows with the square of the count.
    pub fn check_limit(&self, limit: usize) -> Result<(), Error> {
        if self.num_nodes > limit {
            return Err(Error::TooManyVertices {
                requested: self.num_nodes,
                limit,
            });
        }
        Ok(())
    }

    pub fn into_graph(self) -> GraphMatrix {
        GraphMatrix::from_edges(self.num_nodes, &self.edges)
    }
}

/// A contract for anything that can produce a validated edge list.
///
/// This decouples graph construction from the concrete file format
/// (adjacency list vs. CSV).
pub trait EdgeSource {
    fn read_graph(&self) -> Result<ParsedGraph, Error>;
}

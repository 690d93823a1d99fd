use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::error::Error;
use super::types::{EdgeSource, ParsedGraph};
use common::types::Edge;
use shortest_cycle_core::GraphMatrix;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    #[serde(rename = "weight")]
    pub weight_value: f64,
}

/// Reads `from,to,weight` rows (with a header line) into an edge list.
pub struct CsvEdgeReader {
    path: PathBuf,
}

impl CsvEdgeReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvEdgeReader { path: path.into() }
    }
}

impl EdgeSource for CsvEdgeReader {
    fn read_graph(&self) -> Result<ParsedGraph, Error> {
        let file = File::open(&self.path).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to open input file");
            Error::IoError(e)
        })?;

        let parsed = parse_csv(file)?;
        tracing::debug!(
            path = %self.path.display(),
            vertices = parsed.num_nodes,
            edges = parsed.edges.len(),
            "CSV edge list parsed"
        );
        Ok(parsed)
    }
}

/// Parses CSV edge rows. Columns other than `from`, `to` and `weight` are ignored.
///
/// Rows are numbered from 1, not counting the header.
pub fn parse_csv<R: Read>(reader: R) -> Result<ParsedGraph, Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut edges: Vec<Edge> = Vec::new();

    for (idx, result) in rdr.deserialize().enumerate() {
        let record: CsvRecord = result?;

        if !record.weight_value.is_finite() || record.weight_value < 0.0 {
            return Err(Error::InvalidWeight {
                row: idx + 1,
                weight: record.weight_value,
            });
        }
        edges.push((record.from_node, record.to_node, record.weight_value));
    }

    Ok(ParsedGraph {
        num_nodes: GraphMatrix::node_count(&edges),
        edges,
    })
}

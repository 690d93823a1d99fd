use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::LazyLock;

use super::error::Error;
use super::types::{EdgeSource, ParsedGraph};
use common::types::Edge;

/// `u:` followed by zero or more ` v w` pairs; `w` is `digits` or `digits.digits`.
static LINE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+:( [0-9]+ [0-9]+(\.[0-9]+)?)*$").expect("line format regex is valid")
});

/// Reads a graph written as one adjacency line per source vertex:
///
/// ```text
/// 0: 1 4 2 1.5
/// 1: 2 1
/// 2:
/// ```
pub struct AdjacencyReader {
    path: PathBuf,
}

impl AdjacencyReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AdjacencyReader { path: path.into() }
    }
}

impl EdgeSource for AdjacencyReader {
    fn read_graph(&self) -> Result<ParsedGraph, Error> {
        let file = File::open(&self.path).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to open input file");
            Error::IoError(e)
        })?;

        let parsed = parse_adjacency(BufReader::new(file))?;
        tracing::debug!(
            path = %self.path.display(),
            vertices = parsed.num_nodes,
            edges = parsed.edges.len(),
            "Adjacency list parsed"
        );
        Ok(parsed)
    }
}

/// Parses adjacency lines into a vertex count and an edge list.
///
/// Any line that does not match the format rejects the whole input. The vertex
/// count is one more than the largest index mentioned anywhere, including
/// line heads without edges.
pub fn parse_adjacency<R: BufRead>(reader: R) -> Result<ParsedGraph, Error> {
    let mut edges: Vec<Edge> = Vec::new();
    let mut max_index: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if !LINE_FORMAT.is_match(&line) {
            return Err(malformed(line_no, &line));
        }

        let mut tokens = line.split(' ');
        let head = tokens.next().unwrap_or_default().trim_end_matches(':');
        let u = parse_index(head, line_no, &line)?;
        max_index = max_index.max(Some(u));

        while let (Some(target), Some(weight)) = (tokens.next(), tokens.next()) {
            let v = parse_index(target, line_no, &line)?;
            let weight: f64 = weight.parse().map_err(|_| malformed(line_no, &line))?;
            // A long enough digit string parses to infinity.
            if !weight.is_finite() {
                return Err(Error::InvalidWeight {
                    row: line_no,
                    weight,
                });
            }

            max_index = max_index.max(Some(v));
            edges.push((u, v, weight));
        }
    }

    Ok(ParsedGraph {
        num_nodes: max_index.map_or(0, |max_id| max_id + 1),
        edges,
    })
}

fn parse_index(token: &str, line_no: usize, line: &str) -> Result<usize, Error> {
    // Digits-only per the line format; this fails only on overflow.
    token.parse().map_err(|_| malformed(line_no, line))
}

fn malformed(line: usize, content: &str) -> Error {
    Error::MalformedLine {
        line,
        content: content.to_string(),
    }
}

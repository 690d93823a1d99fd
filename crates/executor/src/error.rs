use thiserror::Error;

use common::error::Error as CycleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Line {line} is not in the `vertex: target weight ...` format: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Record {row} has an invalid weight {weight}; weights must be finite and non-negative.")]
    InvalidWeight { row: usize, weight: f64 },

    #[error("Input references {requested} vertices but at most {limit} are supported.")]
    TooManyVertices { requested: usize, limit: usize },

    #[error("Search worker failed: {0}")]
    WorkerFailed(String),

    #[error("Deadline exceeded after searching {searched} of {total} source vertices.")]
    DeadlineExceeded { searched: usize, total: usize },

    #[error("Graph processing error: {0}")]
    GraphError(#[from] CycleError),
}

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Indicates an attempt to access a node index that exceeds the graph size (V).
    NodeIndexOutOfBounds(usize),

    /// A weight that is negative, NaN or infinite was handed to a strict insertion.
    InvalidWeight(f64),

    /// Failed to trace the full cycle path, usually due to broken predecessor chains.
    CycleReconstructionFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NodeIndexOutOfBounds(n) => write!(f, "Node index {} is out of bounds.", n),

            Error::InvalidWeight(w) => {
                write!(f, "Edge weight {} is not a finite non-negative number.", w)
            }

            Error::CycleReconstructionFailed => write!(
                f,
                "Cycle path reconstruction failed due to broken predecessor chain."
            ),
        }
    }
}

impl std::error::Error for Error {}

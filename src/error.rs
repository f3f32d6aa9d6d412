//! Error types for hpo-gain

use std::path::PathBuf;

use thiserror::Error;

/// hpo-gain error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on a specific file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV framing error
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A field that is not a number
    #[error("{path}:{line}: cannot parse {field:?} as a number")]
    Parse {
        path: PathBuf,
        line: u64,
        field: String,
    },

    /// Nearest-neighbour index failure
    #[error("nearest-neighbour search: {0}")]
    Neighbour(#[from] smartcore::error::Failed),

    /// Path vectors and scoring table vectors differ in dimension
    #[error("dimension mismatch in {path}: expected {expected} columns, found {found}")]
    DimensionMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Scores and parameter rows are not parallel
    #[error("scoring table has {params} parameter rows but {scores} scores")]
    LengthMismatch { params: usize, scores: usize },

    /// Min-max normalisation is undefined
    #[error("scoring table is constant (min = max = {0}); cannot normalise")]
    DegenerateScores(f64),

    /// No experiments selected
    #[error("empty experiment range {first}..={last}")]
    EmptyRange { first: u32, last: u32 },

    /// Scoring table without rows
    #[error("scoring table has no rows: {0}")]
    EmptyTable(String),

    /// Cache file with an unexpected layout
    #[error("cache {path} has shape {rows}x{cols}, expected 4x101")]
    CacheShape {
        path: PathBuf,
        rows: usize,
        cols: usize,
    },

    /// Drawing error
    #[error("plot error: {0}")]
    Plot(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

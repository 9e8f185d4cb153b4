// crates/ubike-core/src/error.rs

//! Error types for loading station data.
//!
//! Every failure is detected at the loader boundary. Search, lookup and
//! presentation are total over records that loaded successfully.

use std::path::PathBuf;
use thiserror::Error;

/// The data source itself could not be turned into a list of records.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Dataset not found at {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("Dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of stations, found {found}")]
    NotAnArray { found: &'static str },
}

/// What exactly is wrong with a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordProblem {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` should be {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field `{field}` must not be empty")]
    Empty { field: &'static str },
}

/// A record in an otherwise valid array could not be mapped onto a
/// [`StationRecord`](crate::StationRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed station record at index {index}: {problem}")]
pub struct MalformedRecordError {
    pub index: usize,
    pub problem: RecordProblem,
}

impl MalformedRecordError {
    /// The offending field, if the problem is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self.problem {
            RecordProblem::NotAnObject { .. } => None,
            RecordProblem::MissingField { field }
            | RecordProblem::WrongType { field, .. }
            | RecordProblem::Empty { field } => Some(field),
        }
    }
}

#[derive(Debug, Error)]
pub enum StationError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
}

pub type Result<T> = std::result::Result<T, StationError>;

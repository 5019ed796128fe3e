use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Not valid JSON, or not an array of objects
    #[error("parsing {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {record}: missing field `{field}`")]
    MissingField { record: usize, field: String },

    #[error("record {record}: field `{field}` should be {expected}")]
    FieldType {
        record: usize,
        field: String,
        expected: &'static str,
    },

    #[error("theme rows have no column `{0}`")]
    UnknownColumn(String),
}

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;

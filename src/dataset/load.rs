use serde_json::{Map, Value};
use std::{fs, io, path::Path};
use tracing::{debug, info};

use super::ProjectRecord;
use crate::error::{DatasetError, Result};

/// Read the project file at `path`: a JSON array of objects.
///
/// Only the outer shape is checked here. Individual fields are looked up
/// lazily, so a record lacking a field fails when that field is used.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read dataset");

    let records = parse(&text, || path.display().to_string())?;
    info!(path = %path.display(), records = records.len(), "loaded project records");
    Ok(records)
}

/// Same as [`load_records`] for JSON text already in memory.
pub fn parse_records(text: &str) -> Result<Vec<ProjectRecord>> {
    parse(text, || "<memory>".to_string())
}

fn parse(text: &str, origin: impl Fn() -> String) -> Result<Vec<ProjectRecord>> {
    let raw: Vec<Map<String, Value>> =
        serde_json::from_str(text).map_err(|source| DatasetError::Parse {
            origin: origin(),
            source,
        })?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(i, fields)| ProjectRecord::new(i, fields))
        .collect())
}

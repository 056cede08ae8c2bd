//! Loading the inspection data document.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::LoadError;
use crate::record::InspectionRecord;

/// Parse a JSON array of inspection records.
pub fn parse_records(text: &str) -> Result<Vec<InspectionRecord>, LoadError> {
    let records: Vec<InspectionRecord> = serde_json::from_str(text)?;
    info!(count = records.len(), "loaded inspection records");
    Ok(records)
}

/// Read and parse a local inspection data file.
pub fn load_path(path: &Path) -> Result<Vec<InspectionRecord>, LoadError> {
    info!(path = %path.display(), "loading inspection data");
    let text = fs::read_to_string(path).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "cannot read inspection data");
    })?;
    parse_records(&text)
}

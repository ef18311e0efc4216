use std::path::Path;

use thiserror::Error;

use crate::models::{MatchRow, ScoredMatch};

/// Errors that can occur when writing the output table
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the scored matches to the output CSV, one row per pair
pub fn write_matches<P: AsRef<Path>>(path: P, matches: &[ScoredMatch]) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    for m in matches {
        writer.serialize(MatchRow::from(m))?;
    }

    writer.flush()?;

    tracing::info!("Wrote {} match rows to {}", matches.len(), path.display());

    Ok(())
}

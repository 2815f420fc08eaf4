use std::path::Path;

use tracing::info;

use crate::constants::REQUIRED_COLUMNS;
use crate::error::{Result, SimplifierError};
use crate::types::CatalogRecord;

/// Load the catalog CSV into memory.
///
/// Fails with `InputNotFound` when the path is absent and `MissingColumn`
/// when the header lacks a required column. A row that cannot be parsed
/// surfaces as a `Csv` error from deserialization.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRecord>> {
    println!("Reading input CSV: {}...", path.display());

    if !path.exists() {
        return Err(SimplifierError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    // Serde maps absent Option columns to None, so the header has to be
    // checked up front to distinguish a truncated catalog from one with
    // genuinely empty fractions.
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(SimplifierError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: CatalogRecord = row?;
        records.push(record);
    }

    info!(rows = records.len(), path = %path.display(), "catalog loaded");
    println!("Successfully loaded {} rows.", records.len());

    Ok(records)
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::{LabeledRecord, SimplifiedClass};

/// Write the labeled records as a two-column CSV with a header row.
///
/// The output directory is created first, parents included; a
/// pre-existing directory is left untouched.
pub fn write_labels(path: &Path, records: &[LabeledRecord]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(rows = records.len(), path = %path.display(), "labels written");
    Ok(())
}

/// Count rows per distinct class, most common first. Order among classes
/// with equal counts is unspecified.
pub fn distribution(records: &[LabeledRecord]) -> Vec<(SimplifiedClass, usize)> {
    let mut counts: HashMap<SimplifiedClass, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.simplified_class).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(dr7objid: u64, simplified_class: SimplifiedClass) -> LabeledRecord {
        LabeledRecord {
            dr7objid,
            simplified_class,
        }
    }

    #[test]
    fn distribution_is_sorted_by_descending_count() {
        let records = vec![
            labeled(1, SimplifiedClass::Uncertain),
            labeled(2, SimplifiedClass::Smooth),
            labeled(3, SimplifiedClass::Uncertain),
            labeled(4, SimplifiedClass::Uncertain),
            labeled(5, SimplifiedClass::Smooth),
            labeled(6, SimplifiedClass::Featured),
        ];

        let counts = distribution(&records);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0], (SimplifiedClass::Uncertain, 3));
        assert_eq!(counts[1], (SimplifiedClass::Smooth, 2));
        assert_eq!(counts[2], (SimplifiedClass::Featured, 1));
    }

    #[test]
    fn distribution_of_no_records_is_empty() {
        assert!(distribution(&[]).is_empty());
    }
}

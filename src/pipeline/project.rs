use crate::pipeline::classify;
use crate::types::{CatalogRecord, LabeledRecord};

/// Reduce classified catalog records to (identifier, class) pairs,
/// preserving input order and identifier values verbatim.
pub fn project(records: Vec<CatalogRecord>) -> Vec<LabeledRecord> {
    records
        .into_iter()
        .map(|record| LabeledRecord {
            simplified_class: classify::simplify(&record.fractions()),
            dr7objid: record.dr7objid,
        })
        .collect()
}

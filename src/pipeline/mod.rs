// Catalog simplification pipeline: loading, classification, projection, output

pub mod classify;
pub mod loader;
pub mod project;
pub mod sink;

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::{LabeledRecord, SimplifiedClass};

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub rows_read: usize,
    pub rows_written: usize,
    pub output_file: String,
    pub distribution: Vec<(SimplifiedClass, usize)>,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the full load, classify, project, write sequence for one catalog.
    pub fn run(input: &Path, output: &Path) -> Result<PipelineResult> {
        let records = loader::load_catalog(input)?;
        let rows_read = records.len();

        println!("Applying classification simplification...");
        let labeled: Vec<LabeledRecord> = project::project(records);

        println!("Saving simplified labels to: {}...", output.display());
        sink::write_labels(output, &labeled)?;
        let distribution = sink::distribution(&labeled);

        info!(rows = labeled.len(), output = %output.display(), "pipeline finished");

        Ok(PipelineResult {
            rows_read,
            rows_written: labeled.len(),
            output_file: output.display().to_string(),
            distribution,
        })
    }
}

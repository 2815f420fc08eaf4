/// Catalog path and classification constants to ensure consistency across the codebase

// Fixed catalog locations, relative to the working directory
pub const INPUT_CSV_PATH: &str = "original_datasets/gz2_hart16.csv";
pub const OUTPUT_CSV_PATH: &str = "processed_datasets/gz2_simplified_labels.csv";

// Required catalog columns, by exact header name
pub const ID_COLUMN: &str = "dr7objid";
pub const SMOOTH_COLUMN: &str = "t01_smooth_or_features_a01_smooth_debiased";
pub const FEATURED_COLUMN: &str = "t01_smooth_or_features_a02_features_or_disk_debiased";
pub const ARTIFACT_COLUMN: &str = "t01_smooth_or_features_a03_star_or_artifact_debiased";

pub const REQUIRED_COLUMNS: [&str; 4] = [ID_COLUMN, SMOOTH_COLUMN, FEATURED_COLUMN, ARTIFACT_COLUMN];

/// A debiased vote fraction at or above this value counts as a confident
/// classification.
pub const CLASSIFICATION_THRESHOLD: f64 = 0.8;

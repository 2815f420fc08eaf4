use serde::{Deserialize, Serialize};

/// One row of the Galaxy Zoo 2 catalog, keyed by SDSS DR7 object id.
///
/// Only the task-01 debiased vote fractions are read; any other catalog
/// columns are ignored. An empty fraction field deserializes to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub dr7objid: u64,
    #[serde(rename = "t01_smooth_or_features_a01_smooth_debiased")]
    pub smooth: Option<f64>,
    #[serde(rename = "t01_smooth_or_features_a02_features_or_disk_debiased")]
    pub featured: Option<f64>,
    #[serde(rename = "t01_smooth_or_features_a03_star_or_artifact_debiased")]
    pub artifact: Option<f64>,
}

impl CatalogRecord {
    /// The classifier's view of this record, without the identifier.
    pub fn fractions(&self) -> VoteFractions {
        VoteFractions {
            smooth: self.smooth,
            featured: self.featured,
            artifact: self.artifact,
        }
    }
}

/// The three task-01 debiased vote fractions for a single object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoteFractions {
    pub smooth: Option<f64>,
    pub featured: Option<f64>,
    pub artifact: Option<f64>,
}

/// Simplified morphology class derived from the vote fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimplifiedClass {
    Smooth,
    Featured,
    Artifact,
    Uncertain,
}

impl SimplifiedClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimplifiedClass::Smooth => "Smooth",
            SimplifiedClass::Featured => "Featured",
            SimplifiedClass::Artifact => "Artifact",
            SimplifiedClass::Uncertain => "Uncertain",
        }
    }
}

impl std::fmt::Display for SimplifiedClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Output row pairing an object identifier with its derived class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub dr7objid: u64,
    pub simplified_class: SimplifiedClass,
}

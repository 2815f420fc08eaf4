use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimplifierError {
    #[error("Input catalog not found at {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Required column '{0}' is missing from the catalog")]
    MissingColumn(String),

    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimplifierError>;

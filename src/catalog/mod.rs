pub mod loader;
pub mod simulator;
pub mod snapshot;

use std::path::PathBuf;

use thiserror::Error;

pub use snapshot::{CatalogSnapshot, HospitalState, OverlaySummary};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Directory file not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Invalid {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

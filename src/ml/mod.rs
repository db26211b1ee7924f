pub mod bundle;
pub mod forest;
pub mod scorer;

use std::path::PathBuf;

use thiserror::Error;

pub use bundle::ModelBundle;
pub use scorer::{SuitabilityPrediction, SuitabilityScorer};

#[derive(Error, Debug)]
pub enum MlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Malformed model artifact: {0}")]
    MalformedArtifact(#[from] serde_json::Error),

    #[error("Unsupported bundle version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Feature order mismatch: bundle has {0:?}")]
    FeatureOrderMismatch(Vec<String>),

    #[error("Malformed forest: {0}")]
    MalformedForest(String),
}

//! Trained-model artifact bundle.
//!
//! The offline trainer writes three JSON artifacts into a bundle directory:
//! forest weights, fitted categorical encoders, and metadata. They are
//! loaded read-only at startup. The feature order and encoder vocabularies
//! recorded at training time are a contract boundary and are validated on
//! load; any missing or malformed artifact is fatal for the ML path only.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::forest::Forest;
use super::MlError;

pub const BUNDLE_VERSION: u32 = 1;

pub const MODEL_FILE: &str = "model.json";
pub const ENCODERS_FILE: &str = "encoders.json";
pub const METADATA_FILE: &str = "metadata.json";

/// Classifier input feature order. The trainer records the same list in the
/// metadata; a bundle that disagrees is rejected.
pub const FEATURE_COLUMNS: [&str; 6] = [
    "hospital_type",
    "hospital_class",
    "capacity",
    "services",
    "staff",
    "condition",
];

/// A fitted label encoder: the sorted category vocabulary seen at training
/// time. Encoding is the index into that vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Index of a known category; `None` for values unseen at training time.
    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes.iter().position(|class| class == value)
    }
}

/// The three fitted encoders, one per categorical feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSet {
    pub hospital_type: LabelEncoder,
    pub hospital_class: LabelEncoder,
    pub condition: LabelEncoder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Training-time facts shipped alongside the weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleMetadata {
    pub version: u32,
    pub model_type: String,
    pub accuracy: f64,
    pub feature_columns: Vec<String>,
    pub feature_importance: Vec<FeatureImportance>,
    pub training_samples: u32,
    pub test_samples: u32,
    pub conditions: Vec<String>,
    pub hospital_types: Vec<String>,
    pub hospital_classes: Vec<String>,
}

/// The loaded, validated artifact set.
#[derive(Debug)]
pub struct ModelBundle {
    pub forest: Forest,
    pub encoders: EncoderSet,
    pub metadata: BundleMetadata,
}

impl ModelBundle {
    /// Load and validate all three artifacts from a bundle directory.
    pub fn load(dir: &Path) -> Result<Self, MlError> {
        let forest: Forest = read_json(dir.join(MODEL_FILE))?;
        let encoders: EncoderSet = read_json(dir.join(ENCODERS_FILE))?;
        let metadata: BundleMetadata = read_json(dir.join(METADATA_FILE))?;

        if metadata.version != BUNDLE_VERSION {
            return Err(MlError::UnsupportedVersion {
                found: metadata.version,
                expected: BUNDLE_VERSION,
            });
        }
        if metadata.feature_columns != FEATURE_COLUMNS {
            return Err(MlError::FeatureOrderMismatch(metadata.feature_columns));
        }

        tracing::info!(
            model_type = %metadata.model_type,
            accuracy = metadata.accuracy,
            trees = forest.trees.len(),
            "suitability model bundle loaded"
        );

        Ok(Self {
            forest,
            encoders,
            metadata,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, MlError> {
    if !path.exists() {
        return Err(MlError::ArtifactNotFound(path));
    }
    let file = File::open(&path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

//! Facility-condition suitability scoring over the trained bundle.
//!
//! The scorer is the only consumer of the model artifacts. Unknown
//! categorical inputs and backend failures degrade to a zero-confidence,
//! not-suitable result — the query path never sees an ML error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::bundle::{BundleMetadata, EncoderSet, ModelBundle};
use super::forest::Forest;
use super::MlError;
use crate::catalog::snapshot::CatalogSnapshot;
use crate::models::enums::{Confidence, ConditionCategory};
use crate::models::facility::Hospital;
use crate::models::recommendation::{FacilityKey, MlAnnotation, Recommendation};

/// Classifier input width: type, class, capacity, services, staff, condition.
pub const FEATURE_COUNT: usize = 6;

/// Classifier backend abstraction; keeps the scorer decoupled from the
/// concrete model implementation.
pub trait SuitabilityModel {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, MlError>;
}

impl SuitabilityModel for Forest {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, MlError> {
        Forest::predict_proba(self, features)
    }
}

/// Allow `Box<dyn SuitabilityModel>` wherever `&impl SuitabilityModel` is used.
impl SuitabilityModel for Box<dyn SuitabilityModel> {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, MlError> {
        (**self).predict_proba(features)
    }
}

/// One suitability verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitabilityPrediction {
    pub probability: f64,
    /// `probability >= 0.5`, boundary inclusive.
    pub is_suitable: bool,
    pub confidence: Confidence,
    /// 0–100, `probability * 100` truncated.
    pub score: u8,
}

impl SuitabilityPrediction {
    fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            is_suitable: probability >= 0.5,
            confidence: confidence_band(probability),
            score: (probability * 100.0) as u8,
        }
    }

    /// Soft-failure verdict for inputs the model cannot score.
    fn unknown() -> Self {
        Self {
            probability: 0.0,
            is_suitable: false,
            confidence: Confidence::Unknown,
            score: 0,
        }
    }
}

/// Confidence band over a suitability probability. Probabilities near either
/// end are confident; the middle of the range is not.
fn confidence_band(probability: f64) -> Confidence {
    if probability >= 0.8 || probability <= 0.2 {
        Confidence::High
    } else if probability >= 0.6 || probability <= 0.4 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// A hospital with its suitability verdict, for the batch ranking path.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredHospital {
    pub hospital: Hospital,
    pub prediction: SuitabilityPrediction,
}

/// The inference front door: encoders + model behind a narrow interface.
pub struct SuitabilityScorer {
    model: Box<dyn SuitabilityModel>,
    encoders: EncoderSet,
    metadata: BundleMetadata,
}

impl SuitabilityScorer {
    pub fn from_bundle(bundle: ModelBundle) -> Self {
        Self {
            model: Box::new(bundle.forest),
            encoders: bundle.encoders,
            metadata: bundle.metadata,
        }
    }

    /// Load the trained bundle from a directory. Fatal for the ML path when
    /// artifacts are absent or malformed; the rule-based engine never calls
    /// this.
    pub fn load(dir: &Path) -> Result<Self, MlError> {
        ModelBundle::load(dir).map(Self::from_bundle)
    }

    /// Swap in a different backend behind the same encoders and metadata.
    pub fn with_model(mut self, model: Box<dyn SuitabilityModel>) -> Self {
        self.model = model;
        self
    }

    pub fn metadata(&self) -> &BundleMetadata {
        &self.metadata
    }

    /// Score one facility/condition pair.
    ///
    /// A hospital type or condition outside the training vocabulary fails
    /// soft with a zero-confidence verdict, as does a backend error.
    pub fn predict(
        &self,
        hospital_type: &str,
        hospital_class: &str,
        capacity: u32,
        services: u32,
        staff: u32,
        condition: &ConditionCategory,
    ) -> SuitabilityPrediction {
        let encoded = (
            self.encoders.hospital_type.transform(hospital_type),
            self.encoders.hospital_class.transform(hospital_class),
            self.encoders.condition.transform(condition.as_str()),
        );
        let (Some(type_code), Some(class_code), Some(condition_code)) = encoded else {
            tracing::debug!(
                hospital_type,
                hospital_class,
                condition = condition.as_str(),
                "categorical value outside training vocabulary"
            );
            return SuitabilityPrediction::unknown();
        };

        let features = [
            type_code as f64,
            class_code as f64,
            capacity as f64,
            services as f64,
            staff as f64,
            condition_code as f64,
        ];

        match self.model.predict_proba(&features) {
            Ok(probability) => SuitabilityPrediction::from_probability(probability),
            Err(err) => {
                tracing::error!(error = %err, "suitability inference failed");
                SuitabilityPrediction::unknown()
            }
        }
    }

    /// Rank hospitals for a condition: suitable only, best score first,
    /// optionally restricted to one region. An empty result is valid.
    pub fn recommend(
        &self,
        hospitals: &[Hospital],
        condition: &ConditionCategory,
        region: Option<&str>,
    ) -> Vec<ScoredHospital> {
        let mut scored: Vec<ScoredHospital> = hospitals
            .iter()
            .filter(|h| region.map_or(true, |r| h.region == r))
            .filter_map(|h| {
                let prediction = self.predict(
                    &h.hospital_type,
                    h.class.as_str(),
                    h.bed_capacity,
                    h.service_count,
                    h.staff_count,
                    condition,
                );
                prediction.is_suitable.then(|| ScoredHospital {
                    hospital: h.clone(),
                    prediction,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.prediction.score.cmp(&a.prediction.score));
        scored
    }

    /// Attach ML annotations to an already-selected candidate list.
    /// Community facilities are outside the model's domain and stay bare.
    pub fn annotate(
        &self,
        candidates: &mut [Recommendation],
        snapshot: &CatalogSnapshot,
        condition: &ConditionCategory,
    ) {
        for candidate in candidates {
            let FacilityKey::Hospital(id) = &candidate.key else {
                continue;
            };
            let Some(state) = snapshot.hospital_by_id(*id) else {
                continue;
            };
            let prediction = self.predict(
                &state.hospital.hospital_type,
                state.hospital.class.as_str(),
                state.hospital.bed_capacity,
                state.hospital.service_count,
                state.hospital.staff_count,
                condition,
            );
            candidate.ml = Some(MlAnnotation {
                score: prediction.score,
                probability: prediction.probability,
                confidence: prediction.confidence,
            });
        }
    }
}

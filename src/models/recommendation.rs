use serde::{Deserialize, Serialize};

use super::enums::{Confidence, HospitalClass, OccupancyStatus};

/// Stable identity for a ranked facility.
///
/// Hospitals are keyed by their directory id, community facilities by name;
/// the best-recommendation pointer compares keys, never whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityKey {
    Hospital(u32),
    Community(String),
}

/// Annotation attached when the ML suitability scorer evaluates a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlAnnotation {
    /// 0–100, `probability * 100` truncated.
    pub score: u8,
    pub probability: f64,
    pub confidence: Confidence,
}

/// One ranked entry of a triage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub key: FacilityKey,
    pub name: String,
    pub address: String,
    /// Display type: hospital specialty string or community category name.
    pub facility_type: String,
    pub class: Option<HospitalClass>,
    /// `None` for community facilities, which accept walk-ins.
    pub status: Option<OccupancyStatus>,
    /// 0 for community facilities; occupancy only breaks ties within a tier.
    pub occupancy: f32,
    pub wait_time_minutes: u32,
    pub bed_capacity: Option<u32>,
    pub service_count: Option<u32>,
    pub available_beds: Option<u32>,
    /// 1 = primary match, 2 = secondary fallback, 3 = tertiary.
    pub priority: u8,
    pub ml: Option<MlAnnotation>,
}

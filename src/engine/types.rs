use serde::{Deserialize, Serialize};

use crate::models::enums::{ConditionCategory, Urgency};
use crate::models::recommendation::{FacilityKey, Recommendation};

/// A triage query: where the patient is, what is wrong, how urgent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    /// Region key; free-text input is normalized before matching.
    pub region: String,
    pub condition: ConditionCategory,
    pub urgency: Urgency,
}

/// Classification outcome for a condition category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    /// Facility tier the condition routes to.
    pub target: String,
    pub rationale: String,
}

/// Which advisory rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryKind {
    ClinicFirst,
    DentalClinicFallback,
    DeferNonUrgent,
    NeighboringRegion,
}

/// A rule-triggered nudge toward an alternative facility or timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

/// Summary statistics over a ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageSummary {
    /// Full candidate count before display truncation.
    pub total_candidates: usize,
    /// Mean occupancy of the displayed priority-1 entries; `None` when the
    /// displayed list has no priority-1 entry.
    pub average_primary_occupancy: Option<f32>,
}

/// Engine output for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub classification: Classification,
    pub advisory: Option<Advisory>,
    /// Ranked, display-truncated candidate list.
    pub recommendations: Vec<Recommendation>,
    /// Lowest-occupancy primary candidate, when one exists.
    pub best: Option<FacilityKey>,
    pub summary: TriageSummary,
}

impl TriageReport {
    /// False is the user-facing "no facility found in this region" signal.
    pub fn found(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

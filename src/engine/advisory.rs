//! Advisory rule registry.
//!
//! Conditional nudges toward an alternative facility or timing, evaluated
//! over the candidate set before ranking. Rules are checked in registry
//! order; first match wins. An empty candidate set never divides by zero —
//! every share trigger treats it as a zero fraction.

use crate::models::enums::{ConditionCategory, HospitalClass, OccupancyStatus, Urgency};
use crate::models::recommendation::Recommendation;

use super::types::{Advisory, AdvisoryKind};

/// Class-B occupancy above which a hospital counts as busy.
const BUSY_OCCUPANCY: f32 = 85.0;

/// Share of busy class-B candidates above which deferral is advised.
const DEFER_SHARE: f32 = 0.5;

/// Share of crowded class-C candidates above which a neighboring region is
/// advised.
const NEIGHBOR_SHARE: f32 = 0.6;

/// A registry entry: which conditions it applies to and when it fires.
struct AdvisoryRule {
    id: &'static str,
    kind: AdvisoryKind,
    applies_to: &'static [ConditionCategory],
    trigger: AdvisoryTrigger,
    message: &'static str,
}

enum AdvisoryTrigger {
    /// Unconditional routing advisory.
    Always,
    /// Every candidate of the class is PENUH; requires at least one.
    AllFull { class: HospitalClass },
    /// More than `share` of the class's candidates at or above
    /// `BUSY_OCCUPANCY`, gated on a non-urgent visit.
    BusyShareWhenDeferrable { class: HospitalClass },
    /// More than `share` of the class's candidates full or nearly full.
    CrowdedShare { class: HospitalClass, share: f32 },
}

static RULES: [AdvisoryRule; 4] = [
    AdvisoryRule {
        id: "ADV-001",
        kind: AdvisoryKind::ClinicFirst,
        applies_to: &[ConditionCategory::MildSymptoms],
        trigger: AdvisoryTrigger::Always,
        message: "A Puskesmas or clinic is the right first stop: these symptoms do not \
                  need hospital facilities, waits are shorter (5-15 minutes), costs are \
                  lower, and hospital capacity stays free for serious cases.",
    },
    AdvisoryRule {
        id: "ADV-002",
        kind: AdvisoryKind::DentalClinicFallback,
        applies_to: &[ConditionCategory::Dental],
        trigger: AdvisoryTrigger::AllFull {
            class: HospitalClass::D,
        },
        message: "Every class-D hospital in this region is currently full, with waits of \
                  3-5 hours. A dental clinic can handle most dental problems and is \
                  faster for non-emergency cases.",
    },
    AdvisoryRule {
        id: "ADV-003",
        kind: AdvisoryKind::DeferNonUrgent,
        applies_to: &[ConditionCategory::MultiSpecialist],
        trigger: AdvisoryTrigger::BusyShareWhenDeferrable {
            class: HospitalClass::B,
        },
        message: "Most class-B hospitals in this region are busy (85% occupancy or more) \
                  with typical waits of 2-3 hours. Occupancy is usually lower in the \
                  morning (07:00-09:00); if the visit is not urgent, consider scheduling \
                  it for tomorrow morning.",
    },
    AdvisoryRule {
        id: "ADV-004",
        kind: AdvisoryKind::NeighboringRegion,
        applies_to: &[
            ConditionCategory::InternalMedicine,
            ConditionCategory::Surgery,
            ConditionCategory::Pediatric,
            ConditionCategory::Obstetric,
        ],
        trigger: AdvisoryTrigger::CrowdedShare {
            class: HospitalClass::C,
            share: NEIGHBOR_SHARE,
        },
        message: "Many class-C hospitals in this area are full or nearly full, with waits \
                  of 2-4 hours. A hospital in a neighboring region may be faster.",
    },
];

/// Evaluate the registry for one query. Returns the first advisory that
/// fires, if any.
pub fn check_advisory(
    condition: &ConditionCategory,
    candidates: &[Recommendation],
    urgency: &Urgency,
) -> Option<Advisory> {
    for rule in &RULES {
        if !rule.applies_to.contains(condition) {
            continue;
        }
        if rule.trigger.fires(candidates, urgency) {
            tracing::info!(rule_id = rule.id, kind = ?rule.kind, "advisory rule fired");
            return Some(Advisory {
                kind: rule.kind.clone(),
                message: rule.message.to_string(),
            });
        }
    }
    None
}

impl AdvisoryTrigger {
    fn fires(&self, candidates: &[Recommendation], urgency: &Urgency) -> bool {
        match self {
            Self::Always => true,
            Self::AllFull { class } => {
                let of_class = of_class(candidates, class);
                !of_class.is_empty()
                    && of_class
                        .iter()
                        .all(|c| c.status == Some(OccupancyStatus::Penuh))
            }
            Self::BusyShareWhenDeferrable { class } => {
                if urgency != &Urgency::NotUrgent {
                    return false;
                }
                let of_class = of_class(candidates, class);
                let busy = of_class
                    .iter()
                    .filter(|c| c.occupancy >= BUSY_OCCUPANCY)
                    .count();
                busy as f32 > of_class.len() as f32 * DEFER_SHARE
            }
            Self::CrowdedShare { class, share } => {
                let of_class = of_class(candidates, class);
                let crowded = of_class
                    .iter()
                    .filter(|c| c.status.as_ref().is_some_and(|s| s.is_crowded()))
                    .count();
                crowded as f32 > of_class.len() as f32 * share
            }
        }
    }
}

fn of_class<'a>(
    candidates: &'a [Recommendation],
    class: &HospitalClass,
) -> Vec<&'a Recommendation> {
    candidates
        .iter()
        .filter(|c| c.class.as_ref() == Some(class))
        .collect()
}
